//! Escalares aceitos pelo motor de funções matriciais

use std::ops::{AddAssign, MulAssign, SubAssign};

use nalgebra::ComplexField;

/// Escalar das funções matriciais: `f64` ou `Complex64`.
///
/// O motor é genérico sobre este trait para que entradas reais produzam
/// resultados reais e entradas complexas produzam resultados complexos,
/// sem conversões implícitas entre as duas famílias.
pub trait Scalar:
    ComplexField<RealField = f64> + Copy + AddAssign + SubAssign + MulAssign + 'static
{
}

impl<T> Scalar for T where
    T: ComplexField<RealField = f64> + Copy + AddAssign + SubAssign + MulAssign + 'static
{
}

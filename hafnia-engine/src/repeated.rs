//! Fórmula de momentos de Kan para hafnianos com repetições
//!
//! Em vez de expandir a matriz reduzida, percorre as caixas 0 ≤ vᵢ ≤ nᵢ
//! em ordem mista de rádix e acumula sinais, binômios e a forma
//! quadrática q = wᵀRw/8 com w = n − 2v. O deslocamento entra como
//! μ_h = ½wᵀμ na soma interna Σⱼ qʲ·μ_h^(N−2j)/(j!(N−2j)!). O custo é
//! O(n²·Πᵢ(nᵢ+1)), vantajoso quando poucos modos se repetem muito.

use nalgebra::{DMatrix, DVector};
use num_traits::{One, Zero};

use hafnia_core::math::{binomial, factorial};
use hafnia_core::Scalar;

/// Hafniano (com ou sem laços) da matriz `r` reduzida por `counts`
///
/// Quando `mu` está presente a diagonal da matriz reduzida é tratada como
/// os pesos de laço dados por `mu` expandido; a forma quadrática continua
/// usando a diagonal original de `r`. Sem `mu`, total ímpar devolve zero.
pub(crate) fn hafnian_repeated_with_diagonal<T: Scalar>(
    r: &DMatrix<T>,
    counts: &[usize],
    mu: Option<&DVector<T>>,
) -> T {
    let n = counts.len();
    let total: usize = counts.iter().sum();

    if mu.is_none() && total % 2 == 1 {
        return T::zero();
    }
    if total == 0 {
        return T::one();
    }

    let mut v = vec![0usize; n];
    let mut result = T::zero();

    loop {
        let w: Vec<f64> = counts
            .iter()
            .zip(v.iter())
            .map(|(&c, &x)| c as f64 - 2.0 * x as f64)
            .collect();

        let chosen: usize = v.iter().sum();
        let mut weight = 1.0;
        for (i, &x) in v.iter().enumerate() {
            weight *= binomial(counts[i], x);
        }
        if chosen % 2 == 1 {
            weight = -weight;
        }

        let mut quad = T::zero();
        for i in 0..n {
            for j in 0..n {
                quad += r[(i, j)].scale(w[i] * w[j]);
            }
        }
        quad = quad.unscale(8.0);

        let inner = match mu {
            None => {
                let half = total / 2;
                let mut qpow = T::one();
                for _ in 0..half {
                    qpow *= quad;
                }
                qpow.unscale(factorial(half))
            }
            Some(shift) => {
                let mut mu_half = T::zero();
                for i in 0..n {
                    mu_half += shift[i].scale(w[i]);
                }
                mu_half = mu_half.scale(0.5);

                let mut acc = T::zero();
                let mut qpow = T::one();
                for j in 0..=(total / 2) {
                    let rest = total - 2 * j;
                    let term = qpow * mu_half.powi(rest as i32);
                    acc += term.unscale(factorial(j) * factorial(rest));
                    qpow *= quad;
                }
                acc
            }
        };

        result += inner.scale(weight);

        if !advance(&mut v, counts) {
            break;
        }
    }

    result
}

/// Incremento misto de rádix com o dígito 0 mais rápido
fn advance(v: &mut [usize], limits: &[usize]) -> bool {
    for i in 0..v.len() {
        if v[i] < limits[i] {
            v[i] += 1;
            return true;
        }
        v[i] = 0;
    }
    false
}

// =====
// Testes
// =====

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_repeated_identity_counts() {
        // counts todos 1 reproduzem o hafniano simples
        let a = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 2.0, 3.0, //
                1.0, 0.0, 4.0, 5.0, //
                2.0, 4.0, 0.0, 6.0, //
                3.0, 5.0, 6.0, 0.0,
            ],
        );
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[1, 1, 1, 1], None);
        assert!((got - 28.0).abs() < 1.0e-9);
    }

    #[test]
    fn test_repeated_doubled_single_mode() {
        // reduction([[a]], [2]) = [[a, a], [a, a]] com hafniano a
        let a = DMatrix::from_element(1, 1, 3.25);
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[2], None);
        assert!((got - 3.25).abs() < 1.0e-12);
    }

    #[test]
    fn test_repeated_odd_total_is_zero() {
        let a = DMatrix::from_element(2, 2, 1.0);
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[2, 1], None);
        assert!(got.abs() < 1.0e-12);
    }

    #[test]
    fn test_repeated_zero_counts_is_one() {
        let a = DMatrix::from_element(3, 3, 4.0);
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[0, 0, 0], None);
        assert!((got - 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn test_repeated_loop_single_mode() {
        // lhaf([[m, d], [d, m]]) = d + m² para variância d e laço m
        let d = 0.75;
        let m = 1.5;
        let a = DMatrix::from_element(1, 1, d);
        let mu = DVector::from_element(1, m);
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[2], Some(&mu));
        assert!((got - (d + m * m)).abs() < 1.0e-12);
    }

    #[test]
    fn test_repeated_loop_odd_total() {
        // Um único vértice com laço: lhaf([[m]]) = m
        let a = DMatrix::from_element(1, 1, 2.0);
        let mu = DVector::from_element(1, 0.5);
        let got: f64 = hafnian_repeated_with_diagonal(&a, &[1], Some(&mu));
        assert!((got - 0.5).abs() < 1.0e-12);
    }

    #[test]
    fn test_repeated_complex_counts() {
        let i = Complex64::new(0.0, 1.0);
        let a = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0) + i,
                Complex64::new(1.0, 0.0) + i,
                Complex64::new(0.0, 0.0),
            ],
        );
        // counts [1, 1]: hafniano = a01
        let got = hafnian_repeated_with_diagonal(&a, &[1, 1], None);
        assert!((got - (Complex64::new(1.0, 0.0) + i)).norm() < 1.0e-12);
    }
}

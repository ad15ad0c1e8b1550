//! Algoritmo de traços de potências sobre subconjuntos de pares
//!
//! Para cada subconjunto dos n/2 pares de índices monta-se a submatriz B
//! com as colunas trocadas dentro de cada par; os traços tr(Bʲ) alimentam
//! os coeficientes do polinômio gerador exponencial, cujo termo de ordem
//! n/2 entra na soma com sinal dado pela paridade do subconjunto. Os
//! traços são acumulados por multiplicação repetida da submatriz, com
//! custo O(m·s³) por subconjunto para s = dimensão da submatriz.

use nalgebra::DMatrix;
use num_traits::{One, Zero};

use hafnia_core::Scalar;

/// Hafniano por traços de potências (n par, n ≥ 2, já validada)
pub(crate) fn hafnian_power_trace<T: Scalar>(a: &DMatrix<T>) -> T {
    let n = a.nrows();
    let m = n / 2;
    let mut total = T::zero();

    for subset in 0u64..(1u64 << m) {
        let chosen = subset.count_ones() as usize;
        let positions = pair_positions(subset, m);
        let b = swapped_submatrix(a, &positions);

        // factor_i = tr(B^i)/(2i)
        let mut factors = Vec::with_capacity(m);
        let mut power = b.clone();
        for i in 1..=m {
            factors.push(power.trace().unscale(2.0 * i as f64));
            if i < m {
                power = &power * &b;
            }
        }

        let coefficient = generating_coefficient(&factors, m);
        total += apply_parity(coefficient, chosen, m);
    }

    total
}

/// Hafniano com laços por traços de potências (n par, n ≥ 2, já validada)
pub(crate) fn loop_hafnian_power_trace<T: Scalar>(a: &DMatrix<T>) -> T {
    let n = a.nrows();
    let m = n / 2;

    // D é a diagonal; C é a diagonal trocada dentro de cada par
    let diag: Vec<T> = (0..n).map(|i| a[(i, i)]).collect();
    let mut swapped = vec![T::zero(); n];
    for i in (0..n).step_by(2) {
        swapped[i] = diag[i + 1];
        swapped[i + 1] = diag[i];
    }

    let mut total = T::zero();

    for subset in 0u64..(1u64 << m) {
        let chosen = subset.count_ones() as usize;
        let positions = pair_positions(subset, m);
        let size = positions.len();
        let b = swapped_submatrix(a, &positions);

        let mut c1: Vec<T> = positions.iter().map(|&p| swapped[p]).collect();
        let d1: Vec<T> = positions.iter().map(|&p| diag[p]).collect();

        // factor_i = tr(B^i)/(2i) + ½·C·B^(i-1)·D, com C avançando a cada passo
        let mut factors = Vec::with_capacity(m);
        let mut power = b.clone();
        for i in 1..=m {
            let mut correction = T::zero();
            for j in 0..size {
                correction += c1[j] * d1[j];
            }
            let factor = power.trace().unscale(2.0 * i as f64) + correction.scale(0.5);
            factors.push(factor);

            if i < m {
                power = &power * &b;
                let mut advanced = vec![T::zero(); size];
                for col in 0..size {
                    let mut acc = T::zero();
                    for row in 0..size {
                        acc += c1[row] * b[(row, col)];
                    }
                    advanced[col] = acc;
                }
                c1 = advanced;
            }
        }

        let coefficient = generating_coefficient(&factors, m);
        total += apply_parity(coefficient, chosen, m);
    }

    total
}

/// Posições cobertas pelo subconjunto de pares: o bit i inclui 2i e 2i+1
fn pair_positions(subset: u64, pairs: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(2 * subset.count_ones() as usize);
    for i in 0..pairs {
        if subset >> i & 1 == 1 {
            positions.push(2 * i);
            positions.push(2 * i + 1);
        }
    }
    positions
}

/// Submatriz com a coluna trocada dentro de cada par: B[r][c] = a[pos_r][pos_c ^ 1]
fn swapped_submatrix<T: Scalar>(a: &DMatrix<T>, positions: &[usize]) -> DMatrix<T> {
    let size = positions.len();
    DMatrix::from_fn(size, size, |r, c| a[(positions[r], positions[c] ^ 1)])
}

/// Coeficiente de ordem `half` de Π exp(factor_i·zⁱ)
///
/// Expansão iterativa com um polinômio truncado: a cada i o polinômio novo
/// soma sobre o antigo os termos factorʲ/j! deslocados de i·j graus.
fn generating_coefficient<T: Scalar>(factors: &[T], half: usize) -> T {
    debug_assert_eq!(factors.len(), half);
    let mut poly = vec![T::zero(); half + 1];
    poly[0] = T::one();
    for i in 1..=half {
        let base = factors[i - 1];
        let previous = poly.clone();
        let mut powfactor = T::one();
        for j in 1..=(half / i) {
            powfactor *= base.unscale(j as f64);
            for degree in (i * j)..=half {
                poly[degree] += previous[degree - i * j] * powfactor;
            }
        }
    }
    poly[half]
}

/// Sinal da paridade: positivo quando |subconjunto| ≡ n/2 (mod 2)
fn apply_parity<T: Scalar>(value: T, chosen: usize, half: usize) -> T {
    if chosen % 2 == half % 2 { value } else { -value }
}

// =====
// Testes
// =====

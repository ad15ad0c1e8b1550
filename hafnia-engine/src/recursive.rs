//! Algoritmo recursivo de Björklund
//!
//! Representa cada par (linha, coluna) como um polinômio truncado em z e
//! divide o problema removendo os dois primeiros vértices: uma chamada
//! exclui o par, a outra absorve as contrações com sinal trocado. O
//! resultado é o coeficiente de grau n/2 acumulado nas folhas, com custo
//! O(n⁴·2^(n/2)) e sem suporte a laços.

use nalgebra::DMatrix;
use num_traits::{One, Zero};

use hafnia_core::Scalar;

/// Hafniano recursivo (n par, n ≥ 2, já validada)
pub(crate) fn hafnian_recursive<T: Scalar>(a: &DMatrix<T>) -> T {
    let n = a.nrows();
    let half = n / 2;
    let width = half + 1;

    // Um polinômio por par (j, k) com j > k, achatado em índice triangular;
    // o grau zero recebe a entrada da matriz
    let mut pairs = vec![T::zero(); n * (n - 1) / 2 * width];
    for j in 1..n {
        for k in 0..j {
            pairs[(j * (j - 1) / 2 + k) * width] = a[(j, k)];
        }
    }

    let mut seed = vec![T::zero(); width];
    seed[0] = T::one();

    solve(pairs, n, true, &seed, half)
}

/// Um nível da recursão sobre `s` vértices restantes
///
/// `pairs` é consumido: a primeira chamada recebe uma cópia sem as
/// contrações, a segunda recebe o arranjo contraído.
fn solve<T: Scalar>(pairs: Vec<T>, s: usize, positive: bool, partial: &[T], half: usize) -> T {
    if s == 0 {
        return if positive { partial[half] } else { -partial[half] };
    }

    let width = half + 1;
    let remaining = s - 2;
    let slots = remaining * remaining.saturating_sub(1) / 2;

    // Pares entre os vértices 2..s, reindexados para 0..s-2
    let mut inner = vec![T::zero(); slots * width];
    for j in 1..remaining {
        for k in 0..j {
            let src = ((j + 1) * (j + 2) / 2 + k + 2) * width;
            let dst = (j * (j - 1) / 2 + k) * width;
            inner[dst..dst + width].copy_from_slice(&pairs[src..src + width]);
        }
    }

    let excluded = solve(inner.clone(), remaining, !positive, partial, half);

    // Multiplica o acumulador pelo polinômio do par (1, 0)
    let mut grown = partial.to_vec();
    for u in 0..half {
        for v in 0..(half - u) {
            grown[u + v + 1] += partial[u] * pairs[v];
        }
    }

    // Contrações através dos vértices removidos: (j, 0)·(k, 1) + (k, 0)·(j, 1)
    for j in 1..remaining {
        for k in 0..j {
            let jj = (j + 1) * (j + 2) / 2;
            let kk = (k + 1) * (k + 2) / 2;
            let dst = (j * (j - 1) / 2 + k) * width;
            for u in 0..half {
                for v in 0..(half - u) {
                    inner[dst + u + v + 1] += pairs[jj * width + u] * pairs[(kk + 1) * width + v]
                        + pairs[kk * width + v] * pairs[(jj + 1) * width + u];
                }
            }
        }
    }

    excluded + solve(inner, remaining, positive, &grown, half)
}

// =====
// Testes
// =====

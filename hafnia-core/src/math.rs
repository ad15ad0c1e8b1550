//! Utilitários combinatórios

/// Fatorial em ponto flutuante
///
/// Para n > 170 o resultado excede o alcance de f64 e satura em infinito,
/// o mesmo regime em que as enumerações exponenciais já são inviáveis.
pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Coeficiente binomial C(n, k) em ponto flutuante
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

//! Caminho rápido para estados clássicos
//!
//! Um estado com Σ − (ħ/2)I ⪰ 0 é uma mistura de estados coerentes:
//! basta sortear um deslocamento R ~ N(μ, Σ − (ħ/2)I) e, por modo, uma
//! contagem de Poisson com média |α|² = (R_x² + R_p²)/(2ħ). Nenhum
//! hafniano é avaliado; a distribuição resultante coincide com a do
//! amostrador geral nesse caso especial.

use nalgebra::{DMatrix, DVector};

use hafnia_gaussian::{GaussianError, GaussianState};

use crate::Sample;
use crate::error::SamplerResult;
use crate::options::SampleOptions;
use crate::random::{RandomState, global_state};

/// Tolerância para a verificação de classicalidade
const CLASSICAL_ATOL: f64 = 1.0e-8;

/// Fator L com Σ' = LLᵀ, tolerante a autovalores nulos
///
/// A decomposição espectral cobre o caso semidefinido (vácuo: Σ' = 0),
/// onde Cholesky falharia.
fn covariance_factor(sigma: &DMatrix<f64>) -> DMatrix<f64> {
    let eigen = sigma.clone().symmetric_eigen();
    let scales = eigen.eigenvalues.map(|v| v.max(0.0).sqrt());
    let mut factor = eigen.eigenvectors;
    for (j, scale) in scales.iter().enumerate() {
        factor.column_mut(j).scale_mut(*scale);
    }
    factor
}

fn classical_counts(
    state_g: &GaussianState,
    factor: &DMatrix<f64>,
    state: &mut RandomState,
) -> SamplerResult<Sample> {
    let modes = state_g.modes();
    let size = 2 * modes;
    let z = DVector::from_fn(size, |_, _| state.standard_normal());
    let r = state_g.mean() + factor * z;

    let mut counts = Vec::with_capacity(modes);
    for i in 0..modes {
        let alpha2 = (r[i].powi(2) + r[i + modes].powi(2)) / (2.0 * state_g.hbar());
        counts.push(state.poisson(alpha2)?);
    }
    Ok(counts)
}

fn sample_classical_inner(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    threshold: bool,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    let state_g = GaussianState::new(cov.clone(), options.mean.clone(), options.hbar)?;
    if !state_g.is_classical(CLASSICAL_ATOL) {
        return Err(GaussianError::NotClassical.into());
    }

    let size = cov.nrows();
    let shifted = cov - DMatrix::identity(size, size) * (options.hbar / 2.0);
    let factor = covariance_factor(&shifted);

    let mut out = Vec::with_capacity(samples);
    for _ in 0..samples {
        let mut counts = classical_counts(&state_g, &factor, state)?;
        if threshold {
            for c in &mut counts {
                *c = (*c).min(1);
            }
        }
        out.push(counts);
    }
    Ok(out)
}

/// Amostras de números de fótons de um estado clássico, opções padrão
pub fn hafnian_sample_classical_state(
    cov: &DMatrix<f64>,
    samples: usize,
) -> SamplerResult<Vec<Sample>> {
    hafnian_sample_classical_state_with(cov, samples, &SampleOptions::default())
}

/// Amostras clássicas com opções explícitas, RNG global
pub fn hafnian_sample_classical_state_with(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
) -> SamplerResult<Vec<Sample>> {
    let mut state = global_state();
    sample_classical_inner(cov, samples, options, false, &mut state)
}

/// Amostras clássicas com um estado aleatório do chamador
pub fn hafnian_sample_classical_state_with_state(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    sample_classical_inner(cov, samples, options, false, state)
}

/// Amostras de cliques de um estado clássico, opções padrão
pub fn torontonian_sample_classical_state(
    cov: &DMatrix<f64>,
    samples: usize,
) -> SamplerResult<Vec<Sample>> {
    torontonian_sample_classical_state_with(cov, samples, &SampleOptions::default())
}

/// Amostras de cliques clássicas com opções explícitas, RNG global
pub fn torontonian_sample_classical_state_with(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
) -> SamplerResult<Vec<Sample>> {
    let mut state = global_state();
    sample_classical_inner(cov, samples, options, true, &mut state)
}

/// Amostras de cliques clássicas com um estado aleatório do chamador
pub fn torontonian_sample_classical_state_with_state(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    sample_classical_inner(cov, samples, options, true, state)
}

//! Amostragem por detectores de limiar (clique / vácuo)
//!
//! A mesma cascata condicional do amostrador de fótons, com dois bins por
//! modo e pesos dados pelo torontoniano: o peso do padrão de cliques s
//! sobre os modos visíveis é tor(O_s)/√det Q, com O = X(I − Q⁻¹) do
//! estado marginal e O_s a redução aos modos que clicaram.

use nalgebra::DMatrix;

use hafnia_core::prelude::*;
use hafnia_engine::tor;
use hafnia_gaussian::{GaussianState, xmat};

use crate::Sample;
use crate::error::{SamplerError, SamplerResult};
use crate::options::SampleOptions;
use crate::photon::draw_conditional;
use crate::random::{RandomState, global_state};

/// Uma amostra de cliques
fn generate_torontonian_sample(
    state_g: &GaussianState,
    state: &mut RandomState,
) -> SamplerResult<Sample> {
    let modes = state_g.modes();
    let mut result: Sample = Vec::with_capacity(modes);
    let mut prefix_weight = 1.0;

    for mode in 0..modes {
        let visible: Vec<usize> = (0..=mode).collect();
        let sub = state_g.reduced(&visible)?;
        let q = sub.qmat();
        let norm = q.determinant().re.max(0.0).sqrt();
        if !(norm > 0.0) {
            return Err(SamplerError::DegenerateDistribution { mode });
        }
        let size = q.nrows();
        let qinv = q
            .try_inverse()
            .ok_or(hafnia_gaussian::GaussianError::Singular)?;
        let o = xmat(mode + 1) * (DMatrix::identity(size, size) - qinv);

        let mut weights = [0.0; 2];
        let mut pattern = result.clone();
        pattern.push(0);
        for (trial, weight) in weights.iter_mut().enumerate() {
            pattern[mode] = trial;
            let rpt = ReductionSpec::doubled(&pattern);
            let clicked = reduction(&o, &rpt)?;
            *weight = tor(&clicked)? / norm;
        }

        let drawn = draw_conditional(&weights, prefix_weight, mode, state)?;
        prefix_weight = weights[drawn];
        result.push(drawn);
    }

    Ok(result)
}

fn sample_threshold_inner(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    if options.mean.is_some() {
        return Err(SamplerError::MeanUnsupported { sampler: "threshold" });
    }
    let state_g = GaussianState::new(cov.clone(), None, options.hbar)?;

    let mut out = Vec::with_capacity(samples);
    for _ in 0..samples {
        out.push(generate_torontonian_sample(&state_g, state)?);
    }
    Ok(out)
}

/// Amostras de cliques de um estado gaussiano, opções padrão
pub fn torontonian_sample_state(
    cov: &DMatrix<f64>,
    samples: usize,
) -> SamplerResult<Vec<Sample>> {
    torontonian_sample_state_with(cov, samples, &SampleOptions::default())
}

/// Amostras de cliques com opções explícitas, RNG global
pub fn torontonian_sample_state_with(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
) -> SamplerResult<Vec<Sample>> {
    let mut state = global_state();
    sample_threshold_inner(cov, samples, options, &mut state)
}

/// Amostras de cliques com um estado aleatório do chamador
pub fn torontonian_sample_state_with_state(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    sample_threshold_inner(cov, samples, options, state)
}

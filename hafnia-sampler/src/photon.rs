//! Amostragem sequencial de números de fótons
//!
//! Uma amostra é construída modo a modo: o estado marginal sobre os modos
//! já visitados mais o modo corrente fornece os pesos conjuntos de cada
//! contagem candidata, a divisão pelo peso do prefixo dá a condicional, e
//! um sorteio decide a contagem do modo. A massa além do corte é agregada
//! no último bin retido, então cada sorteio termina em uma passada.

use nalgebra::DMatrix;
use num_complex::Complex64;

use hafnia_core::prelude::*;
use hafnia_engine::hafnian_approx;
use hafnia_gaussian::GaussianState;

use crate::Sample;
use crate::error::{SamplerError, SamplerResult};
use crate::options::SampleOptions;
use crate::random::{RandomState, global_state};

/// Condicional a partir dos pesos conjuntos e do peso do prefixo
///
/// Política de agregação: se a soma dos bins exceto o último fica abaixo
/// de 1, o último bin recebe a massa restante ("corte ou mais" fótons);
/// caso contrário o vetor inteiro é renormalizado. Devolve o índice
/// sorteado.
pub(crate) fn draw_conditional(
    weights: &[f64],
    prefix_weight: f64,
    mode: usize,
    state: &mut RandomState,
) -> SamplerResult<usize> {
    if !(prefix_weight > 0.0) || !prefix_weight.is_finite() {
        return Err(SamplerError::DegenerateDistribution { mode });
    }

    let mut conditional: Vec<f64> = weights
        .iter()
        .map(|&w| (w / prefix_weight).max(0.0))
        .collect();

    let last = conditional.len() - 1;
    let head: f64 = conditional[..last].iter().sum();
    if head < 1.0 {
        conditional[last] = 1.0 - head;
    }

    let total: f64 = conditional.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return Err(SamplerError::DegenerateDistribution { mode });
    }
    for p in &mut conditional {
        *p /= total;
    }

    Ok(state.draw_discrete(&conditional))
}

/// Uma amostra exata: pesos conjuntos via hafniano com laços
fn generate_hafnian_sample(
    state_g: &GaussianState,
    cutoff: usize,
    state: &mut RandomState,
) -> SamplerResult<Sample> {
    let modes = state_g.modes();
    let mut result: Sample = Vec::with_capacity(modes);
    let mut prefix_weight = 1.0;

    for mode in 0..modes {
        let visible: Vec<usize> = (0..=mode).collect();
        let sub = state_g.reduced(&visible)?;

        let mut weights = vec![0.0; cutoff];
        let mut pattern = result.clone();
        pattern.push(0);
        for (trial, weight) in weights.iter_mut().enumerate() {
            pattern[mode] = trial;
            *weight = sub.pattern_weight(&pattern)?;
        }

        let drawn = draw_conditional(&weights, prefix_weight, mode, state)?;
        prefix_weight = weights[drawn];
        result.push(drawn);
    }

    Ok(result)
}

/// Uma amostra aproximada: pesos via estimador de Barvinok sobre |Re A|
fn generate_hafnian_sample_approx(
    state_g: &GaussianState,
    cutoff: usize,
    approx_samples: usize,
    state: &mut RandomState,
) -> SamplerResult<Sample> {
    let modes = state_g.modes();
    let mut result: Sample = Vec::with_capacity(modes);
    let mut prefix_weight = 1.0;

    for mode in 0..modes {
        let visible: Vec<usize> = (0..=mode).collect();
        let sub = state_g.reduced(&visible)?;
        let q = sub.qmat();
        let a = sub.amat()?;
        let norm = q.determinant().re.max(0.0).sqrt();
        if !(norm > 0.0) {
            return Err(SamplerError::DegenerateDistribution { mode });
        }

        let mut weights = vec![0.0; cutoff];
        let mut pattern = result.clone();
        pattern.push(0);
        for (trial, weight) in weights.iter_mut().enumerate() {
            pattern[mode] = trial;
            let rpt = ReductionSpec::doubled(&pattern);
            let red = reduction(&a, &rpt)?;
            let positive: DMatrix<f64> = red.map(|z: Complex64| z.re.abs());
            let haf = hafnian_approx(&positive, approx_samples, state)?;
            let denom: f64 = pattern.iter().map(|&c| factorial(c)).product();
            *weight = haf / denom / norm;
        }

        let drawn = draw_conditional(&weights, prefix_weight, mode, state)?;
        prefix_weight = weights[drawn];
        result.push(drawn);
    }

    Ok(result)
}

fn sample_state_inner(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    if options.cutoff == 0 {
        return Err(SamplerError::InvalidCutoff);
    }
    let state_g = GaussianState::new(cov.clone(), options.mean.clone(), options.hbar)?;
    if options.approx && state_g.is_displaced(DEFAULT_ATOL) {
        return Err(SamplerError::MeanUnsupported {
            sampler: "approximate hafnian",
        });
    }

    let mut out = Vec::with_capacity(samples);
    for _ in 0..samples {
        let sample = if options.approx {
            generate_hafnian_sample_approx(&state_g, options.cutoff, options.approx_samples, state)?
        } else {
            generate_hafnian_sample(&state_g, options.cutoff, state)?
        };
        out.push(sample);
    }
    Ok(out)
}

/// Amostras de números de fótons de um estado gaussiano, opções padrão
pub fn hafnian_sample_state(cov: &DMatrix<f64>, samples: usize) -> SamplerResult<Vec<Sample>> {
    hafnian_sample_state_with(cov, samples, &SampleOptions::default())
}

/// Amostras de números de fótons com opções explícitas, RNG global
pub fn hafnian_sample_state_with(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
) -> SamplerResult<Vec<Sample>> {
    let mut state = global_state();
    sample_state_inner(cov, samples, options, &mut state)
}

/// Amostras de números de fótons com um estado aleatório do chamador
pub fn hafnian_sample_state_with_state(
    cov: &DMatrix<f64>,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    sample_state_inner(cov, samples, options, state)
}

/// Amostras do estado gaussiano que codifica o grafo `a`
///
/// O grafo é escalado até `n_mean` fótons médios totais e convertido em
/// covariância; a amostragem segue o caminho exato ou aproximado conforme
/// as opções. Deslocamento não se aplica a grafos.
pub fn hafnian_sample_graph(
    a: &DMatrix<Complex64>,
    n_mean: f64,
    samples: usize,
) -> SamplerResult<Vec<Sample>> {
    hafnian_sample_graph_with(a, n_mean, samples, &SampleOptions::default())
}

/// Amostras de grafo com opções explícitas, RNG global
pub fn hafnian_sample_graph_with(
    a: &DMatrix<Complex64>,
    n_mean: f64,
    samples: usize,
    options: &SampleOptions,
) -> SamplerResult<Vec<Sample>> {
    let mut state = global_state();
    hafnian_sample_graph_with_state(a, n_mean, samples, options, &mut state)
}

/// Amostras de grafo com um estado aleatório do chamador
pub fn hafnian_sample_graph_with_state(
    a: &DMatrix<Complex64>,
    n_mean: f64,
    samples: usize,
    options: &SampleOptions,
    state: &mut RandomState,
) -> SamplerResult<Vec<Sample>> {
    if options.mean.is_some() {
        return Err(SamplerError::MeanUnsupported { sampler: "graph" });
    }
    let state_g = GaussianState::from_adjacency(a, n_mean, options.hbar)?;
    sample_state_inner(state_g.cov(), samples, options, state)
}

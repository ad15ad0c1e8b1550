//! Configuração da amostragem

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Opções compartilhadas pelos amostradores
///
/// Os padrões seguem a convenção física usual: corte de 5 fótons por modo
/// e ħ = 2 (vácuo com covariância identidade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Vetor de médias das quadraturas; ausente = sem deslocamento
    pub mean: Option<DVector<f64>>,
    /// Corte exclusivo por modo: contagens sorteadas ficam em 0..cutoff
    pub cutoff: usize,
    /// Convenção de ħ da covariância
    pub hbar: f64,
    /// Usar o estimador aproximado de hafniano nos pesos condicionais
    pub approx: bool,
    /// Orçamento Monte-Carlo por peso condicional no modo aproximado
    pub approx_samples: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            mean: None,
            cutoff: 5,
            hbar: 2.0,
            approx: false,
            approx_samples: 100_000,
        }
    }
}

impl SampleOptions {
    /// Define o vetor de médias
    pub fn with_mean(mut self, mean: DVector<f64>) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Define o corte de fótons por modo
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Define a convenção de ħ
    pub fn with_hbar(mut self, hbar: f64) -> Self {
        self.hbar = hbar;
        self
    }

    /// Ativa o modo aproximado com o orçamento dado
    pub fn with_approx(mut self, approx_samples: usize) -> Self {
        self.approx = true;
        self.approx_samples = approx_samples;
        self
    }
}

// =====
// Testes
// =====

//! Estado pseudo-aleatório determinístico da amostragem
//!
//! Um único fluxo ChaCha20 com resemeadura explícita: a mesma semente
//! reproduz bit a bit toda sequência de amostras subsequente. A instância
//! global é compartilhada por todas as chamadas que não trazem o próprio
//! estado; a ordem de sorteio é (amostra, modo, sorteios dentro do modo).

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Poisson, StandardNormal};

use crate::error::{SamplerError, SamplerResult};

/// Gerador reprodutível usado por todos os sorteios da amostragem
#[derive(Debug, Clone)]
pub struct RandomState {
    rng: ChaCha20Rng,
}

impl RandomState {
    /// Estado determinístico a partir de uma semente
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Estado semeado pelo sistema operacional
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Reinicia o fluxo: sorteios seguintes repetem os da mesma semente
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// Uniforme em [0, 1)
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen()
    }

    /// Normal padrão N(0, 1)
    pub fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Contagem de Poisson com a média dada; média nula vale zero
    pub fn poisson(&mut self, lambda: f64) -> SamplerResult<usize> {
        if lambda <= 0.0 {
            return Ok(0);
        }
        let dist = Poisson::new(lambda).map_err(|_| SamplerError::InvalidPoissonMean(lambda))?;
        let draw: f64 = self.rng.sample(dist);
        Ok(draw as usize)
    }

    /// Índice sorteado de uma distribuição já normalizada
    ///
    /// Resíduo de ponto flutuante no acumulado cai no último índice.
    pub fn draw_discrete(&mut self, probs: &[f64]) -> usize {
        let u = self.uniform();
        let mut acc = 0.0;
        for (i, &p) in probs.iter().enumerate() {
            acc += p;
            if u < acc {
                return i;
            }
        }
        probs.len() - 1
    }
}

impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Instância global usada pelas chamadas sem estado próprio
static GLOBAL_STATE: Lazy<Mutex<RandomState>> =
    Lazy::new(|| Mutex::new(RandomState::from_entropy()));

/// Acesso exclusivo ao estado global pelo tempo de uma chamada
pub(crate) fn global_state() -> MutexGuard<'static, RandomState> {
    GLOBAL_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resemeia o estado global: toda sequência de amostras posterior passa a
/// ser determinística em função da semente
pub fn seed(value: u64) {
    global_state().reseed(value);
}

// =====
// Testes
// =====

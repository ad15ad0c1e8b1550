//! Estado gaussiano (média, covariância) e as matrizes derivadas
//!
//! Todas as convenções seguem a base xxpp: as primeiras m quadraturas são
//! posições e as últimas m são momentos, com vácuo Σ = (ħ/2)·I. As
//! matrizes derivadas Q, A = X(I − Q⁻¹)* e o vetor β = (α, α*) são o
//! vocabulário comum entre a covariância física e os hafnianos: o peso de
//! um padrão de fótons é o hafniano com laços da redução de A pelo padrão
//! dobrado, vezes o prefator gaussiano.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use hafnia_core::prelude::*;
use hafnia_engine::{HafnianAlgorithm, hafnian, hafnian_repeated, hafnian_repeated_displaced,
    loop_hafnian};

use crate::error::{GaussianError, GaussianResult};
use crate::graph::covmat_from_qmat;
use crate::graph::qmat_from_adjacency;

/// Matriz de troca X = [[0, I], [I, 0]] para m modos
pub fn xmat(modes: usize) -> DMatrix<Complex64> {
    DMatrix::from_fn(2 * modes, 2 * modes, |r, c| {
        if r + modes == c || c + modes == r {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}

/// Estado gaussiano de m modos na base xxpp
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianState {
    mean: DVector<f64>,
    cov: DMatrix<f64>,
    hbar: f64,
}

impl GaussianState {
    /// Valida e constrói um estado a partir de (média, covariância, ħ)
    ///
    /// `mean = None` é o estado sem deslocamento. As mensagens das duas
    /// primeiras verificações são o contrato de erro dos amostradores.
    pub fn new(
        cov: DMatrix<f64>,
        mean: Option<DVector<f64>>,
        hbar: f64,
    ) -> GaussianResult<Self> {
        if cov.nrows() != cov.ncols() {
            return Err(GaussianError::CovarianceNotSquare);
        }
        if cov.iter().any(|x| !x.is_finite()) {
            return Err(GaussianError::CovarianceNotFinite);
        }
        check_even_dimension(&cov)?;
        check_symmetric(&cov, DEFAULT_ATOL)?;
        if !(hbar > 0.0) {
            return Err(GaussianError::InvalidHbar(hbar));
        }

        let n = cov.nrows();
        let mean = match mean {
            Some(mu) => {
                if mu.len() != n {
                    return Err(GaussianError::MeanDimensionMismatch {
                        expected: n,
                        found: mu.len(),
                    });
                }
                if mu.iter().any(|x| !x.is_finite()) {
                    return Err(GaussianError::Matrix(MatrixError::VectorNotFinite));
                }
                mu
            }
            None => DVector::zeros(n),
        };

        Ok(Self { mean, cov, hbar })
    }

    /// Estado gaussiano codificando um grafo com número médio de fótons dado
    pub fn from_adjacency(
        a: &DMatrix<Complex64>,
        n_mean: f64,
        hbar: f64,
    ) -> GaussianResult<Self> {
        let q = qmat_from_adjacency(a, n_mean)?;
        let cov = covmat_from_qmat(&q, hbar)?;
        Self::new(cov, None, hbar)
    }

    /// Número de modos m (a covariância é 2m×2m)
    pub fn modes(&self) -> usize {
        self.cov.nrows() / 2
    }

    /// Vetor de médias das quadraturas
    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    /// Matriz de covariância
    pub fn cov(&self) -> &DMatrix<f64> {
        &self.cov
    }

    /// Convenção de ħ do estado
    pub fn hbar(&self) -> f64 {
        self.hbar
    }

    /// O estado tem deslocamento não desprezível?
    pub fn is_displaced(&self, atol: f64) -> bool {
        self.mean.iter().any(|x| x.abs() > atol)
    }

    /// Estado marginal sobre o subconjunto ordenado de modos
    pub fn reduced(&self, modes: &[usize]) -> GaussianResult<Self> {
        let m = self.modes();
        for &mode in modes {
            if mode >= m {
                return Err(GaussianError::ModeOutOfRange { mode, modes: m });
            }
        }
        // Índices de quadratura: posições primeiro, momentos depois
        let mut quad = Vec::with_capacity(2 * modes.len());
        quad.extend(modes.iter().copied());
        quad.extend(modes.iter().map(|&i| i + m));

        let size = quad.len();
        let cov = DMatrix::from_fn(size, size, |r, c| self.cov[(quad[r], quad[c])]);
        let mean = DVector::from_iterator(size, quad.iter().map(|&i| self.mean[i]));
        Ok(Self {
            mean,
            cov,
            hbar: self.hbar,
        })
    }

    /// Matriz Q = ⟨ordenamento normal⟩ + I na base (a, a†)
    pub fn qmat(&self) -> DMatrix<Complex64> {
        let m = self.modes();
        let scale = 2.0 / self.hbar;
        let mut q = DMatrix::zeros(2 * m, 2 * m);
        for i in 0..m {
            for j in 0..m {
                let x = self.cov[(i, j)] * scale;
                let p = self.cov[(i + m, j + m)] * scale;
                let xp = self.cov[(i, j + m)] * scale;
                let px = self.cov[(j, i + m)] * scale;
                let delta = if i == j { 1.0 } else { 0.0 };

                // N = ⟨a†a⟩, M = ⟨aa⟩ nas unidades do vácuo unitário
                let n_blk = Complex64::new((x + p - 2.0 * delta) / 4.0, (xp - px) / 4.0);
                let m_blk = Complex64::new((x - p) / 4.0, (xp + px) / 4.0);

                q[(i, j)] = n_blk + delta;
                q[(i + m, j + m)] = n_blk.conj() + delta;
                q[(i + m, j)] = m_blk;
                q[(i, j + m)] = m_blk.conj();
            }
        }
        q
    }

    /// Matriz A = X(I − Q⁻¹)*, simétrica para estados físicos
    pub fn amat(&self) -> GaussianResult<DMatrix<Complex64>> {
        let q = self.qmat();
        let size = q.nrows();
        let qinv = q.try_inverse().ok_or(GaussianError::Singular)?;
        let inner = (DMatrix::identity(size, size) - qinv).map(|z: Complex64| z.conj());
        Ok(xmat(self.modes()) * inner)
    }

    /// Vetor β = (α, α*) com α = (x + ip)/√(2ħ)
    pub fn beta(&self) -> DVector<Complex64> {
        let m = self.modes();
        let scale = (2.0 * self.hbar).sqrt();
        DVector::from_fn(2 * m, |j, _| {
            let alpha = Complex64::new(self.mean[j % m], self.mean[j % m + m]) / scale;
            if j < m { alpha } else { alpha.conj() }
        })
    }

    /// Prefator gaussiano exp(−½·βᵀQ⁻¹β*)/√det Q
    pub fn prefactor(&self) -> GaussianResult<Complex64> {
        let q = self.qmat();
        let det = q.determinant();
        let qinv = q.try_inverse().ok_or(GaussianError::Singular)?;
        let beta = self.beta();
        let beta_conj = beta.map(|z| z.conj());
        let quad = (beta.transpose() * qinv * beta_conj)[(0, 0)];
        Ok((quad * Complex64::new(-0.5, 0.0)).exp() / det.sqrt())
    }

    /// Probabilidade do padrão de contagens (elemento diagonal da matriz
    /// de densidade na base de Fock)
    ///
    /// O padrão dobrado [s, s] reduz A; com deslocamento a diagonal é
    /// substituída por γ = β* − Aβ e o hafniano ganha laços. O despacho
    /// entre a redução densa e a fórmula de momentos segue a média
    /// geométrica das multiplicidades.
    pub fn pattern_weight(&self, pattern: &[usize]) -> GaussianResult<f64> {
        let m = self.modes();
        if pattern.len() != m {
            return Err(GaussianError::Matrix(MatrixError::DimensionMismatch {
                expected: m,
                found: pattern.len(),
            }));
        }

        let rpt = ReductionSpec::doubled(pattern);
        let a = self.amat()?;

        let haf = if self.is_displaced(DEFAULT_ATOL) {
            let beta = self.beta();
            let gamma = beta.map(|z| z.conj()) - &a * &beta;
            if dense_is_cheaper(&rpt) {
                let mut red = reduction(&a, &rpt)?;
                let diag = reduction_vector(&gamma, &rpt)?;
                for i in 0..red.nrows() {
                    red[(i, i)] = diag[i];
                }
                loop_hafnian(&red)?
            } else {
                hafnian_repeated_displaced(&a, &rpt, &gamma)?
            }
        } else if dense_is_cheaper(&rpt) {
            let red = reduction(&a, &rpt)?;
            hafnian(&red, false, HafnianAlgorithm::PowerTrace)?
        } else {
            hafnian_repeated(&a, &rpt, false)?
        };

        let denom: f64 = pattern.iter().map(|&c| factorial(c)).product();
        Ok((haf * self.prefactor()?).re / denom)
    }

    /// A covariância respeita a relação de incerteza Σ + i(ħ/2)Ω ⪰ 0?
    pub fn is_valid(&self, atol: f64) -> bool {
        let n = self.cov.nrows();
        let m = self.modes();
        let herm = DMatrix::from_fn(n, n, |r, c| {
            let omega = if r + m == c {
                1.0
            } else if c + m == r {
                -1.0
            } else {
                0.0
            };
            Complex64::new(self.cov[(r, c)], omega * self.hbar / 2.0)
        });
        let eigen = herm.symmetric_eigen();
        eigen.eigenvalues.iter().all(|&v| v > -atol)
    }

    /// O estado é clássico (Σ − (ħ/2)I ⪰ 0)?
    ///
    /// Estados clássicos admitem o caminho rápido de amostragem por
    /// mistura de coerentes, sem hafniano algum.
    pub fn is_classical(&self, atol: f64) -> bool {
        let n = self.cov.nrows();
        let shifted = &self.cov - DMatrix::identity(n, n) * (self.hbar / 2.0);
        let eigen = shifted.symmetric_eigen();
        eigen.eigenvalues.iter().all(|&v| v > -atol)
    }
}

/// Redução densa vale a pena quando a média geométrica de (cᵢ+1) é < 3
fn dense_is_cheaper(rpt: &ReductionSpec) -> bool {
    let counts = rpt.counts();
    if counts.is_empty() {
        return true;
    }
    let log_mean: f64 = counts
        .iter()
        .map(|&c| ((c + 1) as f64).ln())
        .sum::<f64>()
        / counts.len() as f64;
    log_mean < 3.0_f64.ln()
}

// =====
// Testes
// =====

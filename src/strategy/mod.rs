//! Regularization strategies selected by the optimizer at configuration time.
//!
//! A [`Regularization`] bundles a penalty, its strength and, for the L1 penalty, the calling
//! convention the owning solver relies on. Once built it dispatches every per-iteration call to
//! the matching penalty in [`penalty`](crate::penalty).

mod config;

pub use config::*;

use crate::{
    error::{RegularizationError, Result},
    numeric::{Hessian, Model},
    penalty::{BatchPenalty, Penalty, L1, L2},
};
use num_traits::Float;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Calling convention of the L1 penalty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum L1Mode {
    /// Subgradient contributions, for batch and Hessian aware solvers.
    Subgradient,
    /// Clipping updates after Tsuruoka et al. 2009, for online solvers.
    Clipping,
}

/// Penalty added to the empirical risk objective.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Regularization<F = f64> {
    /// No penalty at all.
    None,
    /// L1 penalty, used through the given calling convention.
    L1 {
        /// Regularization strength.
        lambda: F,
        /// Calling convention.
        mode: L1Mode,
    },
    /// L2 penalty.
    L2 {
        /// Regularization strength.
        lambda: F,
    },
    /// Linear combination of the L1 and L2 penalties.
    ///
    /// Batch solvers receive the L1 subgradient, incremental ones the L2 shrinkage followed by
    /// the L1 clipping.
    ElasticNet {
        /// Strength of the L1 term.
        lambda_l1: F,
        /// Strength of the L2 term.
        lambda_l2: F,
    },
}

impl<F> Default for Regularization<F> {
    fn default() -> Self {
        Self::None
    }
}

impl<F> Regularization<F>
where
    F: Float + Send + Sync,
{
    /// Returns the kind of this regularization.
    pub fn kind(&self) -> RegularizationKind {
        match self {
            Self::None => RegularizationKind::None,
            Self::L1 {
                mode: L1Mode::Subgradient,
                ..
            } => RegularizationKind::L1,
            Self::L1 {
                mode: L1Mode::Clipping,
                ..
            } => RegularizationKind::L1Clipping,
            Self::L2 { .. } => RegularizationKind::L2,
            Self::ElasticNet { .. } => RegularizationKind::ElasticNet,
        }
    }

    /// Returns `true` if the penalty is differentiable everywhere.
    pub fn is_smooth(&self) -> bool {
        matches!(self, Self::None | Self::L2 { .. })
    }

    /// Returns `true` if the incremental update snaps small coefficients to exactly zero.
    pub fn is_sparse(&self) -> bool {
        matches!(
            self,
            Self::L1 {
                mode: L1Mode::Clipping,
                ..
            } | Self::ElasticNet { .. }
        )
    }

    /// Adds the penalty's (sub)gradient at `model` to `gradient`.
    ///
    /// The L1 penalty in clipping mode contributes nothing here, its effect is entirely carried
    /// by [`update_in_place`](Self::update_in_place).
    pub fn accumulate_gradient<M>(&self, model: &M, gradient: &mut M)
    where
        M: Model<Elem = F>,
    {
        match *self {
            Self::None => {}
            Self::L1 {
                lambda,
                mode: L1Mode::Subgradient,
            } => L1::gradient(model, lambda, gradient),
            Self::L1 {
                mode: L1Mode::Clipping,
                ..
            } => {}
            Self::L2 { lambda } => L2::gradient(model, lambda, gradient),
            Self::ElasticNet {
                lambda_l1,
                lambda_l2,
            } => {
                L1::gradient(model, lambda_l1, gradient);
                L2::gradient(model, lambda_l2, gradient);
            }
        }
    }

    /// Adds the penalty's Hessian at `model` to `hessian`.
    pub fn accumulate_hessian<M, H>(&self, model: &M, hessian: &mut H)
    where
        M: Model<Elem = F>,
        H: Hessian<Elem = F>,
    {
        match *self {
            Self::None => {}
            Self::L1 { lambda, .. } => L1::hessian(model, lambda, hessian),
            Self::L2 { lambda } => L2::hessian(model, lambda, hessian),
            Self::ElasticNet {
                lambda_l1,
                lambda_l2,
            } => {
                L1::hessian(model, lambda_l1, hessian);
                L2::hessian(model, lambda_l2, hessian);
            }
        }
    }

    /// Applies the penalty's update rule to a model undergoing an online step.
    pub fn update_in_place<M>(&self, incr_model: &mut M, stepsize: F)
    where
        M: Model<Elem = F>,
    {
        match *self {
            Self::None => {}
            Self::L1 {
                lambda,
                mode: L1Mode::Subgradient,
            } => L1::subgradient_step(incr_model, lambda, stepsize),
            Self::L1 {
                lambda,
                mode: L1Mode::Clipping,
            } => L1::clipping(incr_model, lambda, stepsize),
            Self::L2 { lambda } => L2::gradient_in_place(incr_model, lambda, stepsize),
            Self::ElasticNet {
                lambda_l1,
                lambda_l2,
            } => {
                L2::gradient_in_place(incr_model, lambda_l2, stepsize);
                L1::clipping(incr_model, lambda_l1, stepsize);
            }
        }
    }

    /// Applies [`update_in_place`](Self::update_in_place) to every shard in parallel.
    ///
    /// Each shard is an independent incremental model owned by one worker. Averaging or otherwise
    /// combining the shards is left to the caller.
    pub fn update_shards<M>(&self, shards: &mut [M], stepsize: F)
    where
        M: Model<Elem = F> + Send,
    {
        trace!(shards = shards.len(), kind = %self.kind(), "regularizing shards");
        shards
            .par_iter_mut()
            .for_each(|shard| self.update_in_place(shard, stepsize));
    }

    /// Returns the value of the penalty term at `model`.
    pub fn loss<M>(&self, model: &M) -> F
    where
        M: Model<Elem = F>,
    {
        match *self {
            Self::None => F::zero(),
            Self::L1 { lambda, .. } => L1::loss(model, lambda),
            Self::L2 { lambda } => L2::loss(model, lambda),
            Self::ElasticNet {
                lambda_l1,
                lambda_l2,
            } => L1::loss(model, lambda_l1) + L2::loss(model, lambda_l2),
        }
    }

    /// Checks that `stepsize` is usable with this regularization.
    ///
    /// Fails if the stepsize is not finite and positive. Emits a warning if the L2 shrinkage
    /// factor `1 - 2 * lambda * stepsize` is not in `(0, 1)`, where online updates oscillate or
    /// diverge.
    pub fn check_stepsize(&self, stepsize: F) -> Result<F> {
        let stepsize = validate_stepsize(stepsize)?;

        let lambda_l2 = match *self {
            Self::L2 { lambda } => lambda,
            Self::ElasticNet { lambda_l2, .. } => lambda_l2,
            _ => return Ok(stepsize),
        };

        let two = F::one() + F::one();
        if two * lambda_l2 * stepsize >= F::one() {
            warn!(
                lambda = lambda_l2.to_f64(),
                stepsize = stepsize.to_f64(),
                "L2 shrinkage factor is not positive, online updates will oscillate or diverge"
            );
        }

        Ok(stepsize)
    }
}

/// Checks that `stepsize` is finite and strictly positive.
pub fn validate_stepsize<F: Float>(stepsize: F) -> Result<F> {
    if stepsize.is_finite() && stepsize > F::zero() {
        Ok(stepsize)
    } else {
        Err(RegularizationError::InvalidStepsize {
            value: stepsize.to_f64().unwrap_or(f64::NAN),
        })
    }
}

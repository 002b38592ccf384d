//! Penalty regularizations and their contributions to the objective.
//!
//! A penalty is an additive term of the empirical risk objective that discourages large or
//! non-sparse coefficients. Every penalty in this module is a zero-sized type exposing stateless
//! associated functions: the model, the regularization strength `lambda` and, for incremental
//! updates, the `stepsize` are all supplied by the caller at each invocation.
//!
//! The functions are grouped into three traits, so that a solver can be generic over the penalty it
//! is handed while still being resolved statically.
//!
//! * [`Penalty`] - the loss contribution, common to every penalty.
//!
//! * [`BatchPenalty`] - the gradient and Hessian contributions, for batch solvers that accumulate
//! first and second order information over the whole dataset.
//!
//! * [`IncrementalPenalty`] - an in-place update of a model undergoing an online step, for
//! incremental solvers.
//!
//! Gradients and Hessians are **accumulated**: the penalty adds its contribution to what is
//! already there, the caller must zero them beforehand if a fresh value is wanted.
//!
//! ```
//! use convex_task::{BatchPenalty, IncrementalPenalty, Penalty, L1, L2};
//! use ndarray::{array, Array2};
//!
//! let model = array![3.0_f64, -4.0];
//! assert!((L2::loss(&model, 0.5) - 12.5).abs() <= f64::EPSILON);
//! assert!((L1::loss(&model, 0.5) - 3.5).abs() <= f64::EPSILON);
//!
//! let mut hessian = Array2::<f64>::zeros((2, 2));
//! L2::hessian(&model, 0.5, &mut hessian);
//! assert_eq!(hessian, array![[1.0, 0.0], [0.0, 1.0]]);
//!
//! let mut incr_model = array![1.0_f64, -0.2, 0.05];
//! L1::update(&mut incr_model, 1.0, 0.1);
//! assert!((incr_model[0] - 0.9).abs() <= 1e-12);
//! assert_eq!(incr_model[2], 0.0);
//! ```
//!
//! # Validation
//!
//! None of the functions validate their arguments. Dimensions must agree, `lambda` should be
//! non-negative and `stepsize` positive: anything else yields well defined but meaningless
//! arithmetic. Use [`RegularizationConfig`](crate::RegularizationConfig) to check the
//! hyperparameters once, outside of the optimization loop.

mod l1;
mod l2;

pub use l1::*;
pub use l2::*;

use crate::numeric::{Hessian, Model};

/// Loss contribution of a penalty.
pub trait Penalty {
    /// Returns the value of the penalty term for `model`, scaled by `lambda`.
    fn loss<M: Model>(model: &M, lambda: M::Elem) -> M::Elem;
}

/// Gradient and Hessian contributions of a penalty, used by batch solvers.
pub trait BatchPenalty: Penalty {
    /// Adds the penalty's (sub)gradient at `model` to `gradient`.
    fn gradient<M: Model>(model: &M, lambda: M::Elem, gradient: &mut M);

    /// Adds the penalty's Hessian at `model` to `hessian`.
    fn hessian<M, H>(model: &M, lambda: M::Elem, hessian: &mut H)
    where
        M: Model,
        H: Hessian<Elem = M::Elem>;
}

/// In-place model update of a penalty, used by incremental solvers.
pub trait IncrementalPenalty: Penalty {
    /// Applies the penalty's update rule to `incr_model` with the given `stepsize`.
    fn update<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem);
}

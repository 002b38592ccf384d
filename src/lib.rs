//! The `convex-task` crate provides the regularization terms of convex optimization problems.
//!
//! Empirical risk minimization problems are frequently augmented with a penalty that discourages
//! large or non-sparse coefficients. This crate computes everything such a penalty contributes to
//! a solver iteration: its loss, gradient and Hessian, as well as the in-place updates used by
//! incremental solvers.
//!
//! The crate owns neither the model nor the optimization loop. The solver creates the model, picks
//! the stepsize, decides when to stop and hands this crate references to its own containers.
//!
//! # Highlights
//!
//! * Stateless penalties, statically dispatched over the model's container type
//! * Exact closed forms for the L2 penalty
//! * Subgradient and clipping calling conventions for the L1 penalty
//! * Validated configuration, checked once outside of the hot path
//!
//! # Models
//!
//! A model is any dense vector implementing the [`Model`] trait, a Hessian any square matrix
//! implementing the [`Hessian`] trait. Implementations are provided for [`ndarray`] arrays and
//! mutable views as well as for plain vectors.
//!
//! # Penalties
//!
//! The [`L1`] and [`L2`] penalties expose their contributions as associated functions receiving the
//! regularization strength at every call. Check the [`penalty`] module for the details.
//!
//!```
//! use convex_task::{BatchPenalty, Penalty, L2};
//! use ndarray::{array, Array1};
//!
//! let model = array![2.0, -1.0];
//! let mut gradient = Array1::zeros(2);
//!
//! L2::gradient(&model, 0.5, &mut gradient);
//! assert_eq!(gradient, array![2.0, -1.0]);
//! assert_eq!(L2::loss(&model, 0.5), 2.5);
//!```
//!
//! # Regularization strategies
//!
//! Solvers that are configured at runtime hold a [`Regularization`], usually built from a
//! [`RegularizationConfig`]. The strategy fixes the penalty, its strength and the calling
//! convention of the L1 penalty, and dispatches every call accordingly.
//!
//!```
//! use convex_task::{Regularization, RegularizationConfig, RegularizationKind};
//! use ndarray::array;
//!
//! let regularization: Regularization =
//!     RegularizationConfig::new(RegularizationKind::L1Clipping, 1.0).build().unwrap();
//!
//! let mut incr_model = array![1.0, -0.2, 0.05];
//! let stepsize = regularization.check_stepsize(0.1).unwrap();
//! regularization.update_in_place(&mut incr_model, stepsize);
//!
//! assert_eq!(incr_model[2], 0.0);
//!```
//!
//! # Concurrency
//!
//! Every operation is a synchronous numeric transform. Concurrent calls are safe as long as they
//! touch disjoint models, [`Regularization::update_shards`] does exactly that for a set of
//! per-worker incremental models.
pub mod error;
pub mod numeric;
pub mod penalty;
pub mod strategy;

pub use error::{RegularizationError, Result};
pub use numeric::{Hessian, Model};
pub use penalty::{BatchPenalty, IncrementalPenalty, Penalty, L1, L2};
pub use strategy::{
    validate_stepsize, L1Mode, Regularization, RegularizationConfig, RegularizationKind,
};

use super::{BatchPenalty, IncrementalPenalty, Penalty};
use crate::numeric::{sign, Hessian, Model};
use num_traits::{Float, Zero};

/// L1 penalty, also known as *Lasso regularization*.
///
///```text
/// loss(w) = lambda * Σᵢ |wᵢ|
///```
///
/// The penalty is not differentiable at zero, hence it comes with two independent calling
/// conventions:
///
/// * the subgradient one, [`BatchPenalty`], for batch solvers;
///
/// * the clipping one, [`L1::clipping`], for online solvers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct L1;

impl L1 {
    /// Applies the clipping-at-zero step described in
    /// [Stochastic Gradient Descent Training for L1-regularized Log-linear Models with Cumulative
    /// Penalty](https://aclanthology.org/P09-1054/), Tsuruoka et al. 2009.
    ///
    /// Each coefficient is moved toward zero by `t = lambda * stepsize` and snapped to exactly
    /// zero when its magnitude does not exceed `t`.
    ///
    ///```text
    /// wᵢ ← wᵢ - t  if wᵢ > t
    /// wᵢ ← wᵢ + t  if wᵢ < -t
    /// wᵢ ← 0       otherwise
    ///```
    pub fn clipping<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem) {
        if lambda.is_zero() {
            return;
        }

        let threshold = lambda * stepsize;

        for i in 0..incr_model.len() {
            let w = incr_model.get_mut(i);
            if *w > threshold {
                *w = *w - threshold;
            } else if *w < -threshold {
                *w = *w + threshold;
            } else {
                *w = M::Elem::zero();
            }
        }
    }

    /// Takes a plain subgradient descent step on the penalty alone.
    ///
    ///```text
    /// wᵢ ← wᵢ - stepsize * lambda * sign(wᵢ)
    ///```
    ///
    /// Unlike [`L1::clipping`] coefficients may overshoot zero, so the step does not yield sparse
    /// models.
    pub fn subgradient_step<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem) {
        if lambda.is_zero() {
            return;
        }

        let step = lambda * stepsize;

        for i in 0..incr_model.len() {
            let w = incr_model.get_mut(i);
            *w = *w - sign(*w) * step;
        }
    }
}

impl Penalty for L1 {
    fn loss<M: Model>(model: &M, lambda: M::Elem) -> M::Elem {
        if lambda.is_zero() {
            return M::Elem::zero();
        }

        let norm = (0..model.len())
            .map(|i| model.get(i).abs())
            .fold(M::Elem::zero(), |acc, w| acc + w);
        lambda * norm
    }
}

impl BatchPenalty for L1 {
    /// Adds `lambda * sign(model)` to `gradient`.
    ///
    /// Coefficients that are exactly zero contribute nothing: the subgradient there is any value
    /// in `[-lambda, lambda]` and picking one is left to the solver.
    fn gradient<M: Model>(model: &M, lambda: M::Elem, gradient: &mut M) {
        debug_assert_eq!(model.len(), gradient.len(), "gradient length mismatch");
        if lambda.is_zero() {
            return;
        }

        for i in 0..model.len() {
            let g = gradient.get_mut(i);
            *g = *g + sign(model.get(i)) * lambda;
        }
    }

    /// The curvature of the penalty is zero wherever it is defined, `hessian` is left untouched.
    fn hessian<M, H>(model: &M, _lambda: M::Elem, hessian: &mut H)
    where
        M: Model,
        H: Hessian<Elem = M::Elem>,
    {
        debug_assert_eq!(model.len(), hessian.dim(), "hessian dimension mismatch");
    }
}

impl IncrementalPenalty for L1 {
    fn update<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem) {
        Self::clipping(incr_model, lambda, stepsize)
    }
}

#[cfg(test)]
mod test;

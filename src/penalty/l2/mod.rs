use super::{BatchPenalty, IncrementalPenalty, Penalty};
use crate::numeric::{Hessian, Model};
use num_traits::{One, Zero};

/// L2 penalty, also known as *weight decay* or *Tichonov regularization*.
///
///```text
/// loss(w) = lambda * Σᵢ wᵢ²
///```
///
/// The penalty is smooth, so its gradient, Hessian and the exact gradient descent step all have a
/// closed form.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct L2;

impl L2 {
    /// Shrinks `incr_model` by the exact gradient descent step of a pure quadratic penalty.
    ///
    ///```text
    /// wᵢ ← wᵢ * (1 - 2 * lambda * stepsize)
    ///```
    ///
    /// The update is stable for `0 < lambda * stepsize < 0.5`. Outside of that range the
    /// coefficients oscillate or diverge, the stepsize is not clamped.
    pub fn gradient_in_place<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem) {
        if lambda.is_zero() {
            return;
        }

        let two = M::Elem::one() + M::Elem::one();
        incr_model.scale(M::Elem::one() - two * lambda * stepsize);
    }
}

impl Penalty for L2 {
    fn loss<M: Model>(model: &M, lambda: M::Elem) -> M::Elem {
        if lambda.is_zero() {
            return M::Elem::zero();
        }

        let squared_norm = (0..model.len())
            .map(|i| model.get(i))
            .fold(M::Elem::zero(), |acc, w| acc + w * w);
        lambda * squared_norm
    }
}

impl BatchPenalty for L2 {
    /// Adds `2 * lambda * model` to `gradient`.
    fn gradient<M: Model>(model: &M, lambda: M::Elem, gradient: &mut M) {
        debug_assert_eq!(model.len(), gradient.len(), "gradient length mismatch");
        if lambda.is_zero() {
            return;
        }

        let two = M::Elem::one() + M::Elem::one();
        gradient.add_assign_scaled(model, two * lambda);
    }

    /// Adds `2 * lambda * I` to `hessian`.
    fn hessian<M, H>(model: &M, lambda: M::Elem, hessian: &mut H)
    where
        M: Model,
        H: Hessian<Elem = M::Elem>,
    {
        debug_assert_eq!(model.len(), hessian.dim(), "hessian dimension mismatch");
        if lambda.is_zero() {
            return;
        }

        let two = M::Elem::one() + M::Elem::one();
        hessian.add_identity(two * lambda);
    }
}

impl IncrementalPenalty for L2 {
    fn update<M: Model>(incr_model: &mut M, lambda: M::Elem, stepsize: M::Elem) {
        Self::gradient_in_place(incr_model, lambda, stepsize)
    }
}

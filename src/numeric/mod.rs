use ndarray::{Array1, Array2, ArrayBase, ArrayViewMut1, Zip};
use num_traits::Float;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ Model Contract ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Dense parameter vector owned by the optimizer.
///
/// The penalties only ever read or mutate a model in place, they never construct one. Gradients
/// share the representation of the model they belong to.
pub trait Model {
    /// Scalar type of the coefficients.
    type Elem: Float + Send + Sync;

    /// Number of coefficients.
    fn len(&self) -> usize;

    /// Returns the `i`-th coefficient.
    fn get(&self, i: usize) -> Self::Elem;

    /// Returns a mutable reference to the `i`-th coefficient.
    fn get_mut(&mut self, i: usize) -> &mut Self::Elem;

    /// Returns `true` if the model has no coefficients.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Multiplies every coefficient by `factor`.
    fn scale(&mut self, factor: Self::Elem);

    /// Computes `self += alpha * other`, element by element.
    fn add_assign_scaled(&mut self, other: &Self, alpha: Self::Elem);
}

impl<F> Model for Array1<F>
where
    F: Float + Send + Sync,
{
    type Elem = F;

    fn len(&self) -> usize {
        ArrayBase::len(self)
    }

    fn get(&self, i: usize) -> F {
        self[i]
    }

    fn get_mut(&mut self, i: usize) -> &mut F {
        &mut self[i]
    }

    fn scale(&mut self, factor: F) {
        self.mapv_inplace(|el| el * factor);
    }

    fn add_assign_scaled(&mut self, other: &Self, alpha: F) {
        Zip::from(self)
            .and(other)
            .for_each(|self_el, &other_el| *self_el = *self_el + alpha * other_el);
    }
}

impl<'a, F> Model for ArrayViewMut1<'a, F>
where
    F: Float + Send + Sync,
{
    type Elem = F;

    fn len(&self) -> usize {
        ArrayBase::len(self)
    }

    fn get(&self, i: usize) -> F {
        self[i]
    }

    fn get_mut(&mut self, i: usize) -> &mut F {
        &mut self[i]
    }

    fn scale(&mut self, factor: F) {
        self.mapv_inplace(|el| el * factor);
    }

    fn add_assign_scaled(&mut self, other: &Self, alpha: F) {
        Zip::from(self)
            .and(other)
            .for_each(|self_el, &other_el| *self_el = *self_el + alpha * other_el);
    }
}

impl<F> Model for Vec<F>
where
    F: Float + Send + Sync,
{
    type Elem = F;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, i: usize) -> F {
        self[i]
    }

    fn get_mut(&mut self, i: usize) -> &mut F {
        &mut self[i]
    }

    fn scale(&mut self, factor: F) {
        self.iter_mut().for_each(|el| *el = *el * factor);
    }

    fn add_assign_scaled(&mut self, other: &Self, alpha: F) {
        self.iter_mut()
            .zip(other.iter())
            .for_each(|(self_el, &other_el)| *self_el = *self_el + alpha * other_el);
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ Hessian Contract ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Square matrix accumulating second order information.
pub trait Hessian: Sized {
    /// Scalar type of the entries.
    type Elem: Float + Send + Sync;

    /// Side of the matrix.
    fn dim(&self) -> usize;

    /// Creates the `n` by `n` identity matrix.
    fn identity(n: usize) -> Self;

    /// Computes `self += alpha * other`, element by element.
    fn add_assign_scaled(&mut self, other: &Self, alpha: Self::Elem);

    /// Computes `self += alpha * I`.
    fn add_identity(&mut self, alpha: Self::Elem) {
        let identity = Self::identity(self.dim());
        self.add_assign_scaled(&identity, alpha);
    }
}

impl<F> Hessian for Array2<F>
where
    F: Float + Send + Sync,
{
    type Elem = F;

    fn dim(&self) -> usize {
        debug_assert!(self.is_square(), "hessian must be a square matrix");
        self.nrows()
    }

    fn identity(n: usize) -> Self {
        Array2::eye(n)
    }

    fn add_assign_scaled(&mut self, other: &Self, alpha: F) {
        Zip::from(self)
            .and(other)
            .for_each(|self_el, &other_el| *self_el = *self_el + alpha * other_el);
    }

    // Only the diagonal changes.
    fn add_identity(&mut self, alpha: F) {
        self.diag_mut().mapv_inplace(|el| el + alpha);
    }
}

/// Sign of `x`, with `sign(0) = 0`.
///
/// Unlike [`Float::signum`], zeros of either sign map to zero so that they contribute nothing to a
/// subgradient.
pub(crate) fn sign<F: Float>(x: F) -> F {
    if x > F::zero() {
        F::one()
    } else if x < F::zero() {
        -F::one()
    } else {
        F::zero()
    }
}

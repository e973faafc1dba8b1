//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when an integration domain is degenerate or improperly ordered.
#[derive(Debug, Error)]
pub enum InvalidDomain {
    /// Returned when integration bounds are equal or reversed.
    #[error("integration bounds must satisfy lower < upper; got {0} and {1}")]
    Bounds(f64, f64),

    /// Returned when a non-positive uniform grid spacing is encountered.
    #[error("grid spacing must be greater than 0; got {0}")]
    Spacing(f64),

    /// Returned when sample abscissae fail to strictly increase, with the
    /// index of the first offending element.
    #[error("sample abscissae must be strictly increasing; violation at index {0}")]
    Unordered(usize),
}

impl InvalidDomain {
    pub(crate) fn check_bounds(bounds: (f64, f64)) -> Result<(), Self> {
        let (lower, upper) = bounds;
        (lower < upper).then_some(()).ok_or(Self::Bounds(lower, upper))
    }

    pub(crate) fn check_spacing<R>(dx: R) -> Result<(), Self>
    where R: num_traits::Float
    {
        (dx > R::zero())
            .then_some(())
            .ok_or_else(|| Self::Spacing(dx.to_f64().unwrap_or(f64::NAN)))
    }

    pub(crate) fn check_increasing<S, A>(x: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        A: PartialOrd,
    {
        match x.iter().zip(x.iter().skip(1)).position(|(l, r)| !(l < r)) {
            Some(k) => Err(Self::Unordered(k + 1)),
            None => Ok(()),
        }
    }
}

/// Returned when an operation is handed fewer samples than its rule requires.
#[derive(Debug, Error)]
#[error("operation requires at least {0} samples; got {1}")]
pub struct InsufficientSamples(pub usize, pub usize);

impl InsufficientSamples {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>, required: usize)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n >= required).then_some(()).ok_or(Self(required, n))
    }
}

/// Returned from Gauss-Legendre rule construction in
/// [`legendre`][crate::legendre].
#[derive(Debug, Error)]
pub enum LegendreError {
    /// Returned when a zero quadrature order is encountered.
    #[error("quadrature order must be greater than 0; got {0}")]
    BadOrder(usize),

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl LegendreError {
    pub(crate) fn check_order(order: usize) -> Result<(), Self> {
        (order != 0).then_some(()).ok_or(Self::BadOrder(order))
    }
}

/// Returned from quadrature functions over callable integrands.
#[derive(Debug, Error)]
pub enum QuadError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the error estimate is still above `epsilon` after the
    /// highest permitted quadrature order. Carries the best value computed
    /// before the cap and its error estimate.
    #[error("error estimate {error:e} exceeds epsilon = {epsilon:e} after {maxiters} orders; best value {value}")]
    Converge {
        /// Best value computed before the iteration cap.
        value: f64,
        /// Error estimate attached to `value`.
        error: f64,
        /// Error bound in force.
        epsilon: f64,
        /// Iteration cap in force.
        maxiters: usize,
    },

    /// [`InvalidDomain`]
    #[error("domain error: {0}")]
    Domain(#[from] InvalidDomain),

    /// [`LegendreError`]
    #[error("legendre error: {0}")]
    Legendre(#[from] LegendreError),
}

impl QuadError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}

/// Returned from functions in [`discrete`][crate::discrete].
#[derive(Debug, Error)]
pub enum DiscreteError {
    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`InvalidDomain`]
    #[error("domain error: {0}")]
    Domain(#[from] InvalidDomain),

    /// [`InsufficientSamples`]
    #[error("sample count error: {0}")]
    Samples(#[from] InsufficientSamples),
}

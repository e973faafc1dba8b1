//! Integration rules for discretely sampled data.
//!
//! All rules accept non-uniform coordinate grids as long as the coordinates
//! strictly increase, and value arrays over any scalar type implementing
//! [`Scalar`][ndarray_linalg::Scalar] (in particular both `f64` and
//! `Complex64`). The free functions validate their inputs on every call;
//! [`SampleSet`] validates once at construction and can then be integrated
//! repeatedly.
//!
//! ```
//! use ndarray as nd;
//! use xquad::discrete::{ Rule, SampleSet };
//!
//! // 15 samples of y = x² over [0, 10]
//! let samples = SampleSet::new_linspace((0.0, 10.0, 15), |x| x * x).unwrap();
//! let simp = samples.integrate(Rule::Simpson).unwrap();
//! assert!((simp - 1000.0 / 3.0).abs() < 1e-10);
//!
//! // running integral; entry k holds the integral up to x[k + 1]
//! let trace: nd::Array1<f64> = samples.cumulative().unwrap();
//! assert_eq!(trace.len(), samples.len() - 1);
//! assert_eq!(
//!     trace[trace.len() - 1],
//!     samples.integrate(Rule::Trapezoid).unwrap(),
//! );
//! ```

use ndarray as nd;
use ndarray_linalg::Scalar;
use num_traits::One;
use crate::{
    Arr1,
    error::{ DiscreteError, InsufficientSamples, InvalidDomain, LengthError },
};

pub type DiscreteResult<T> = Result<T, DiscreteError>;

/// Integrate sampled data using the composite trapezoidal rule.
///
/// The grid need not be uniform; each interval contributes the area of the
/// trapezoid through its two samples.
///
/// Fails if `x` and `y` have different lengths, if fewer than 2 samples are
/// given, or if `x` is not strictly increasing.
pub fn trapezoid<S, T, A>(x: &Arr1<S>, y: &Arr1<T>) -> DiscreteResult<A>
where
    S: nd::Data<Elem = A::Real>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    LengthError::check(x, y)?;
    InsufficientSamples::check(x, 2)?;
    InvalidDomain::check_increasing(x)?;
    let two = A::one() + A::one();
    let total
        = y.iter().zip(y.iter().skip(1))
        .zip(x.iter().zip(x.iter().skip(1)))
        .map(|((&yk, &ykp1), (&xk, &xkp1))| {
            (yk + ykp1) / two * A::from_real(xkp1 - xk)
        })
        .fold(A::zero(), A::add);
    Ok(total)
}

/// Integrate uniformly sampled data using the composite trapezoidal rule.
///
/// Equivalent to [`trapezoid`] with `x[k] = x[0] + k * dx`, but skips storing
/// a coordinate array at all.
///
/// Fails if fewer than 2 samples are given or if `dx` is not positive.
pub fn trapezoid_uniform<S, A>(y: &Arr1<S>, dx: A::Real) -> DiscreteResult<A>
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    InsufficientSamples::check(y, 2)?;
    InvalidDomain::check_spacing(dx)?;
    let n: usize = y.len();
    let two = A::one() + A::one();
    Ok(
        (A::from_real(dx) / two)
        * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
    )
}

/// Integrate sampled data using the composite Simpson's rule.
///
/// Each consecutive pair of intervals contributes the exact integral of the
/// quadratic through its three samples, so the grid need not be uniform.
/// When the interval count is odd the last interval cannot be paired and is
/// closed with a single trapezoid instead; callers wanting a pure Simpson
/// result should supply an odd number of samples. The tail is never silently
/// dropped.
///
/// Fails if `x` and `y` have different lengths, if fewer than 3 samples are
/// given, or if `x` is not strictly increasing.
pub fn simpson<S, T, A>(x: &Arr1<S>, y: &Arr1<T>) -> DiscreteResult<A>
where
    S: nd::Data<Elem = A::Real>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    LengthError::check(x, y)?;
    InsufficientSamples::check(x, 3)?;
    InvalidDomain::check_increasing(x)?;
    let n: usize = x.len();
    let one = <A as Scalar>::Real::one();
    let two = one + one;
    let six = two + two + two;
    let mut total = A::zero();
    for j in (0..n - 2).step_by(2) {
        let h0 = x[j + 1] - x[j];
        let h1 = x[j + 2] - x[j + 1];
        let dd = h0 + h1;
        let k = dd / (six * h1 * h0);
        total = total
            + A::from_real(k * h1 * (two * h0 - h1)) * y[j]
            + A::from_real(k * dd * dd) * y[j + 1]
            + A::from_real(k * h0 * (two * h1 - h0)) * y[j + 2];
    }
    if n % 2 == 0 {
        let h = x[n - 1] - x[n - 2];
        total = total + A::from_real(h / two) * (y[n - 2] + y[n - 1]);
    }
    Ok(total)
}

/// Compute the running integral of sampled data using the trapezoidal rule.
///
/// The returned array has length `n - 1` for `n` samples: entry `k` holds the
/// integral of the data up to `x[k + 1]`, with the identically-zero leading
/// entry omitted. The final entry equals the total returned by [`trapezoid`]
/// exactly, and for non-negative data the trace is non-decreasing.
///
/// Fails if `x` and `y` have different lengths, if fewer than 2 samples are
/// given, or if `x` is not strictly increasing.
pub fn cumulative_trapezoid<S, T, A>(x: &Arr1<S>, y: &Arr1<T>)
    -> DiscreteResult<nd::Array1<A>>
where
    S: nd::Data<Elem = A::Real>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    LengthError::check(x, y)?;
    InsufficientSamples::check(x, 2)?;
    InvalidDomain::check_increasing(x)?;
    let two = A::one() + A::one();
    let trace: nd::Array1<A>
        = y.iter().zip(y.iter().skip(1))
        .zip(x.iter().zip(x.iter().skip(1)))
        .scan(A::zero(), |acc, ((&yk, &ykp1), (&xk, &xkp1))| {
            *acc = *acc + (yk + ykp1) / two * A::from_real(xkp1 - xk);
            Some(*acc)
        })
        .collect();
    Ok(trace)
}

/// Fixed integration rule selector for sampled data.
#[derive(Copy, Clone, Debug)]
pub enum Rule {
    /// Use the composite [trapezoidal rule][trapezoid].
    Trapezoid,
    /// Use the composite [Simpson's rule][simpson].
    Simpson,
}

impl Rule {
    /// Return `true` if `self` is `Trapezoid`.
    pub fn is_trapezoid(&self) -> bool {
        matches!(self, Self::Trapezoid)
    }

    /// Return `true` if `self` is `Simpson`.
    pub fn is_simpson(&self) -> bool {
        matches!(self, Self::Simpson)
    }

    /// Return the minimum number of samples the rule accepts.
    pub fn min_samples(&self) -> usize {
        match self {
            Self::Trapezoid => 2,
            Self::Simpson => 3,
        }
    }
}

/// Master integration function for all fixed [rules][Rule].
pub fn integrate<S, T, A>(x: &Arr1<S>, y: &Arr1<T>, rule: Rule)
    -> DiscreteResult<A>
where
    S: nd::Data<Elem = A::Real>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    match rule {
        Rule::Trapezoid => trapezoid(x, y),
        Rule::Simpson => simpson(x, y),
    }
}

/// Simple record to keep track of sample coordinate and value arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same length, at
/// least 2 elements, and strictly increasing coordinates; every constructor
/// verifies these up front. [`Rule::Simpson`]'s 3-sample minimum is still
/// checked per call.
#[derive(Clone, Debug)]
pub struct SampleSet {
    // sample coordinates, strictly increasing
    x: nd::Array1<f64>,
    // sample values
    y: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl SampleSet {
    /// Create a new `SampleSet` from bare coordinate and value arrays.
    pub fn new_arrays(x: nd::Array1<f64>, y: nd::Array1<f64>)
        -> DiscreteResult<Self>
    {
        LengthError::check(&x, &y)?;
        InsufficientSamples::check(&x, 2)?;
        InvalidDomain::check_increasing(&x)?;
        let n = x.len();
        Ok(Self { x, y, n })
    }

    /// Create a new `SampleSet`, generating the coordinate array from
    /// "linspace-style" arguments (start, inclusive end, and an array length)
    /// and sampling `f` over it.
    pub fn new_linspace<F>(xargs: (f64, f64, usize), f: F)
        -> DiscreteResult<Self>
    where F: FnMut(f64) -> f64
    {
        InvalidDomain::check_bounds((xargs.0, xargs.1))?;
        let x: nd::Array1<f64>
            = nd::Array1::linspace(xargs.0, xargs.1, xargs.2);
        InsufficientSamples::check(&x, 2)?;
        let y: nd::Array1<f64> = x.mapv(f);
        let n = xargs.2;
        Ok(Self { x, y, n })
    }

    /// Create a new `SampleSet`, generating the coordinate array from
    /// "range-style" arguments (start, exclusive end, and a step size) and
    /// sampling `f` over it.
    pub fn new_range<F>(xargs: (f64, f64, f64), f: F) -> DiscreteResult<Self>
    where F: FnMut(f64) -> f64
    {
        InvalidDomain::check_bounds((xargs.0, xargs.1))?;
        InvalidDomain::check_spacing(xargs.2)?;
        let x: nd::Array1<f64> = nd::Array1::range(xargs.0, xargs.1, xargs.2);
        InsufficientSamples::check(&x, 2)?;
        let y: nd::Array1<f64> = x.mapv(f);
        let n = x.len();
        Ok(Self { x, y, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the value array.
    pub fn get_y(&self) -> &nd::Array1<f64> { &self.y }

    /// Get the length of the coordinate and value arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`integrate`].
    pub fn integrate(&self, rule: Rule) -> DiscreteResult<f64> {
        integrate(&self.x, &self.y, rule)
    }

    /// Thin interface to [`cumulative_trapezoid`].
    pub fn cumulative(&self) -> DiscreteResult<nd::Array1<f64>> {
        cumulative_trapezoid(&self.x, &self.y)
    }
}

#![allow(dead_code, non_snake_case)]

//! Provides a small set of interchangeable numerical integration routines for
//! one-dimensional problems, covering both closed-form integrands and
//! discretely sampled data.
//!
//! Provides implementations for the following numerical routines:
//! - Callable integrands:
//!     - Fixed-order Gauss-Legendre quadrature[^1]
//!     - Adaptive Gauss-Legendre quadrature with an *a posteriori* error
//!       estimate from successive orders
//! - Sampled data:
//!     - Composite trapezoidal rule (uniform and non-uniform grids)
//!     - Composite Simpson's rule (non-uniform grids, with a trapezoidal
//!       closure of an odd final segment)
//!     - Cumulative trapezoidal integration
//!
//! All routines are pure functions of their arguments: there is no shared
//! state, no caching, and no retry logic. Invalid inputs and failures to
//! converge are reported through the error types in [`error`] rather than
//! being corrected silently.
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: G. H. Golub and J. H. Welsch, "Calculation of Gauss quadrature
//!     rules," Math. Comp. **23**, 221-230 (1969).

pub mod error;
pub mod legendre;
pub mod quad;
pub mod discrete;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-8;
pub(crate) const DEF_MAXITERS: usize = 50;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

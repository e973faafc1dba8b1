//! Quadrature drivers for closed-form integrands.
//!
//! Both drivers evaluate Gauss-Legendre rules from
//! [`legendre`][crate::legendre] over a finite interval. [`fixed`] evaluates
//! a single rule of a given order and attaches no error estimate;
//! [`adaptive`] escalates the order, taking the absolute difference between
//! the values at consecutive orders as an *a posteriori* error estimate, and
//! stops once the estimate falls below a bound `epsilon`.
//!
//! Reaching the order cap without convergence is reported as
//! [`QuadError::Converge`], which carries the best value computed before the
//! cap; it is never returned silently as a success.
//!
//! ```
//! use xquad::quad::{ self, Method };
//!
//! // ∫ x² dx over [0, 10] = 1000/3
//! let q = quad::integrate(
//!     |x| x * x,
//!     (0.0, 10.0),
//!     Method::Adaptive { epsilon: None, maxiters: None },
//! ).unwrap();
//! assert!((q.value - 1000.0 / 3.0).abs() < 1e-8);
//! assert!(q.error.unwrap() < 1e-8);
//! ```

use crate::{
    error::{ InvalidDomain, QuadError },
    legendre::GaussLegendre,
    DEF_EPSILON,
    DEF_MAXITERS,
};

pub type QuadResult<T> = Result<T, QuadError>;

/// The result of a quadrature evaluation.
///
/// This struct is usually only returned by a driver function; you probably
/// won't ever instantiate it yourself. The error estimate is attached only by
/// [`adaptive`]; a single fixed-order evaluation carries none.
#[derive(Copy, Clone, Debug)]
pub struct Quadrature {
    /// Computed value of the integral.
    pub value: f64,
    /// *A posteriori* error estimate, where the method produces one.
    pub error: Option<f64>,
}

/// Integrate `f` over `bounds` with a single Gauss-Legendre rule of the given
/// order.
///
/// No error estimate is attached; a lone rule evaluation has nothing to
/// compare itself against.
///
/// Fails if `bounds` are equal or reversed, or if `order` is zero.
pub fn fixed<F>(mut f: F, bounds: (f64, f64), order: usize)
    -> QuadResult<Quadrature>
where F: FnMut(f64) -> f64
{
    InvalidDomain::check_bounds(bounds)?;
    let rule = GaussLegendre::new(order)?;
    Ok(Quadrature { value: rule.integrate(&mut f, bounds), error: None })
}

/// Integrate `f` over `bounds` with Gauss-Legendre rules of increasing order
/// until the error estimate falls below `epsilon > 0`.
///
/// The order starts at 1 and the estimate is the absolute difference between
/// the values at consecutive orders, so the earliest the bound can be met is
/// the second order tried. At most `maxiters > 0` orders are evaluated; if
/// the estimate is still above `epsilon` after the last of them, the call
/// fails with [`QuadError::Converge`] carrying the last (best) value and its
/// estimate.
///
/// Fails if `bounds` are equal or reversed.
pub fn adaptive<F>(
    mut f: F,
    bounds: (f64, f64),
    epsilon: f64,
    maxiters: usize,
) -> QuadResult<Quadrature>
where F: FnMut(f64) -> f64
{
    QuadError::check_epsilon(epsilon)?;
    QuadError::check_maxiters(maxiters)?;
    InvalidDomain::check_bounds(bounds)?;
    let mut val: f64 = GaussLegendre::new(1)?.integrate(&mut f, bounds);
    let mut err: f64 = f64::INFINITY;
    for order in 2..=maxiters {
        let newval = GaussLegendre::new(order)?.integrate(&mut f, bounds);
        err = (newval - val).abs();
        val = newval;
        if err < epsilon {
            return Ok(Quadrature { value: val, error: Some(err) });
        }
    }
    Err(QuadError::Converge { value: val, error: err, epsilon, maxiters })
}

/// Integration method selector and parameters.
#[derive(Clone, Debug)]
pub enum Method {
    /// Use a [single rule of fixed order][fixed].
    Fixed {
        /// Rule order (number of nodes).
        order: usize,
    },
    /// Use [adaptive order escalation][adaptive].
    Adaptive {
        /// Desired error bound (default: `1e-8`).
        epsilon: Option<f64>,
        /// Maximum number of orders to try (default: `50`).
        maxiters: Option<usize>,
    },
}

impl Method {
    /// Return `true` if `self` is `Fixed`.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    /// Return `true` if `self` is `Adaptive`.
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

/// Master integration function for all [methods][Method].
pub fn integrate<F>(f: F, bounds: (f64, f64), method: Method)
    -> QuadResult<Quadrature>
where F: FnMut(f64) -> f64
{
    match method {
        Method::Fixed { order } => {
            fixed(f, bounds, order)
        },
        Method::Adaptive { epsilon, maxiters } => {
            adaptive(
                f,
                bounds,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn adaptive_parabola() {
        let q = adaptive(|x| x * x, (0.0, 10.0), 1e-8, 50).unwrap();
        assert_abs_diff_eq!(q.value, 1000.0 / 3.0, epsilon = 1e-8);
        assert!(q.error.unwrap() < 1e-8);
    }

    #[test]
    fn adaptive_smooth_exponential() {
        let q = adaptive(f64::exp, (0.0, 1.0), 1e-10, 50).unwrap();
        assert_abs_diff_eq!(q.value, 1.0_f64.exp() - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fixed_carries_no_estimate() {
        let q = fixed(|x| x * x, (0.0, 1.0), 5).unwrap();
        assert!(q.error.is_none());
        assert_abs_diff_eq!(q.value, 1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let res = adaptive(|x| x, (3.0, 3.0), 1e-8, 50);
        assert!(matches!(
            res,
            Err(QuadError::Domain(InvalidDomain::Bounds(_, _))),
        ));
        let res = fixed(|x| x, (1.0, 0.0), 5);
        assert!(matches!(
            res,
            Err(QuadError::Domain(InvalidDomain::Bounds(_, _))),
        ));
    }

    #[test]
    fn bad_parameters_rejected() {
        assert!(matches!(
            adaptive(|x| x, (0.0, 1.0), 0.0, 50),
            Err(QuadError::BadEpsilon(_)),
        ));
        assert!(matches!(
            adaptive(|x| x, (0.0, 1.0), 1e-8, 0),
            Err(QuadError::BadMaxiters(0)),
        ));
        assert!(matches!(
            fixed(|x| x, (0.0, 1.0), 0),
            Err(QuadError::Legendre(_)),
        ));
    }

    #[test]
    fn cap_carries_best_value() {
        // x⁴ cannot converge with only orders 1 and 2; the returned error
        // still holds the order-2 value
        let res = adaptive(|x| x.powi(4), (0.0, 10.0), 1e-8, 2);
        match res {
            Err(QuadError::Converge { value, error, epsilon: eps, maxiters }) => {
                assert_abs_diff_eq!(value, 175000.0 / 9.0, epsilon = 1e-9);
                assert_abs_diff_eq!(error, 118750.0 / 9.0, epsilon = 1e-9);
                assert_eq!(maxiters, 2);
                assert!(eps == 1e-8);
            },
            _ => panic!("expected a convergence failure"),
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let q0 = adaptive(|x| (x * x).sin(), (0.0, 2.0), 1e-10, 50).unwrap();
        let q1 = adaptive(|x| (x * x).sin(), (0.0, 2.0), 1e-10, 50).unwrap();
        assert_eq!(q0.value.to_bits(), q1.value.to_bits());
        assert_eq!(q0.error.unwrap().to_bits(), q1.error.unwrap().to_bits());
    }

    #[test]
    fn master_dispatch() {
        let m = Method::Adaptive { epsilon: None, maxiters: None };
        assert!(m.is_adaptive() && !m.is_fixed());
        let q = integrate(|x| x * x, (0.0, 10.0), m).unwrap();
        let r = adaptive(|x| x * x, (0.0, 10.0), DEF_EPSILON, DEF_MAXITERS)
            .unwrap();
        assert_eq!(q.value.to_bits(), r.value.to_bits());

        let m = Method::Fixed { order: 4 };
        assert!(m.is_fixed() && !m.is_adaptive());
        let q = integrate(|x| x * x * x, (0.0, 2.0), m).unwrap();
        assert_abs_diff_eq!(q.value, 4.0, epsilon = 1e-12);
    }
}

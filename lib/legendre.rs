//! Construction and evaluation of Gauss-Legendre quadrature rules.
//!
//! Rules are computed by the Golub-Welsch procedure[^1]: the nodes of the
//! `n`-point rule are the eigenvalues of the symmetric tridiagonal Jacobi
//! matrix attached to the Legendre three-term recurrence, and the weights
//! follow from the first components of its orthonormal eigenvectors.
//! Construction costs one symmetric eigensolve and is repeated for every
//! call; nothing is cached anywhere.
//!
//! See [`docs`][crate::docs] for theoretical background.
//!
//! [^1]: G. H. Golub and J. H. Welsch, "Calculation of Gauss quadrature
//!     rules," Math. Comp. **23**, 221-230 (1969).

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::error::LegendreError;

pub type LegendreResult<T> = Result<T, LegendreError>;

/// Nodes and weights of an `n`-point Gauss-Legendre rule on [-1, 1].
///
/// Arrays borrowed from this type are guaranteed to have equal length, with
/// nodes in ascending order and weights summing to 2.
#[derive(Clone, Debug)]
pub struct GaussLegendre {
    // quadrature nodes, ascending
    nodes: nd::Array1<f64>,
    // quadrature weights
    weights: nd::Array1<f64>,
    // rule order
    order: usize,
}

impl GaussLegendre {
    /// Compute the `order`-point rule.
    ///
    /// The `order`-point rule integrates polynomials of degree up to
    /// `2 * order - 1` exactly.
    pub fn new(order: usize) -> LegendreResult<Self> {
        LegendreError::check_order(order)?;
        let n = order;
        let beta: nd::Array1<f64>
            = (1..n)
            .map(|k| {
                let k = k as f64;
                k / (4.0 * k * k - 1.0).sqrt()
            })
            .collect();
        let mut J: nd::Array2<f64> = nd::Array2::zeros((n, n));
        J.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().assign(&beta);
        J.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().assign(&beta);
        let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
            = J.eigh_into(la::UPLO::Lower)?;
        let weights: nd::Array1<f64>
            = evecs.row(0).mapv(|v0| 2.0 * v0 * v0);
        Ok(Self { nodes: evals, weights, order })
    }

    /// Get the order of the rule.
    pub fn order(&self) -> usize { self.order }

    /// Get a reference to the node array.
    pub fn get_nodes(&self) -> &nd::Array1<f64> { &self.nodes }

    /// Get a reference to the weight array.
    pub fn get_weights(&self) -> &nd::Array1<f64> { &self.weights }

    /// Evaluate the rule for an integrand over the interval `bounds`.
    ///
    /// This is a bare evaluation primitive: the bounds are mapped onto the
    /// reference interval without validation, so exchanging them negates the
    /// result, as in the analytic definition.
    pub fn integrate<F>(&self, mut f: F, bounds: (f64, f64)) -> f64
    where F: FnMut(f64) -> f64
    {
        let (a, b) = bounds;
        let mid = (b + a) / 2.0;
        let half = (b - a) / 2.0;
        half * self.nodes.iter().zip(&self.weights)
            .map(|(&t, &w)| w * f(mid + half * t))
            .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn order_one_is_midpoint() {
        let rule = GaussLegendre::new(1).unwrap();
        assert_eq!(rule.order(), 1);
        assert!(rule.get_nodes()[0].abs() < TOL);
        assert!((rule.get_weights()[0] - 2.0).abs() < TOL);
    }

    #[test]
    fn tabulated_nodes_and_weights() {
        let rule = GaussLegendre::new(2).unwrap();
        let t = 1.0 / 3.0_f64.sqrt();
        assert!((rule.get_nodes()[0] + t).abs() < TOL);
        assert!((rule.get_nodes()[1] - t).abs() < TOL);
        assert!((rule.get_weights()[0] - 1.0).abs() < TOL);
        assert!((rule.get_weights()[1] - 1.0).abs() < TOL);

        let rule = GaussLegendre::new(3).unwrap();
        let t = (3.0_f64 / 5.0).sqrt();
        assert!((rule.get_nodes()[0] + t).abs() < TOL);
        assert!(rule.get_nodes()[1].abs() < TOL);
        assert!((rule.get_nodes()[2] - t).abs() < TOL);
        assert!((rule.get_weights()[0] - 5.0 / 9.0).abs() < TOL);
        assert!((rule.get_weights()[1] - 8.0 / 9.0).abs() < TOL);
        assert!((rule.get_weights()[2] - 5.0 / 9.0).abs() < TOL);

        let rule = GaussLegendre::new(5).unwrap();
        assert!(rule.get_nodes()[2].abs() < TOL);
        assert!((rule.get_weights()[2] - 128.0 / 225.0).abs() < TOL);
        assert!(
            (rule.get_nodes()[0] + rule.get_nodes()[4]).abs() < TOL
        );
    }

    #[test]
    fn weights_sum_to_two() {
        for order in 1..=10 {
            let rule = GaussLegendre::new(order).unwrap();
            assert!(
                (rule.get_weights().sum() - 2.0).abs() < TOL,
                "weight sum off at order {order}"
            );
        }
    }

    #[test]
    fn exact_for_low_degrees() {
        // the 3-point rule is exact through degree 5
        let rule = GaussLegendre::new(3).unwrap();
        let computed = rule.integrate(|x| x.powi(5), (0.0, 1.0));
        assert!((computed - 1.0 / 6.0).abs() < TOL, "got {computed}");
        let computed = rule.integrate(|x| 2.0 * x.powi(3) - x + 1.0, (-1.0, 2.0));
        assert!((computed - 9.0).abs() < TOL, "got {computed}");
    }

    #[test]
    fn exchanged_bounds_negate() {
        let rule = GaussLegendre::new(4).unwrap();
        let fwd = rule.integrate(f64::exp, (0.0, 1.0));
        let rev = rule.integrate(f64::exp, (1.0, 0.0));
        assert!((fwd + rev).abs() < TOL);
    }

    #[test]
    fn zero_order_rejected() {
        assert!(matches!(
            GaussLegendre::new(0),
            Err(LegendreError::BadOrder(0)),
        ));
    }
}

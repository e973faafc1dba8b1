//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Gauss-Legendre rules](#gauss-legendre-rules)
//! - [Adaptive order escalation](#adaptive-order-escalation)
//! - [Rules for sampled data](#rules-for-sampled-data)
//!
//! # Background
//! Numerical quadrature approximates the definite integral of a function over
//! a finite interval by a weighted sum of point samples,
//! ```text
//! ⌠b             N-1
//! |  f(x) dx  ≈   Σ   w[i] f(x[i])
//! ⌡a             i=0
//! ```
//! and a particular choice of the nodes *x*\[*i*\] and weights *w*\[*i*\]
//! defines a rule[^1]. Rules fall into two broad families. When the nodes are
//! fixed in advance (for instance because the integrand exists only as a set
//! of samples), only the weights remain free and an *N*-point rule can be
//! made exact for polynomials up to degree roughly *N* - 1; these are the
//! Newton-Cotes rules, of which the trapezoidal and Simpson's rules are the
//! first two composite members. When the integrand can be evaluated anywhere,
//! the nodes themselves become free parameters and an *N*-point rule can be
//! made exact up to degree 2 *N* - 1; these are the [Gaussian rules][gauss].
//!
//! Both families are implemented here: [`quad`][crate::quad] drives
//! Gauss-Legendre rules over callables, and [`discrete`][crate::discrete]
//! applies composite Newton-Cotes rules to sampled data.
//!
//! # Gauss-Legendre rules
//! For the unit weight function on the reference interval \[-1, 1\], the
//! optimal nodes are the roots of the Legendre polynomial *P*<sub>*N*</sub>.
//! Rather than locating those roots directly, both nodes and weights can be
//! obtained from a single symmetric eigenproblem via the Golub-Welsch
//! procedure[^2]. The Legendre three-term recurrence
//! ```text
//! (k + 1) P[k + 1](t) = (2 k + 1) t P[k](t) - k P[k - 1](t)
//! ```
//! is symmetrized into the N×N tridiagonal Jacobi matrix
//! ```text
//! J = B{-1} + B{+1}
//!
//!               k
//! β[k] = ------------- ,    k = 1, ..., N - 1
//!         √(4 k² - 1)
//! ```
//! where *B*{*k*} is the *N*×*N* matrix with *β*\[1\], ..., *β*\[*N* - 1\] on
//! the *k*-th diagonal and 0 elsewhere. The nodes are exactly the eigenvalues
//! of *J*, and if *v*\[*i*\] is the normalized eigenvector attached to node
//! *t*\[*i*\], the corresponding weight is
//! ```text
//! w[i] = 2 (v[i]₀)²
//! ```
//! with *v*\[*i*\]₀ the first component of the eigenvector; the factor 2 is
//! the total measure of the reference interval. Since *J* is real symmetric,
//! the eigensolve is cheap and numerically well-behaved, and the nodes come
//! out sorted.
//!
//! A rule on \[-1, 1\] is carried onto an arbitrary interval \[*a*, *b*\] by
//! the affine change of variables
//! ```text
//! x = (a + b)/2 + (b - a)/2 t
//!
//! ⌠b             b - a  N-1
//! |  f(x) dx  =  -----   Σ   w[i] f((a + b)/2 + (b - a)/2 t[i])
//! ⌡a               2    i=0
//! ```
//!
//! # Adaptive order escalation
//! For integrands that are smooth on the closed interval, the Gauss-Legendre
//! error decays faster than any power of 1/*N*, so escalating the order is an
//! effective automatic strategy[^3]: evaluate the rule at orders *N* = 1, 2,
//! ... and take
//! ```text
//! err[N] = |I[N] - I[N - 1]|
//! ```
//! as an *a posteriori* estimate of the error in *I*\[*N*\], accepting the
//! value once the estimate falls below the requested bound. Strictly the
//! difference measures the error of the *lower*-order value, which makes the
//! estimate conservative for convergent sequences. Because successive
//! Gauss-Legendre rules share no nodes, every order costs a fresh set of
//! integrand evaluations; the iteration is therefore capped, and hitting the
//! cap with the estimate still above the bound is reported as a failure
//! carrying the best value rather than as a silent success.
//!
//! # Rules for sampled data
//! When the integrand exists only as samples (*x*\[*i*\], *y*\[*i*\]) with
//! strictly increasing abscissae, the composite trapezoidal rule sums the
//! areas of the trapezoids through adjacent samples,
//! ```text
//!         N-2  y[i] + y[i + 1]
//! T[y] =   Σ   --------------- (x[i + 1] - x[i])
//!         i=0         2
//! ```
//! with an error term of *O*(*h*²) in the typical spacing *h*. Simpson's rule
//! improves this to *O*(*h*⁴) by integrating the quadratic through each
//! consecutive triple of samples; on a possibly non-uniform grid, the pair of
//! intervals with widths *h*₀ = *x*\[*j* + 1\] - *x*\[*j*\] and *h*₁ =
//! *x*\[*j* + 2\] - *x*\[*j* + 1\] contributes
//! ```text
//!         h₀ + h₁
//! S[j] = --------- (α y[j] + β y[j + 1] + γ y[j + 2])
//!         6 h₀ h₁
//!
//! α = h₁ (2 h₀ - h₁)
//! β = (h₀ + h₁)²
//! γ = h₀ (2 h₁ - h₀)
//! ```
//! which reduces to the familiar (*h*/3) (*y*\[*j*\] + 4 *y*\[*j* + 1\] +
//! *y*\[*j* + 2\]) for uniform spacing. The composite rule consumes intervals
//! two at a time, so an odd interval count leaves one interval unpaired at
//! the right end; that interval is closed with a single trapezoid, keeping
//! the whole domain covered at a small local cost in order.
//!
//! The running (cumulative) form of the trapezoidal rule retains each partial
//! sum instead of only the total,
//! ```text
//!         k   y[i] + y[i + 1]
//! C[k] =  Σ   --------------- (x[i + 1] - x[i]) ,   k = 0, ..., N - 2
//!        i=0         2
//! ```
//! Entry *k* is the integral of the data up to *x*\[*k* + 1\]; the
//! identically-zero entry that would precede *C*\[0\] is omitted, so the
//! trace is one element shorter than the sample arrays and its last entry
//! equals *T*\[*y*\].
//!
//! [^1]: P. J. Davis and P. Rabinowitz, *Methods of Numerical Integration*,
//! 2nd ed. (Academic Press, 1984).
//!
//! [^2]: G. H. Golub and J. H. Welsch, "Calculation of Gauss quadrature
//! rules." Mathematics of Computation **23** 221-230 (1969).
//!
//! [^3]: R. Piessens, E. de Doncker-Kapenga, C. W. Überhuber, and D. K.
//! Kahaner, *QUADPACK: A Subroutine Package for Automatic Integration*
//! (Springer, 1983).
//!
//! [gauss]: https://en.wikipedia.org/wiki/Gaussian_quadrature

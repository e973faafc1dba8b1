use ndarray as nd;
use xquad::{
    discrete::{ Rule, SampleSet },
    quad::{ self, Method },
};

// integrate a parabola with every available routine and compare against the
// analytic result

fn main() {
    const LOWER: f64 = 0.0;
    const UPPER: f64 = 10.0;
    const NSAMPLES: usize = 15; // number of discrete samples

    // ∫ x² dx over [0, 10] = 1000/3
    let exact = (UPPER.powi(3) - LOWER.powi(3)) / 3.0;
    println!("analytic:   {exact:.9}");

    // adaptive quadrature over the closed form
    let q = quad::integrate(
        |x| x * x,
        (LOWER, UPPER),
        Method::Adaptive { epsilon: None, maxiters: None },
    ).unwrap();
    println!(
        "adaptive:   {:.9} (error estimate {:.3e})",
        q.value,
        q.error.unwrap(),
    );

    // single fixed-order rule for comparison
    let q = quad::integrate(
        |x| x * x,
        (LOWER, UPPER),
        Method::Fixed { order: 5 },
    ).unwrap();
    println!("fixed(5):   {:.9}", q.value);

    // the same parabola reduced to a coarse sampling; the trapezoid
    // overshoots on a convex integrand while Simpson stays exact
    let samples
        = SampleSet::new_linspace((LOWER, UPPER, NSAMPLES), |x| x * x)
        .unwrap();
    let trap = samples.integrate(Rule::Trapezoid).unwrap();
    let simp = samples.integrate(Rule::Simpson).unwrap();
    println!("trapezoid:  {trap:.9}");
    println!("simpson:    {simp:.9}");

    // running integral over the samples; the final entry is the trapezoid
    // total again
    let trace: nd::Array1<f64> = samples.cumulative().unwrap();
    let x = samples.get_x();
    println!("cumulative:");
    for (xk, ck) in x.iter().skip(1).zip(&trace).step_by(4) {
        println!("  up to x = {xk:7.4}: {ck:12.9}");
    }
    println!("  final:    {:.9}", trace[trace.len() - 1]);
}

use std::f64::consts::E;

/// The logistic activation, the only non-linearity the network uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// `σ(x) = 1 / (1 + e^-x)`
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// Derivative expressed through the activated output: `σ'(x) = y(1 - y)`
    /// where `y = σ(x)`.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}

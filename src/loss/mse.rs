/// Squared-error loss driving the output-layer error signal.
pub struct MseLoss;

impl MseLoss {
    /// Mean over outputs of `(predicted - expected)²`; used for reporting.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// `predicted - expected` for each output, i.e. the gradient of
    /// `½ Σ (predicted - expected)²`. The output layer multiplies this by σ'.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

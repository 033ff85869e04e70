use serde::{Serialize, Deserialize};

use crate::error::NetworkError;

/// Ordered layer widths, input layer first.
///
/// A valid topology has at least two layers (input plus output) and every
/// width is at least one. Once built it never changes.
///
/// Deserialization goes through `Vec<i64>` so that negative widths in a
/// config file are reported as `InvalidTopology` rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<usize>")]
pub struct Topology {
    widths: Vec<usize>,
}

impl Topology {
    pub fn new(widths: Vec<usize>) -> Result<Topology, NetworkError> {
        if widths.len() < 2 {
            return Err(NetworkError::invalid_topology(format!(
                "need at least 2 layers, got {}",
                widths.len()
            )));
        }
        if let Some(layer) = widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::invalid_topology(format!(
                "layer {layer} has width 0"
            )));
        }
        Ok(Topology { widths })
    }

    /// For widths known to be valid at compile time.
    pub(crate) fn from_known_valid(widths: Vec<usize>) -> Topology {
        debug_assert!(widths.len() >= 2 && widths.iter().all(|&w| w > 0));
        Topology { widths }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of layers, including the input layer.
    pub fn layer_count(&self) -> usize {
        self.widths.len()
    }

    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    pub fn output_width(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }
}

impl TryFrom<Vec<i64>> for Topology {
    type Error = NetworkError;

    fn try_from(widths: Vec<i64>) -> Result<Self, Self::Error> {
        let widths = widths.into_iter()
            .enumerate()
            .map(|(layer, w)| {
                usize::try_from(w).map_err(|_| {
                    NetworkError::invalid_topology(format!("layer {layer} has width {w}"))
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        Topology::new(widths)
    }
}

impl TryFrom<&[usize]> for Topology {
    type Error = NetworkError;

    fn try_from(widths: &[usize]) -> Result<Self, Self::Error> {
        Topology::new(widths.to_vec())
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Self {
        topology.widths
    }
}

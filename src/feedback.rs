use std::error::Error;
use std::fmt;

use crate::concepts::switch_id::{SwitchId, SwitchIdError};

/// Everything a path computation can fail with. The engine never retries
/// on its own; whether a fresher topology snapshot or a smaller bandwidth
/// ask is worth a second attempt is the caller's call.
///
/// `Display`, `Error`, and `From<SwitchIdError>` are implemented by hand
/// because `NoPathFound` has a field named `source` that is a switch id,
/// not a cause, and `thiserror` offers no way to opt a field with that
/// name out of `Error::source()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComputationError {
    /// The switch is not part of the supplied topology snapshot.
    InvalidEndpoint { switch_id: SwitchId },

    /// The frontier emptied without reaching the destination. This covers
    /// bandwidth filtering removing every viable link and weight-ceiling
    /// pruning; it is a legitimate outcome, not a fault.
    NoPathFound {
        source: SwitchId,
        destination: SwitchId,
        requested_bandwidth: u64,
        weight_ceiling: u32,
    },

    /// A link record in the snapshot could not be parsed. Fatal to this
    /// request only; every computation owns its own graph.
    InvalidTopology(SwitchIdError),
}

impl fmt::Display for PathComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathComputationError::InvalidEndpoint { switch_id } => {
                write!(f, "switch {switch_id} is not present in the topology")
            }
            PathComputationError::NoPathFound {
                source,
                destination,
                requested_bandwidth,
                weight_ceiling,
            } => write!(
                f,
                "no path from {source} to {destination} satisfies \
                 {requested_bandwidth} kbps within weight ceiling {weight_ceiling}"
            ),
            PathComputationError::InvalidTopology(err) => {
                write!(f, "invalid topology: {err}")
            }
        }
    }
}

impl Error for PathComputationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PathComputationError::InvalidTopology(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SwitchIdError> for PathComputationError {
    fn from(err: SwitchIdError) -> Self {
        PathComputationError::InvalidTopology(err)
    }
}

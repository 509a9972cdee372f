use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::switch_id::{SwitchId, SwitchIdError};

/// A single directed inter-switch link, one leg of a physical connection.
/// A bidirectional connection shows up as two of these, and the legs may
/// disagree on cost, bandwidth and port numbering.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Isl {
    pub source: SwitchId,
    pub source_port: u32,
    pub destination: SwitchId,
    pub destination_port: u32,
    /// routing weight, lower is preferred; 0 means "unspecified"
    pub cost: u32,
    /// kbps left on the link
    pub available_bandwidth: u64,
    /// informational, not part of the routing weight
    pub latency: u32,
}

impl Isl {
    pub fn satisfies_bandwidth(&self, requested: u64) -> bool {
        self.available_bandwidth >= requested
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// A link as shipped in a topology inventory snapshot, endpoints still in
/// string form. Parsed into an [`Isl`] when the network is built.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IslRecord {
    pub source: String,
    pub source_port: u32,
    pub destination: String,
    pub destination_port: u32,
    pub cost: u32,
    pub available_bandwidth: u64,
    pub latency: u32,
}

impl TryFrom<&IslRecord> for Isl {
    type Error = SwitchIdError;

    fn try_from(record: &IslRecord) -> Result<Self, Self::Error> {
        Ok(Isl {
            source: SwitchId::from_str(&record.source)?,
            source_port: record.source_port,
            destination: SwitchId::from_str(&record.destination)?,
            destination_port: record.destination_port,
            cost: record.cost,
            available_bandwidth: record.available_bandwidth,
            latency: record.latency,
        })
    }
}

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::isl::Isl;
use crate::concepts::switch_id::SwitchId;

/// One entry of a computed path: the switch plus the ports the flow enters
/// and leaves through. The source hop has no in-port and the destination
/// hop has no out-port; those sides belong to the flow endpoints.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hop {
    pub switch_id: SwitchId,
    pub in_port: Option<u32>,
    pub out_port: Option<u32>,
}

/// An ordered hop sequence from source to destination, both inclusive.
/// Immutable once returned by the finder.
///
/// Equality and hashing are structural over the hop sequence only: two
/// paths that install the same rules are the same path, whatever their
/// cost or latency totals say.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    hops: Vec<Hop>,
    total_cost: u32,
    total_latency: u64,
}

impl Path {
    /// A zero-hop path, for requests where source equals destination.
    pub fn single_switch(switch_id: SwitchId) -> Self {
        Path {
            hops: vec![Hop {
                switch_id,
                in_port: None,
                out_port: None,
            }],
            total_cost: 0,
            total_latency: 0,
        }
    }

    /// Assembles the hop sequence from the traversed links. `total_cost`
    /// is supplied by the caller since effective link weights live with
    /// the network, not the links.
    ///
    /// Links must be non-empty and contiguous (each link starts where the
    /// previous one ended); the finder guarantees both.
    pub(crate) fn from_links(links: &[Isl], total_cost: u32) -> Self {
        debug_assert!(!links.is_empty());
        let mut hops = Vec::with_capacity(links.len() + 1);
        hops.push(Hop {
            switch_id: links[0].source.clone(),
            in_port: None,
            out_port: Some(links[0].source_port),
        });
        for pair in links.windows(2) {
            debug_assert_eq!(pair[0].destination, pair[1].source);
            hops.push(Hop {
                switch_id: pair[1].source.clone(),
                in_port: Some(pair[0].destination_port),
                out_port: Some(pair[1].source_port),
            });
        }
        let last = &links[links.len() - 1];
        hops.push(Hop {
            switch_id: last.destination.clone(),
            in_port: Some(last.destination_port),
            out_port: None,
        });
        Path {
            hops,
            total_cost,
            total_latency: links.iter().map(|l| l.latency as u64).sum(),
        }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of links traversed, one less than the number of hops.
    pub fn hop_count(&self) -> usize {
        self.hops.len() - 1
    }

    pub fn source(&self) -> &SwitchId {
        &self.hops[0].switch_id
    }

    pub fn destination(&self) -> &SwitchId {
        &self.hops[self.hops.len() - 1].switch_id
    }

    /// The switches visited, in order.
    pub fn switches(&self) -> impl Iterator<Item = &SwitchId> {
        self.hops.iter().map(|h| &h.switch_id)
    }

    /// Accumulated effective routing weight.
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Accumulated link latency, informational.
    pub fn total_latency(&self) -> u64 {
        self.total_latency
    }

    /// True when `other` visits the same switches in the opposite order.
    /// Port numbers are not compared; the two directions of a physical
    /// connection number their ports independently.
    pub fn is_mirror_of(&self, other: &Path) -> bool {
        self.hops.len() == other.hops.len()
            && self
                .hops
                .iter()
                .zip(other.hops.iter().rev())
                .all(|(a, b)| a.switch_id == b.switch_id)
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.hops == other.hops
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hops.hash(state);
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for hop in &self.hops {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", hop.switch_id)?;
            first = false;
        }
        Ok(())
    }
}

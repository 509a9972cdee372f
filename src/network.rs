use std::collections::HashMap;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;

use crate::concepts::isl::{Isl, IslRecord};
use crate::concepts::switch_id::SwitchId;
use crate::feedback::PathComputationError;

/// Routing weight applied to links whose cost is unspecified (`cost == 0`).
/// A literal zero would beat every real-cost link, which is never the
/// intended policy.
pub const DEFAULT_LINK_WEIGHT: u32 = 700;

/// The directed multigraph a single path computation runs over: every
/// switch mapped to its outgoing links, in insertion order.
///
/// Each request builds (or restores) its own network from the inventory
/// snapshot, preprocesses it, and throws it away afterwards. Nothing here
/// is shared between computations.
///
/// The graph may be directed-asymmetric: the presence and cost of a link
/// `A -> B` says nothing about `B -> A`.
#[cfg_attr(feature = "serde", serde_as)]
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailableNetwork {
    /// Outgoing links per switch. Switches that only ever appear as a
    /// destination get an entry too, so endpoint lookups cover sinks.
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    adjacency: HashMap<SwitchId, Vec<Isl>>,
    default_weight: u32,
}

impl AvailableNetwork {
    pub fn new() -> Self {
        Self::with_default_weight(DEFAULT_LINK_WEIGHT)
    }

    pub fn with_default_weight(default_weight: u32) -> Self {
        AvailableNetwork {
            adjacency: HashMap::new(),
            default_weight,
        }
    }

    /// Builds a network from raw inventory records. Fails only when a
    /// record carries a malformed switch id; an empty snapshot is a valid,
    /// empty network.
    pub fn build<'a, I>(records: I) -> Result<Self, PathComputationError>
    where
        I: IntoIterator<Item = &'a IslRecord>,
    {
        let mut network = AvailableNetwork::new();
        for record in records {
            let isl = Isl::try_from(record)?;
            network.add_link(isl);
        }
        Ok(network)
    }

    /// Adds one directed link. Both endpoints become vertices.
    pub fn add_link(&mut self, isl: Isl) {
        self.adjacency.entry(isl.destination.clone()).or_default();
        self.adjacency.entry(isl.source.clone()).or_default().push(isl);
    }

    /// Drops every link whose source equals its destination. Chainable.
    pub fn remove_self_loops(&mut self) -> &mut Self {
        for links in self.adjacency.values_mut() {
            links.retain(|isl| !isl.is_self_loop());
        }
        self
    }

    /// Keeps, for every ordered pair of switches, only the cheapest of the
    /// parallel links between them, by effective weight. Exact ties go to
    /// the link seen first. Chainable, and idempotent.
    pub fn reduce_by_cost(&mut self) -> &mut Self {
        let default_weight = self.default_weight;
        for (source, links) in self.adjacency.iter_mut() {
            let mut cheapest: HashMap<SwitchId, usize> = HashMap::new();
            for (idx, isl) in links.iter().enumerate() {
                let weight = effective_weight(isl, default_weight);
                match cheapest.get(&isl.destination) {
                    Some(&best) if effective_weight(&links[best], default_weight) <= weight => {}
                    _ => {
                        cheapest.insert(isl.destination.clone(), idx);
                    }
                }
            }
            if cheapest.len() < links.len() {
                debug!(
                    "reduced {} parallel link(s) leaving {}",
                    links.len() - cheapest.len(),
                    source
                );
                let mut idx = 0;
                links.retain(|isl| {
                    let keep = cheapest.get(&isl.destination) == Some(&idx);
                    idx += 1;
                    keep
                });
            }
        }
        self
    }

    /// Effective routing weight of a link, with the default substituted
    /// for an unspecified cost.
    pub fn weight(&self, isl: &Isl) -> u32 {
        effective_weight(isl, self.default_weight)
    }

    pub fn contains(&self, switch_id: &SwitchId) -> bool {
        self.adjacency.contains_key(switch_id)
    }

    /// Outgoing links of a switch, in insertion order. Empty for sinks and
    /// for switches not in the graph.
    pub fn outgoing(&self, switch_id: &SwitchId) -> &[Isl] {
        self.adjacency
            .get(switch_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First link `source -> destination`, in insertion order, that still
    /// has `requested` bandwidth available.
    pub fn find_link(
        &self,
        source: &SwitchId,
        destination: &SwitchId,
        requested: u64,
    ) -> Option<&Isl> {
        self.outgoing(source)
            .iter()
            .find(|isl| isl.destination == *destination && isl.satisfies_bandwidth(requested))
    }

    /// All known switches, in no particular order.
    pub fn switches(&self) -> impl Iterator<Item = &SwitchId> {
        self.adjacency.keys()
    }

    pub fn switch_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Serializes the network to JSON, for diagnostics and snapshots.
    #[cfg(feature = "serde")]
    pub fn freeze(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[cfg(feature = "serde")]
    pub fn restore(state: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(state)
    }
}

impl Default for AvailableNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a JSON array of inventory records, the form the topology
/// collaborator ships snapshots in.
#[cfg(feature = "serde")]
pub fn parse_snapshot(json: &str) -> Result<Vec<IslRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

fn effective_weight(isl: &Isl, default_weight: u32) -> u32 {
    if isl.cost == 0 {
        default_weight
    } else {
        isl.cost
    }
}

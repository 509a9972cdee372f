use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, trace};

use crate::concepts::isl::Isl;
use crate::concepts::path::Path;
use crate::concepts::switch_id::SwitchId;
use crate::feedback::PathComputationError;
use crate::network::AvailableNetwork;
use crate::util::sum_weight;

/// Least-cost path search over one [`AvailableNetwork`], for one request.
///
/// The requested bandwidth decides which links are eligible at all; the
/// weight ceiling prunes any candidate whose accumulated weight would
/// exceed it, bounding the search on pathological graphs. The two are
/// deliberately separate parameters.
///
/// The finder borrows the network immutably, so any number of finders can
/// run against the same built graph, each with its own thresholds.
pub struct ShortestPathFinder<'a> {
    network: &'a AvailableNetwork,
    requested_bandwidth: u64,
    weight_ceiling: u32,
}

/// Where a single search currently stands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum SearchState {
    Initialized,
    Expanding,
    Found,
    Exhausted,
}

/// One frontier entry: everything needed to resume expansion from `at`.
struct Candidate {
    weight: u32,
    /// push order; breaks weight ties toward the first-discovered path
    sequence: u64,
    at: SwitchId,
    links: Vec<Isl>,
}

impl<'a> ShortestPathFinder<'a> {
    pub fn new(
        network: &'a AvailableNetwork,
        requested_bandwidth: u64,
        weight_ceiling: u32,
    ) -> Self {
        ShortestPathFinder {
            network,
            requested_bandwidth,
            weight_ceiling,
        }
    }

    /// Least-cost path from `source` to `destination` among links with
    /// enough available bandwidth, within the weight ceiling.
    pub fn compute_forward_path(
        &self,
        source: &SwitchId,
        destination: &SwitchId,
    ) -> Result<Path, PathComputationError> {
        self.check_endpoint(source)?;
        self.check_endpoint(destination)?;
        if source == destination {
            return Ok(Path::single_switch(source.clone()));
        }
        self.search(source, destination)
    }

    /// Return-direction path. Prefers the exact mirror of `forward_hint`
    /// whenever every forward hop has a reverse-direction link with enough
    /// bandwidth; symmetric forward/reverse routing beats a cheaper
    /// asymmetric alternative. Falls back to an independent search when
    /// any hop cannot be mirrored.
    pub fn compute_reverse_path(
        &self,
        source: &SwitchId,
        destination: &SwitchId,
        forward_hint: &Path,
    ) -> Result<Path, PathComputationError> {
        self.check_endpoint(source)?;
        self.check_endpoint(destination)?;
        if source == destination {
            return Ok(Path::single_switch(source.clone()));
        }
        if let Some(mirrored) = self.mirror(source, destination, forward_hint) {
            trace!("mirrored reverse path {} -> {}", source, destination);
            return Ok(mirrored);
        }
        debug!(
            "no full mirror of the forward path, searching {} -> {} independently",
            source, destination
        );
        self.search(source, destination)
    }

    fn check_endpoint(&self, switch_id: &SwitchId) -> Result<(), PathComputationError> {
        if self.network.contains(switch_id) {
            Ok(())
        } else {
            Err(PathComputationError::InvalidEndpoint {
                switch_id: switch_id.clone(),
            })
        }
    }

    /// Walks `forward_hint` backwards, hop by hop, looking for a
    /// bandwidth-eligible reverse-direction link for each forward one.
    /// `None` as soon as a hop has no usable reverse leg, or when the hint
    /// does not connect this request's endpoints.
    fn mirror(
        &self,
        source: &SwitchId,
        destination: &SwitchId,
        forward_hint: &Path,
    ) -> Option<Path> {
        if forward_hint.source() != destination || forward_hint.destination() != source {
            return None;
        }
        let forward: Vec<&SwitchId> = forward_hint.switches().collect();
        let mut links = Vec::with_capacity(forward.len() - 1);
        let mut weight = 0u32;
        for pair in forward.windows(2).rev() {
            let link = self
                .network
                .find_link(pair[1], pair[0], self.requested_bandwidth)?;
            weight = sum_weight(weight, self.network.weight(link));
            links.push(link.clone());
        }
        Some(Path::from_links(&links, weight))
    }

    /// Frontier-based least-cost search. Candidates leave the frontier in
    /// non-decreasing weight order, so the first time the destination is
    /// popped its path is optimal; ties resolve to the candidate pushed
    /// first, which makes results reproducible for a fixed link order.
    fn search(
        &self,
        source: &SwitchId,
        destination: &SwitchId,
    ) -> Result<Path, PathComputationError> {
        let mut state = SearchState::Initialized;
        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        let mut settled: HashSet<SwitchId> = HashSet::new();
        let mut sequence = 0u64;

        frontier.push(Reverse(Candidate {
            weight: 0,
            sequence,
            at: source.clone(),
            links: Vec::new(),
        }));

        while let Some(Reverse(candidate)) = frontier.pop() {
            if state == SearchState::Initialized {
                state = SearchState::Expanding;
                trace!("expanding from {} toward {}", source, destination);
            }
            if !settled.insert(candidate.at.clone()) {
                continue;
            }
            if candidate.at == *destination {
                state = SearchState::Found;
                trace!(
                    "search {} -> {} {:?} at weight {} after settling {} switch(es)",
                    source,
                    destination,
                    state,
                    candidate.weight,
                    settled.len()
                );
                return Ok(Path::from_links(&candidate.links, candidate.weight));
            }
            for isl in self.network.outgoing(&candidate.at) {
                if settled.contains(&isl.destination) {
                    continue;
                }
                if !isl.satisfies_bandwidth(self.requested_bandwidth) {
                    continue;
                }
                let weight = sum_weight(candidate.weight, self.network.weight(isl));
                if weight > self.weight_ceiling {
                    // pruned, surfaces only as "no path"
                    continue;
                }
                let mut links = candidate.links.clone();
                links.push(isl.clone());
                sequence += 1;
                frontier.push(Reverse(Candidate {
                    weight,
                    sequence,
                    at: isl.destination.clone(),
                    links,
                }));
            }
        }

        state = SearchState::Exhausted;
        debug!("search {} -> {} {:?}", source, destination, state);
        Err(PathComputationError::NoPathFound {
            source: source.clone(),
            destination: destination.clone(),
            requested_bandwidth: self.requested_bandwidth,
            weight_ceiling: self.weight_ceiling,
        })
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.sequence == other.sequence
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

//! flowpath is an I/O free path computation engine for software-defined
//! networks: build an [`network::AvailableNetwork`] from the current
//! inter-switch link inventory, preprocess it, and run a
//! [`finder::ShortestPathFinder`] to get a forward path and its mirrored
//! reverse.
//!
//! The crate does no I/O and keeps no state between computations; every
//! request owns its graph and finder, so computations parallelize without
//! coordination.

pub mod concepts;
pub mod feedback;
pub mod finder;
pub mod network;
pub mod util;

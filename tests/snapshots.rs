#![cfg(feature = "serde")]

use flowpath::finder::ShortestPathFinder;
use flowpath::network::{parse_snapshot, AvailableNetwork};

mod common;

use common::graphs::*;

#[test]
fn builds_from_a_json_inventory_snapshot() {
    let json = format!(
        r#"[
            {{"source": "{SW_A}", "source_port": 1, "destination": "{SW_B}",
              "destination_port": 2, "cost": 5, "available_bandwidth": 100, "latency": 3}},
            {{"source": "{SW_B}", "source_port": 2, "destination": "{SW_A}",
              "destination_port": 1, "cost": 5, "available_bandwidth": 100, "latency": 3}}
        ]"#
    );
    let records = parse_snapshot(&json).unwrap();
    let net = AvailableNetwork::build(&records).unwrap();

    assert_eq!(net.switch_count(), 2);
    assert_eq!(net.link_count(), 2);

    let finder = ShortestPathFinder::new(&net, 50, 100);
    let path = finder
        .compute_forward_path(&switch(SW_A), &switch(SW_B))
        .unwrap();
    assert_eq!(path.hop_count(), 1);
}

#[test]
fn freeze_restore_preserves_the_adjacency() {
    let mut net = reference_topology();
    net.remove_self_loops().reduce_by_cost();

    let restored = AvailableNetwork::restore(&net.freeze().unwrap()).unwrap();

    assert_eq!(restored.switch_count(), net.switch_count());
    assert_eq!(restored.link_count(), net.link_count());
    for sw in net.switches() {
        assert_eq!(restored.outgoing(sw), net.outgoing(sw));
    }

    // a restored network computes the same paths
    let finder = ShortestPathFinder::new(&restored, 35, 35);
    let path = finder
        .compute_forward_path(&switch(SW_E), &switch(SW_B))
        .unwrap();
    let hops: Vec<_> = path.switches().map(|s| s.as_str()).collect();
    assert_eq!(hops, [SW_E, SW_C, SW_B]);
}

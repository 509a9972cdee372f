use flowpath::concepts::isl::Isl;
use flowpath::concepts::switch_id::SwitchId;
use flowpath::network::AvailableNetwork;

pub const SW_A: &str = "00:00:00:22:3d:5a:04:87";
pub const SW_B: &str = "00:00:b0:d2:f5:00:5a:b8";
pub const SW_C: &str = "00:00:70:72:cf:d2:48:6c";
pub const SW_D: &str = "00:00:00:22:3d:6b:00:04";
pub const SW_E: &str = "00:00:70:72:cf:d2:47:a6";
pub const SW_F: &str = "00:00:00:22:3d:6c:00:b8";

pub fn switch(id: &str) -> SwitchId {
    id.parse().unwrap()
}

pub fn isl(
    source: &str,
    source_port: u32,
    destination: &str,
    destination_port: u32,
    cost: u32,
    available_bandwidth: u64,
    latency: u32,
) -> Isl {
    Isl {
        source: switch(source),
        source_port,
        destination: switch(destination),
        destination_port,
        cost,
        available_bandwidth,
        latency,
    }
}

pub fn network(links: &[(&str, u32, &str, u32, u32, u64, u32)]) -> AvailableNetwork {
    let mut net = AvailableNetwork::new();
    for &(src, sp, dst, dp, cost, bw, lat) in links {
        net.add_link(isl(src, sp, dst, dp, cost, bw, lat));
    }
    net
}

/// The six-switch, 18-link reference topology. Every link has at least
/// 35 kbps available, so a 35 kbps request is shaped by cost alone.
pub fn reference_topology() -> AvailableNetwork {
    network(&[
        (SW_A, 7, SW_B, 60, 0, 100, 3),
        (SW_A, 5, SW_C, 32, 10, 90, 18),
        (SW_A, 2, SW_D, 2, 10, 80, 2),
        (SW_A, 6, SW_E, 16, 10, 70, 15),
        (SW_A, 1, SW_F, 3, 40, 120, 4),
        (SW_D, 1, SW_F, 1, 100, 60, 7),
        (SW_D, 2, SW_A, 2, 10, 80, 1),
        (SW_F, 6, SW_B, 19, 10, 110, 3),
        (SW_F, 1, SW_D, 1, 100, 60, 2),
        (SW_F, 3, SW_A, 1, 100, 120, 2),
        (SW_E, 52, SW_C, 52, 10, 100, 381),
        (SW_E, 16, SW_A, 6, 10, 70, 18),
        (SW_C, 48, SW_B, 49, 10, 90, 97),
        (SW_C, 52, SW_E, 52, 10, 100, 1021),
        (SW_C, 32, SW_A, 5, 10, 90, 16),
        (SW_B, 49, SW_C, 48, 10, 90, 0),
        (SW_B, 19, SW_F, 6, 10, 110, 3),
        (SW_B, 50, SW_A, 7, 0, 100, 3),
    ])
}

/// Two disjoint branches from `SW_A` to `SW_B`: a cheap narrow one through
/// `SW_C` and a pricier wide one through `SW_D`.
pub fn diamond() -> AvailableNetwork {
    network(&[
        (SW_A, 1, SW_C, 1, 1, 20, 5),
        (SW_C, 2, SW_B, 1, 1, 20, 5),
        (SW_A, 2, SW_D, 1, 5, 100, 5),
        (SW_D, 2, SW_B, 2, 5, 100, 5),
    ])
}

/// Forward `SW_A -> SW_B -> SW_C` mirrors fully, but an independent
/// reverse search would rather take the cheap direct `SW_C -> SW_A` link.
pub fn mirror_vs_cheaper() -> AvailableNetwork {
    network(&[
        (SW_A, 1, SW_B, 1, 5, 100, 1),
        (SW_B, 2, SW_C, 1, 5, 100, 1),
        (SW_C, 1, SW_B, 2, 5, 100, 1),
        (SW_B, 1, SW_A, 1, 5, 100, 1),
        (SW_C, 9, SW_A, 9, 1, 100, 1),
    ])
}

/// Forward `SW_A -> SW_B -> SW_C` cannot mirror: there is no link back
/// from `SW_C` to `SW_B`. The only way home runs through `SW_D`.
pub fn broken_mirror() -> AvailableNetwork {
    network(&[
        (SW_A, 1, SW_B, 1, 1, 100, 1),
        (SW_B, 2, SW_C, 1, 1, 100, 1),
        (SW_C, 2, SW_D, 1, 2, 100, 1),
        (SW_D, 2, SW_A, 2, 3, 100, 1),
        (SW_B, 1, SW_A, 1, 1, 100, 1),
    ])
}

use roll_depot_core::ACCESS_THRESHOLD;
use roll_depot_grid::{GridSnapshot, DEFAULT_MARKER};
use roll_depot_system_peeling::{AdjacencyIndex, NodeId, PeelingScheduler};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

/// Mixed layout combining a stable octagon, a fully peelable block, and
/// scattered low-degree rolls.
const DEPOT_LAYOUT: [&str; 7] = [
    "@@@...@@....",
    "@@@..@@@@..@",
    "@@@..@@@@...",
    ".....@@@@..@",
    "..@...@@...@",
    ".@@@........",
    "..@....@@@..",
];

fn build_index() -> AdjacencyIndex {
    let snapshot = GridSnapshot::parse(DEPOT_LAYOUT, DEFAULT_MARKER).expect("rectangular grid");
    AdjacencyIndex::build(&snapshot)
}

fn initial_frontier(index: &AdjacencyIndex) -> Vec<NodeId> {
    index
        .nodes()
        .filter(|&node| index.initial_degree(node) < ACCESS_THRESHOLD)
        .collect()
}

fn removal_flags(index: &AdjacencyIndex, frontier: Vec<NodeId>) -> (usize, Vec<bool>) {
    let mut scheduler = PeelingScheduler::with_initial_frontier(index, frontier);
    let count = scheduler.run();
    let flags = index
        .nodes()
        .map(|node| scheduler.removed().contains(node))
        .collect();
    (count, flags)
}

fn shuffled(mut frontier: Vec<NodeId>, seed: u64) -> Vec<NodeId> {
    let mut state = seed;
    for position in (1..frontier.len()).rev() {
        state = state.wrapping_mul(RNG_MULTIPLIER).wrapping_add(RNG_INCREMENT);
        let other = (state % (position as u64 + 1)) as usize;
        frontier.swap(position, other);
    }
    frontier
}

#[test]
fn cascade_result_is_independent_of_frontier_order() {
    let index = build_index();
    let frontier = initial_frontier(&index);
    assert!(!frontier.is_empty(), "layout must seed an initial frontier");

    let (forward_count, forward_flags) = removal_flags(&index, frontier.clone());

    let mut reversed = frontier.clone();
    reversed.reverse();
    let (reversed_count, reversed_flags) = removal_flags(&index, reversed);

    assert_eq!(forward_count, reversed_count, "count diverged under reversal");
    assert_eq!(forward_flags, reversed_flags, "removed set diverged under reversal");

    for seed in [0x1234_5678, 0x4d59_5df4_d0f3_3173, 0xdead_beef] {
        let (count, flags) = removal_flags(&index, shuffled(frontier.clone(), seed));
        assert_eq!(forward_count, count, "count diverged for seed {seed:#x}");
        assert_eq!(forward_flags, flags, "removed set diverged for seed {seed:#x}");
    }
}

#[test]
fn duplicate_frontier_entries_do_not_change_the_result() {
    let index = build_index();
    let frontier = initial_frontier(&index);

    let (baseline_count, baseline_flags) = removal_flags(&index, frontier.clone());

    let mut doubled = frontier.clone();
    doubled.extend(frontier);
    let (count, flags) = removal_flags(&index, doubled);

    assert_eq!(baseline_count, count);
    assert_eq!(baseline_flags, flags);
}

#[test]
fn repeated_runs_produce_identical_outcomes() {
    let index = build_index();

    let first = removal_flags(&index, initial_frontier(&index));
    let second = removal_flags(&index, initial_frontier(&index));

    assert_eq!(first, second, "replay diverged between runs");
}

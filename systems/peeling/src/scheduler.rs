//! Cascade scheduler that drives removal to its fixed point.

use std::collections::VecDeque;

use roll_depot_core::ACCESS_THRESHOLD;

use crate::adjacency::{AdjacencyIndex, NodeId};

/// Mutable per-node count of still-present neighbors.
///
/// Initialized from the static neighbor lists and strictly non-increasing
/// afterwards. For every node not yet removed, its entry equals the number of
/// its static neighbors that are also not removed; the scheduler preserves
/// this after every step.
#[derive(Clone, Debug)]
pub struct DegreeTable {
    live: Vec<u32>,
}

impl DegreeTable {
    /// Initializes every entry from the node's static degree.
    #[must_use]
    pub fn new(index: &AdjacencyIndex) -> Self {
        Self {
            live: index.nodes().map(|node| index.initial_degree(node)).collect(),
        }
    }

    /// Current live-neighbor count for the provided node.
    #[must_use]
    pub fn current(&self, node: NodeId) -> u32 {
        self.live[node.slot()]
    }

    /// Reduces the live count by one, returning the new value.
    ///
    /// Driving a count negative indicates corrupted bookkeeping upstream and
    /// aborts with a diagnostic; it is never an expected runtime condition.
    pub(crate) fn decrement(&mut self, node: NodeId) -> u32 {
        let slot = &mut self.live[node.slot()];
        assert!(
            *slot > 0,
            "live-neighbor count underflow for node {}",
            node.get()
        );
        *slot -= 1;
        *slot
    }
}

/// Monotonically growing set of removed rolls.
#[derive(Clone, Debug)]
pub struct RemovedSet {
    flags: Vec<bool>,
    count: usize,
}

impl RemovedSet {
    pub(crate) fn with_node_count(nodes: usize) -> Self {
        Self {
            flags: vec![false; nodes],
            count: 0,
        }
    }

    /// Reports whether the provided node has been removed.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.flags[node.slot()]
    }

    /// Number of rolls removed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Reports whether no roll has been removed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn insert(&mut self, node: NodeId) -> bool {
        let slot = &mut self.flags[node.slot()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }
}

/// Context object owning all mutable cascade state.
///
/// Holds the degree table, the removed set, and the work queue; the borrowed
/// index stays untouched, so snapshot queries remain valid after a run. The
/// loop terminates because the removed set grows strictly and is bounded by
/// the node count.
#[derive(Debug)]
pub struct PeelingScheduler<'a> {
    index: &'a AdjacencyIndex,
    degrees: DegreeTable,
    removed: RemovedSet,
    queue: VecDeque<NodeId>,
}

impl<'a> PeelingScheduler<'a> {
    /// Creates a scheduler seeded with every initially accessible roll, in
    /// node-table order.
    #[must_use]
    pub fn new(index: &'a AdjacencyIndex) -> Self {
        let frontier: Vec<NodeId> = index
            .nodes()
            .filter(|&node| index.initial_degree(node) < ACCESS_THRESHOLD)
            .collect();
        Self::with_initial_frontier(index, frontier)
    }

    /// Creates a scheduler seeded from an explicit frontier ordering.
    ///
    /// The frontier must contain every node whose static degree is below the
    /// threshold; order is free and duplicates are tolerated. The final
    /// removed set is identical for every valid ordering, which replay tests
    /// exercise directly.
    #[must_use]
    pub fn with_initial_frontier<I>(index: &'a AdjacencyIndex, frontier: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        Self {
            index,
            degrees: DegreeTable::new(index),
            removed: RemovedSet::with_node_count(index.node_count()),
            queue: frontier.into_iter().collect(),
        }
    }

    /// Removes the next accessible roll and propagates the degree loss.
    ///
    /// Duplicate queue entries are discarded, never double-processed. Returns
    /// the removed node, or `None` once the fixed point is reached: no
    /// remaining roll has a live-neighbor count below the threshold.
    pub fn step(&mut self) -> Option<NodeId> {
        while let Some(node) = self.queue.pop_front() {
            if self.removed.contains(node) {
                continue;
            }

            assert!(
                self.removed.insert(node),
                "node at {:?} processed twice",
                self.index.coord(node)
            );

            for &neighbor in self.index.neighbors(node) {
                if self.removed.contains(neighbor) {
                    continue;
                }
                let remaining = self.degrees.decrement(neighbor);
                if remaining + 1 == ACCESS_THRESHOLD {
                    self.queue.push_back(neighbor);
                }
            }

            return Some(node);
        }

        None
    }

    /// Runs the cascade to its fixed point and returns the removed count.
    pub fn run(&mut self) -> usize {
        while self.step().is_some() {}
        self.removed.len()
    }

    /// Current degree table, for invariant inspection.
    #[must_use]
    pub fn degrees(&self) -> &DegreeTable {
        &self.degrees
    }

    /// Set of rolls removed so far.
    #[must_use]
    pub fn removed(&self) -> &RemovedSet {
        &self.removed
    }
}

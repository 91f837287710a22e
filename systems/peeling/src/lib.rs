#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure cascade-removal system for grid-stacked rolls.
//!
//! The system answers two queries over the same immutable adjacency data: a
//! one-shot count of rolls accessible in the initial snapshot, and the total
//! number of rolls removable once cascading removal runs to its fixed point.
//! Both queries are deterministic; no I/O happens anywhere in this crate.

mod adjacency;
mod scheduler;

pub use adjacency::{AdjacencyIndex, NodeId};
pub use scheduler::{DegreeTable, PeelingScheduler, RemovedSet};

use roll_depot_core::ACCESS_THRESHOLD;

/// Counts rolls accessible in the initial snapshot, with no cascading.
///
/// A roll is accessible when its static degree is strictly below
/// [`ACCESS_THRESHOLD`]. Pure function of the index; the cascade scheduler is
/// never consulted.
#[must_use]
pub fn accessible_count(index: &AdjacencyIndex) -> usize {
    index
        .nodes()
        .filter(|&node| index.initial_degree(node) < ACCESS_THRESHOLD)
        .count()
}

/// Runs the removal cascade to its fixed point and returns the total number
/// of rolls removed.
///
/// The scheduler operates on its own degree and removal tables, so calling
/// this never disturbs the index handed to [`accessible_count`].
#[must_use]
pub fn removed_count(index: &AdjacencyIndex) -> usize {
    let mut scheduler = PeelingScheduler::new(index);
    scheduler.run()
}

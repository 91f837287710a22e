//! Static adjacency data derived once from a grid snapshot.

use roll_depot_core::{CellCoord, NEIGHBOR_OFFSETS};
use roll_depot_grid::GridSnapshot;

/// Identifier of a roll within an [`AdjacencyIndex`] node table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new node identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Node table and static neighbor lists for every roll in a snapshot.
///
/// Built in a single O(columns × rows) pass: each present cell becomes a
/// node, and its neighbor list records the subset of the eight lattice
/// offsets that land on another present cell. The lists are the ground truth
/// for degree propagation and are never recomputed.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    coords: Vec<CellCoord>,
    neighbors: Vec<Vec<NodeId>>,
    lookup: Vec<Option<NodeId>>,
    columns: u32,
    rows: u32,
}

impl AdjacencyIndex {
    /// Derives the index from the provided snapshot.
    #[must_use]
    pub fn build(snapshot: &GridSnapshot) -> Self {
        let columns = snapshot.columns();
        let rows = snapshot.rows();
        let cell_count = usize::try_from(columns)
            .unwrap_or(0)
            .checked_mul(usize::try_from(rows).unwrap_or(0))
            .unwrap_or(0);

        let mut index = Self {
            coords: Vec::new(),
            neighbors: Vec::new(),
            lookup: vec![None; cell_count],
            columns,
            rows,
        };

        for cell in snapshot.present_cells() {
            let id = NodeId::new(u32::try_from(index.coords.len()).unwrap_or(u32::MAX));
            index.coords.push(cell);
            if let Some(offset) = index.cell_offset(cell) {
                index.lookup[offset] = Some(id);
            }
        }

        let mut neighbors = Vec::with_capacity(index.coords.len());
        for cell in &index.coords {
            let mut list = Vec::new();
            for (column_offset, row_offset) in NEIGHBOR_OFFSETS {
                let Some(candidate) = cell.offset_by(column_offset, row_offset) else {
                    continue;
                };
                if let Some(neighbor) = index.node_at(candidate) {
                    list.push(neighbor);
                }
            }
            neighbors.push(list);
        }
        index.neighbors = neighbors;

        index
    }

    /// Number of rolls recorded in the node table.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Iterates every node identifier in node-table order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.coords.len()).map(|value| NodeId::new(u32::try_from(value).unwrap_or(u32::MAX)))
    }

    /// Cell coordinate backing the provided node.
    #[must_use]
    pub fn coord(&self, node: NodeId) -> CellCoord {
        self.coords[node.slot()]
    }

    /// Node occupying the provided cell, if any.
    #[must_use]
    pub fn node_at(&self, cell: CellCoord) -> Option<NodeId> {
        self.cell_offset(cell)
            .and_then(|offset| self.lookup.get(offset).copied().flatten())
    }

    /// Static neighbor list captured for the provided node.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.neighbors[node.slot()]
    }

    /// Static degree of the provided node: the size of its neighbor list.
    #[must_use]
    pub fn initial_degree(&self, node: NodeId) -> u32 {
        u32::try_from(self.neighbors[node.slot()].len()).unwrap_or(u32::MAX)
    }

    fn cell_offset(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let column = usize::try_from(cell.column()).ok()?;
            let row = usize::try_from(cell.row()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            row.checked_mul(width)?.checked_add(column)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyIndex;
    use roll_depot_core::CellCoord;
    use roll_depot_grid::{GridSnapshot, DEFAULT_MARKER};

    fn index_of(rows: &[&str]) -> AdjacencyIndex {
        let snapshot = GridSnapshot::parse(rows, DEFAULT_MARKER).expect("rectangular grid");
        AdjacencyIndex::build(&snapshot)
    }

    #[test]
    fn build_assigns_nodes_in_row_major_order() {
        let index = index_of(&["@.@", ".@."]);

        assert_eq!(index.node_count(), 3);
        assert_eq!(index.coord(index.nodes().next().expect("node")), CellCoord::new(0, 0));

        let coords: Vec<CellCoord> = index.nodes().map(|node| index.coord(node)).collect();
        assert_eq!(
            coords,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(2, 0),
                CellCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighbor_lists_respect_bounds_and_absence() {
        let index = index_of(&["@@", "@."]);

        let corner = index.node_at(CellCoord::new(0, 0)).expect("corner node");
        assert_eq!(index.initial_degree(corner), 2);

        let right = index.node_at(CellCoord::new(1, 0)).expect("right node");
        let below = index.node_at(CellCoord::new(0, 1)).expect("below node");
        let mut neighbors = index.neighbors(corner).to_vec();
        neighbors.sort_unstable();
        let mut expected = vec![right, below];
        expected.sort_unstable();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn full_block_center_sees_all_eight_neighbors() {
        let index = index_of(&["@@@", "@@@", "@@@"]);

        let center = index.node_at(CellCoord::new(1, 1)).expect("center node");
        assert_eq!(index.initial_degree(center), 8);

        let corner = index.node_at(CellCoord::new(2, 2)).expect("corner node");
        assert_eq!(index.initial_degree(corner), 3);
    }

    #[test]
    fn empty_snapshot_produces_an_empty_index() {
        let rows: [&str; 0] = [];
        let snapshot = GridSnapshot::parse(rows, DEFAULT_MARKER).expect("empty grid");
        let index = AdjacencyIndex::build(&snapshot);

        assert_eq!(index.node_count(), 0);
        assert_eq!(index.nodes().count(), 0);
    }

    #[test]
    fn node_at_reports_absent_cells_as_none() {
        let index = index_of(&["@.", ".@"]);

        assert!(index.node_at(CellCoord::new(1, 0)).is_none());
        assert!(index.node_at(CellCoord::new(5, 5)).is_none());
    }
}

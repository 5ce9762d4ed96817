//! The `NodeStore` — flat arena of node records.

use swim_core::{NodeId, Point};
use swim_spatial::CellGrid;

use crate::{MobilityError, MobilityResult, NodeState};

/// Holds every node's state, indexed by `NodeId`.
///
/// Nodes are created once and never removed, so `nodes.len()` is the node
/// count for the whole run.
#[derive(Clone, Debug)]
pub struct NodeStore {
    pub nodes: Vec<NodeState>,
}

impl NodeStore {
    /// One resting node per entry of `homes`, in order.
    pub fn new(homes: &[Point], grid: &CellGrid) -> Self {
        let cell_count = grid.cell_count();
        let nodes = homes
            .iter()
            .enumerate()
            .map(|(i, &home)| NodeState::new(NodeId(i as u32), home, grid.cell_index(home), cell_count))
            .collect();
        Self { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> MobilityResult<&NodeState> {
        self.nodes.get(id.index()).ok_or(MobilityError::NodeNotFound(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> MobilityResult<&mut NodeState> {
        self.nodes.get_mut(id.index()).ok_or(MobilityError::NodeNotFound(id))
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len() as u32).map(NodeId)
    }
}

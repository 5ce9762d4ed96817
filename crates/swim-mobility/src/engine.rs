//! High-level mobility engine: the node state-transition handlers.

use swim_core::{JavaRng, NodeId, Point, SimTime, SwimConfig};
use swim_spatial::CellGrid;
use tracing::trace;

use crate::contact::{self, ContactPrediction};
use crate::{CellWeightModel, MobilityResult, MotionState, NodeStore};

/// Owns the grid, the node arena, and the motion parameters, and applies
/// the `START_MOVING` / `START_WAITING` transitions.
///
/// The engine never touches the event queue: handlers return the instant of
/// the follow-up event and the caller schedules it.  All randomness comes
/// from the caller's [`JavaRng`] so draw order is fixed by event order.
#[derive(Clone, Debug)]
pub struct MobilityEngine {
    pub grid: CellGrid,

    pub store: NodeStore,

    pub weights: CellWeightModel,

    /// Interaction radius on the unit square.
    pub radius: f64,

    pub speed_multiplier: f64,

    pub waiting_time_exponent: f64,

    pub waiting_time_upper_bound: f64,
}

impl MobilityEngine {
    /// Build the grid and place one resting node at each of `homes`.
    pub fn new(config: &SwimConfig, homes: &[Point]) -> MobilityResult<Self> {
        config.validate()?;
        let grid = CellGrid::new(config.node_radius)?;
        let store = NodeStore::new(homes, &grid);
        Ok(Self {
            weights: CellWeightModel::new(config.node_radius, homes.len(), config.cell_distance_weight),
            grid,
            store,
            radius:                   config.node_radius,
            speed_multiplier:         config.speed_multiplier,
            waiting_time_exponent:    config.waiting_time_exponent,
            waiting_time_upper_bound: config.waiting_time_upper_bound,
        })
    }

    /// Depart toward a freshly drawn destination.  Returns the arrival instant.
    ///
    /// Draws one value for the destination cell, then two for the point in it.
    pub fn start_moving(&mut self, id: NodeId, now: SimTime, rng: &mut JavaRng) -> MobilityResult<SimTime> {
        let node = self.store.get_mut(id)?;
        node.position = node.destination;
        node.position_time = now;

        let left = node.current_cell;
        let seen = std::mem::take(&mut node.seen_since_visit[left.index()]);
        self.weights.refresh(node, &self.grid, left, seen);

        let cell = self.weights.choose_destination_cell(node, rng);
        let destination = self.grid.random_point_in_cell(cell, rng);
        node.destination_cell = cell;
        node.destination = destination;
        node.state = MotionState::Moving;
        node.speed = node.position.distance(destination) * self.speed_multiplier;
        node.wait_time = 0.0;

        trace!(node = id.0, from = left.0, to = cell.0, speed = node.speed, "start moving");
        Ok(now + node.travel_time())
    }

    /// Settle at the trip's end for a power-law wait.  Returns the wake instant.
    pub fn start_waiting(&mut self, id: NodeId, now: SimTime, rng: &mut JavaRng) -> MobilityResult<SimTime> {
        let node = self.store.get_mut(id)?;
        let wait = power_law_wait(rng, self.waiting_time_exponent, self.waiting_time_upper_bound);
        node.position = node.destination;
        node.position_time = now;
        node.state = MotionState::Waiting;
        node.speed = 0.0;
        node.wait_time = wait;
        node.current_cell = node.destination_cell;

        trace!(node = id.0, cell = node.current_cell.0, wait, "start waiting");
        Ok(now + node.travel_time())
    }

    /// Bounded power law: `min((1 − u)^(1 / (1 − slope)), upper)`.
    pub fn draw_waiting_time(&self, rng: &mut JavaRng) -> f64 {
        power_law_wait(rng, self.waiting_time_exponent, self.waiting_time_upper_bound)
    }

    /// Check `id` against every other node, in ascending id order.
    pub fn predict_contacts(&self, id: NodeId, now: SimTime) -> MobilityResult<Vec<ContactPrediction>> {
        let node = self.store.get(id)?;
        Ok(self
            .store
            .nodes
            .iter()
            .filter(|other| other.id != id)
            .filter_map(|other| contact::predict_contact(node, other, self.radius, now))
            .collect())
    }

    /// Pairs `(i, j)`, `i < j`, whose ranges overlap at their fixed positions.
    pub fn overlapping_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let nodes = &self.store.nodes;
        let mut pairs = Vec::new();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if contact::circles_overlap(a.position, self.radius, b.position, self.radius) {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }

    /// Interpolated position of `id` at `t` on the unit square.
    pub fn position_at(&self, id: NodeId, t: SimTime) -> MobilityResult<Point> {
        Ok(self.store.get(id)?.position_at(t))
    }
}

fn power_law_wait(rng: &mut JavaRng, slope: f64, upper: f64) -> f64 {
    let u = rng.next_double();
    let t = (1.0 - u).powf(1.0 / (1.0 - slope));
    t.min(upper)
}

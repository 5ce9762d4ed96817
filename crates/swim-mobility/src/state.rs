//! Per-node motion state.

use swim_core::{CellId, NodeId, Point, SimTime};

/// Where a node is in its move / wait cycle.
///
/// `New` holds only until the node's first `START_WAITING`; afterwards the
/// node alternates between `Moving` and `Waiting` until the run stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MotionState {
    New,
    Moving,
    Waiting,
}

/// The complete state of one mobile node.
///
/// Between two fixes the node moves on the segment
/// `position → destination` at constant `speed`, starting at
/// `position_time`.  While not moving, `destination == position` and
/// `speed == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeState {
    pub id: NodeId,

    /// Fixed at creation; attracts destination choice.
    pub home: Point,

    /// Last fixed position, valid at `position_time`.
    pub position: Point,

    pub position_time: SimTime,

    /// End of the current trip.  Equals `position` when not moving.
    pub destination: Point,

    /// Zero unless `state == Moving`.
    pub speed: f64,

    /// Length of the current wait; zero unless `state == Waiting`.
    pub wait_time: f64,

    pub state: MotionState,

    pub current_cell: CellId,

    pub destination_cell: CellId,

    /// Per-cell accumulated sightings; never decreases.
    pub visit_counts: Vec<u64>,

    /// Per-cell sightings since the node last left that cell.  Folded into
    /// `visit_counts` and reset on departure.
    pub seen_since_visit: Vec<u64>,

    /// Cached per-cell scores, refreshed for a cell when the node leaves it.
    pub cell_weights: Vec<f64>,
}

impl NodeState {
    /// A freshly placed node resting at `home` at time zero.
    pub fn new(id: NodeId, home: Point, cell: CellId, cell_count: usize) -> Self {
        Self {
            id,
            home,
            position:         home,
            position_time:    SimTime::ZERO,
            destination:      home,
            speed:            0.0,
            wait_time:        0.0,
            state:            MotionState::New,
            current_cell:     cell,
            destination_cell: cell,
            visit_counts:     vec![0; cell_count],
            seen_since_visit: vec![0; cell_count],
            cell_weights:     vec![0.0; cell_count],
        }
    }

    /// Duration of the current segment (trip or wait) from `position_time`.
    pub fn travel_time(&self) -> f64 {
        match self.state {
            MotionState::Waiting => self.wait_time,
            MotionState::Moving if self.speed > 0.0 => {
                self.position.distance(self.destination) / self.speed
            }
            MotionState::Moving | MotionState::New => 0.0,
        }
    }

    /// Instant at which the current segment ends.
    #[inline]
    pub fn segment_end(&self) -> SimTime {
        self.position_time + self.travel_time()
    }

    /// Position at `t`, interpolated along the current trip.
    ///
    /// Times before the last fix return the fix; times past arrival return
    /// the destination.  The result is kept inside the unit square so float
    /// drift never leaks outside the area.
    pub fn position_at(&self, t: SimTime) -> Point {
        if t <= self.position_time {
            return self.position;
        }
        let offset = self.destination - self.position;
        let dist = offset.length();
        if dist == 0.0 || self.speed == 0.0 {
            return self.position;
        }
        let elapsed = t - self.position_time;
        if self.speed * elapsed >= dist {
            return self.destination;
        }
        let direction = offset / dist;
        (self.position + direction * self.speed * elapsed).clamp_unit()
    }
}

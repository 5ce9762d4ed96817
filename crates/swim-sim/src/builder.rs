//! Fluent builder for constructing a [`Sim`].

use swim_core::{JavaRng, Point, SimTime, SwimConfig, SwimError};
use swim_mobility::MobilityEngine;
use swim_schedule::{Event, EventKind, EventQueue};
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SwimConfig`] — node count, radius, durations, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.initial_positions(v)`  | Uniform draws from the run's RNG (x, y)   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .initial_positions(vec![Point::new(0.0, 0.0), Point::new(0.05, 0.0)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SwimConfig,
    positions: Option<Vec<Point>>,
}

impl SimBuilder {
    pub fn new(config: SwimConfig) -> Self {
        Self { config, positions: None }
    }

    /// Supply each node's home on the unit square (must be length
    /// `node_count`).  No RNG draws are spent on placement then.
    pub fn initial_positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place the nodes, and seed the event queue.
    ///
    /// The queue starts with a `MEET` at time zero for every pair already in
    /// range, followed by one `START_WAITING` per node in id order.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let node_count = self.config.node_count;
        let mut rng = JavaRng::new(self.config.rng_seed());

        // ── Resolve node homes ────────────────────────────────────────────
        let homes = match self.positions {
            Some(p) => {
                if p.len() != node_count {
                    return Err(SimError::NodeCountMismatch {
                        expected: node_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                if let Some(bad) = p.iter().find(|pt| !pt.in_unit_square()) {
                    return Err(SwimError::Config(format!("initial position {bad} outside the unit square")).into());
                }
                p
            }
            None => (0..node_count)
                .map(|_| {
                    let x = rng.next_double();
                    let y = rng.next_double();
                    Point::new(x, y)
                })
                .collect(),
        };

        let mobility = MobilityEngine::new(&self.config, &homes)?;

        // ── Seed the event queue ──────────────────────────────────────────
        let mut queue = EventQueue::new();
        let pairs = mobility.overlapping_pairs();
        debug!(pairs = pairs.len(), "initial contacts");
        for (a, b) in pairs {
            queue.push(Event::contact(EventKind::Meet, a, b, SimTime::ZERO));
        }
        for id in mobility.store.ids() {
            queue.push(Event::transition(EventKind::StartWaiting, id, SimTime::ZERO));
        }

        Ok(Sim {
            config: self.config,
            rng,
            queue,
            mobility,
            now: SimTime::ZERO,
            events_processed: 0,
            finished: false,
        })
    }
}

//! The `Sim` struct and its event loop.

use swim_core::{JavaRng, NodeId, Point, SimTime, SwimConfig};
use swim_mobility::MobilityEngine;
use swim_schedule::{Event, EventKind, EventQueue};
use tracing::{info, trace};

use crate::{SimObserver, SimResult, TraceRecord};

/// The simulation context: owns every piece of mutable run state.
///
/// Nothing outside this struct mutates nodes or the queue while a run is in
/// progress; handlers receive what they need through `&mut self`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (validated by the builder).
    pub config: SwimConfig,

    /// The single RNG stream.  Draw order follows event order.
    pub rng: JavaRng,

    /// Pending events, earliest first.
    pub queue: EventQueue,

    /// Node arena, grid, and transition handlers.
    pub mobility: MobilityEngine,

    /// Time of the last processed event.
    pub now: SimTime,

    pub events_processed: u64,

    pub(crate) finished: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process events until the queue is empty or the next event lies past
    /// `duration + ignore`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            nodes = self.mobility.store.len(),
            cells = self.mobility.grid.cell_count(),
            seed = self.config.seed,
            until = self.config.total_duration(),
            "simulation started"
        );
        while self.step(observer)?.is_some() {}
        info!(events = self.events_processed, last = self.now.secs(), "simulation finished");
        Ok(())
    }

    /// Process exactly one event and return it, or `None` once the run has
    /// ended.  Events past the end are discarded together with the rest of
    /// the queue.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        if self.finished {
            return Ok(None);
        }
        let Some(event) = self.queue.pop() else {
            self.finish(self.now, observer);
            return Ok(None);
        };
        if event.time.secs() > self.config.total_duration() {
            self.queue.clear();
            self.finish(event.time, observer);
            return Ok(None);
        }

        self.now = event.time;
        self.dispatch(&event)?;
        self.events_processed += 1;
        trace!(%event, "dispatched");

        observer.on_event(&event);
        self.emit_trace(&event, observer)?;
        Ok(Some(event))
    }

    /// `true` once the run has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Position of `node` at raw simulated time `t`, on the unit square.
    pub fn position_at(&self, node: NodeId, t: SimTime) -> SimResult<Point> {
        Ok(self.mobility.position_at(node, t)?)
    }

    /// Position of `node` at raw simulated time `t`, in area units.
    pub fn area_position_at(&self, node: NodeId, t: SimTime) -> SimResult<Point> {
        let p = self.position_at(node, t)?;
        Ok(Point::new(p.x * self.config.area_width, p.y * self.config.area_height))
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn dispatch(&mut self, event: &Event) -> SimResult<()> {
        let now = event.time;
        let node = event.primary;
        match event.kind {
            EventKind::StartMoving => {
                let arrival = self.mobility.start_moving(node, now, &mut self.rng)?;
                self.queue.push(Event::transition(EventKind::EndMoving, node, arrival));
                self.schedule_contacts(node, now)?;
            }
            EventKind::EndMoving => {
                self.queue.push(Event::transition(EventKind::StartWaiting, node, now));
            }
            EventKind::StartWaiting => {
                let wake = self.mobility.start_waiting(node, now, &mut self.rng)?;
                self.queue.push(Event::transition(EventKind::EndWaiting, node, wake));
                self.schedule_contacts(node, now)?;
            }
            EventKind::EndWaiting => {
                self.queue.push(Event::transition(EventKind::StartMoving, node, now));
            }
            // Contact boundaries only produce trace output.
            EventKind::Meet | EventKind::Leave => {}
        }
        Ok(())
    }

    /// Predict contacts of `node`'s new segment against every other node and
    /// queue the resulting `MEET` / `LEAVE` events.
    fn schedule_contacts(&mut self, node: NodeId, now: SimTime) -> SimResult<()> {
        for p in self.mobility.predict_contacts(node, now)? {
            if let Some(t) = p.meet {
                trace!(a = p.node.0, b = p.other.0, at = t.secs(), "meet scheduled");
                self.queue.push(Event::contact(EventKind::Meet, p.node, p.other, t));
            }
            if let Some(t) = p.leave {
                trace!(a = p.node.0, b = p.other.0, at = t.secs(), "leave scheduled");
                self.queue.push(Event::contact(EventKind::Leave, p.node, p.other, t));
            }
        }
        Ok(())
    }

    /// One record per node the event concerns, unless still warming up.
    fn emit_trace<O: SimObserver>(&self, event: &Event, observer: &mut O) -> SimResult<()> {
        let ignore = self.config.ignore;
        if event.time.secs() < ignore {
            return Ok(());
        }
        let time = event.time.secs() - ignore;
        for node in event.nodes() {
            let p = self.area_position_at(node, event.time)?;
            observer.on_trace(&TraceRecord { time, node, x: p.x, y: p.y });
        }
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, final_time: SimTime, observer: &mut O) {
        self.finished = true;
        observer.on_sim_end(final_time);
    }
}

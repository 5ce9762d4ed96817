//! Simulation events.

use std::fmt;

use swim_core::{NodeId, SimTime};

/// What happens at an event's instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    StartMoving,
    EndMoving,
    StartWaiting,
    EndWaiting,
    /// Two interaction ranges start to overlap.
    Meet,
    /// Two interaction ranges stop overlapping.
    Leave,
}

impl EventKind {
    /// `true` for the pairwise contact notifications.
    #[inline]
    pub fn is_contact(self) -> bool {
        matches!(self, EventKind::Meet | EventKind::Leave)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::StartMoving  => "START_MOVING",
            EventKind::EndMoving    => "END_MOVING",
            EventKind::StartWaiting => "START_WAITING",
            EventKind::EndWaiting   => "END_WAITING",
            EventKind::Meet         => "MEET",
            EventKind::Leave        => "LEAVE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable scheduled occurrence.
///
/// `secondary` is set only for [`EventKind::Meet`] and [`EventKind::Leave`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub kind:      EventKind,
    pub primary:   NodeId,
    pub secondary: Option<NodeId>,
    pub time:      SimTime,
}

impl Event {
    /// A single-node state-transition event.
    #[inline]
    pub fn transition(kind: EventKind, node: NodeId, time: SimTime) -> Self {
        debug_assert!(!kind.is_contact());
        Self { kind, primary: node, secondary: None, time }
    }

    /// A pairwise contact event.
    #[inline]
    pub fn contact(kind: EventKind, first: NodeId, second: NodeId, time: SimTime) -> Self {
        debug_assert!(kind.is_contact());
        Self { kind, primary: first, secondary: Some(second), time }
    }

    /// Every node this event concerns, primary first.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + use<> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(other) => write!(f, "{} {} {}-{}", self.time, self.kind, self.primary.0, other.0),
            None        => write!(f, "{} {} {}", self.time, self.kind, self.primary.0),
        }
    }
}

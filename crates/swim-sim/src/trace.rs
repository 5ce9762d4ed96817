//! Trace records produced by the driver.

use swim_core::NodeId;

/// One node position sample, emitted after every processed event.
///
/// `time` is measured from the end of the warm-up period; `x` and `y` are
/// in area units, not on the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    pub time: f64,
    pub node: NodeId,
    pub x:    f64,
    pub y:    f64,
}

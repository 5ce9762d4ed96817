//! Exact contact prediction between two linearly moving circular ranges.
//!
//! # Method
//!
//! Over a common time window both nodes move on straight segments.  In B's
//! frame, A is a point travelling along `rel = (endA − startA) − (endB − startB)`
//! from `startA`, and contact means that point is inside the circle of radius
//! `rA + rB` around `startB`.  Projecting the circle center on the line and
//! offsetting by `√(R² − dist²)` gives the entry and exit distances; dividing
//! by `|rel|` turns them into fractions of the window.
//!
//! A fraction is reported only if it lies in `[0, 1]`; tangency
//! (`dist == R`) counts as contact and yields a MEET and a LEAVE at the same
//! instant.  A window that starts inside the circle reports only its exit.

use swim_core::{NodeId, Point, SimTime};

use crate::NodeState;

/// A straight path covered during the common time window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end:   Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A node resting at `p` for the whole window.
    #[inline]
    pub fn stationary(p: Point) -> Self {
        Self { start: p, end: p }
    }

    #[inline]
    pub fn displacement(self) -> Point {
        self.end - self.start
    }
}

/// Entry / exit fractions of the window, each in `[0, 1]` when present.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContactFractions {
    pub meet:  Option<f64>,
    pub leave: Option<f64>,
}

impl ContactFractions {
    pub const NONE: ContactFractions = ContactFractions { meet: None, leave: None };

    #[inline]
    pub fn is_none(&self) -> bool {
        self.meet.is_none() && self.leave.is_none()
    }
}

/// Absolute MEET / LEAVE instants predicted for the pair `(node, other)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPrediction {
    pub node:  NodeId,
    pub other: NodeId,
    pub meet:  Option<SimTime>,
    pub leave: Option<SimTime>,
}

/// `true` if two static circles strictly overlap.
#[inline]
pub fn circles_overlap(a: Point, ra: f64, b: Point, rb: f64) -> bool {
    let v = b - a;
    let radii = ra + rb;
    v.dot(v) < radii * radii
}

/// Broad phase: do the boxes swept by the two circles intersect?
///
/// Touching boxes count as intersecting.
pub fn swept_boxes_overlap(a: Segment, ra: f64, b: Segment, rb: f64) -> bool {
    let pad_a = Point::new(ra, ra);
    let pad_b = Point::new(rb, rb);
    let min_a = a.start.min(a.end) - pad_a;
    let max_a = a.start.max(a.end) + pad_a;
    let min_b = b.start.min(b.end) - pad_b;
    let max_b = b.start.max(b.end) + pad_b;
    !(max_a.x < min_b.x || min_a.x > max_b.x || max_a.y < min_b.y || min_a.y > max_b.y)
}

/// Crossing points of the segment `start → end` with a circle.
///
/// `None` if the segment is degenerate or its line misses the circle;
/// otherwise each point is present only if it lies on the segment.
fn line_circle(start: Point, end: Point, center: Point, radius: f64) -> Option<(Option<Point>, Option<Point>)> {
    let offset = end - start;
    let length = offset.length();
    if length == 0.0 {
        return None;
    }
    let dir = offset / length;
    let proj_len = dir.dot(center - start);
    let proj_pt = start + dir * proj_len;
    let dist = proj_pt.distance(center);
    if dist > radius {
        return None;
    }
    let half_chord = (radius * radius - dist * dist).sqrt();
    let d_enter = proj_len - half_chord;
    let d_exit = proj_len + half_chord;
    let on_segment = |d: f64| (0.0..=length).contains(&d);
    let enter = on_segment(d_enter).then(|| start + dir * d_enter);
    let exit = on_segment(d_exit).then(|| start + dir * d_exit);
    Some((enter, exit))
}

/// Narrow phase: MEET / LEAVE fractions for two circles moving along
/// `a` and `b` over the same window.
pub fn moving_circles(a: Segment, ra: f64, b: Segment, rb: f64) -> ContactFractions {
    if !swept_boxes_overlap(a, ra, b, rb) {
        return ContactFractions::NONE;
    }

    let rel = a.displacement() - b.displacement();
    let length = rel.length();
    if length == 0.0 {
        // Same velocity: the separation never changes.
        return if a.start.distance(b.start) < ra + rb {
            ContactFractions { meet: Some(0.0), leave: Some(1.0) }
        } else {
            ContactFractions::NONE
        };
    }

    let line_start = a.start;
    let line_end = a.start + rel;
    let Some((enter, exit)) = line_circle(line_start, line_end, b.start, ra + rb) else {
        return ContactFractions::NONE;
    };
    ContactFractions {
        meet:  enter.map(|p| p.distance(line_start) / length),
        leave: exit.map(|p| p.distance(line_start) / length),
    }
}

/// Predict contact between `a` and `b` over the window where both have a
/// defined motion segment, using `now` as the window's time origin.
///
/// Returns `None` when the windows do not overlap or no boundary falls
/// inside the common window.
pub fn predict_contact(a: &NodeState, b: &NodeState, radius: f64, now: SimTime) -> Option<ContactPrediction> {
    let t_start = a.position_time.max(b.position_time);
    let t_end = a.segment_end().min(b.segment_end());
    if t_end <= t_start {
        return None;
    }

    let seg_a = Segment::new(a.position_at(t_start), a.position_at(t_end));
    let seg_b = Segment::new(b.position_at(t_start), b.position_at(t_end));
    let fractions = moving_circles(seg_a, radius, seg_b, radius);
    if fractions.is_none() {
        return None;
    }

    let window = t_end - t_start;
    Some(ContactPrediction {
        node:  a.id,
        other: b.id,
        meet:  fractions.meet.map(|f| now + f * window),
        leave: fractions.leave.map(|f| now + f * window),
    })
}

//! Run configuration for the social-attraction mobility engine.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature enabled) and passed to the simulation builder.  The serde
//! field names accept the short JSON keys (`nn`, `nodeRadius`, …).

use crate::{SwimError, SwimResult};

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwimConfig {
    /// Width of the simulated area.  Trace x coordinates are scaled by this.
    #[cfg_attr(feature = "serde", serde(rename = "x"))]
    pub area_width: f64,

    /// Height of the simulated area.  Trace y coordinates are scaled by this.
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    pub area_height: f64,

    /// Number of mobile nodes `N`.
    #[cfg_attr(feature = "serde", serde(rename = "nn"))]
    pub node_count: usize,

    /// Interaction radius `r` on the normalized unit square.
    #[cfg_attr(feature = "serde", serde(rename = "nodeRadius"))]
    pub node_radius: f64,

    /// Simulated seconds recorded after the warm-up period.
    pub duration: f64,

    /// Warm-up period whose events are simulated but not traced.
    pub ignore: f64,

    /// Master RNG seed.  The same seed always produces an identical trace.
    #[cfg_attr(feature = "serde", serde(rename = "randomSeed"))]
    pub seed: i64,

    /// Blend between home attraction (1.0) and novelty (0.0).
    #[cfg_attr(feature = "serde", serde(rename = "cellDistanceWeight"))]
    pub cell_distance_weight: f64,

    /// Speed = trip length × multiplier, so every trip lasts `1 / multiplier`.
    #[cfg_attr(feature = "serde", serde(rename = "nodeSpeedMultiplier"))]
    pub speed_multiplier: f64,

    /// Slope of the power-law waiting-time distribution.  Must not be 1.
    #[cfg_attr(feature = "serde", serde(rename = "waitingTimeExponent"))]
    pub waiting_time_exponent: f64,

    /// Waiting times are truncated to this bound.
    #[cfg_attr(feature = "serde", serde(rename = "waitingTimeUpperBound"))]
    pub waiting_time_upper_bound: f64,
}

impl Default for SwimConfig {
    fn default() -> Self {
        Self {
            area_width:               1.0,
            area_height:              1.0,
            node_count:               20,
            node_radius:              0.1,
            duration:                 1_000.0,
            ignore:                   0.0,
            seed:                     0,
            cell_distance_weight:     0.5,
            speed_multiplier:         1.0,
            waiting_time_exponent:    1.45,
            waiting_time_upper_bound: 100.0,
        }
    }
}

impl SwimConfig {
    /// The instant at which the run stops: `duration + ignore`.
    #[inline]
    pub fn total_duration(&self) -> f64 {
        self.duration + self.ignore
    }

    /// Seed reinterpreted for the generator.  Only meaningful after
    /// [`validate`](Self::validate) has rejected negative seeds.
    #[inline]
    pub fn rng_seed(&self) -> u64 {
        self.seed as u64
    }

    /// Reject structurally invalid configurations.
    ///
    /// Reports the first violation found; nothing is partially constructed.
    pub fn validate(&self) -> SwimResult<()> {
        fn fail(msg: String) -> SwimResult<()> {
            Err(SwimError::Config(msg))
        }

        if self.node_count == 0 {
            return fail("node count must be positive".into());
        }
        if !(self.node_radius.is_finite() && self.node_radius > 0.0) {
            return fail(format!("interaction radius must be positive, got {}", self.node_radius));
        }
        if 1.0 - self.waiting_time_exponent == 0.0 {
            return fail("waiting-time exponent of 1 leaves the power law undefined".into());
        }
        if !self.waiting_time_exponent.is_finite() {
            return fail(format!("waiting-time exponent must be finite, got {}", self.waiting_time_exponent));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return fail(format!("duration must be non-negative, got {}", self.duration));
        }
        if !(self.ignore.is_finite() && self.ignore >= 0.0) {
            return fail(format!("warm-up period must be non-negative, got {}", self.ignore));
        }
        if self.seed < 0 {
            return fail(format!("seed must be non-negative, got {}", self.seed));
        }
        if !(self.area_width > 0.0 && self.area_height > 0.0) {
            return fail(format!(
                "area must have positive size, got {} x {}",
                self.area_width, self.area_height
            ));
        }
        if !(0.0..=1.0).contains(&self.cell_distance_weight) {
            return fail(format!(
                "cell distance weight must lie in [0, 1], got {}",
                self.cell_distance_weight
            ));
        }
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier > 0.0) {
            return fail(format!("speed multiplier must be positive, got {}", self.speed_multiplier));
        }
        if self.waiting_time_upper_bound.is_nan() || self.waiting_time_upper_bound <= 0.0 {
            return fail(format!(
                "waiting-time upper bound must be positive, got {}",
                self.waiting_time_upper_bound
            ));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod interpreter;
pub mod sectors;

pub use interpreter::{GestureInterpreter, PointerSample, RotationDirection, WheelEvent};
pub use sectors::{Sector, locate};

pub const BASE_SLOP: f64 = 12.0; // movement before a drag counts as rotation
pub const QUICK_SLOP_FACTOR: f64 = 2.0; // a flick past this commits without waiting
pub const INTENT_DELAY_MS: u64 = 150;
pub const MENU_STEP_DEGREES: f64 = 30.0;
pub const SEEK_STEP_DEGREES: f64 = 15.0; // finer ticks while scrubbing
pub const SEEK_FRACTION_PER_STEP: f64 = 0.05;
pub const BUTTON_BAND_INNER_RATIO: f64 = 0.55;
pub const BUTTON_BAND_OUTER_RATIO: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl WheelGeometry {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn distance_from_center(&self, p: Point) -> f64 {
        let (dx, dy) = (p.x - self.center.x, p.y - self.center.y);
        dx.hypot(dy)
    }

    /// Angle of `p` around the center in degrees, normalized to `[0, 360)`.
    /// 0° points along +x; screen coordinates make the angle grow clockwise.
    pub fn angle_degrees(&self, p: Point) -> f64 {
        let (dx, dy) = (p.x - self.center.x, p.y - self.center.y);
        normalize_degrees(dy.atan2(dx).to_degrees())
    }
}

pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Shortest signed delta between two normalized angles, in `(-180, 180]`.
/// A drag crossing the 0°/360° seam (e.g. 350° → 10°) yields +20, not -340.
pub fn wrap_delta(delta: f64) -> f64 {
    if delta.abs() > 180.0 {
        delta - 360.0 * delta.signum()
    } else {
        delta
    }
}

/// Thresholds driving gesture classification. All distances are in the same
/// units as the pointer samples (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelTuning {
    pub base_slop: f64,
    pub quick_slop_factor: f64,
    pub intent_delay_ms: u64,
    pub menu_step_degrees: f64,
    pub seek_step_degrees: f64,
    pub seek_fraction_per_step: f64,
    pub band_inner_ratio: f64,
    pub band_outer_ratio: f64,
}

impl Default for WheelTuning {
    fn default() -> Self {
        Self {
            base_slop: BASE_SLOP,
            quick_slop_factor: QUICK_SLOP_FACTOR,
            intent_delay_ms: INTENT_DELAY_MS,
            menu_step_degrees: MENU_STEP_DEGREES,
            seek_step_degrees: SEEK_STEP_DEGREES,
            seek_fraction_per_step: SEEK_FRACTION_PER_STEP,
            band_inner_ratio: BUTTON_BAND_INNER_RATIO,
            band_outer_ratio: BUTTON_BAND_OUTER_RATIO,
        }
    }
}

impl WheelTuning {
    pub fn quick_slop(&self) -> f64 {
        self.base_slop * self.quick_slop_factor
    }

    pub fn intent_delay(&self) -> Duration {
        Duration::from_millis(self.intent_delay_ms)
    }
}

//! Pitch geometry and distance helpers
//!
//! 모든 좌표는 미터 단위 `(x, y)`.
//! - x: 0 = left touchline, width = right touchline
//! - y: 0 = team 0 goal line, length = team 1 goal line

use serde::{Deserialize, Serialize};

use super::physics_constants::field;

/// Position in meters `(x, y)`
pub type MeterPos = (f32, f32);

/// Rectangular playing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub width: f32,
    pub length: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self { width: field::DEFAULT_WIDTH_M, length: field::DEFAULT_LENGTH_M }
    }
}

impl Pitch {
    pub fn new(width: f32, length: f32) -> Self {
        Self { width, length }
    }

    pub fn center(&self) -> MeterPos {
        (self.width / 2.0, self.length / 2.0)
    }

    pub fn half_line(&self) -> f32 {
        self.length / 2.0
    }

    /// Inclusive bounds check
    pub fn contains(&self, pos: MeterPos) -> bool {
        (0.0..=self.width).contains(&pos.0) && (0.0..=self.length).contains(&pos.1)
    }

    pub fn clamp(&self, pos: MeterPos) -> MeterPos {
        (pos.0.clamp(0.0, self.width), pos.1.clamp(0.0, self.length))
    }

    /// Clamp with an inner margin. Falls back to the pitch center on an axis
    /// narrower than twice the margin.
    pub fn clamp_inset(&self, pos: MeterPos, margin: f32) -> MeterPos {
        let x = if self.width > 2.0 * margin {
            pos.0.clamp(margin, self.width - margin)
        } else {
            self.width / 2.0
        };
        let y = if self.length > 2.0 * margin {
            pos.1.clamp(margin, self.length - margin)
        } else {
            self.length / 2.0
        };
        (x, y)
    }

    /// `"34x52m"`
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}m", self.width, self.length)
    }
}

pub fn distance_m(a: MeterPos, b: MeterPos) -> f32 {
    distance_squared_m(a, b).sqrt()
}

pub fn distance_squared_m(a: MeterPos, b: MeterPos) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

pub fn manhattan_m(a: MeterPos, b: MeterPos) -> f32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

pub fn magnitude(v: (f32, f32)) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

/// Unit vector, or `(0, 0)` for a zero-length input
pub fn normalize_vec(v: (f32, f32)) -> (f32, f32) {
    let mag = magnitude(v);
    if mag > f32::EPSILON {
        (v.0 / mag, v.1 / mag)
    } else {
        (0.0, 0.0)
    }
}

//! Dribble profile
//!
//! `{name: {distance, duration, weight}}` JSON. 드리블 후보 거리는 여기서 나온다.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// 드리블 한 번의 최대 거리 (m)
pub const MAX_DRIBBLE_DISTANCE_M: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DribbleBand {
    pub distance: f32,
    pub duration: f32,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DribbleProfile {
    pub bands: BTreeMap<String, DribbleBand>,
}

impl Default for DribbleProfile {
    fn default() -> Self {
        let mut bands = BTreeMap::new();
        bands.insert(
            "short_dribble".to_string(),
            DribbleBand { distance: 2.0, duration: 1.0, weight: 0.7 },
        );
        bands.insert(
            "medium_dribble".to_string(),
            DribbleBand { distance: 4.0, duration: 2.0, weight: 0.2 },
        );
        bands.insert(
            "long_dribble".to_string(),
            DribbleBand { distance: 6.0, duration: 3.0, weight: 0.1 },
        );
        Self { bands }
    }
}

impl DribbleProfile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        if profile.distances().is_empty() {
            return Err(SimError::InvalidDribbleProfile(
                "no positive distance".to_string(),
            ));
        }
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Sorted, deduplicated, capped at [`MAX_DRIBBLE_DISTANCE_M`]; non-positive dropped.
    pub fn distances(&self) -> Vec<f32> {
        let mut out: Vec<f32> = self
            .bands
            .values()
            .map(|b| b.distance)
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d.min(MAX_DRIBBLE_DISTANCE_M))
            .collect();
        out.sort_by(|a, b| a.total_cmp(b));
        out.dedup();
        out
    }
}

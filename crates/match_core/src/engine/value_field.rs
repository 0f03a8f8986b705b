//! Spatial value field (expected threat grid)
//!
//! 경기장을 `cols × rows` 격자로 나누고 각 셀에 [0, 1] 값을 둔다.
//! 격자는 team 0 공격 방향 기준이며, team 1은 `value_for`에서 y를 뒤집어 읽는다.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::coordinates::{MeterPos, Pitch};
use super::player::Team;
use crate::error::{Result, SimError};

/// synthetic 필드의 penalty-area 보너스
const PENALTY_AREA_BONUS: f32 = 0.3;
/// 중앙에서 가장 먼 열의 감소율
const CENTRAL_FALLOFF: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSource {
    Synthetic,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueField {
    pitch: Pitch,
    cols: usize,
    rows: usize,
    /// row-major: `gy * cols + gx`
    values: Vec<f32>,
    source: FieldSource,
}

impl ValueField {
    /// Gradient toward the attacking end with a central bonus and a
    /// penalty-area boost in the last quarter.
    pub fn synthetic(pitch: Pitch, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut values = vec![0.0; cols * rows];
        let half = cols as f32 / 2.0;

        for gy in 0..rows {
            for gx in 0..cols {
                let mut base = gy as f32 / rows as f32;
                let central = 1.0 - (gx as f32 - half).abs() / half * CENTRAL_FALLOFF;
                if gy >= rows * 3 / 4 && gx >= cols / 4 && gx <= cols * 3 / 4 {
                    base += PENALTY_AREA_BONUS;
                }
                values[gy * cols + gx] = (base * central).clamp(0.0, 1.0);
            }
        }

        Self { pitch, cols, rows, values, source: FieldSource::Synthetic }
    }

    /// `"gx_gy" -> value` 매핑. 없는 셀은 0.0, 격자 밖 키는 무시.
    pub fn from_lookup(pitch: Pitch, cols: usize, rows: usize, lookup: &BTreeMap<String, f64>) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut values = vec![0.0; cols * rows];
        let mut ignored = 0usize;

        for (key, value) in lookup {
            match parse_cell_key(key) {
                Some((gx, gy)) if gx < cols && gy < rows => {
                    let v = if value.is_finite() { *value as f32 } else { 0.0 };
                    values[gy * cols + gx] = v.clamp(0.0, 1.0);
                }
                _ => {
                    ignored += 1;
                    warn!(key = %key, "value field key outside {}x{} grid, ignored", cols, rows);
                }
            }
        }
        debug!(cells = lookup.len() - ignored, ignored, "external value field loaded");

        Self { pitch, cols, rows, values, source: FieldSource::External }
    }

    pub fn from_json_str(pitch: Pitch, cols: usize, rows: usize, json: &str) -> Result<Self> {
        let lookup: BTreeMap<String, f64> = serde_json::from_str(json)?;
        if lookup.is_empty() {
            return Err(SimError::InvalidValueField("lookup is empty".to_string()));
        }
        Ok(Self::from_lookup(pitch, cols, rows, &lookup))
    }

    pub fn load(path: &Path, pitch: Pitch, cols: usize, rows: usize) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(pitch, cols, rows, &json)
    }

    /// 로드 실패 시 synthetic으로 fallback
    pub fn load_or_synthetic(path: Option<&Path>, pitch: Pitch, cols: usize, rows: usize) -> Self {
        let Some(path) = path else {
            return Self::synthetic(pitch, cols, rows);
        };
        match Self::load(path, pitch, cols, rows) {
            Ok(field) => field,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "value field unavailable, using synthetic");
                Self::synthetic(pitch, cols, rows)
            }
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn source(&self) -> FieldSource {
        self.source
    }

    /// Clamped linear scaling into the grid
    pub fn cell_of(&self, x: f32, y: f32) -> (usize, usize) {
        (
            scale_to_cell(x, self.pitch.width, self.cols),
            scale_to_cell(y, self.pitch.length, self.rows),
        )
    }

    /// 0.0 outside the grid
    pub fn cell(&self, gx: usize, gy: usize) -> f32 {
        if gx < self.cols && gy < self.rows {
            self.values[gy * self.cols + gx]
        } else {
            0.0
        }
    }

    /// Raw value in team 0's attacking frame
    pub fn value_at(&self, x: f32, y: f32) -> f32 {
        let (gx, gy) = self.cell_of(x, y);
        self.cell(gx, gy)
    }

    /// `team`이 공격하는 방향 기준 값
    pub fn value_for(&self, team: Team, pos: MeterPos) -> f32 {
        if team.attacks_positive_y() {
            self.value_at(pos.0, pos.1)
        } else {
            self.value_at(pos.0, self.pitch.length - pos.1)
        }
    }

    /// `value(to) - value(from)` for `team`
    pub fn delta_for(&self, team: Team, from: MeterPos, to: MeterPos) -> f32 {
        self.value_for(team, to) - self.value_for(team, from)
    }
}

fn scale_to_cell(v: f32, extent: f32, cells: usize) -> usize {
    if !(v.is_finite() && extent > 0.0) {
        return 0;
    }
    let idx = (v / extent * cells as f32).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(cells - 1)
    }
}

fn parse_cell_key(key: &str) -> Option<(usize, usize)> {
    let (gx, gy) = key.split_once('_')?;
    Some((gx.trim().parse().ok()?, gy.trim().parse().ok()?))
}

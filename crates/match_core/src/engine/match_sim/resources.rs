//! Shared read-only match resources
//!
//! 여러 경기가 공유하는 value field와 드리블 거리 목록.
//! realism level에 따라 synthetic 또는 외부 데이터를 로드한다.

use std::sync::Arc;

use tracing::{info, warn};

use crate::engine::config::{DribbleProfile, MatchConfig, RealismLevel};
use crate::engine::value_field::ValueField;

#[derive(Debug, Clone)]
pub struct MatchResources {
    pub field: Arc<ValueField>,
    pub dribble_distances: Arc<[f32]>,
}

impl MatchResources {
    /// toy: synthetic + 기본 프로필 / empirical: 파일 로드, 실패 시 fallback
    pub fn load(config: &MatchConfig) -> Self {
        let pitch = config.pitch();
        let field = match config.realism_level {
            RealismLevel::Toy => ValueField::synthetic(pitch, config.grid.cols, config.grid.rows),
            RealismLevel::Empirical => ValueField::load_or_synthetic(
                config.data.xt_lookup.as_deref(),
                pitch,
                config.grid.cols,
                config.grid.rows,
            ),
        };
        Self::with_field(config, Arc::new(field))
    }

    /// 이미 만들어진 field를 공유하고 드리블 프로필만 로드
    pub fn with_field(config: &MatchConfig, field: Arc<ValueField>) -> Self {
        let profile = match (config.realism_level, config.data.dribble_profile.as_deref()) {
            (RealismLevel::Empirical, Some(path)) => DribbleProfile::load(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "dribble profile unavailable, using defaults");
                DribbleProfile::default()
            }),
            _ => DribbleProfile::default(),
        };
        let dribble_distances: Arc<[f32]> = profile.distances().into();
        info!(
            realism = config.realism_level.as_str(),
            field = ?field.source(),
            dribble_distances = ?dribble_distances,
            "match resources ready"
        );
        Self { field, dribble_distances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::value_field::FieldSource;
    use std::fs;

    #[test]
    fn test_toy_is_synthetic() {
        let res = MatchResources::load(&MatchConfig::default());
        assert_eq!(res.field.source(), FieldSource::Synthetic);
        assert_eq!(&*res.dribble_distances, &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_empirical_loads_files() {
        let dir = tempfile::tempdir().unwrap();
        let xt = dir.path().join("xt.json");
        let dribble = dir.path().join("dribble.json");
        fs::write(&xt, r#"{"6_7": 0.9, "6_4": 0.3}"#).unwrap();
        fs::write(&dribble, r#"{"only": {"distance": 3.0, "duration": 1.0, "weight": 1.0}}"#).unwrap();

        let mut cfg = MatchConfig::default();
        cfg.realism_level = RealismLevel::Empirical;
        cfg.data.xt_lookup = Some(xt);
        cfg.data.dribble_profile = Some(dribble);

        let res = MatchResources::load(&cfg);
        assert_eq!(res.field.source(), FieldSource::External);
        assert_eq!(res.field.cell(6, 7), 0.9);
        assert_eq!(&*res.dribble_distances, &[3.0]);
    }

    #[test]
    fn test_empirical_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = MatchConfig::default();
        cfg.realism_level = RealismLevel::Empirical;
        cfg.data.xt_lookup = Some(dir.path().join("nope.json"));
        cfg.data.dribble_profile = Some(dir.path().join("nope2.json"));

        let res = MatchResources::load(&cfg);
        assert_eq!(res.field.source(), FieldSource::Synthetic);
        assert_eq!(&*res.dribble_distances, &[2.0, 4.0, 6.0]);
    }
}

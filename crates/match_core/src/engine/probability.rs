//! Probability calculation utilities for match simulation
//!
//! All functions are pure - they take state as input and return probabilities.

use super::actions::ActionKind;
use super::config::DecisionConfig;
use super::coordinates::{distance_m, MeterPos};
use super::player::Skills;

/// 수비 압박 = `max(0, 1 - nearest / range)`. 상대가 없으면 0.
pub fn pressure<I>(position: MeterPos, opponents: I, range_m: f32) -> f32
where
    I: IntoIterator<Item = MeterPos>,
{
    let nearest = opponents.into_iter().map(|o| distance_m(position, o)).reduce(f32::min);
    match nearest {
        Some(d) if range_m > 0.0 => (1.0 - d / range_m).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// 행동 종류별 기본 성공률
pub fn base_rate(kind: ActionKind, skills: &Skills, cfg: &DecisionConfig) -> f32 {
    match kind {
        ActionKind::Pass => skills.passing_accuracy,
        ActionKind::Dribble => skills.dribble_skill,
        ActionKind::Shoot => cfg.shoot_base_rate,
        ActionKind::Clear => cfg.clear_base_rate,
    }
}

/// 성공 확률 = base × fatigue × pressure (× pass distance), `[floor, ceiling]`로 clamp
///
/// - fatigue: 스태미나 0일 때 최대 30% 감소
/// - pressure: 최대 20% 감소
pub fn success_probability(
    kind: ActionKind,
    skills: &Skills,
    stamina_ratio: f32,
    pressure: f32,
    cfg: &DecisionConfig,
) -> f32 {
    let stamina_ratio = stamina_ratio.clamp(0.0, 1.0);
    let pressure = pressure.clamp(0.0, 1.0);

    let fatigue_factor = 1.0 - (1.0 - stamina_ratio) * cfg.fatigue_penalty_max;
    let pressure_factor = 1.0 - pressure * cfg.pressure_penalty_max;
    let distance_factor = if kind == ActionKind::Pass { cfg.pass_distance_factor } else { 1.0 };

    let p = base_rate(kind, skills, cfg) * fatigue_factor * pressure_factor * distance_factor;
    if p.is_nan() {
        return cfg.probability_floor;
    }
    p.clamp(cfg.probability_floor, cfg.probability_ceiling)
}

/// epsilon = `min(cap, base + w_p·pressure + w_f·fatigue)`
pub fn exploration_rate(pressure: f32, fatigue: f32, cfg: &DecisionConfig) -> f64 {
    let eps = cfg.epsilon_base
        + cfg.epsilon_pressure_weight * pressure.clamp(0.0, 1.0) as f64
        + cfg.epsilon_fatigue_weight * fatigue.clamp(0.0, 1.0) as f64;
    eps.clamp(0.0, cfg.epsilon_cap)
}

//! Decision Configuration
//!
//! EV 기반 행동 선택 + epsilon-greedy 탐색 파라미터.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    // === Exploration ===
    /// 기본 탐색률 (기본: 0.15)
    pub epsilon_base: f64,
    /// 압박 가중치 (기본: 0.10)
    pub epsilon_pressure_weight: f64,
    /// 피로 가중치 (기본: 0.05)
    pub epsilon_fatigue_weight: f64,
    /// 탐색률 상한 (기본: 0.40)
    pub epsilon_cap: f64,

    /// 압박 계산 반경 m (기본: 10.0)
    pub pressure_range_m: f32,

    // === Legal pass range ===
    pub pass_range_min_m: f32,
    pub pass_range_max_m: f32,

    // === Success probability ===
    pub shoot_base_rate: f32,
    pub clear_base_rate: f32,
    /// 패스 고정 거리 보정 (기본: 0.9)
    pub pass_distance_factor: f32,
    /// 완전 탈진 시 성공률 감소 (기본: 0.3)
    pub fatigue_penalty_max: f32,
    /// 최대 압박 시 성공률 감소 (기본: 0.2)
    pub pressure_penalty_max: f32,
    pub probability_floor: f32,
    pub probability_ceiling: f32,

    // === Failure penalty (EV) ===
    pub pass_failure_penalty: f32,
    pub dribble_failure_penalty: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            epsilon_base: 0.15,
            epsilon_pressure_weight: 0.10,
            epsilon_fatigue_weight: 0.05,
            epsilon_cap: 0.40,
            pressure_range_m: 10.0,
            pass_range_min_m: 1.0,
            pass_range_max_m: 40.0,
            shoot_base_rate: 0.3,
            clear_base_rate: 0.9,
            pass_distance_factor: 0.9,
            fatigue_penalty_max: 0.3,
            pressure_penalty_max: 0.2,
            probability_floor: 0.05,
            probability_ceiling: 0.95,
            pass_failure_penalty: -0.1,
            dribble_failure_penalty: -0.15,
        }
    }
}

impl DecisionConfig {
    /// 테스트용: 탐색 없이 항상 최고 EV 선택
    pub fn greedy() -> Self {
        Self {
            epsilon_base: 0.0,
            epsilon_pressure_weight: 0.0,
            epsilon_fatigue_weight: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.epsilon_cap) {
            return Err(format!("decision.epsilon_cap must be 0.0-1.0, got {}", self.epsilon_cap));
        }
        if self.epsilon_base < 0.0 {
            return Err(format!("decision.epsilon_base must be >= 0, got {}", self.epsilon_base));
        }
        if self.pressure_range_m <= 0.0 {
            return Err(format!(
                "decision.pressure_range_m must be positive, got {}",
                self.pressure_range_m
            ));
        }
        if self.pass_range_min_m > self.pass_range_max_m {
            return Err(format!(
                "decision.pass_range_min_m ({}) exceeds pass_range_max_m ({})",
                self.pass_range_min_m, self.pass_range_max_m
            ));
        }
        if !(0.0..=1.0).contains(&self.probability_floor)
            || !(0.0..=1.0).contains(&self.probability_ceiling)
            || self.probability_floor > self.probability_ceiling
        {
            return Err(format!(
                "decision probability bounds invalid: floor={}, ceiling={}",
                self.probability_floor, self.probability_ceiling
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_has_no_exploration() {
        let cfg = DecisionConfig::greedy();
        assert_eq!(cfg.epsilon_base, 0.0);
        assert_eq!(cfg.epsilon_cap, DecisionConfig::default().epsilon_cap);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_inverted_probability_bounds_rejected() {
        let cfg = DecisionConfig { probability_floor: 0.9, probability_ceiling: 0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}

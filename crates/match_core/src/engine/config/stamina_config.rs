//! Stamina Configuration

use serde::{Deserialize, Serialize};

/// Stamina 시스템 파라미터 (per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// 최대 스태미나 (기본: 100)
    pub max_stamina: f32,
    /// 스태미나 100%일 때 최고 속도 m/s (기본: 7.0)
    pub max_speed: f32,

    // === Decay ===
    /// 기본 감소량 (기본: 0.1)
    pub base_decay: f32,
    /// 속도 비례 감소량 (기본: 0.05 × speed)
    pub movement_decay: f32,
    /// 공 소유 중 추가 감소량 (기본: 0.02)
    pub possession_cost: f32,

    // === Recovery ===
    /// 저속 이동 시 회복량 (기본: 0.05)
    pub recovery_rate: f32,
    /// 이 속도 미만일 때만 회복 (기본: 3.0)
    pub recovery_speed_threshold: f32,

    /// 최고 속도 하한 비율 (기본: 0.5)
    pub min_speed_factor: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max_stamina: 100.0,
            max_speed: 7.0,
            base_decay: 0.1,
            movement_decay: 0.05,
            possession_cost: 0.02,
            recovery_rate: 0.05,
            recovery_speed_threshold: 3.0,
            min_speed_factor: 0.5,
        }
    }
}

impl StaminaConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stamina <= 0.0 {
            return Err(format!("stamina.max_stamina must be positive, got {}", self.max_stamina));
        }
        if self.max_speed <= 0.0 {
            return Err(format!("stamina.max_speed must be positive, got {}", self.max_speed));
        }
        if !(0.0..=1.0).contains(&self.min_speed_factor) {
            return Err(format!(
                "stamina.min_speed_factor must be 0.0-1.0, got {}",
                self.min_speed_factor
            ));
        }
        if self.base_decay < 0.0
            || self.movement_decay < 0.0
            || self.possession_cost < 0.0
            || self.recovery_rate < 0.0
        {
            return Err("stamina decay/recovery rates must be non-negative".to_string());
        }
        Ok(())
    }
}

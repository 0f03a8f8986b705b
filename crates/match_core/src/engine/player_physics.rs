//! Player physics: steering, stamina, integration
//!
//! 매 tick: (steer 또는 action) → stamina → integrate 순서.

use super::config::StaminaConfig;
use super::coordinates::{distance_m, MeterPos, Pitch};
use super::physics_constants::player::{FRICTION, RESTEER_DISTANCE_M};
use super::player::Player;

/// 목표까지 2m 초과일 때만 재조향. 속도 크기 = 현재 max_speed.
pub fn steer_towards(player: &mut Player, target: MeterPos) {
    let dist = distance_m(player.position, target);
    if dist > RESTEER_DISTANCE_M {
        let dx = (target.0 - player.position.0) / dist;
        let dy = (target.1 - player.position.1) / dist;
        player.velocity = (dx * player.max_speed, dy * player.max_speed);
    }
}

/// 스태미나 소모/회복 후 max_speed 재계산.
/// 결과는 항상 `[0, max_stamina]`.
pub fn update_stamina(player: &mut Player, holding_ball: bool, cfg: &StaminaConfig) {
    let speed = player.speed();
    let mut cost = cfg.base_decay + cfg.movement_decay * speed;
    if holding_ball {
        cost += cfg.possession_cost;
    }
    player.stamina = (player.stamina - cost).max(0.0);

    if speed < cfg.recovery_speed_threshold {
        player.stamina = (player.stamina + cfg.recovery_rate).min(player.max_stamina);
    }

    player.max_speed = cfg.max_speed * player.stamina_ratio().max(cfg.min_speed_factor);
}

/// `pos += v·dt`, clamp, friction
pub fn integrate(player: &mut Player, dt: f64, pitch: Pitch) {
    let dt = dt as f32;
    let next = (player.position.0 + player.velocity.0 * dt, player.position.1 + player.velocity.1 * dt);
    player.position = pitch.clamp(next);
    player.velocity = (player.velocity.0 * FRICTION, player.velocity.1 * FRICTION);
}

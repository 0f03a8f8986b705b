//! Ball state and loose-ball physics
//!
//! 소유 중에는 소유자 위치에 붙어 있고 속도는 0.
//! 루즈볼일 때만 마찰/반사 물리를 적용한다.

use serde::{Deserialize, Serialize};

use super::coordinates::{magnitude, normalize_vec, MeterPos, Pitch};
use super::physics_constants::ball;
use super::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: MeterPos,
    pub velocity: (f32, f32),
    /// `None` = loose ball. Back-reference only, never owns the player.
    pub possessor: Option<PlayerId>,
    pub last_toucher: Option<PlayerId>,
    /// 현재 소유 지속 시간 (초)
    pub possession_duration: f64,
}

impl Ball {
    pub fn new(position: MeterPos) -> Self {
        Self {
            position,
            velocity: (0.0, 0.0),
            possessor: None,
            last_toucher: None,
            possession_duration: 0.0,
        }
    }

    pub fn is_loose(&self) -> bool {
        self.possessor.is_none()
    }

    pub fn speed(&self) -> f32 {
        magnitude(self.velocity)
    }

    /// Loose → Held
    pub fn take(&mut self, player: PlayerId) {
        self.possessor = Some(player);
        self.velocity = (0.0, 0.0);
        self.possession_duration = 0.0;
    }

    /// Held → Loose without a kick (failed action / blocked shot).
    /// The ball stays where it is.
    pub fn release(&mut self) {
        if let Some(holder) = self.possessor.take() {
            self.last_toucher = Some(holder);
        }
        self.velocity = (0.0, 0.0);
        self.possession_duration = 0.0;
    }

    /// Held → Loose, moving toward `target` at `speed`.
    /// 목표가 공 위치와 같으면 방향이 없으므로 속도는 그대로.
    pub fn kick(&mut self, target: MeterPos, speed: f32) {
        let dir = normalize_vec((target.0 - self.position.0, target.1 - self.position.1));
        if dir != (0.0, 0.0) {
            self.velocity = (dir.0 * speed, dir.1 * speed);
        }
        self.release_keeping_velocity();
    }

    fn release_keeping_velocity(&mut self) {
        if let Some(holder) = self.possessor.take() {
            self.last_toucher = Some(holder);
        }
        self.possession_duration = 0.0;
    }

    /// Goal restart: 센터 스팟에 정지, 소유자/마지막 터치 모두 해제
    pub fn reset_to(&mut self, position: MeterPos) {
        *self = Self::new(position);
    }

    /// While held: snap to the possessor and count possession time.
    pub fn follow(&mut self, holder_position: MeterPos, dt: f64) {
        self.snap_to(holder_position);
        self.possession_duration += dt;
    }

    pub fn snap_to(&mut self, position: MeterPos) {
        self.position = position;
        self.velocity = (0.0, 0.0);
    }

    /// While loose and moving: integrate, reflect on boundaries, apply friction.
    pub fn step_loose(&mut self, dt: f64, pitch: Pitch) {
        if self.velocity == (0.0, 0.0) {
            return;
        }
        let dt = dt as f32;
        let (mut x, mut y) = (self.position.0 + self.velocity.0 * dt, self.position.1 + self.velocity.1 * dt);
        let (mut vx, mut vy) = self.velocity;

        if x <= 0.0 || x >= pitch.width {
            vx *= -ball::BOUNCE_RESTITUTION;
            x = x.clamp(0.0, pitch.width);
        }
        if y <= 0.0 || y >= pitch.length {
            vy *= -ball::BOUNCE_RESTITUTION;
            y = y.clamp(0.0, pitch.length);
        }

        vx *= ball::FRICTION;
        vy *= ball::FRICTION;
        if magnitude((vx, vy)) < ball::STOP_SPEED {
            vx = 0.0;
            vy = 0.0;
        }

        self.position = (x, y);
        self.velocity = (vx, vy);
    }
}

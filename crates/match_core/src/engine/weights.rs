//! Role action weights
//!
//! 역할별 기본 가중치 테이블과 국면별 스케일링.

use serde::{Deserialize, Serialize};

use super::actions::ActionKind;
use super::player::Role;
use super::team_phase::PossessionContext;

/// 행동별 가중치 (EV에 곱해진다)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionWeights {
    pub pass: f32,
    pub dribble: f32,
    pub shoot: f32,
    pub clear: f32,
}

impl Default for ActionWeights {
    fn default() -> Self {
        Self::for_role(Role::Midfielder)
    }
}

impl ActionWeights {
    pub const fn new(pass: f32, dribble: f32, shoot: f32, clear: f32) -> Self {
        Self { pass, dribble, shoot, clear }
    }

    /// 역할별 기본 테이블
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Goalkeeper => Self::new(1.2, 0.2, 0.1, 2.0),
            Role::Defender => Self::new(1.0, 0.4, 0.3, 1.5),
            Role::Midfielder => Self::new(1.3, 1.0, 0.8, 0.6),
            Role::Forward => Self::new(0.9, 1.2, 1.8, 0.3),
        }
    }

    /// 국면별 스케일링
    /// - Attacking: shoot ×1.3, pass ×1.2
    /// - Defending: clear ×1.5, shoot ×0.5
    pub fn scaled_for(self, context: PossessionContext) -> Self {
        match context {
            PossessionContext::Attacking => {
                Self { shoot: self.shoot * 1.3, pass: self.pass * 1.2, ..self }
            }
            PossessionContext::Defending => {
                Self { clear: self.clear * 1.5, shoot: self.shoot * 0.5, ..self }
            }
            PossessionContext::Transitioning => self,
        }
    }

    pub fn get(&self, kind: ActionKind) -> f32 {
        match kind {
            ActionKind::Pass => self.pass,
            ActionKind::Dribble => self.dribble,
            ActionKind::Shoot => self.shoot,
            ActionKind::Clear => self.clear,
        }
    }
}

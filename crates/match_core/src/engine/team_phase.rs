//! Possession context
//!
//! 각 선수가 매 tick 판단하는 팀 단위 국면.
//! - Attacking: 우리 팀이 공 소유
//! - Defending: 상대 팀이 공 소유
//! - Transitioning: 루즈볼 (아무도 소유하지 않음)

use serde::{Deserialize, Serialize};

use super::player::Team;

/// 팀의 현재 소유 국면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PossessionContext {
    Attacking,
    Defending,
    /// 루즈볼 - 양 팀 모두 전환 중
    #[default]
    Transitioning,
}

impl PossessionContext {
    /// `team` 입장에서 본 국면
    pub fn for_team(team: Team, possessing_team: Option<Team>) -> Self {
        match possessing_team {
            None => PossessionContext::Transitioning,
            Some(t) if t == team => PossessionContext::Attacking,
            Some(_) => PossessionContext::Defending,
        }
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self, PossessionContext::Attacking)
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, PossessionContext::Transitioning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_possession() {
        assert_eq!(PossessionContext::for_team(Team::Zero, None), PossessionContext::Transitioning);
        assert_eq!(
            PossessionContext::for_team(Team::Zero, Some(Team::Zero)),
            PossessionContext::Attacking
        );
        assert_eq!(
            PossessionContext::for_team(Team::One, Some(Team::Zero)),
            PossessionContext::Defending
        );
        assert!(PossessionContext::for_team(Team::One, Some(Team::One)).is_attacking());
        assert!(PossessionContext::default().is_transition());
    }
}

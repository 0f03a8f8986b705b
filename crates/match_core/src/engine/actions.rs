//! Actions available to the ball holder

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// 행동 종류 (가중치 테이블 키)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Pass,
    Dribble,
    Shoot,
    Clear,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Pass => "PASS",
            ActionKind::Dribble => "DRIBBLE",
            ActionKind::Shoot => "SHOOT",
            ActionKind::Clear => "CLEAR",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 공 소유자가 실행하는 구체적 행동
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Pass { target: PlayerId },
    /// direction: radians, distance: m
    Dribble { direction: f32, distance: f32 },
    Shoot,
    Clear,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Pass { .. } => ActionKind::Pass,
            Action::Dribble { .. } => ActionKind::Dribble,
            Action::Shoot => ActionKind::Shoot,
            Action::Clear => ActionKind::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Action::Pass { target: PlayerId(2) }.kind(), ActionKind::Pass);
        assert_eq!(Action::Dribble { direction: 0.0, distance: 2.0 }.kind(), ActionKind::Dribble);
        assert_eq!(Action::Clear.kind().to_string(), "CLEAR");
        assert_eq!(serde_json::to_string(&ActionKind::Dribble).unwrap(), "\"DRIBBLE\"");
    }
}

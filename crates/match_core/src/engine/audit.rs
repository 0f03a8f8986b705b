//! Audit - per-tick contract check
//!
//! ## 검사 항목
//! - 모든 선수/공 좌표가 `[0, width] × [0, length]` 안
//! - possessor가 실제 arena 인덱스를 가리킴
//! - 스태미나 `[0, max]`
//! - 소유 중이면 공 위치 == 소유자 위치
//!
//! 위반은 로직 버그다. 복구하지 않고 호출자가 panic 한다
//! (`debug_assertions` 또는 `strict_contracts` 빌드).

use thiserror::Error;

use super::ball::Ball;
use super::coordinates::Pitch;
use super::player::{Player, PlayerId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("{entity} at ({x}, {y}) is outside the {width}x{length} pitch")]
    OutOfBounds { entity: String, x: f32, y: f32, width: f32, length: f32 },

    #[error("ball possessor {0} does not exist")]
    DanglingPossession(PlayerId),

    #[error("player {player} has negative stamina {stamina}")]
    NegativeStamina { player: PlayerId, stamina: f32 },

    #[error("player {player} stamina {stamina} exceeds max {max}")]
    StaminaAboveMax { player: PlayerId, stamina: f32, max: f32 },

    #[error("ball at {ball:?} is not with possessor {player} at {holder:?}")]
    BallNotWithPossessor { player: PlayerId, ball: (f32, f32), holder: (f32, f32) },
}

/// 첫 번째 위반을 돌려준다.
pub fn check(players: &[Player], ball: &Ball, pitch: Pitch) -> Result<(), InvariantViolation> {
    let out_of_bounds = |entity: String, (x, y): (f32, f32)| InvariantViolation::OutOfBounds {
        entity,
        x,
        y,
        width: pitch.width,
        length: pitch.length,
    };

    if !pitch.contains(ball.position) {
        return Err(out_of_bounds("ball".to_string(), ball.position));
    }

    for p in players {
        if !pitch.contains(p.position) {
            return Err(out_of_bounds(format!("player {}", p.id), p.position));
        }
        if p.stamina < 0.0 {
            return Err(InvariantViolation::NegativeStamina { player: p.id, stamina: p.stamina });
        }
        if p.stamina > p.max_stamina {
            return Err(InvariantViolation::StaminaAboveMax {
                player: p.id,
                stamina: p.stamina,
                max: p.max_stamina,
            });
        }
    }

    if let Some(holder) = ball.possessor {
        let Some(player) = players.get(holder.index()) else {
            return Err(InvariantViolation::DanglingPossession(holder));
        };
        if player.position != ball.position {
            return Err(InvariantViolation::BallNotWithPossessor {
                player: holder,
                ball: ball.position,
                holder: player.position,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FormationSlot, StaminaConfig};
    use crate::engine::player::{Role, Team};

    fn players() -> Vec<Player> {
        let s = StaminaConfig::default();
        vec![
            Player::new(PlayerId(0), Team::Zero, &FormationSlot::new(Role::Goalkeeper, 17.0, 5.0), &s),
            Player::new(PlayerId(1), Team::One, &FormationSlot::new(Role::Goalkeeper, 17.0, 47.0), &s),
        ]
    }

    #[test]
    fn test_clean_state_passes() {
        let ps = players();
        let mut ball = Ball::new((17.0, 5.0));
        ball.take(PlayerId(0));
        assert_eq!(check(&ps, &ball, Pitch::default()), Ok(()));
    }

    #[test]
    fn test_detects_out_of_bounds() {
        let mut ps = players();
        ps[1].position = (35.0, 10.0);
        let err = check(&ps, &Ball::new((1.0, 1.0)), Pitch::default()).unwrap_err();
        assert!(matches!(err, InvariantViolation::OutOfBounds { .. }));
        assert!(err.to_string().contains("player 1"));
    }

    #[test]
    fn test_detects_dangling_possession() {
        let ps = players();
        let mut ball = Ball::new((1.0, 1.0));
        ball.possessor = Some(PlayerId(9));
        assert_eq!(
            check(&ps, &ball, Pitch::default()),
            Err(InvariantViolation::DanglingPossession(PlayerId(9)))
        );
    }

    #[test]
    fn test_detects_stamina_and_detached_ball() {
        let mut ps = players();
        ps[0].stamina = -1.0;
        assert!(matches!(
            check(&ps, &Ball::new((1.0, 1.0)), Pitch::default()),
            Err(InvariantViolation::NegativeStamina { .. })
        ));

        let ps = players();
        let mut ball = Ball::new((2.0, 2.0));
        ball.possessor = Some(PlayerId(1));
        assert!(matches!(
            check(&ps, &ball, Pitch::default()),
            Err(InvariantViolation::BallNotWithPossessor { .. })
        ));
    }
}

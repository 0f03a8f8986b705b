//! Tactical positioning
//!
//! 공을 갖지 않은 선수의 역할별 목표 위치.

use rand::Rng;

use super::coordinates::{MeterPos, Pitch};
use super::execution_error::positioning_jitter;
use super::physics_constants::player::{
    DEFENDER_LINE_M, FORWARD_LINE_M, GK_LINE_M, TARGET_MARGIN_M,
};
use super::player::{Player, Role, Team};

/// 역할 밴드 (y, 자기 골라인 기준 team 0 frame)
fn role_line(role: Role, pitch: Pitch) -> f32 {
    match role {
        Role::Goalkeeper => GK_LINE_M,
        Role::Defender => DEFENDER_LINE_M,
        Role::Midfielder => pitch.half_line(),
        Role::Forward => pitch.length - FORWARD_LINE_M,
    }
}

/// 팀 방향 반영
fn oriented_y(team: Team, y: f32, pitch: Pitch) -> f32 {
    if team.attacks_positive_y() {
        y
    } else {
        pitch.length - y
    }
}

/// 목표 위치. GK는 jitter 없이 골라인 앞 중앙.
pub fn tactical_target<R: Rng + ?Sized>(player: &Player, pitch: Pitch, rng: &mut R) -> MeterPos {
    let line = oriented_y(player.team, role_line(player.effective_role, pitch), pitch);
    if player.effective_role == Role::Goalkeeper {
        return (pitch.width / 2.0, line);
    }

    // 같은 역할끼리 겹치지 않도록 팀 내 슬롯 번호로 좌/중/우 분산
    let lane = (player.squad_index % 3) as f32;
    let spread_x = pitch.width / 4.0 + lane * pitch.width / 4.0;
    let (jx, jy) = positioning_jitter(rng);
    pitch.clamp_inset((spread_x + jx, line + jy), TARGET_MARGIN_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FormationSlot, StaminaConfig};
    use crate::engine::player::PlayerId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player(id: u32, team: Team, role: Role) -> Player {
        Player::new(PlayerId(id), team, &FormationSlot::new(role, 10.0, 10.0), &StaminaConfig::default())
    }

    #[test]
    fn test_goalkeeper_targets() {
        let pitch = Pitch::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(tactical_target(&player(0, Team::Zero, Role::Goalkeeper), pitch, &mut rng), (17.0, 5.0));
        assert_eq!(tactical_target(&player(7, Team::One, Role::Goalkeeper), pitch, &mut rng), (17.0, 47.0));
    }

    #[test]
    fn test_targets_inside_margin() {
        let pitch = Pitch::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for id in 0..14 {
            for role in [Role::Defender, Role::Midfielder, Role::Forward] {
                for team in Team::ALL {
                    let t = tactical_target(&player(id, team, role), pitch, &mut rng);
                    assert!((5.0..=29.0).contains(&t.0), "{t:?}");
                    assert!((5.0..=47.0).contains(&t.1), "{t:?}");
                }
            }
        }
    }

    #[test]
    fn test_lane_is_team_relative() {
        let pitch = Pitch::default();
        // 같은 슬롯 번호, 다른 arena id
        let home = player(1, Team::Zero, Role::Defender).with_squad_index(1);
        let away = player(8, Team::One, Role::Defender).with_squad_index(1);
        let mut rng_home = ChaCha8Rng::seed_from_u64(3);
        let mut rng_away = ChaCha8Rng::seed_from_u64(3);
        let th = tactical_target(&home, pitch, &mut rng_home);
        let ta = tactical_target(&away, pitch, &mut rng_away);
        assert_eq!(th.0, ta.0);
        // 같은 jitter: 각 팀 수비 라인(15 / 37)에서 같은 만큼 벗어난다
        assert!(((th.1 - 15.0) - (ta.1 - 37.0)).abs() < 1e-4);
    }

    #[test]
    fn test_forward_band_depends_on_team() {
        let pitch = Pitch::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let n = 200;
        let mut sum0 = 0.0;
        let mut sum1 = 0.0;
        for _ in 0..n {
            sum0 += tactical_target(&player(1, Team::Zero, Role::Forward), pitch, &mut rng).1;
            sum1 += tactical_target(&player(1, Team::One, Role::Forward), pitch, &mut rng).1;
        }
        // team 0 FWD ≈ 37, team 1 FWD ≈ 15
        assert!((sum0 / n as f32 - 37.0).abs() < 1.0);
        assert!((sum1 / n as f32 - 15.0).abs() < 1.0);
    }
}

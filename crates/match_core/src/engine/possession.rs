//! Possession resolver
//!
//! Loose ↔ Held 상태 전이. Held → Loose는 kick/release (action effects)에서,
//! Loose → Held는 매 tick 시작 시 여기서 처리한다.

use tracing::debug;

use super::ball::Ball;
use super::coordinates::distance_m;
use super::physics_constants::possession::{CAPTURE_RADIUS_M, CONTEST_RADIUS_M, INTERCEPT_MARGIN_M};
use super::player::{Player, PlayerId};
use crate::trace::event::{EventDraft, EventKind};

/// 루즈볼을 가져갈 선수. 반경 안 후보가 없으면 `None`.
///
/// 최근접 후보가 기본 승자. 단, 마지막 터치가 기록돼 있고 후보가 둘 이상이며
/// 최근접이 1.5m 안이면, 킥한 팀의 상대 팀 후보 중 (최근접 + 0.5m) 안의
/// 가장 가까운 선수가 가져간다.
pub fn select_winner(ball: &Ball, players: &[Player]) -> Option<PlayerId> {
    let mut candidates: Vec<(usize, f32)> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (i, distance_m(p.position, ball.position)))
        .filter(|(_, d)| *d < CAPTURE_RADIUS_M)
        .collect();
    // stable: 같은 거리면 arena 순서 유지
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    let &(nearest, closest) = candidates.first()?;
    let kicking_team =
        ball.last_toucher.and_then(|id| players.get(id.index())).map(|p| p.team);

    if let Some(kicking_team) = kicking_team {
        if candidates.len() > 1 && closest < CONTEST_RADIUS_M {
            let challenger = candidates
                .iter()
                .find(|(i, d)| players[*i].team != kicking_team && *d < closest + INTERCEPT_MARGIN_M);
            if let Some(&(i, _)) = challenger {
                return Some(players[i].id);
            }
        }
    }
    Some(players[nearest].id)
}

/// 루즈볼이면 승자에게 소유권을 넘기고 POSSESSION 초안을 돌려준다.
pub fn resolve(ball: &mut Ball, players: &[Player]) -> Option<EventDraft> {
    if !ball.is_loose() {
        return None;
    }
    let winner = select_winner(ball, players)?;
    let team = players[winner.index()].team;
    ball.take(winner);
    debug!(player = %winner, team = %team, "possession won");
    Some(EventDraft { player: winner, team, kind: EventKind::Possession, dest: ball.position, delta: 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FormationSlot, StaminaConfig};
    use crate::engine::player::{Role, Team};

    fn make(id: u32, team: Team, x: f32, y: f32) -> Player {
        Player::new(PlayerId(id), team, &FormationSlot::new(Role::Midfielder, x, y), &StaminaConfig::default())
    }

    fn kicked_ball_at(x: f32, y: f32, toucher: PlayerId) -> Ball {
        let mut ball = Ball::new((x, y));
        ball.last_toucher = Some(toucher);
        ball
    }

    #[test]
    fn test_no_candidate_stays_loose() {
        let players = vec![make(0, Team::Zero, 0.0, 0.0)];
        let mut ball = Ball::new((10.0, 10.0));
        assert_eq!(resolve(&mut ball, &players), None);
        assert!(ball.is_loose());
    }

    #[test]
    fn test_capture_radius_is_strict() {
        let players = vec![make(0, Team::Zero, 13.0, 10.0)];
        let ball = Ball::new((10.0, 10.0));
        assert_eq!(select_winner(&ball, &players), None);
    }

    #[test]
    fn test_contested_ball_favours_non_kicking_team() {
        // kicker (id 0, team 0) far away; team 0 at 0.7m, team 1 at 0.8m
        let players = vec![
            make(0, Team::Zero, 30.0, 30.0),
            make(1, Team::Zero, 10.7, 10.0),
            make(2, Team::One, 10.0, 10.8),
        ];
        let ball = kicked_ball_at(10.0, 10.0, PlayerId(0));
        assert_eq!(select_winner(&ball, &players), Some(PlayerId(2)));
    }

    #[test]
    fn test_equal_distance_contest() {
        let players = vec![
            make(0, Team::Zero, 30.0, 30.0),
            make(1, Team::Zero, 10.8, 10.0),
            make(2, Team::One, 10.0, 10.8),
        ];
        let ball = kicked_ball_at(10.0, 10.0, PlayerId(0));
        assert_eq!(select_winner(&ball, &players), Some(PlayerId(2)));
    }

    #[test]
    fn test_challenger_outside_margin_loses() {
        let players = vec![
            make(0, Team::Zero, 30.0, 30.0),
            make(1, Team::Zero, 10.7, 10.0),
            make(2, Team::One, 10.0, 11.3),
        ];
        let ball = kicked_ball_at(10.0, 10.0, PlayerId(0));
        assert_eq!(select_winner(&ball, &players), Some(PlayerId(1)));
    }

    #[test]
    fn test_no_bias_without_last_toucher() {
        let players = vec![make(0, Team::Zero, 10.7, 10.0), make(1, Team::One, 10.0, 10.8)];
        let ball = Ball::new((10.0, 10.0));
        assert_eq!(select_winner(&ball, &players), Some(PlayerId(0)));
    }

    #[test]
    fn test_no_bias_when_nearest_outside_contest_radius() {
        let players = vec![
            make(0, Team::Zero, 30.0, 30.0),
            make(1, Team::Zero, 11.6, 10.0),
            make(2, Team::One, 10.0, 11.8),
        ];
        let ball = kicked_ball_at(10.0, 10.0, PlayerId(0));
        assert_eq!(select_winner(&ball, &players), Some(PlayerId(1)));
    }

    #[test]
    fn test_resolve_emits_possession() {
        let players = vec![make(0, Team::Zero, 30.0, 30.0), make(1, Team::One, 11.0, 10.0)];
        let mut ball = kicked_ball_at(10.0, 10.0, PlayerId(0));
        ball.velocity = (3.0, 0.0);
        ball.possession_duration = 4.0;
        let draft = resolve(&mut ball, &players).unwrap();
        assert_eq!(draft.kind, EventKind::Possession);
        assert_eq!(draft.player, PlayerId(1));
        assert_eq!(draft.team, Team::One);
        assert_eq!(draft.dest, (10.0, 10.0));
        assert_eq!(draft.delta, 0.0);
        assert_eq!(ball.possessor, Some(PlayerId(1)));
        assert_eq!(ball.possession_duration, 0.0);
        // 이미 소유 중이면 아무 일도 없다
        assert_eq!(resolve(&mut ball, &players), None);
    }
}

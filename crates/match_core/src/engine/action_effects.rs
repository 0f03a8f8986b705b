//! Action effects
//!
//! 선택된 행동을 실행하고 정확히 하나의 이벤트 초안을 만든다.
//! 성공 판정은 `rng < p` 한 번.

use rand::Rng;
use tracing::debug;

use super::actions::Action;
use super::ball::Ball;
use super::config::DecisionConfig;
use super::coordinates::MeterPos;
use super::decision::Decision;
use super::execution_error::{noisy_pass_target, pass_speed};
use super::physics_constants::{kick, shot};
use super::player::{Player, PlayerId};
use super::referee::Referee;
use super::value_field::ValueField;
use crate::trace::event::{EventDraft, EventKind};

/// 막힌 슈팅 value delta
pub const SHOT_SAVED_DELTA: f32 = 0.1;
pub const SHOT_MISSED_DELTA: f32 = -0.2;
pub const GOAL_DELTA: f32 = 1.0;
pub const CLEAR_DELTA: f32 = -0.05;

/// 행동이 변경할 수 있는 상태
pub struct EffectWorld<'a> {
    pub players: &'a mut [Player],
    pub ball: &'a mut Ball,
    pub referee: &'a mut Referee,
    pub field: &'a ValueField,
    pub cfg: &'a DecisionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectOutcome {
    pub event: EventDraft,
    pub goal: bool,
}

/// `actor`가 공을 가진 상태에서 호출된다.
pub fn apply<R: Rng + ?Sized>(
    world: &mut EffectWorld<'_>,
    actor: PlayerId,
    decision: &Decision,
    rng: &mut R,
) -> EffectOutcome {
    let idx = actor.index();
    let team = world.players[idx].team;
    let origin = world.players[idx].position;
    let pitch = world.field.pitch();
    let p = decision.success_probability;

    let draft = |kind: EventKind, dest: MeterPos, delta: f32| EventDraft {
        player: actor,
        team,
        kind,
        dest,
        delta,
    };

    let outcome = match decision.action {
        Action::Pass { target } => {
            if rng.gen::<f32>() < p {
                let aim = world.players.get(target.index()).map(|t| t.position).unwrap_or(origin);
                let dest = noisy_pass_target(rng, aim, pitch);
                let speed = pass_speed(rng);
                world.ball.kick(dest, speed);
                let delta = world.field.delta_for(team, origin, dest);
                EffectOutcome { event: draft(EventKind::Pass, dest, delta), goal: false }
            } else {
                world.ball.release();
                EffectOutcome {
                    event: draft(EventKind::PassFailed, origin, world.cfg.pass_failure_penalty),
                    goal: false,
                }
            }
        }
        Action::Dribble { direction, distance } => {
            if rng.gen::<f32>() < p {
                let dest = pitch.clamp((
                    origin.0 + distance * direction.cos(),
                    origin.1 + distance * direction.sin(),
                ));
                world.players[idx].position = dest;
                world.ball.position = dest;
                let delta = world.field.delta_for(team, origin, dest);
                EffectOutcome { event: draft(EventKind::Dribble, dest, delta), goal: false }
            } else {
                world.ball.release();
                EffectOutcome {
                    event: draft(EventKind::DribbleFailed, origin, world.cfg.dribble_failure_penalty),
                    goal: false,
                }
            }
        }
        Action::Shoot => {
            if rng.gen::<f64>() < shot::ON_TARGET_PROB {
                if rng.gen::<f64>() < shot::CONVERSION_ON_TARGET {
                    world.referee.record_goal(team);
                    world.ball.reset_to(pitch.center());
                    EffectOutcome { event: draft(EventKind::Goal, origin, GOAL_DELTA), goal: true }
                } else {
                    world.ball.release();
                    EffectOutcome { event: draft(EventKind::Shot, origin, SHOT_SAVED_DELTA), goal: false }
                }
            } else {
                world.ball.release();
                EffectOutcome {
                    event: draft(EventKind::ShotMissed, origin, SHOT_MISSED_DELTA),
                    goal: false,
                }
            }
        }
        Action::Clear => {
            // 가까운 touchline 쪽으로
            let x = if origin.0 < pitch.width / 2.0 {
                (origin.0 - kick::CLEAR_LATERAL_M).max(0.0)
            } else {
                (origin.0 + kick::CLEAR_LATERAL_M).min(pitch.width)
            };
            let dest = (x, origin.1);
            world.ball.kick(dest, kick::CLEAR_SPEED);
            EffectOutcome { event: draft(EventKind::Clear, dest, CLEAR_DELTA), goal: false }
        }
    };

    debug!(
        player = %actor,
        kind = %outcome.event.kind,
        delta = outcome.event.delta,
        "action executed"
    );
    outcome
}

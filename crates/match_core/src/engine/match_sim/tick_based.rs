//! Tick-based simulation loop
//!
//! `step()` 하나가 tick 하나. tick 중간에 멈추는 일은 없다.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use tracing::info;

use super::{MatchEngine, MatchState};
use crate::engine::action_effects::{self, EffectWorld};
use crate::engine::decision::DecisionContext;
use crate::engine::referee::EndReason;
use crate::engine::{player_physics, positioning, possession, role_adaptation};
use crate::trace::event::TraceEvent;

impl<R: Rng> MatchEngine<R> {
    /// 한 tick 진행. 이번 tick에 기록된 이벤트를 돌려준다 (종료 후에는 항상 빈 slice).
    pub fn step(&mut self) -> &[TraceEvent] {
        let first = self.recorder.len();
        if self.state == MatchState::Ended {
            return self.recorder.events_since(first);
        }

        self.ctx.tick += 1;
        self.recorder.set_tick(self.ctx.tick);

        // 1. 루즈볼 획득
        if let Some(draft) = possession::resolve(&mut self.ball, &self.players) {
            self.recorder.record(draft);
        }

        // 2. 역할 재계산
        let possessing_team = self.possessing_team();
        role_adaptation::adapt_all(&mut self.players, possessing_team);

        // 3. 공
        self.step_ball();

        // 4. 선수 (arena 순)
        let mut goal_scored = false;
        for idx in 0..self.players.len() {
            goal_scored |= self.step_player(idx);
        }

        // 5. 심판 시계
        self.referee.advance(self.ctx.tick, self.config.dt, self.config.max_game_time);

        self.ctx.observe_possession(self.ball.possessor, goal_scored);
        self.check_termination();
        self.enforce_contracts();

        self.recorder.events_since(first)
    }

    /// 종료될 때까지 진행
    pub fn run(&mut self) -> EndReason {
        let never = AtomicBool::new(false);
        self.run_cancellable(&never, None)
    }

    /// `cancel`이 세워지거나 `max_steps`에 도달하면 그 자리에서 경기를 끝낸다.
    pub fn run_cancellable(&mut self, cancel: &AtomicBool, max_steps: Option<u64>) -> EndReason {
        let mut steps = 0u64;
        while self.state == MatchState::Running {
            if cancel.load(Ordering::Relaxed) {
                self.finish(EndReason::Cancelled);
                break;
            }
            if max_steps.is_some_and(|limit| steps >= limit) {
                self.finish(EndReason::StepLimit);
                break;
            }
            self.step();
            steps += 1;
        }
        self.end_reason.unwrap_or(EndReason::Cancelled)
    }

    fn step_ball(&mut self) {
        match self.ball.possessor {
            Some(holder) => {
                let pos = self.players[holder.index()].position;
                self.ball.follow(pos, self.config.dt);
            }
            None => self.ball.step_loose(self.config.dt, self.pitch),
        }
    }

    /// 득점이 나오면 true
    fn step_player(&mut self, idx: usize) -> bool {
        let id = self.players[idx].id;
        let mut goal = false;

        if self.ball.possessor == Some(id) {
            let decision = DecisionContext {
                actor: &self.players[idx],
                players: &self.players,
                field: self.resources.field.as_ref(),
                pitch: self.pitch,
                cfg: &self.config.decision,
                dribble_distances: &self.resources.dribble_distances,
            }
            .choose(&mut self.rng);

            let mut world = EffectWorld {
                players: &mut self.players,
                ball: &mut self.ball,
                referee: &mut self.referee,
                field: self.resources.field.as_ref(),
                cfg: &self.config.decision,
            };
            let outcome = action_effects::apply(&mut world, id, &decision, &mut self.rng);
            self.recorder.record(outcome.event);
            goal = outcome.goal;
        } else {
            let target = positioning::tactical_target(&self.players[idx], self.pitch, &mut self.rng);
            player_physics::steer_towards(&mut self.players[idx], target);
        }

        let holding = self.ball.possessor == Some(id);
        let player = &mut self.players[idx];
        player_physics::update_stamina(player, holding, &self.config.stamina);
        player_physics::integrate(player, self.config.dt, self.pitch);
        if holding {
            self.ball.snap_to(player.position);
        }
        goal
    }

    fn check_termination(&mut self) {
        let reason = self.referee.termination(
            self.config.max_game_time,
            self.ctx.ticks_since_possession_change,
            self.config.max_ticks_without_change,
        );
        if let Some(reason) = reason {
            self.finish(reason);
        }
    }

    fn finish(&mut self, reason: EndReason) {
        self.state = MatchState::Ended;
        self.end_reason = Some(reason);
        let [home, away] = self.referee.goals_by_team();
        info!(
            match_id = self.recorder.match_id(),
            tick = self.ctx.tick,
            reason = ?reason,
            score = %format!("{home}-{away}"),
            events = self.recorder.len(),
            "match ended"
        );
    }

    /// debug 빌드 또는 `strict_contracts`에서 매 tick 계약 검사
    fn enforce_contracts(&self) {
        if cfg!(any(debug_assertions, feature = "strict_contracts")) {
            if let Err(violation) = self.audit() {
                panic!("invariant violated at tick {}: {violation}", self.ctx.tick);
            }
        }
    }
}

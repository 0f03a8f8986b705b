//! Match Simulation Engine
//!
//! 한 경기의 모든 상태(선수 arena, 공, 심판, trace recorder, RNG)를 소유한다.
//!
//! ## Tick 순서
//!
//! ```text
//! tick += 1
//!   → possession resolver (루즈볼 획득)
//!   → role adaptation (전원)
//!   → ball step (소유 중이면 snap, 아니면 물리)
//!   → players (arena 순: 소유자는 decision + effect, 나머지는 전술 이동)
//!        → stamina → integrate
//!   → referee clock
//!   → inactivity counter → termination check → audit
//! ```
//!
//! 같은 config + 같은 seed면 trace가 완전히 같다.

mod match_state;
mod resources;
mod tick_based;


pub use match_state::{MatchState, TickContext};
pub use resources::MatchResources;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::audit::{self, InvariantViolation};
use super::ball::Ball;
use super::config::MatchConfig;
use super::coordinates::{manhattan_m, Pitch};
use super::player::{Player, PlayerId, Team};
use super::referee::{EndReason, Referee};
use super::value_field::ValueField;
use crate::error::{Result, SimError};
use crate::trace::event::TraceEvent;
use crate::trace::recorder::TraceRecorder;
use crate::trace::summary::MatchSummary;

/// 경기 종료 후 추출되는 결과물
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutput {
    pub summary: MatchSummary,
    pub events: Vec<TraceEvent>,
}

pub struct MatchEngine<R: Rng = ChaCha8Rng> {
    config: MatchConfig,
    pitch: Pitch,
    resources: MatchResources,
    players: Vec<Player>,
    ball: Ball,
    referee: Referee,
    recorder: TraceRecorder,
    ctx: TickContext,
    state: MatchState,
    end_reason: Option<EndReason>,
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// config의 realism level에 맞춰 리소스를 로드하고 `seed`로 RNG 초기화
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let resources = MatchResources::load(&config);
        Self::with_resources(config, resources)
    }

    pub fn with_resources(config: MatchConfig, resources: MatchResources) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, resources, rng)
    }
}

impl<R: Rng> MatchEngine<R> {
    pub fn with_rng(config: MatchConfig, resources: MatchResources, rng: R) -> Result<Self> {
        config.validate()?;
        let pitch = config.pitch();
        if resources.field.pitch() != pitch {
            return Err(SimError::InvalidConfig(format!(
                "value field built for {} but match pitch is {}",
                resources.field.pitch().dimensions_label(),
                pitch.dimensions_label()
            )));
        }

        let players: Vec<Player> = config
            .formations
            .iter()
            .enumerate()
            .map(|(i, (team, slot))| {
                let squad_index = match team {
                    Team::Zero => i,
                    Team::One => i - config.formations.team_0.len(),
                };
                Player::new(PlayerId(i as u32), team, slot, &config.stamina)
                    .with_squad_index(squad_index as u32)
            })
            .collect();

        // kickoff: 센터에 가장 가까운 선수 (Manhattan, 동률이면 arena 순)
        let center = pitch.center();
        let mut ball = Ball::new(center);
        let kicker = players
            .iter()
            .map(|p| (p.id, manhattan_m(p.position, center)))
            .fold(None, |best: Option<(PlayerId, f32)>, (id, d)| match best {
                Some((_, best_d)) if d >= best_d => best,
                _ => Some((id, d)),
            })
            .map(|(id, _)| id);
        if let Some(id) = kicker {
            ball.take(id);
            ball.snap_to(players[id.index()].position);
        }

        let recorder =
            TraceRecorder::new(config.match_id(), config.start_time_or_default(), config.dt);
        debug!(
            match_id = recorder.match_id(),
            players = players.len(),
            kicker = ?kicker,
            "match setup"
        );

        Ok(Self {
            pitch,
            resources,
            players,
            ball,
            referee: Referee::new(),
            recorder,
            ctx: TickContext::new(kicker),
            state: MatchState::Running,
            end_reason: None,
            rng,
            config,
        })
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn field(&self) -> &ValueField {
        self.resources.field.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn referee(&self) -> &Referee {
        &self.referee
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn tick(&self) -> u64 {
        self.ctx.tick
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn events(&self) -> &[TraceEvent] {
        self.recorder.events()
    }

    pub fn possessing_team(&self) -> Option<Team> {
        self.ball.possessor.map(|id| self.players[id.index()].team)
    }

    /// 현재 상태의 계약 검사
    pub fn audit(&self) -> std::result::Result<(), InvariantViolation> {
        audit::check(&self.players, &self.ball, self.pitch)
    }

    // ========== Results ==========

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            match_id: self.recorder.match_id().to_string(),
            total_ticks: self.ctx.tick,
            match_duration: self.referee.match_time,
            pitch_dimensions: self.pitch.dimensions_label(),
            realism_level: self.config.realism_level,
            goals_by_team: self.referee.goals_by_team(),
            end_reason: self.end_reason,
            ..MatchSummary::from_events(self.recorder.events())
        }
    }

    pub fn into_output(self) -> MatchOutput {
        let summary = self.summary();
        MatchOutput { summary, events: self.recorder.into_events() }
    }
}

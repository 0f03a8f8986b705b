//! Decision engine for the ball holder
//!
//! 1. 합법 행동 열거 (PASS → DRIBBLE → SHOOT → CLEAR 순서)
//! 2. 압박/피로 기반 epsilon 계산
//! 3. epsilon 확률로 무작위 탐색, 아니면 최대 EV (동률이면 먼저 열거된 것)

use std::f32::consts::FRAC_PI_4;

use rand::Rng;
use tracing::debug;

use super::actions::{Action, ActionKind};
use super::config::DecisionConfig;
use super::coordinates::{distance_m, MeterPos, Pitch};
use super::player::Player;
use super::probability::{exploration_rate, pressure, success_probability};
use super::value_field::ValueField;

/// 드리블 방향 수 (k·π/4)
pub const DRIBBLE_DIRECTIONS: usize = 8;

/// 슈팅 EV 구성값
const SHOT_GOAL_VALUE: f32 = 1.0;
const SHOT_FAIL_VALUE: f32 = -0.2;
/// 클리어 EV 구성값
const CLEAR_SUCCESS_VALUE: f32 = -0.05;
const CLEAR_FAIL_VALUE: f32 = -0.1;

/// 결정에 필요한 읽기 전용 상태
pub struct DecisionContext<'a> {
    pub actor: &'a Player,
    pub players: &'a [Player],
    pub field: &'a ValueField,
    pub pitch: Pitch,
    pub cfg: &'a DecisionConfig,
    pub dribble_distances: &'a [f32],
}

/// 선택 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub success_probability: f32,
    pub epsilon: f64,
    /// true면 탐색(무작위)으로 고른 행동
    pub explored: bool,
}

impl<'a> DecisionContext<'a> {
    pub fn pressure(&self) -> f32 {
        let team = self.actor.team;
        let opponents = self.players.iter().filter(|p| p.team != team).map(|p| p.position);
        pressure(self.actor.position, opponents, self.cfg.pressure_range_m)
    }

    pub fn success_probability(&self, kind: ActionKind, pressure: f32) -> f32 {
        success_probability(kind, &self.actor.skills, self.actor.stamina_ratio(), pressure, self.cfg)
    }

    /// 상대 진영에 있을 때만 슈팅 가능
    pub fn can_shoot(&self) -> bool {
        let y = self.actor.position.1;
        if self.actor.team.attacks_positive_y() {
            y > self.pitch.half_line()
        } else {
            y < self.pitch.half_line()
        }
    }

    fn dribble_target(&self, direction: f32, distance: f32) -> MeterPos {
        let (x, y) = self.actor.position;
        (x + distance * direction.cos(), y + distance * direction.sin())
    }

    /// 열거 순서: 패스 (arena 순) → 드리블 (방향, 거리) → 슈팅 → 클리어
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        let actor = self.actor;

        for mate in self.players.iter().filter(|p| p.team == actor.team && p.id != actor.id) {
            let d = distance_m(actor.position, mate.position);
            if d >= self.cfg.pass_range_min_m && d <= self.cfg.pass_range_max_m {
                actions.push(Action::Pass { target: mate.id });
            }
        }

        for k in 0..DRIBBLE_DIRECTIONS {
            let direction = k as f32 * FRAC_PI_4;
            for &distance in self.dribble_distances {
                if self.pitch.contains(self.dribble_target(direction, distance)) {
                    actions.push(Action::Dribble { direction, distance });
                }
            }
        }

        if self.can_shoot() {
            actions.push(Action::Shoot);
        }
        actions.push(Action::Clear);
        actions
    }

    /// 행동의 목적지 (value delta 계산용)
    fn destination(&self, action: &Action) -> MeterPos {
        match *action {
            Action::Pass { target } => self
                .players
                .get(target.index())
                .map(|p| p.position)
                .unwrap_or(self.actor.position),
            Action::Dribble { direction, distance } => self.dribble_target(direction, distance),
            Action::Shoot | Action::Clear => self.actor.position,
        }
    }

    /// weight × (p·success + (1-p)·failure)
    pub fn expected_value(&self, action: &Action, pressure: f32) -> f32 {
        let kind = action.kind();
        let p = self.success_probability(kind, pressure);
        let team = self.actor.team;
        let (on_success, on_failure) = match kind {
            ActionKind::Pass => (
                self.field.delta_for(team, self.actor.position, self.destination(action)),
                self.cfg.pass_failure_penalty,
            ),
            ActionKind::Dribble => (
                self.field.delta_for(team, self.actor.position, self.destination(action)),
                self.cfg.dribble_failure_penalty,
            ),
            ActionKind::Shoot => (SHOT_GOAL_VALUE, SHOT_FAIL_VALUE),
            ActionKind::Clear => (CLEAR_SUCCESS_VALUE, CLEAR_FAIL_VALUE),
        };
        self.actor.weights.get(kind) * (p * on_success + (1.0 - p) * on_failure)
    }

    /// First-seen maximum
    pub fn best_action(&self, actions: &[Action], pressure: f32) -> Option<Action> {
        let mut best: Option<(Action, f32)> = None;
        for action in actions {
            let ev = self.expected_value(action, pressure);
            match best {
                Some((_, best_ev)) if ev <= best_ev => {}
                _ => best = Some((*action, ev)),
            }
        }
        best.map(|(a, _)| a)
    }

    /// epsilon-greedy 선택. 후보가 비면 CLEAR.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Decision {
        let pressure = self.pressure();
        let epsilon = exploration_rate(pressure, self.actor.fatigue(), self.cfg);
        let actions = self.legal_actions();

        let explored = rng.gen::<f64>() < epsilon;
        let action = if actions.is_empty() {
            Action::Clear
        } else if explored {
            actions[rng.gen_range(0..actions.len())]
        } else {
            self.best_action(&actions, pressure).unwrap_or(Action::Clear)
        };

        let success_probability = self.success_probability(action.kind(), pressure);
        debug!(
            player = %self.actor.id,
            action = %action.kind(),
            candidates = actions.len(),
            epsilon,
            explored,
            "decision"
        );
        Decision { action, success_probability, epsilon, explored }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FormationSlot, StaminaConfig};
    use crate::engine::player::{PlayerId, Role, Team};
    use crate::engine::team_phase::PossessionContext;
    use crate::engine::weights::ActionWeights;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make(id: u32, team: Team, role: Role, x: f32, y: f32) -> Player {
        Player::new(PlayerId(id), team, &FormationSlot::new(role, x, y), &StaminaConfig::default())
    }

    fn ctx<'a>(
        players: &'a [Player],
        actor: usize,
        field: &'a ValueField,
        cfg: &'a DecisionConfig,
        distances: &'a [f32],
    ) -> DecisionContext<'a> {
        DecisionContext {
            actor: &players[actor],
            players,
            field,
            pitch: Pitch::default(),
            cfg,
            dribble_distances: distances,
        }
    }

    #[test]
    fn test_no_shot_from_own_half() {
        let players = vec![make(0, Team::Zero, Role::Forward, 10.0, 10.0)];
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::default();
        let c = ctx(&players, 0, &field, &cfg, &[2.0, 4.0, 6.0]);
        let actions = c.legal_actions();
        assert!(!actions.contains(&Action::Shoot));
        assert_eq!(actions.last(), Some(&Action::Clear));
    }

    #[test]
    fn test_shot_legality_depends_on_team() {
        let players = vec![
            make(0, Team::Zero, Role::Forward, 17.0, 40.0),
            make(1, Team::One, Role::Forward, 17.0, 40.0),
        ];
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::default();
        assert!(ctx(&players, 0, &field, &cfg, &[2.0]).can_shoot());
        assert!(!ctx(&players, 1, &field, &cfg, &[2.0]).can_shoot());
    }

    #[test]
    fn test_enumeration_order_and_filters() {
        let players = vec![
            make(0, Team::Zero, Role::Midfielder, 1.0, 1.0),
            make(1, Team::Zero, Role::Defender, 1.5, 1.0), // 0.5m: 너무 가까움
            make(2, Team::Zero, Role::Forward, 10.0, 1.0),
            make(3, Team::One, Role::Forward, 5.0, 5.0),
            make(4, Team::Zero, Role::Forward, 30.0, 50.0), // 40m 초과
        ];
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::default();
        let c = ctx(&players, 0, &field, &cfg, &[2.0, 4.0, 6.0]);
        let actions = c.legal_actions();

        assert_eq!(actions[0], Action::Pass { target: PlayerId(2) });
        assert!(matches!(actions[1], Action::Dribble { direction, distance } if direction == 0.0 && distance == 2.0));
        assert!(matches!(actions[2], Action::Dribble { direction, distance } if direction == 0.0 && distance == 4.0));
        // 코너 근처: 경기장 밖으로 나가는 드리블 제외
        for a in &actions {
            if let Action::Dribble { direction, distance } = *a {
                let t = c.dribble_target(direction, distance);
                assert!(Pitch::default().contains(t));
            }
        }
        assert_eq!(actions.last(), Some(&Action::Clear));
        assert!(!actions.iter().any(|a| *a == Action::Pass { target: PlayerId(4) }));
    }

    #[test]
    fn test_greedy_prefers_forward_progress() {
        // 주변에 상대 없음, 팀원은 전방에
        let mut players = vec![
            make(0, Team::Zero, Role::Midfielder, 17.0, 20.0),
            make(1, Team::Zero, Role::Forward, 17.0, 45.0),
            make(2, Team::One, Role::Goalkeeper, 17.0, 51.0),
        ];
        players[0].weights = ActionWeights::for_role(Role::Midfielder).scaled_for(PossessionContext::Attacking);
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::greedy();
        let c = ctx(&players, 0, &field, &cfg, &[2.0, 4.0, 6.0]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let d = c.choose(&mut rng);
        assert!(!d.explored);
        assert_eq!(d.epsilon, 0.0);
        assert_eq!(d.action, Action::Pass { target: PlayerId(1) });
        assert!((d.success_probability - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let players = vec![make(0, Team::Zero, Role::Midfielder, 17.0, 20.0)];
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::greedy();
        let c = ctx(&players, 0, &field, &cfg, &[2.0]);
        let a = Action::Clear;
        assert_eq!(c.best_action(&[a, a], 0.0), Some(a));
        assert_eq!(c.best_action(&[], 0.0), None);
    }

    #[test]
    fn test_always_has_clear() {
        let players = vec![make(0, Team::One, Role::Goalkeeper, 0.0, 52.0)];
        let field = ValueField::synthetic(Pitch::default(), 12, 8);
        let cfg = DecisionConfig::default();
        let c = ctx(&players, 0, &field, &cfg, &[]);
        assert_eq!(c.legal_actions(), vec![Action::Clear]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(c.choose(&mut rng).action, Action::Clear);
        }
    }
}

//! Match engine
//!
//! 좌표는 미터 단위. x = 폭 (0..width), y = 길이 (0..length).
//! Team 0은 +y 방향으로 공격한다.

pub mod action_effects;
pub mod actions;
pub mod audit;
pub mod ball;
pub mod config;
pub mod coordinates;
pub mod decision;
pub mod execution_error;
pub mod match_sim;
pub mod physics_constants;
pub mod player;
pub mod player_physics;
pub mod positioning;
pub mod possession;
pub mod probability;
pub mod referee;
pub mod role_adaptation;
pub mod team_phase;
pub mod timestep;
pub mod value_field;
pub mod weights;

pub use actions::{Action, ActionKind};
pub use ball::Ball;
pub use config::{MatchConfig, RealismLevel};
pub use coordinates::{MeterPos, Pitch};
pub use match_sim::{MatchEngine, MatchOutput, MatchResources, MatchState};
pub use player::{Player, PlayerId, Role, Team};
pub use referee::{EndReason, Referee};
pub use value_field::ValueField;

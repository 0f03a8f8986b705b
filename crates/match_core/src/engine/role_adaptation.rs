//! Dynamic role adaptation
//!
//! base role + 소유 국면 + 스태미나 → effective role → 가중치 테이블.
//! 매 tick 모든 선수에 대해 재계산한다.

use super::player::{Player, Role, Team};
use super::team_phase::PossessionContext;
use super::weights::ActionWeights;

/// DEF → MID 전진에 필요한 스태미나 (strict >)
pub const DEFENDER_ADVANCE_STAMINA: f32 = 70.0;
/// MID → FWD 전진에 필요한 스태미나 (strict >)
pub const MIDFIELDER_ADVANCE_STAMINA: f32 = 60.0;

pub fn adapt_role(base: Role, context: PossessionContext, stamina: f32) -> Role {
    match context {
        PossessionContext::Defending => match base {
            Role::Forward => Role::Midfielder,
            Role::Midfielder => Role::Defender,
            other => other,
        },
        PossessionContext::Attacking => match base {
            Role::Defender if stamina > DEFENDER_ADVANCE_STAMINA => Role::Midfielder,
            Role::Midfielder if stamina > MIDFIELDER_ADVANCE_STAMINA => Role::Forward,
            other => other,
        },
        PossessionContext::Transitioning => base,
    }
}

pub fn adapt_player(player: &mut Player, possessing_team: Option<Team>) {
    let context = PossessionContext::for_team(player.team, possessing_team);
    player.context = context;
    player.effective_role = adapt_role(player.base_role, context, player.stamina);
    player.weights = ActionWeights::for_role(player.effective_role).scaled_for(context);
}

pub fn adapt_all(players: &mut [Player], possessing_team: Option<Team>) {
    for player in players.iter_mut() {
        adapt_player(player, possessing_team);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FormationSlot, StaminaConfig};
    use crate::engine::player::PlayerId;

    #[test]
    fn test_defending_drops_back() {
        let ctx = PossessionContext::Defending;
        assert_eq!(adapt_role(Role::Forward, ctx, 100.0), Role::Midfielder);
        assert_eq!(adapt_role(Role::Midfielder, ctx, 100.0), Role::Defender);
        assert_eq!(adapt_role(Role::Defender, ctx, 100.0), Role::Defender);
        assert_eq!(adapt_role(Role::Goalkeeper, ctx, 100.0), Role::Goalkeeper);
    }

    #[test]
    fn test_attacking_requires_stamina() {
        let ctx = PossessionContext::Attacking;
        assert_eq!(adapt_role(Role::Defender, ctx, 71.0), Role::Midfielder);
        assert_eq!(adapt_role(Role::Defender, ctx, 70.0), Role::Defender);
        assert_eq!(adapt_role(Role::Midfielder, ctx, 60.5), Role::Forward);
        assert_eq!(adapt_role(Role::Midfielder, ctx, 60.0), Role::Midfielder);
        assert_eq!(adapt_role(Role::Forward, ctx, 100.0), Role::Forward);
    }

    #[test]
    fn test_transition_keeps_base() {
        for role in [Role::Goalkeeper, Role::Defender, Role::Midfielder, Role::Forward] {
            assert_eq!(adapt_role(role, PossessionContext::Transitioning, 0.0), role);
        }
    }

    #[test]
    fn test_adapt_player_updates_weights() {
        let slot = FormationSlot::new(Role::Midfielder, 17.0, 26.0);
        let mut p = Player::new(PlayerId(3), Team::One, &slot, &StaminaConfig::default());
        adapt_player(&mut p, Some(Team::Zero));
        assert_eq!(p.context, PossessionContext::Defending);
        assert_eq!(p.effective_role, Role::Defender);
        assert_eq!(p.weights, ActionWeights::for_role(Role::Defender).scaled_for(PossessionContext::Defending));

        adapt_player(&mut p, None);
        assert_eq!(p.effective_role, Role::Midfielder);
        assert_eq!(p.weights, ActionWeights::for_role(Role::Midfielder));
    }
}

//! Match state and per-tick scratch context

use serde::{Deserialize, Serialize};

use crate::engine::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchState {
    #[default]
    Running,
    Ended,
}

/// 루프가 소유하는 tick 간 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickContext {
    pub tick: u64,
    pub previous_possessor: Option<PlayerId>,
    pub ticks_since_possession_change: u64,
}

impl TickContext {
    pub fn new(initial_possessor: Option<PlayerId>) -> Self {
        Self { tick: 0, previous_possessor: initial_possessor, ticks_since_possession_change: 0 }
    }

    /// tick 끝에서 호출. 소유자가 바뀌었거나 `reset`(득점)이면 카운터 0.
    pub fn observe_possession(&mut self, current: Option<PlayerId>, reset: bool) {
        if reset || current != self.previous_possessor {
            self.ticks_since_possession_change = 0;
        } else {
            self.ticks_since_possession_change += 1;
        }
        self.previous_possessor = current;
    }
}

//! # match_core - Deterministic Possession-Trace Match Simulation
//!
//! 7인제 축구 경기를 고정 tick으로 시뮬레이션하고, 소유권 단위로 묶인
//! 이벤트 trace(CSV / XES / JSON)를 만든다.
//!
//! ## Features
//! - 같은 config + 같은 seed = 같은 trace
//! - Value field(xThreat) 기반 의사결정, ε-greedy 탐색
//! - rayon 기반 다중 경기 batch 실행
//!
//! ```no_run
//! use match_core::{MatchConfig, MatchEngine};
//!
//! let mut engine = MatchEngine::new(MatchConfig::quick(60.0))?;
//! engine.run();
//! println!("{} events", engine.events().len());
//! # Ok::<(), match_core::SimError>(())
//! ```

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]
#![allow(clippy::field_reassign_with_default)]

pub mod batch;
pub mod engine;
pub mod error;
pub mod trace;

pub use batch::{run_batch, run_outputs, BatchAggregate, BatchReport};
pub use engine::{
    EndReason, MatchConfig, MatchEngine, MatchOutput, MatchResources, MatchState, Pitch,
    RealismLevel, Team, ValueField,
};
pub use error::{Result, SimError};
pub use trace::export::{write_csv, write_xes, TraceDump};
pub use trace::{EventKind, MatchSummary, TraceEvent};

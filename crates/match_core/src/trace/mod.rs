//! Possession trace: events, recorder, summaries and exporters

pub mod event;
pub mod export;
pub mod recorder;
pub mod sequences;
pub mod summary;

pub use event::{EventKind, TraceEvent};
pub use recorder::TraceRecorder;
pub use sequences::{possession_sequences, PossessionSequence, SequenceOutcome};
pub use summary::MatchSummary;

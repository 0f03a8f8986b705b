//! JSON trace dump: summary + possession sequences + raw events

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::match_sim::MatchOutput;
use crate::error::Result;
use crate::trace::event::TraceEvent;
use crate::trace::sequences::{possession_sequences, PossessionSequence};
use crate::trace::summary::MatchSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceDump {
    pub summary: MatchSummary,
    pub sequences: Vec<PossessionSequence>,
    pub events: Vec<TraceEvent>,
}

impl TraceDump {
    pub fn new(summary: MatchSummary, events: Vec<TraceEvent>) -> Self {
        let sequences = possession_sequences(&events);
        Self { summary, sequences, events }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl From<MatchOutput> for TraceDump {
    fn from(output: MatchOutput) -> Self {
        Self::new(output.summary, output.events)
    }
}

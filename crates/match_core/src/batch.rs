//! Batch runner
//!
//! 독립된 경기 N개를 병렬로 돌린다. run `i`의 seed는 `config.seed + i`.
//! 결과는 스레드 스케줄과 무관하게 run 순서대로 모인다.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::config::MatchConfig;
use crate::engine::match_sim::{MatchEngine, MatchOutput, MatchResources};
use crate::engine::value_field::ValueField;
use crate::error::Result;
use crate::trace::summary::MatchSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAggregate {
    pub total_runs: usize,
    pub mean_events: f64,
    pub std_events: f64,
    pub mean_possessions: f64,
    pub std_possessions: f64,
    pub mean_goals: f64,
    pub std_goals: f64,
    pub mean_shots: f64,
    #[serde(rename = "mean_xThreat_per_possession")]
    pub mean_xthreat_per_possession: f64,
    pub mean_turnovers: f64,
    /// 초
    pub mean_match_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub runs: Vec<MatchSummary>,
    pub aggregate: BatchAggregate,
}

/// (평균, 모표준편차)
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

impl BatchAggregate {
    pub fn from_summaries(runs: &[MatchSummary]) -> Self {
        let column = |f: fn(&MatchSummary) -> f64| runs.iter().map(f).collect::<Vec<f64>>();

        let (mean_events, std_events) = mean_std(&column(|s| s.total_events as f64));
        let (mean_possessions, std_possessions) = mean_std(&column(|s| s.total_possessions as f64));
        let (mean_goals, std_goals) = mean_std(&column(|s| s.goals as f64));

        Self {
            total_runs: runs.len(),
            mean_events,
            std_events,
            mean_possessions,
            std_possessions,
            mean_goals,
            std_goals,
            mean_shots: mean_std(&column(|s| s.shots as f64)).0,
            mean_xthreat_per_possession: mean_std(&column(|s| s.mean_xthreat_per_possession)).0,
            mean_turnovers: mean_std(&column(|s| s.turnovers as f64)).0,
            mean_match_duration: mean_std(&column(|s| s.match_duration)).0,
        }
    }
}

/// run `index`용 config. match_id가 지정돼 있으면 `_{index}`를 붙인다.
fn config_for_run(base: &MatchConfig, index: u64) -> MatchConfig {
    let mut config = base.clone().with_seed(base.seed.wrapping_add(index));
    config.match_id = base.match_id.as_ref().map(|id| format!("{id}_{index}"));
    config
}

/// 경기 전체 결과(이벤트 포함)를 run 순서대로 돌려준다.
pub fn run_outputs(
    config: &MatchConfig,
    runs: usize,
    resources: &MatchResources,
) -> Result<Vec<MatchOutput>> {
    config.validate()?;
    (0..runs as u64)
        .into_par_iter()
        .map(|i| {
            let mut engine = MatchEngine::with_resources(config_for_run(config, i), resources.clone())?;
            engine.run();
            Ok(engine.into_output())
        })
        .collect()
}

pub fn run_batch(config: &MatchConfig, runs: usize, field: Arc<ValueField>) -> Result<BatchReport> {
    let resources = MatchResources::with_field(config, field);
    let summaries: Vec<MatchSummary> = run_outputs(config, runs, &resources)?
        .into_iter()
        .map(|output| output.summary)
        .collect();
    let aggregate = BatchAggregate::from_summaries(&summaries);
    info!(
        runs = aggregate.total_runs,
        mean_events = aggregate.mean_events,
        mean_goals = aggregate.mean_goals,
        "batch complete"
    );
    Ok(BatchReport { runs: summaries, aggregate })
}

//! Match Simulation CLI
//!
//! YAML config → N회 경기 → CSV / XES / (선택) JSON trace 로그

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use match_core::batch::{run_outputs, BatchAggregate};
use match_core::{
    write_csv, write_xes, MatchConfig, MatchEngine, MatchOutput, MatchResources, RealismLevel,
    TraceDump,
};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "match_sim")]
#[command(about = "Simulate 7-a-side matches and export possession traces", long_about = None)]
struct Cli {
    /// YAML config file (없으면 기본값)
    #[arg(short, long, default_value = "configs/base.yaml")]
    config: PathBuf,

    /// Number of matches to run
    #[arg(short, long, default_value_t = 1)]
    loops: usize,

    /// Override realism level
    #[arg(long, value_enum)]
    realism: Option<RealismArg>,

    /// Override max game time (seconds)
    #[arg(long)]
    time: Option<f64>,

    /// Override base seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Skip XES export
    #[arg(long)]
    no_xes: bool,

    /// Also write JSON dump (summary + sequences + events)
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RealismArg {
    Toy,
    Empirical,
}

impl From<RealismArg> for RealismLevel {
    fn from(arg: RealismArg) -> Self {
        match arg {
            RealismArg::Toy => RealismLevel::Toy,
            RealismArg::Empirical => RealismLevel::Empirical,
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// config 파일 + CLI override. start_time이 없으면 현재 시각.
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let mut config = if cli.config.exists() {
        MatchConfig::from_yaml_file(&cli.config)
            .with_context(|| format!("failed to load config {}", cli.config.display()))?
    } else {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
        MatchConfig::default()
    };

    if let Some(realism) = cli.realism {
        config.realism_level = realism.into();
    }
    if let Some(time) = cli.time {
        config.max_game_time = time;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if config.start_time.is_none() {
        config.start_time = Some(Utc::now());
    }

    config.validate().context("invalid configuration after CLI overrides")?;
    Ok(config)
}

/// `match_log.csv` → `match_log_3.csv`
fn output_path(out_dir: &Path, file_name: &str, run: Option<usize>) -> PathBuf {
    let Some(run) = run else {
        return out_dir.join(file_name);
    };
    let name = Path::new(file_name);
    let stem = name.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
    match name.extension().and_then(|e| e.to_str()) {
        Some(ext) => out_dir.join(format!("{stem}_{run}.{ext}")),
        None => out_dir.join(format!("{stem}_{run}")),
    }
}

struct ExportOptions<'a> {
    out_dir: &'a Path,
    xes: bool,
    json: bool,
}

fn write_outputs(
    config: &MatchConfig,
    opts: &ExportOptions<'_>,
    output: MatchOutput,
    run: Option<usize>,
) -> Result<()> {
    let logging = &config.logging;

    let csv_path = output_path(opts.out_dir, &logging.csv_output, run);
    let file = File::create(&csv_path).with_context(|| format!("create {}", csv_path.display()))?;
    write_csv(BufWriter::new(file), &output.events)
        .with_context(|| format!("write {}", csv_path.display()))?;

    if opts.xes {
        let xes_path = output_path(opts.out_dir, &logging.xes_output, run);
        let file =
            File::create(&xes_path).with_context(|| format!("create {}", xes_path.display()))?;
        write_xes(BufWriter::new(file), &output.events)
            .with_context(|| format!("write {}", xes_path.display()))?;
    }

    if opts.json {
        let json_path = output_path(opts.out_dir, &logging.json_output, run);
        TraceDump::from(output)
            .write_json(&json_path)
            .with_context(|| format!("write {}", json_path.display()))?;
    }

    info!(csv = %csv_path.display(), "trace written");
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output directory {}", cli.out_dir.display()))?;

    let opts = ExportOptions { out_dir: &cli.out_dir, xes: !cli.no_xes, json: cli.json };
    let resources = MatchResources::load(&config);

    info!(
        loops = cli.loops,
        seed = config.seed,
        realism = config.realism_level.as_str(),
        max_game_time = config.max_game_time,
        "starting simulation"
    );

    if cli.loops <= 1 {
        let mut engine = MatchEngine::with_resources(config.clone(), resources)?;
        engine.run();
        let output = engine.into_output();
        println!("{}", serde_json::to_string_pretty(&output.summary)?);
        write_outputs(&config, &opts, output, None)?;
        return Ok(());
    }

    let outputs = run_outputs(&config, cli.loops, &resources)?;
    let summaries: Vec<_> = outputs.iter().map(|o| o.summary.clone()).collect();
    for (i, output) in outputs.into_iter().enumerate() {
        write_outputs(&config, &opts, output, Some(i + 1))?;
    }
    let aggregate = BatchAggregate::from_summaries(&summaries);
    println!("{}", serde_json::to_string_pretty(&aggregate)?);
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

mod fuzz;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use env_logger::Env;
use glam::DVec2;

use strafer_agent::analyzer::{fire_gating_violations, summarize, SessionSummary};
use strafer_agent::{
    load_config, load_trace, random_trace, run_session, save_session_log, save_trace, StraferAgent,
};
use strafer_shared::*;

#[derive(Parser)]
#[command(name = "strafer", about = "Arena duel agent: replay, fuzz and inspect")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded trace through the agent
    Run {
        /// Trace JSON to replay
        #[arg(long)]
        trace: PathBuf,

        /// Agent config JSON (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the session log JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run the agent over random traces in parallel and check fire gating
    Fuzz {
        /// Number of seeds, starting at 0
        #[arg(long, default_value_t = 16)]
        seeds: u64,

        /// Ticks per trace
        #[arg(long, default_value_t = DEFAULT_TRACE_TICKS)]
        ticks: u64,

        /// Agent config JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a random trace to disk
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_TRACE_TICKS)]
        ticks: u64,

        #[arg(long)]
        output: PathBuf,
    },

    /// Print the default agent config as JSON
    Config,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("strafer=info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            trace,
            config,
            output,
        } => cmd_run(&trace, config.as_deref(), output.as_deref()),

        Commands::Fuzz {
            seeds,
            ticks,
            config,
        } => fuzz::cmd_fuzz(seeds, ticks, resolve_config(config.as_deref())),

        Commands::Generate {
            seed,
            ticks,
            output,
        } => cmd_generate(seed, ticks, &output),

        Commands::Config => cmd_config(),
    }
}

/// Load a config file, or fall back to the defaults. Exits on a bad file.
fn resolve_config(path: Option<&Path>) -> AgentConfig {
    let Some(path) = path else {
        return AgentConfig::default();
    };
    match load_config(path) {
        Ok(config) => {
            log::info!("using config {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Failed to load config {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_run(trace_path: &Path, config_path: Option<&Path>, output: Option<&Path>) {
    let config = resolve_config(config_path);
    let trace = match load_trace(trace_path) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Failed to load trace {}: {}", trace_path.display(), e);
            std::process::exit(1);
        }
    };

    let mut agent = StraferAgent::with_config(config);
    log::info!(
        "replaying {} frames from {}",
        trace.frames.len(),
        trace_path.display()
    );
    let session = run_session(&mut agent, &trace);
    let summary = summarize(&session);
    let violations =
        fire_gating_violations(&trace, &session, agent.config().fire_alignment_tolerance);

    println!();
    println!("=== Session Summary ===");
    print_summary(&summary);
    if !violations.is_empty() {
        println!("Fire gating violated on ticks {:?}", violations);
    }

    if let Some(path) = output {
        if let Err(e) = save_session_log(path, &session) {
            eprintln!("\nFailed to write session log {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("\nSession log written to {}", path.display());
    }

    if !violations.is_empty() {
        std::process::exit(1);
    }
}

fn print_summary(s: &SessionSummary) {
    println!("Ticks:      {}", s.ticks);
    println!("Scans:      {} ({} sweep ticks)", s.scans, s.sweeps);
    println!("Shots:      {} (mean power {:.2})", s.shots, s.mean_firepower);
    println!("Reversals:  {}", s.reversals);
    println!("Hits taken: {}", s.hits_taken);
    println!("Wall hits:  {}", s.wall_hits);
}

fn cmd_generate(seed: u64, ticks: u64, output: &Path) {
    let arena = DVec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);
    let trace = random_trace(seed, ticks, arena);
    if let Err(e) = save_trace(output, &trace) {
        eprintln!("Failed to write trace {}: {}", output.display(), e);
        std::process::exit(1);
    }
    println!(
        "Wrote {} frames (seed={}) to {}",
        trace.frames.len(),
        seed,
        output.display()
    );
}

fn cmd_config() {
    match serde_json::to_string_pretty(&AgentConfig::default()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
            std::process::exit(1);
        }
    }
}

use glam::DVec2;
use rayon::prelude::*;

use strafer_agent::analyzer::{fire_gating_violations, summarize, SessionSummary};
use strafer_agent::{random_trace, run_session, StraferAgent};
use strafer_shared::*;

struct FuzzResult {
    seed: u64,
    summary: SessionSummary,
    violations: Vec<u64>,
}

fn run_seed(seed: u64, ticks: u64, config: &AgentConfig) -> FuzzResult {
    let arena = DVec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);
    let trace = random_trace(seed, ticks, arena);
    let mut agent = StraferAgent::with_config(config.clone());
    let session = run_session(&mut agent, &trace);
    FuzzResult {
        seed,
        summary: summarize(&session),
        violations: fire_gating_violations(&trace, &session, config.fire_alignment_tolerance),
    }
}

fn print_table(results: &[FuzzResult]) {
    println!(
        "{:>6} {:>7} {:>6} {:>6} {:>6} {:>7} {:>5} {:>5} {:>5}",
        "seed", "ticks", "scans", "sweep", "shots", "power", "rev", "hits", "walls"
    );
    println!("{:-<64}", "");
    for r in results {
        let s = &r.summary;
        let marker = if r.violations.is_empty() { "" } else { " !" };
        println!(
            "{:>6} {:>7} {:>6} {:>6} {:>6} {:>7.2} {:>5} {:>5} {:>5}{}",
            r.seed,
            s.ticks,
            s.scans,
            s.sweeps,
            s.shots,
            s.mean_firepower,
            s.reversals,
            s.hits_taken,
            s.wall_hits,
            marker,
        );
    }
}

pub fn cmd_fuzz(seeds: u64, ticks: u64, config: AgentConfig) {
    println!("Fuzzing {} seeds x {} ticks", seeds, ticks);

    let seed_list: Vec<u64> = (0..seeds).collect();
    let results: Vec<FuzzResult> = seed_list
        .par_iter()
        .map(|&seed| run_seed(seed, ticks, &config))
        .collect();

    print_table(&results);

    let failed: Vec<&FuzzResult> = results.iter().filter(|r| !r.violations.is_empty()).collect();
    let total_shots: u32 = results.iter().map(|r| r.summary.shots).sum();
    println!();
    println!("Total shots: {}", total_shots);

    if failed.is_empty() {
        println!("Fire gating held on every seed.");
        return;
    }
    for r in &failed {
        log::error!("seed {}: fire gating violated on ticks {:?}", r.seed, r.violations);
    }
    eprintln!("{} of {} seeds violated fire gating", failed.len(), results.len());
    std::process::exit(1);
}

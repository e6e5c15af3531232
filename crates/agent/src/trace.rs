use std::path::Path;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strafer_shared::*;
use thiserror::Error;

use crate::geometry::{absolute_bearing_to, normalize_relative_angle_degrees};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("trace has no frames")]
    Empty,
    #[error("frame {index}: tick {tick} does not follow tick {previous}")]
    OutOfOrder { index: usize, tick: u64, previous: u64 },
    #[error("frame {index}: arena {width}x{height} is not usable")]
    BadArena { index: usize, width: f64, height: f64 },
}

/// Check the invariants the session driver relies on: at least one frame,
/// strictly increasing ticks, a positive arena.
pub fn validate_trace(trace: &Trace) -> Result<(), TraceError> {
    if trace.frames.is_empty() {
        return Err(TraceError::Empty);
    }
    let mut previous: Option<u64> = None;
    for (index, frame) in trace.frames.iter().enumerate() {
        let me = &frame.me;
        if !(me.arena_width > 0.0 && me.arena_height > 0.0) {
            return Err(TraceError::BadArena {
                index,
                width: me.arena_width,
                height: me.arena_height,
            });
        }
        if let Some(previous) = previous {
            if me.tick <= previous {
                return Err(TraceError::OutOfOrder {
                    index,
                    tick: me.tick,
                    previous,
                });
            }
        }
        previous = Some(me.tick);
    }
    Ok(())
}

pub fn load_trace(path: &Path) -> Result<Trace, TraceError> {
    let text = std::fs::read_to_string(path)?;
    let trace: Trace = serde_json::from_str(&text)?;
    validate_trace(&trace)?;
    log::debug!("loaded {} frames from {}", trace.frames.len(), path.display());
    Ok(trace)
}

pub fn save_trace(path: &Path, trace: &Trace) -> Result<(), TraceError> {
    let json = serde_json::to_string_pretty(trace)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn save_session_log(path: &Path, log: &SessionLog) -> Result<(), TraceError> {
    let json = serde_json::to_string_pretty(log)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_config(path: &Path) -> Result<AgentConfig, TraceError> {
    let text = std::fs::read_to_string(path)?;
    let config: AgentConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Per-tick odds used by [`random_trace`].
const SCAN_CHANCE: f64 = 0.8;
const OPPONENT_FIRE_CHANCE: f64 = 0.1;
const HIT_CHANCE: f64 = 0.04;
const WALL_CHANCE: f64 = 0.02;
const HOT_GUN_CHANCE: f64 = 0.6;

/// Well-formed but physically unrelated telemetry: every frame is drawn
/// independently, except opponent energy, which only ever falls. Good for
/// exercising the agent across the whole input space, not for judging play.
pub fn random_trace(seed: u64, ticks: u64, arena: DVec2) -> Trace {
    let mut rng = Pcg64::seed_from_u64(seed);
    let lo = DVec2::splat(ARENA_EDGE_MARGIN);
    // Arenas narrower than two margins still get a sampleable range.
    let hi = (arena - lo).max(lo + DVec2::ONE);
    let mut opponent_energy = INITIAL_OPPONENT_ENERGY;
    let mut frames = Vec::with_capacity(ticks as usize);

    for tick in 1..=ticks {
        let position = DVec2::new(rng.gen_range(lo.x..hi.x), rng.gen_range(lo.y..hi.y));
        let heading = rng.gen_range(0.0..360.0);
        let me = SelfState {
            position,
            heading,
            gun_heading: rng.gen_range(0.0..360.0),
            radar_heading: rng.gen_range(0.0..360.0),
            energy: rng.gen_range(0.1..100.0),
            gun_heat: if rng.gen_bool(HOT_GUN_CHANCE) {
                rng.gen_range(0.1..1.6)
            } else {
                0.0
            },
            arena_width: arena.x,
            arena_height: arena.y,
            tick,
        };

        let mut events = Vec::new();
        if rng.gen_bool(SCAN_CHANCE) {
            if rng.gen_bool(OPPONENT_FIRE_CHANCE) {
                opponent_energy = (opponent_energy - rng.gen_range(0.1..3.0)).max(0.0);
            }
            let opponent = DVec2::new(rng.gen_range(lo.x..hi.x), rng.gen_range(lo.y..hi.y));
            let bearing = normalize_relative_angle_degrees(absolute_bearing_to(position, opponent) - heading);
            events.push(HostEvent::Scan(ScanObservation {
                bearing,
                distance: position.distance(opponent),
                heading: rng.gen_range(0.0..360.0),
                velocity: rng.gen_range(-8.0..=8.0),
                energy: opponent_energy,
                tick,
            }));
        }
        if rng.gen_bool(HIT_CHANCE) {
            events.push(HostEvent::HitByBullet(HitByBullet {
                bearing: rng.gen_range(-180.0..180.0),
            }));
        }
        if rng.gen_bool(WALL_CHANCE) {
            events.push(HostEvent::HitWall);
        }

        frames.push(TraceFrame { me, events });
    }

    Trace {
        seed: Some(seed),
        frames,
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Colors;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be finite and positive, got {1}")]
    NotPositive(&'static str, f64),
    #[error("firepower {0} outside [{min}, {max}]", min = MIN_FIREPOWER, max = MAX_FIREPOWER)]
    FirepowerOutOfRange(f64),
    #[error("firepower tiers must have strictly decreasing ranges and non-decreasing power")]
    UnorderedTiers,
    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),
    #[error("wall probe ({probe}) must reach beyond the wall margin ({margin})")]
    ProbeInsideMargin { probe: f64, margin: f64 },
}

/// Fire with `power` when the target is strictly farther than `beyond`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirepowerTier {
    pub beyond: f64,
    pub power: f64,
}

/// Tuning for the strafer agent. The defaults are the stock behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub radar_overcompensation: f64,
    pub radar_sweep: f64,

    pub initial_opponent_energy: f64,
    pub max_shot_energy_drop: f64,

    /// Ordered from longest range to shortest.
    pub firepower_tiers: Vec<FirepowerTier>,
    pub point_blank_power: f64,
    pub low_energy_threshold: f64,
    pub low_energy_power_cap: f64,

    pub bullet_base_speed: f64,
    pub bullet_power_slowdown: f64,
    pub prediction_max_steps: u32,
    pub arena_edge_margin: f64,
    pub fire_alignment_tolerance: f64,

    pub strafe_offset: f64,
    pub strafe_distance: f64,
    pub direction_change_interval: u64,

    pub wall_margin: f64,
    pub wall_probe_distance: f64,
    pub wall_smoothing_step: f64,
    pub wall_smoothing_attempts: u32,

    pub bullet_evade_distance: f64,
    pub bullet_evade_turn: f64,
    pub wall_recoil_distance: f64,
    pub wall_recoil_turn: f64,

    pub colors: Colors,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            radar_overcompensation: RADAR_OVERCOMPENSATION,
            radar_sweep: RADAR_SWEEP_DEGREES,
            initial_opponent_energy: INITIAL_OPPONENT_ENERGY,
            max_shot_energy_drop: MAX_SHOT_ENERGY_DROP,
            firepower_tiers: vec![
                FirepowerTier { beyond: LONG_RANGE, power: LONG_RANGE_POWER },
                FirepowerTier { beyond: MID_RANGE, power: MID_RANGE_POWER },
                FirepowerTier { beyond: CLOSE_RANGE, power: CLOSE_RANGE_POWER },
            ],
            point_blank_power: POINT_BLANK_POWER,
            low_energy_threshold: LOW_ENERGY_THRESHOLD,
            low_energy_power_cap: LOW_ENERGY_POWER_CAP,
            bullet_base_speed: BULLET_BASE_SPEED,
            bullet_power_slowdown: BULLET_POWER_SLOWDOWN,
            prediction_max_steps: PREDICTION_MAX_STEPS,
            arena_edge_margin: ARENA_EDGE_MARGIN,
            fire_alignment_tolerance: FIRE_ALIGNMENT_TOLERANCE,
            strafe_offset: STRAFE_OFFSET,
            strafe_distance: STRAFE_DISTANCE,
            direction_change_interval: DIRECTION_CHANGE_INTERVAL,
            wall_margin: WALL_MARGIN,
            wall_probe_distance: WALL_PROBE_DISTANCE,
            wall_smoothing_step: WALL_SMOOTHING_STEP,
            wall_smoothing_attempts: WALL_SMOOTHING_ATTEMPTS,
            bullet_evade_distance: BULLET_EVADE_DISTANCE,
            bullet_evade_turn: BULLET_EVADE_TURN,
            wall_recoil_distance: WALL_RECOIL_DISTANCE,
            wall_recoil_turn: WALL_RECOIL_TURN,
            colors: Colors::default(),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name, value))
    }
}

fn firepower(value: f64) -> Result<(), ConfigError> {
    if (MIN_FIREPOWER..=MAX_FIREPOWER).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::FirepowerOutOfRange(value))
    }
}

impl AgentConfig {
    /// Reject values that would make the agent misbehave rather than merely
    /// play differently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("radar_overcompensation", self.radar_overcompensation)?;
        positive("radar_sweep", self.radar_sweep)?;
        positive("initial_opponent_energy", self.initial_opponent_energy)?;
        positive("max_shot_energy_drop", self.max_shot_energy_drop)?;
        positive("bullet_base_speed", self.bullet_base_speed)?;
        positive("fire_alignment_tolerance", self.fire_alignment_tolerance)?;
        positive("strafe_distance", self.strafe_distance)?;
        positive("wall_margin", self.wall_margin)?;
        positive("wall_probe_distance", self.wall_probe_distance)?;
        positive("wall_smoothing_step", self.wall_smoothing_step)?;

        for tier in &self.firepower_tiers {
            positive("firepower tier range", tier.beyond)?;
            firepower(tier.power)?;
        }
        let ordered = self
            .firepower_tiers
            .windows(2)
            .all(|w| w[0].beyond > w[1].beyond && w[0].power <= w[1].power);
        let last_power = self.firepower_tiers.last().map_or(0.0, |t| t.power);
        if !ordered || last_power > self.point_blank_power {
            return Err(ConfigError::UnorderedTiers);
        }
        firepower(self.point_blank_power)?;
        firepower(self.low_energy_power_cap)?;

        if self.prediction_max_steps == 0 {
            return Err(ConfigError::ZeroCount("prediction_max_steps"));
        }
        if self.wall_smoothing_attempts == 0 {
            return Err(ConfigError::ZeroCount("wall_smoothing_attempts"));
        }
        if self.direction_change_interval == 0 {
            return Err(ConfigError::ZeroCount("direction_change_interval"));
        }
        if self.wall_probe_distance <= self.wall_margin {
            return Err(ConfigError::ProbeInsideMargin {
                probe: self.wall_probe_distance,
                margin: self.wall_margin,
            });
        }
        Ok(())
    }
}

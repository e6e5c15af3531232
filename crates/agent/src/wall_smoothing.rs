use glam::DVec2;
use strafer_shared::AgentConfig;

use crate::geometry::{inside_margin, to_absolute_coordinate};

/// Bends a travel heading away from the walls. A probe point is projected
/// ahead along the heading; while it falls outside the safe interior the
/// heading is rotated a fixed step in the `orientation` direction.
#[derive(Debug, Clone)]
pub struct WallSmoother {
    margin: f64,
    probe_distance: f64,
    step: f64,
    attempts: u32,
}

impl WallSmoother {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            margin: config.wall_margin,
            probe_distance: config.wall_probe_distance,
            step: config.wall_smoothing_step,
            attempts: config.wall_smoothing_attempts,
        }
    }

    pub fn is_safe(&self, position: DVec2, arena: DVec2, angle: f64) -> bool {
        let probe = to_absolute_coordinate(position, angle, self.probe_distance);
        inside_margin(probe, arena, self.margin)
    }

    /// Returns the first safe heading found, or the last adjusted one if the
    /// attempts run out.
    pub fn smooth(&self, position: DVec2, arena: DVec2, angle: f64, orientation: f64) -> f64 {
        let mut angle = angle;
        for _ in 0..self.attempts {
            if self.is_safe(position, arena, angle) {
                return angle;
            }
            angle += orientation * self.step;
        }
        angle
    }
}

use strafer_shared::{AgentConfig, Command, SelfState};

use crate::geometry::normalize_relative_angle_degrees;

/// Keeps the radar on the opponent once it has been seen and sweeps
/// otherwise.
#[derive(Debug, Clone)]
pub struct RadarController {
    overcompensation: f64,
    sweep: f64,
}

impl RadarController {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            overcompensation: config.radar_overcompensation,
            sweep: config.radar_sweep,
        }
    }

    /// Turn past the opponent's absolute bearing so the beam crosses it again
    /// next tick instead of stopping on it.
    pub fn lock(&self, me: &SelfState, absolute_bearing: f64) -> Command {
        let offset = normalize_relative_angle_degrees(absolute_bearing - me.radar_heading);
        Command::TurnRadar(offset * self.overcompensation)
    }

    pub fn sweep(&self) -> Command {
        Command::TurnRadar(self.sweep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn me(radar_heading: f64) -> SelfState {
        SelfState {
            position: DVec2::new(400.0, 300.0),
            heading: 0.0,
            gun_heading: 0.0,
            radar_heading,
            energy: 100.0,
            gun_heat: 0.0,
            arena_width: 800.0,
            arena_height: 600.0,
            tick: 1,
        }
    }

    fn turn(cmd: Command) -> f64 {
        match cmd {
            Command::TurnRadar(deg) => deg,
            other => panic!("expected a radar turn, got {other:?}"),
        }
    }

    #[test]
    fn test_lock_doubles_offset() {
        let radar = RadarController::new(&AgentConfig::default());
        assert_relative_eq!(turn(radar.lock(&me(10.0), 30.0)), 40.0);
        assert_relative_eq!(turn(radar.lock(&me(30.0), 10.0)), -40.0);
    }

    #[test]
    fn test_lock_takes_short_way_round() {
        let radar = RadarController::new(&AgentConfig::default());
        // 350 -> 10 is +20, not -340
        assert_relative_eq!(turn(radar.lock(&me(350.0), 10.0)), 40.0);
        assert_relative_eq!(turn(radar.lock(&me(10.0), 350.0)), -40.0);
    }

    #[test]
    fn test_sweep_is_full_circle() {
        let radar = RadarController::new(&AgentConfig::default());
        assert_eq!(radar.sweep(), Command::TurnRadar(360.0));
    }
}

use glam::DVec2;
use strafer_shared::{AgentConfig, Command, FirepowerTier, SelfState};

use crate::geometry::*;

/// Opponent motion as last observed: straight line, constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTarget {
    pub position: DVec2,
    pub heading: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub aim_point: DVec2,
    /// Virtual ticks elapsed when the search stopped.
    pub steps: u32,
}

/// Gun decision for one scan. Not kept between scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringDecision {
    pub firepower: f64,
    pub aim_point: DVec2,
    pub gun_turn: f64,
    pub fire: bool,
}

impl FiringDecision {
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = vec![Command::TurnGun(self.gun_turn)];
        if self.fire {
            commands.push(Command::Fire(self.firepower));
        }
        commands
    }
}

/// Picks bullet power, leads the target and decides whether to pull the
/// trigger.
#[derive(Debug, Clone)]
pub struct FiringSolver {
    tiers: Vec<FirepowerTier>,
    point_blank_power: f64,
    low_energy_threshold: f64,
    low_energy_power_cap: f64,
    bullet_base_speed: f64,
    bullet_power_slowdown: f64,
    max_steps: u32,
    edge_margin: f64,
    alignment_tolerance: f64,
}

impl FiringSolver {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            tiers: config.firepower_tiers.clone(),
            point_blank_power: config.point_blank_power,
            low_energy_threshold: config.low_energy_threshold,
            low_energy_power_cap: config.low_energy_power_cap,
            bullet_base_speed: config.bullet_base_speed,
            bullet_power_slowdown: config.bullet_power_slowdown,
            max_steps: config.prediction_max_steps,
            edge_margin: config.arena_edge_margin,
            alignment_tolerance: config.fire_alignment_tolerance,
        }
    }

    /// Heavier bullets up close, lighter ones at range; never more than the
    /// cap while our own energy is low.
    pub fn select_firepower(&self, distance: f64, energy: f64) -> f64 {
        let power = self
            .tiers
            .iter()
            .find(|tier| distance > tier.beyond)
            .map_or(self.point_blank_power, |tier| tier.power);
        if energy < self.low_energy_threshold {
            power.min(self.low_energy_power_cap)
        } else {
            power
        }
    }

    pub fn bullet_speed(&self, firepower: f64) -> f64 {
        self.bullet_base_speed - self.bullet_power_slowdown * firepower
    }

    /// Walk the target forward one tick at a time until a bullet fired now
    /// would have covered the distance to it. The result always lies inside
    /// the arena's edge margin.
    pub fn predict(&self, me: &SelfState, target: &LinearTarget, bullet_speed: f64) -> Prediction {
        let arena = me.arena();
        let mut aim_point = clamp_to_arena(target.position, arena, self.edge_margin);

        // Also catches NaN.
        if !(bullet_speed > 0.0) {
            return Prediction { aim_point, steps: 0 };
        }

        let step = bearing_vector(target.heading) * target.velocity;
        let mut steps = 0u32;
        loop {
            steps += 1;
            let reached = f64::from(steps) * bullet_speed >= me.position.distance(aim_point);
            if reached || steps >= self.max_steps {
                break;
            }
            aim_point = clamp_to_arena(aim_point + step, arena, self.edge_margin);
        }

        log::trace!(
            "predicted intercept at ({:.1}, {:.1}) after {} steps",
            aim_point.x,
            aim_point.y,
            steps
        );
        Prediction { aim_point, steps }
    }

    pub fn should_fire(&self, gun_turn: f64, gun_heat: f64) -> bool {
        gun_turn.abs() < self.alignment_tolerance && gun_heat == 0.0
    }

    pub fn solve(&self, me: &SelfState, target: &LinearTarget, distance: f64) -> FiringDecision {
        let firepower = self.select_firepower(distance, me.energy);
        let prediction = self.predict(me, target, self.bullet_speed(firepower));
        let aim_bearing = absolute_bearing_to(me.position, prediction.aim_point);
        let gun_turn = normalize_relative_angle_degrees(aim_bearing - me.gun_heading);
        let fire = self.should_fire(gun_turn, me.gun_heat);

        if fire {
            log::debug!("tick {}: firing {:.1} at turn {:.1}", me.tick, firepower, gun_turn);
        }

        FiringDecision {
            firepower,
            aim_point: prediction.aim_point,
            gun_turn,
            fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn me() -> SelfState {
        SelfState {
            position: DVec2::new(400.0, 400.0),
            heading: 0.0,
            gun_heading: 0.0,
            radar_heading: 0.0,
            energy: 100.0,
            gun_heat: 0.0,
            arena_width: 800.0,
            arena_height: 800.0,
            tick: 10,
        }
    }

    fn solver() -> FiringSolver {
        FiringSolver::new(&AgentConfig::default())
    }

    #[test]
    fn test_firepower_tiers() {
        let s = solver();
        assert_eq!(s.select_firepower(700.0, 100.0), 1.0);
        assert_eq!(s.select_firepower(400.0, 100.0), 1.8);
        assert_eq!(s.select_firepower(250.0, 100.0), 2.2);
        assert_eq!(s.select_firepower(100.0, 100.0), 3.0);
    }

    #[test]
    fn test_firepower_tier_boundaries() {
        let s = solver();
        assert_eq!(s.select_firepower(600.0, 100.0), 1.8);
        assert_eq!(s.select_firepower(350.0, 100.0), 2.2);
        assert_eq!(s.select_firepower(180.0, 100.0), 3.0);
    }

    #[test]
    fn test_firepower_non_increasing_with_distance() {
        let s = solver();
        let mut last = f64::MAX;
        for d in (0..1200).step_by(10) {
            let p = s.select_firepower(d as f64, 100.0);
            assert!(p <= last, "power rose at distance {d}");
            last = p;
        }
    }

    #[test]
    fn test_low_energy_cap() {
        let s = solver();
        assert_eq!(s.select_firepower(100.0, 19.9), 1.5);
        assert_eq!(s.select_firepower(250.0, 5.0), 1.5);
        assert_eq!(s.select_firepower(700.0, 5.0), 1.0);
        assert_eq!(s.select_firepower(100.0, 20.0), 3.0);
    }

    #[test]
    fn test_bullet_speed() {
        let s = solver();
        assert_relative_eq!(s.bullet_speed(3.0), 11.0);
        assert_relative_eq!(s.bullet_speed(1.0), 17.0);
    }

    #[test]
    fn test_stationary_target_is_aimed_directly() {
        let s = solver();
        let target = LinearTarget {
            position: DVec2::new(400.0, 600.0),
            heading: 90.0,
            velocity: 0.0,
        };
        let p = s.predict(&me(), &target, 11.0);
        assert_eq!(p.aim_point, target.position);
        assert_eq!(p.steps, 19); // 19 * 11 >= 200
    }

    #[test]
    fn test_prediction_leads_moving_target() {
        let s = solver();
        let target = LinearTarget {
            position: DVec2::new(400.0, 600.0),
            heading: 90.0,
            velocity: 8.0,
        };
        let p = s.predict(&me(), &target, 11.0);
        assert!(p.aim_point.x > 400.0);
        assert_relative_eq!(p.aim_point.y, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_prediction_step_cap_and_clamp() {
        let s = solver();
        // Receding faster than the bullet: pinned against the north wall
        // and still out of reach when the clock runs out.
        let target = LinearTarget {
            position: DVec2::new(400.0, 500.0),
            heading: 0.0,
            velocity: 16.0,
        };
        let p = s.predict(&me(), &target, 1.0);
        assert_eq!(p.steps, 60);
        assert_relative_eq!(p.aim_point.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(p.aim_point.y, 800.0 - 18.0);
    }

    #[test]
    fn test_non_positive_bullet_speed_stops_immediately() {
        let s = solver();
        let target = LinearTarget {
            position: DVec2::new(900.0, 400.0),
            heading: 0.0,
            velocity: 8.0,
        };
        for speed in [0.0, -4.0, f64::NAN] {
            let p = s.predict(&me(), &target, speed);
            assert_eq!(p.steps, 0);
            assert_eq!(p.aim_point, DVec2::new(782.0, 400.0));
        }
    }

    #[test]
    fn test_fire_gating() {
        let s = solver();
        assert!(s.should_fire(15.0, 0.0));
        assert!(s.should_fire(-19.9, 0.0));
        assert!(!s.should_fire(15.0, 0.5));
        assert!(!s.should_fire(20.0, 0.0));
        assert!(!s.should_fire(-25.0, 0.0));
    }

    #[test]
    fn test_solve_fires_when_aligned() {
        let s = solver();
        let target = LinearTarget {
            position: DVec2::new(400.0, 600.0),
            heading: 0.0,
            velocity: 0.0,
        };
        let decision = s.solve(&me(), &target, 200.0);
        assert_eq!(decision.firepower, 2.2);
        assert_relative_eq!(decision.gun_turn, 0.0, epsilon = 1e-9);
        assert!(decision.fire);
        assert_eq!(
            decision.commands(),
            vec![Command::TurnGun(decision.gun_turn), Command::Fire(2.2)]
        );

        let hot = SelfState { gun_heat: 0.4, ..me() };
        let decision = s.solve(&hot, &target, 200.0);
        assert!(!decision.fire);
        assert_eq!(decision.commands().len(), 1);
    }
}

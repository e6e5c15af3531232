use strafer_shared::{AgentConfig, Command, SelfState};

use crate::geometry::normalize_relative_angle_degrees;
use crate::wall_smoothing::WallSmoother;

/// Which way we circle the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub direction: Direction,
    pub last_direction_change_tick: u64,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            direction: Direction::Clockwise,
            last_direction_change_tick: 0,
        }
    }
}

impl MovementState {
    /// The only way `direction` changes. Every flip, reflexes included,
    /// restarts the periodic clock.
    pub fn flip(&mut self, tick: u64) {
        self.direction = self.direction.reversed();
        self.last_direction_change_tick = tick;
    }
}

/// Why the strafing direction changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipReason {
    IncomingFire,
    Periodic,
}

/// Strafes perpendicular to the opponent, reversing when a shot is likely
/// incoming and at a fixed cadence otherwise.
#[derive(Debug, Clone)]
pub struct MovementController {
    strafe_offset: f64,
    strafe_distance: f64,
    direction_change_interval: u64,
    smoother: WallSmoother,
}

impl MovementController {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            strafe_offset: config.strafe_offset,
            strafe_distance: config.strafe_distance,
            direction_change_interval: config.direction_change_interval,
            smoother: WallSmoother::new(config),
        }
    }

    /// Apply the flip triggers in order. A reactive flip resets the clock, so
    /// the periodic trigger never follows it on the same tick.
    pub fn update_direction(
        &self,
        state: &mut MovementState,
        tick: u64,
        likely_fired: bool,
    ) -> Vec<FlipReason> {
        let mut flips = Vec::new();
        if likely_fired {
            state.flip(tick);
            flips.push(FlipReason::IncomingFire);
        }
        if tick.saturating_sub(state.last_direction_change_tick) > self.direction_change_interval {
            state.flip(tick);
            flips.push(FlipReason::Periodic);
        }
        for reason in &flips {
            log::debug!("tick {tick}: reversing ({reason:?}), now {:?}", state.direction);
        }
        flips
    }

    /// Heading square to the opponent, bent away from walls.
    pub fn travel_angle(&self, me: &SelfState, state: &MovementState, absolute_bearing: f64) -> f64 {
        let sign = state.direction.sign();
        let angle = absolute_bearing + self.strafe_offset * sign;
        self.smoother.smooth(me.position, me.arena(), angle, sign)
    }

    pub fn strafe(&self, me: &SelfState, state: &MovementState, absolute_bearing: f64) -> [Command; 2] {
        let angle = self.travel_angle(me, state, absolute_bearing);
        [
            Command::TurnBody(normalize_relative_angle_degrees(angle - me.heading)),
            Command::Advance(self.strafe_distance * state.direction.sign()),
        ]
    }
}

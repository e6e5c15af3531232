use strafer_shared::*;

use crate::agent::Agent;
use crate::evasion::EvasionController;
use crate::firing::{FiringSolver, LinearTarget};
use crate::geometry::to_absolute_coordinate;
use crate::movement::{MovementController, MovementState};
use crate::radar::RadarController;
use crate::tracker::{TargetTracker, TrackedOpponent};

/// Everything the agent carries from one tick to the next. Lives for one
/// match.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentState {
    pub opponent: TrackedOpponent,
    pub movement: MovementState,
}

impl AgentState {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            opponent: TrackedOpponent::new(config.initial_opponent_energy),
            movement: MovementState::default(),
        }
    }
}

/// One-on-one duelist: radar lock, linear-lead gun, perpendicular strafing
/// that reverses on detected enemy fire and at a fixed cadence.
pub struct StraferAgent {
    config: AgentConfig,
    state: AgentState,
    radar: RadarController,
    tracker: TargetTracker,
    solver: FiringSolver,
    movement: MovementController,
    evasion: EvasionController,
}

impl StraferAgent {
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            state: AgentState::new(&config),
            radar: RadarController::new(&config),
            tracker: TargetTracker::new(&config),
            solver: FiringSolver::new(&config),
            movement: MovementController::new(&config),
            evasion: EvasionController::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }
}

impl Default for StraferAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for StraferAgent {
    fn name(&self) -> &str {
        "strafer"
    }

    fn on_start(&mut self) -> Vec<Command> {
        vec![Command::Setup(ActuatorSetup {
            adjust_gun_for_body_turn: true,
            adjust_radar_for_gun_turn: true,
            colors: self.config.colors,
        })]
    }

    fn on_tick(&mut self, me: &SelfState) -> Vec<Command> {
        // A scan this tick already steered the radar.
        if self.state.opponent.scanned_at(me.tick) {
            Vec::new()
        } else {
            vec![self.radar.sweep()]
        }
    }

    fn on_scan(&mut self, me: &SelfState, scan: &ScanObservation) -> Vec<Command> {
        let absolute_bearing = me.heading + scan.bearing;
        let signal = self.tracker.assess(&self.state.opponent, scan);

        let mut commands = Vec::with_capacity(5);
        commands.push(self.radar.lock(me, absolute_bearing));

        let target = LinearTarget {
            position: to_absolute_coordinate(me.position, absolute_bearing, scan.distance),
            heading: scan.heading,
            velocity: scan.velocity,
        };
        let decision = self.solver.solve(me, &target, scan.distance);
        commands.extend(decision.commands());

        self.movement
            .update_direction(&mut self.state.movement, me.tick, signal.likely_fired);
        commands.extend(self.movement.strafe(me, &self.state.movement, absolute_bearing));

        self.tracker.commit(&mut self.state.opponent, scan, me.tick);
        commands
    }

    fn on_hit_by_bullet(&mut self, me: &SelfState, hit: &HitByBullet) -> Vec<Command> {
        self.evasion
            .hit_by_bullet(&mut self.state.movement, me.tick, hit)
            .to_vec()
    }

    fn on_hit_wall(&mut self, me: &SelfState, _hit: &HitWall) -> Vec<Command> {
        self.evasion.hit_wall(&mut self.state.movement, me.tick).to_vec()
    }
}

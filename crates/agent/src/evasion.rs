use strafer_shared::{AgentConfig, Command, HitByBullet};

use crate::movement::MovementState;

/// Reflexes for impacts. They reverse the strafing direction and replace
/// whatever movement was in flight.
#[derive(Debug, Clone)]
pub struct EvasionController {
    bullet_evade_distance: f64,
    bullet_evade_turn: f64,
    wall_recoil_distance: f64,
    wall_recoil_turn: f64,
}

impl EvasionController {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            bullet_evade_distance: config.bullet_evade_distance,
            bullet_evade_turn: config.bullet_evade_turn,
            wall_recoil_distance: config.wall_recoil_distance,
            wall_recoil_turn: config.wall_recoil_turn,
        }
    }

    /// Dash off sideways to the line the bullet came in on.
    pub fn hit_by_bullet(&self, state: &mut MovementState, tick: u64, hit: &HitByBullet) -> [Command; 2] {
        state.flip(tick);
        log::debug!("tick {tick}: hit from {:.1}, dodging {:?}", hit.bearing, state.direction);
        [
            Command::Advance(self.bullet_evade_distance * state.direction.sign()),
            Command::TurnBody(self.bullet_evade_turn - hit.bearing),
        ]
    }

    pub fn hit_wall(&self, state: &mut MovementState, tick: u64) -> [Command; 2] {
        state.flip(tick);
        log::debug!("tick {tick}: hit wall, backing off {:?}", state.direction);
        [
            Command::Advance(self.wall_recoil_distance * state.direction.sign()),
            Command::TurnBody(self.wall_recoil_turn),
        ]
    }
}

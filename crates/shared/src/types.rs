use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Host telemetry for our own robot, refreshed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelfState {
    pub position: DVec2,
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub energy: f64,
    pub gun_heat: f64,
    pub arena_width: f64,
    pub arena_height: f64,
    pub tick: u64,
}

impl SelfState {
    pub fn arena(&self) -> DVec2 {
        DVec2::new(self.arena_width, self.arena_height)
    }

    pub fn gun_ready(&self) -> bool {
        self.gun_heat == 0.0
    }
}

/// A single radar contact. `bearing` is relative to our body heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanObservation {
    pub bearing: f64,
    pub distance: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub tick: u64,
}

/// We were struck. `bearing` is the direction the bullet came from, relative
/// to our body heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitByBullet {
    pub bearing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitWall;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Scan(ScanObservation),
    HitByBullet(HitByBullet),
    HitWall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub body: Rgb,
    pub gun: Rgb,
    pub radar: Rgb,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            body: Rgb::GREEN,
            gun: Rgb::GREEN,
            radar: Rgb::BLUE,
        }
    }
}

/// Match-start request telling the host how our turrets are coupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorSetup {
    /// Gun keeps its heading while the body turns.
    pub adjust_gun_for_body_turn: bool,
    /// Radar keeps its heading while the gun turns.
    pub adjust_radar_for_gun_turn: bool,
    pub colors: Colors,
}

/// Actuation command sent to the host. Turns are signed degrees (positive is
/// clockwise), `Advance` is a signed distance, `Fire` carries the bullet power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    TurnRadar(f64),
    TurnGun(f64),
    TurnBody(f64),
    Advance(f64),
    Fire(f64),
    Setup(ActuatorSetup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Radar,
    Gun,
    Body,
    Drive,
    Trigger,
    Setup,
}

impl Command {
    pub fn axis(&self) -> Axis {
        match self {
            Command::TurnRadar(_) => Axis::Radar,
            Command::TurnGun(_) => Axis::Gun,
            Command::TurnBody(_) => Axis::Body,
            Command::Advance(_) => Axis::Drive,
            Command::Fire(_) => Axis::Trigger,
            Command::Setup(_) => Axis::Setup,
        }
    }
}

/// Reduce a tick's commands to one per axis. The last command issued for an
/// axis wins but keeps the slot of the first one; setup commands pass through.
pub fn collapse_commands(commands: Vec<Command>) -> Vec<Command> {
    let mut out: Vec<Command> = Vec::with_capacity(commands.len());
    for cmd in commands {
        let axis = cmd.axis();
        if axis == Axis::Setup {
            out.push(cmd);
            continue;
        }
        match out.iter_mut().find(|c| c.axis() == axis) {
            Some(slot) => *slot = cmd,
            None => out.push(cmd),
        }
    }
    out
}

/// Telemetry and events the host delivered for one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFrame {
    pub me: SelfState,
    #[serde(default)]
    pub events: Vec<HostEvent>,
}

/// A recorded run of host telemetry, replayable through any agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub seed: Option<u64>,
    pub frames: Vec<TraceFrame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub events: Vec<HostEvent>,
    pub commands: Vec<Command>,
}

/// Everything an agent decided over a trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub agent: String,
    pub setup: Vec<Command>,
    pub ticks: Vec<TickRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_keeps_last_per_axis() {
        let cmds = vec![
            Command::TurnRadar(10.0),
            Command::TurnBody(30.0),
            Command::Advance(150.0),
            Command::Advance(-120.0),
            Command::TurnBody(45.0),
            Command::TurnRadar(360.0),
        ];
        let out = collapse_commands(cmds);
        assert_eq!(
            out,
            vec![
                Command::TurnRadar(360.0),
                Command::TurnBody(45.0),
                Command::Advance(-120.0),
            ]
        );
    }

    #[test]
    fn test_collapse_passes_setup_through() {
        let setup = ActuatorSetup {
            adjust_gun_for_body_turn: true,
            adjust_radar_for_gun_turn: true,
            colors: Colors::default(),
        };
        let out = collapse_commands(vec![Command::Setup(setup), Command::Setup(setup)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_host_event_json_shape() {
        let json = r#"[
            {"type": "scan", "bearing": 30.0, "distance": 300.0, "heading": 90.0,
             "velocity": 4.0, "energy": 90.0, "tick": 7},
            {"type": "hit_by_bullet", "bearing": -45.0},
            {"type": "hit_wall"}
        ]"#;
        let events: Vec<HostEvent> = serde_json::from_str(json).expect("events should parse");
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], HostEvent::Scan(s) if s.tick == 7));
        assert_eq!(events[1], HostEvent::HitByBullet(HitByBullet { bearing: -45.0 }));
        assert_eq!(events[2], HostEvent::HitWall);
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&Command::Fire(2.2)).expect("command should serialize");
        assert_eq!(json, r#"{"command":"fire","value":2.2}"#);
    }
}

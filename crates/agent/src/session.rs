use strafer_shared::*;

use crate::agent::Agent;

/// Play a recorded trace through an agent. Each frame's events are
/// dispatched in order, then the tick is closed with `on_tick`; the commands
/// of a tick are collapsed to one per axis, the way the host applies them.
pub fn run_session(agent: &mut dyn Agent, trace: &Trace) -> SessionLog {
    let setup = agent.on_start();
    let mut ticks = Vec::with_capacity(trace.frames.len());

    for frame in &trace.frames {
        let me = &frame.me;
        let mut commands = Vec::new();

        for event in &frame.events {
            let issued = match event {
                HostEvent::Scan(scan) => agent.on_scan(me, scan),
                HostEvent::HitByBullet(hit) => agent.on_hit_by_bullet(me, hit),
                HostEvent::HitWall => agent.on_hit_wall(me, &HitWall),
            };
            commands.extend(issued);
        }
        commands.extend(agent.on_tick(me));

        ticks.push(TickRecord {
            tick: me.tick,
            events: frame.events.clone(),
            commands: collapse_commands(commands),
        });
    }

    SessionLog {
        agent: agent.name().to_string(),
        setup,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::IdleAgent;
    use crate::strafer::StraferAgent;
    use glam::DVec2;

    fn me(tick: u64) -> SelfState {
        SelfState {
            position: DVec2::new(200.0, 300.0),
            heading: 90.0,
            gun_heading: 90.0,
            radar_heading: 90.0,
            energy: 80.0,
            gun_heat: 0.0,
            arena_width: 800.0,
            arena_height: 600.0,
            tick,
        }
    }

    fn trace() -> Trace {
        let scan = ScanObservation {
            bearing: 0.0,
            distance: 400.0,
            heading: 0.0,
            velocity: 0.0,
            energy: 100.0,
            tick: 2,
        };
        Trace {
            seed: None,
            frames: vec![
                TraceFrame { me: me(1), events: vec![] },
                TraceFrame { me: me(2), events: vec![HostEvent::Scan(scan)] },
                TraceFrame {
                    me: me(3),
                    events: vec![HostEvent::Scan(ScanObservation { tick: 3, ..scan }), HostEvent::HitWall],
                },
            ],
        }
    }

    #[test]
    fn test_idle_agent_issues_nothing() {
        let log = run_session(&mut IdleAgent, &trace());
        assert_eq!(log.agent, "idle");
        assert!(log.setup.is_empty());
        assert!(log.ticks.iter().all(|t| t.commands.is_empty()));
    }

    #[test]
    fn test_strafer_session() {
        let mut agent = StraferAgent::new();
        let log = run_session(&mut agent, &trace());

        assert_eq!(log.setup.len(), 1);
        assert_eq!(log.ticks.len(), 3);
        assert_eq!(log.ticks[0].commands, vec![Command::TurnRadar(360.0)]);

        // Opponent dead ahead and still: radar and gun need no correction
        let second = &log.ticks[1].commands;
        assert_eq!(second[0], Command::TurnRadar(0.0));
        assert_eq!(second[1], Command::TurnGun(0.0));
        assert_eq!(second[2], Command::Fire(1.8));
    }

    #[test]
    fn test_wall_reflex_overrides_strafe() {
        let mut agent = StraferAgent::new();
        let log = run_session(&mut agent, &trace());
        let third = &log.ticks[2].commands;

        let drives: Vec<&Command> = third.iter().filter(|c| c.axis() == Axis::Drive).collect();
        let bodies: Vec<&Command> = third.iter().filter(|c| c.axis() == Axis::Body).collect();
        assert_eq!(drives, vec![&Command::Advance(-150.0)]);
        assert_eq!(bodies, vec![&Command::TurnBody(100.0)]);
    }
}

use strafer_shared::*;

/// Aggregate statistics for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub ticks: usize,
    pub scans: u32,
    /// Ticks without a scan, i.e. radar sweeping.
    pub sweeps: u32,
    pub shots: u32,
    pub mean_firepower: f64,
    pub hits_taken: u32,
    pub wall_hits: u32,
    /// Sign changes between consecutive drive commands.
    pub reversals: u32,
}

/// Analyze a session log.
pub fn summarize(log: &SessionLog) -> SessionSummary {
    let mut scans = 0u32;
    let mut sweeps = 0u32;
    let mut shots = 0u32;
    let mut power_sum = 0.0f64;
    let mut hits_taken = 0u32;
    let mut wall_hits = 0u32;
    let mut reversals = 0u32;
    let mut last_drive: Option<f64> = None;

    for record in &log.ticks {
        let mut scanned = false;
        for event in &record.events {
            match event {
                HostEvent::Scan(_) => {
                    scans += 1;
                    scanned = true;
                }
                HostEvent::HitByBullet(_) => hits_taken += 1,
                HostEvent::HitWall => wall_hits += 1,
            }
        }
        if !scanned {
            sweeps += 1;
        }

        for cmd in &record.commands {
            match *cmd {
                Command::Fire(power) => {
                    shots += 1;
                    power_sum += power;
                }
                Command::Advance(distance) if distance != 0.0 => {
                    if let Some(prev) = last_drive {
                        if prev.signum() != distance.signum() {
                            reversals += 1;
                        }
                    }
                    last_drive = Some(distance);
                }
                _ => {}
            }
        }
    }

    let mean_firepower = if shots > 0 {
        power_sum / shots as f64
    } else {
        0.0
    };

    SessionSummary {
        ticks: log.ticks.len(),
        scans,
        sweeps,
        shots,
        mean_firepower,
        hits_taken,
        wall_hits,
        reversals,
    }
}

/// Ticks on which a fire command went out although the gun was hot or the
/// gun still had to turn at least `tolerance` degrees. Frames and records
/// are matched by tick.
pub fn fire_gating_violations(trace: &Trace, log: &SessionLog, tolerance: f64) -> Vec<u64> {
    let mut violations = Vec::new();
    for (frame, record) in trace.frames.iter().zip(&log.ticks) {
        debug_assert_eq!(frame.me.tick, record.tick);
        let fired = record.commands.iter().any(|c| matches!(c, Command::Fire(_)));
        if !fired {
            continue;
        }
        let gun_turn = record.commands.iter().find_map(|c| match c {
            Command::TurnGun(deg) => Some(*deg),
            _ => None,
        });
        let aligned = gun_turn.is_some_and(|deg| deg.abs() < tolerance);
        if !aligned || !frame.me.gun_ready() {
            violations.push(record.tick);
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tick: u64, events: Vec<HostEvent>, commands: Vec<Command>) -> TickRecord {
        TickRecord { tick, events, commands }
    }

    fn scan(tick: u64) -> HostEvent {
        HostEvent::Scan(ScanObservation {
            bearing: 0.0,
            distance: 100.0,
            heading: 0.0,
            velocity: 0.0,
            energy: 100.0,
            tick,
        })
    }

    #[test]
    fn test_empty_log() {
        let log = SessionLog {
            agent: "x".into(),
            setup: vec![],
            ticks: vec![],
        };
        let s = summarize(&log);
        assert_eq!(s.ticks, 0);
        assert_eq!(s.mean_firepower, 0.0);
    }

    #[test]
    fn test_counts() {
        let log = SessionLog {
            agent: "x".into(),
            setup: vec![],
            ticks: vec![
                record(1, vec![], vec![Command::TurnRadar(360.0)]),
                record(2, vec![scan(2)], vec![Command::Fire(3.0), Command::Advance(150.0)]),
                record(3, vec![scan(3)], vec![Command::Fire(1.0), Command::Advance(150.0)]),
                record(
                    4,
                    vec![HostEvent::HitByBullet(HitByBullet { bearing: 0.0 })],
                    vec![Command::Advance(-120.0)],
                ),
                record(5, vec![HostEvent::HitWall], vec![Command::Advance(150.0)]),
            ],
        };
        let s = summarize(&log);
        assert_eq!(s.ticks, 5);
        assert_eq!(s.scans, 2);
        assert_eq!(s.sweeps, 3);
        assert_eq!(s.shots, 2);
        assert_eq!(s.mean_firepower, 2.0);
        assert_eq!(s.hits_taken, 1);
        assert_eq!(s.wall_hits, 1);
        assert_eq!(s.reversals, 2);
    }
}

use strafer_shared::{AgentConfig, ScanObservation};

/// What we remember about the opponent between scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedOpponent {
    pub last_energy: f64,
    /// Tick of the most recent scan, if any.
    pub last_scan_tick: Option<u64>,
}

impl TrackedOpponent {
    pub fn new(initial_energy: f64) -> Self {
        Self {
            last_energy: initial_energy,
            last_scan_tick: None,
        }
    }

    pub fn scanned_at(&self, tick: u64) -> bool {
        self.last_scan_tick == Some(tick)
    }
}

/// Energy change between two consecutive scans of the opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSignal {
    pub energy_drop: f64,
    pub likely_fired: bool,
}

/// Infers opponent gunfire from energy loss. Firing costs the shooter its
/// bullet power, so a small drop between scans usually means a bullet is in
/// the air. Larger drops are treated as damage and ignored.
#[derive(Debug, Clone)]
pub struct TargetTracker {
    max_shot_energy_drop: f64,
}

impl TargetTracker {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            max_shot_energy_drop: config.max_shot_energy_drop,
        }
    }

    pub fn assess(&self, opponent: &TrackedOpponent, scan: &ScanObservation) -> ShotSignal {
        let energy_drop = opponent.last_energy - scan.energy;
        ShotSignal {
            energy_drop,
            likely_fired: energy_drop > 0.0 && energy_drop <= self.max_shot_energy_drop,
        }
    }

    /// Record the scan. Called once the rest of the scan has been handled.
    pub fn commit(&self, opponent: &mut TrackedOpponent, scan: &ScanObservation, tick: u64) {
        opponent.last_energy = scan.energy;
        opponent.last_scan_tick = Some(tick);
    }
}

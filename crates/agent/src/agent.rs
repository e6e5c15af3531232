use strafer_shared::{Command, HitByBullet, HitWall, ScanObservation, SelfState};

/// Decision-making side of a robot. The host owns the loop: it delivers each
/// tick's events through the `on_*` handlers, finishes the tick with
/// [`Agent::on_tick`], and executes whatever commands come back.
pub trait Agent: Send {
    fn name(&self) -> &str;

    /// Commands to issue once, before the first tick.
    fn on_start(&mut self) -> Vec<Command> {
        Vec::new()
    }

    fn on_tick(&mut self, me: &SelfState) -> Vec<Command>;

    fn on_scan(&mut self, me: &SelfState, scan: &ScanObservation) -> Vec<Command>;

    fn on_hit_by_bullet(&mut self, me: &SelfState, hit: &HitByBullet) -> Vec<Command>;

    fn on_hit_wall(&mut self, me: &SelfState, hit: &HitWall) -> Vec<Command>;
}

/// Agent that never issues a command - useful for testing.
pub struct IdleAgent;

impl Agent for IdleAgent {
    fn name(&self) -> &str {
        "idle"
    }

    fn on_tick(&mut self, _me: &SelfState) -> Vec<Command> {
        Vec::new()
    }

    fn on_scan(&mut self, _me: &SelfState, _scan: &ScanObservation) -> Vec<Command> {
        Vec::new()
    }

    fn on_hit_by_bullet(&mut self, _me: &SelfState, _hit: &HitByBullet) -> Vec<Command> {
        Vec::new()
    }

    fn on_hit_wall(&mut self, _me: &SelfState, _hit: &HitWall) -> Vec<Command> {
        Vec::new()
    }
}

// Angles are in degrees, measured clockwise from north. Distances are arena units.

// Radar
pub const RADAR_OVERCOMPENSATION: f64 = 2.0;
pub const RADAR_SWEEP_DEGREES: f64 = 360.0;

// Opponent tracking
pub const INITIAL_OPPONENT_ENERGY: f64 = 100.0;
/// Largest energy drop still attributed to the opponent firing.
pub const MAX_SHOT_ENERGY_DROP: f64 = 3.0;

// Firepower tiers (distance strictly beyond -> power)
pub const LONG_RANGE: f64 = 600.0;
pub const LONG_RANGE_POWER: f64 = 1.0;
pub const MID_RANGE: f64 = 350.0;
pub const MID_RANGE_POWER: f64 = 1.8;
pub const CLOSE_RANGE: f64 = 180.0;
pub const CLOSE_RANGE_POWER: f64 = 2.2;
pub const POINT_BLANK_POWER: f64 = 3.0;
pub const LOW_ENERGY_THRESHOLD: f64 = 20.0;
pub const LOW_ENERGY_POWER_CAP: f64 = 1.5;
pub const MIN_FIREPOWER: f64 = 0.1;
pub const MAX_FIREPOWER: f64 = 3.0;

// Ballistics: bullet_speed = BULLET_BASE_SPEED - BULLET_POWER_SLOWDOWN * power
pub const BULLET_BASE_SPEED: f64 = 20.0;
pub const BULLET_POWER_SLOWDOWN: f64 = 3.0;

// Prediction
pub const PREDICTION_MAX_STEPS: u32 = 60;
/// Half a robot's width: nothing can stand closer to a wall than this.
pub const ARENA_EDGE_MARGIN: f64 = 18.0;

// Gun
pub const FIRE_ALIGNMENT_TOLERANCE: f64 = 20.0;

// Movement
pub const STRAFE_OFFSET: f64 = 90.0;
pub const STRAFE_DISTANCE: f64 = 150.0;
pub const DIRECTION_CHANGE_INTERVAL: u64 = 40;

// Wall smoothing
pub const WALL_MARGIN: f64 = 40.0;
pub const WALL_PROBE_DISTANCE: f64 = 120.0;
pub const WALL_SMOOTHING_STEP: f64 = 10.0;
pub const WALL_SMOOTHING_ATTEMPTS: u32 = 10;

// Reflexes
pub const BULLET_EVADE_DISTANCE: f64 = 120.0;
pub const BULLET_EVADE_TURN: f64 = 90.0;
pub const WALL_RECOIL_DISTANCE: f64 = 150.0;
pub const WALL_RECOIL_TURN: f64 = 100.0;

// Traces
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;
pub const DEFAULT_TRACE_TICKS: u64 = 1000;

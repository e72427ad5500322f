// World Geometry
pub const WORLD_SIZE: f64 = 700.0; // display units, square viewport
pub const BODY_RADIUS: f64 = 150.0; // display units
pub const LAUNCH_HEIGHT: f64 = 50.0; // cannon height above the surface

// Field Constants
pub const GRAVITY_STRENGTH: f64 = 0.15; // constant-magnitude central pull per step
pub const DRAG_FACTOR: f64 = 0.98; // velocity multiplier per step inside the band
pub const ATMOSPHERE_BAND_WIDTH: f64 = 50.0; // band above the surface where drag acts
pub const ESCAPE_DISTANCE: f64 = WORLD_SIZE / 2.0 + 100.0;

// Trail and Orbit Classification
pub const TRAIL_CAP: usize = 150;
pub const ORBIT_EVAL_THRESHOLD: usize = 200; // minimum trail length before closure checks
pub const CLOSURE_TOLERANCE: f64 = 30.0; // max gap between position and trail head
pub const PERFECT_ORBIT_TOLERANCE: f64 = 10.0;
pub const STABLE_ORBIT_TOLERANCE: f64 = 30.0;

// Launch Input
pub const MIN_SPEED_INPUT: f64 = 1.0;
pub const MAX_SPEED_INPUT: f64 = 10.0;
pub const INTEGRATION_SPEED_SCALE: f64 = 0.8; // slider units -> displacement per step
pub const DISPLAY_SPEED_SCALE: f64 = 1.5; // internal units -> displayed km/s

// Driver Parameters
pub const MAX_SIMULATION_FRAMES: usize = 20_000;

use crate::constants::{
    ATMOSPHERE_BAND_WIDTH, BODY_RADIUS, CLOSURE_TOLERANCE, DRAG_FACTOR, ESCAPE_DISTANCE,
    GRAVITY_STRENGTH, LAUNCH_HEIGHT, ORBIT_EVAL_THRESHOLD, PERFECT_ORBIT_TOLERANCE,
    STABLE_ORBIT_TOLERANCE, TRAIL_CAP, WORLD_SIZE,
};
use crate::utils::vector2d::Vector2D;

/// Every constant of a simulation run, gathered in one place. The engine
/// takes a `World` at construction and never mutates it; `Default` carries
/// the documented values for the 700x700 viewport.
#[derive(Debug, Clone)]
pub struct World {
    pub center: Vector2D,
    pub body_radius: f64,
    pub launch_height: f64,
    pub gravity_strength: f64,
    pub drag_factor: f64,
    pub atmosphere_band_width: f64,
    pub escape_distance: f64,
    pub trail_cap: usize,
    pub orbit_eval_threshold: usize,
    pub closure_tolerance: f64,
    pub perfect_orbit_tolerance: f64,
    pub stable_orbit_tolerance: f64,
}

impl Default for World {
    fn default() -> Self {
        World {
            center: Vector2D::new(WORLD_SIZE / 2.0, WORLD_SIZE / 2.0),
            body_radius: BODY_RADIUS,
            launch_height: LAUNCH_HEIGHT,
            gravity_strength: GRAVITY_STRENGTH,
            drag_factor: DRAG_FACTOR,
            atmosphere_band_width: ATMOSPHERE_BAND_WIDTH,
            escape_distance: ESCAPE_DISTANCE,
            trail_cap: TRAIL_CAP,
            orbit_eval_threshold: ORBIT_EVAL_THRESHOLD,
            closure_tolerance: CLOSURE_TOLERANCE,
            perfect_orbit_tolerance: PERFECT_ORBIT_TOLERANCE,
            stable_orbit_tolerance: STABLE_ORBIT_TOLERANCE,
        }
    }
}

impl World {
    /// Radius of the circle the cannon sits on.
    pub fn launch_radius(&self) -> f64 {
        self.body_radius + self.launch_height
    }

    /// Drag applies strictly below this distance from the center.
    pub fn atmosphere_ceiling(&self) -> f64 {
        self.body_radius + self.atmosphere_band_width
    }
}

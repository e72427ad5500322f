use crate::constants::{
    DISPLAY_SPEED_SCALE, INTEGRATION_SPEED_SCALE, MAX_SPEED_INPUT, MIN_SPEED_INPUT,
};
use crate::errors::SimulationError;

/// Validated launch settings as they come from the control panel: the speed
/// slider in [1, 10] and the cannon angle in degrees, clockwise from "up".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    speed_input: f64,
    angle_degrees: f64,
}

impl LaunchParams {
    pub fn new(speed_input: f64, angle_degrees: f64) -> Result<Self, SimulationError> {
        if !(MIN_SPEED_INPUT..=MAX_SPEED_INPUT).contains(&speed_input) {
            return Err(SimulationError::InvalidLaunch(format!(
                "speed {} is outside [{}, {}]",
                speed_input, MIN_SPEED_INPUT, MAX_SPEED_INPUT
            )));
        }
        if !(0.0..=360.0).contains(&angle_degrees) {
            return Err(SimulationError::InvalidLaunch(format!(
                "angle {}° is outside [0°, 360°]",
                angle_degrees
            )));
        }

        Ok(LaunchParams {
            speed_input,
            angle_degrees,
        })
    }

    pub fn speed_input(&self) -> f64 {
        self.speed_input
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// Magnitude of the initial velocity in integration units.
    pub fn integration_speed(&self) -> f64 {
        self.speed_input * INTEGRATION_SPEED_SCALE
    }

    /// Speed as shown next to the slider, in "km/s".
    pub fn display_speed(&self) -> f64 {
        self.speed_input * DISPLAY_SPEED_SCALE
    }

    pub fn velocity_category(&self) -> VelocityCategory {
        VelocityCategory::from_speed_input(self.speed_input)
    }
}

/// Qualitative feedback shown under the speed slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityCategory {
    VerySlow,
    Slow,
    Medium,
    Orbital,
    VeryFast,
}

impl VelocityCategory {
    pub fn from_speed_input(speed_input: f64) -> Self {
        if speed_input < 3.0 {
            VelocityCategory::VerySlow
        } else if speed_input < 5.0 {
            VelocityCategory::Slow
        } else if speed_input < 6.5 {
            VelocityCategory::Medium
        } else if speed_input < 8.0 {
            VelocityCategory::Orbital
        } else {
            VelocityCategory::VeryFast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VelocityCategory::VerySlow => "Very slow - will fall quickly",
            VelocityCategory::Slow => "Slow - parabolic trajectory",
            VelocityCategory::Medium => "Medium - elliptical orbit",
            VelocityCategory::Orbital => "Orbital velocity!",
            VelocityCategory::VeryFast => "Very fast - may escape",
        }
    }
}

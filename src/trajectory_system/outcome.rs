use std::fmt;

use crate::constants::DISPLAY_SPEED_SCALE;
use crate::control::world::World;

/// Terminal classification of a run. Orbit variants carry the speed at
/// closure, already converted to display units.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Impact,
    Escape,
    PerfectOrbit { speed: f64 },
    StableOrbit { speed: f64 },
    EllipticalOrbit { speed: f64 },
}

impl Outcome {
    pub fn is_orbit(&self) -> bool {
        matches!(
            self,
            Outcome::PerfectOrbit { .. } | Outcome::StableOrbit { .. } | Outcome::EllipticalOrbit { .. }
        )
    }

    /// Display speed in km/s, present on orbit outcomes only.
    pub fn speed(&self) -> Option<f64> {
        match self {
            Outcome::PerfectOrbit { speed }
            | Outcome::StableOrbit { speed }
            | Outcome::EllipticalOrbit { speed } => Some(*speed),
            Outcome::Impact | Outcome::Escape => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Impact => write!(f, "IMPACT! The projectile fell back to the surface"),
            Outcome::Escape => write!(f, "ESCAPE! The projectile left for deep space"),
            Outcome::PerfectOrbit { speed } => {
                write!(f, "PERFECT ORBIT! Speed: {:.2} km/s", speed)
            }
            Outcome::StableOrbit { speed } => write!(f, "STABLE ORBIT! Speed: {:.2} km/s", speed),
            Outcome::EllipticalOrbit { speed } => {
                write!(f, "Elliptical orbit. Speed: {:.2} km/s", speed)
            }
        }
    }
}

/// Signal returned by every engine step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// The engine is not running; nothing was advanced.
    Idle,
    Continue,
    Terminal(Outcome),
}

impl StepResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepResult::Terminal(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            StepResult::Terminal(outcome) => Some(outcome),
            StepResult::Idle | StepResult::Continue => None,
        }
    }
}

/// Classifies a closed trail loop. `distance` is the radial distance at the
/// start of the closing step, `speed` the velocity magnitude in integration
/// units; the deviation of the current radius from the launch radius decides
/// how circular the loop was.
pub fn classify_closure(world: &World, distance: f64, speed: f64) -> Outcome {
    let orbit_quality = (distance - world.launch_radius()).abs();
    let speed = speed * DISPLAY_SPEED_SCALE;

    if orbit_quality < world.perfect_orbit_tolerance {
        Outcome::PerfectOrbit { speed }
    } else if orbit_quality < world.stable_orbit_tolerance {
        Outcome::StableOrbit { speed }
    } else {
        Outcome::EllipticalOrbit { speed }
    }
}

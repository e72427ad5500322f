pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::driver::SimulationDriver;
pub use control::launch::{LaunchParams, VelocityCategory};
pub use control::world::World;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::engine::{FrameSnapshot, TrajectoryEngine};
pub use trajectory_system::outcome::{Outcome, StepResult};
pub use trajectory_system::projectile::Projectile;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;

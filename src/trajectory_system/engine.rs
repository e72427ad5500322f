use std::f64::consts::FRAC_PI_2;

use crate::control::launch::LaunchParams;
use crate::control::world::World;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

use super::outcome::{classify_closure, Outcome, StepResult};
use super::projectile::Projectile;

/// Advances one projectile under constant-magnitude central gravity, one
/// unit step per call, and classifies the terminal condition of the run.
/// The engine exclusively owns its state; renderers read `FrameSnapshot`s.
#[derive(Debug)]
pub struct TrajectoryEngine {
    world: World,
    projectile: Projectile,
    has_atmosphere: bool,
    running: bool,
    outcome: Option<Outcome>,
}

impl TrajectoryEngine {
    pub fn new(world: World) -> Self {
        TrajectoryEngine {
            world,
            projectile: Projectile::zeroed(),
            has_atmosphere: false,
            running: false,
            outcome: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_atmosphere(&self) -> bool {
        self.has_atmosphere
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The atmosphere checkbox is disabled while a shot is in flight.
    pub fn set_atmosphere(&mut self, enabled: bool) -> Result<(), SimulationError> {
        if self.running {
            return Err(SimulationError::ControlsLocked(
                "the atmosphere toggle is disabled during a run".to_string(),
            ));
        }
        self.has_atmosphere = enabled;
        Ok(())
    }

    /// Places the projectile on the launch circle and gives it its initial
    /// velocity. The mount point is rotated -90° from the barrel heading so
    /// that angle 0 stands the cannon "up" while still firing along the
    /// unrotated angle; both offsets share the same `angle_radians`.
    pub fn launch(&mut self, params: LaunchParams) -> Result<(), SimulationError> {
        if self.running {
            return Err(SimulationError::ControlsLocked(
                "launching is disabled while a run is active".to_string(),
            ));
        }

        let angle = params.angle_radians();
        let mount = Vector2D::new((angle - FRAC_PI_2).cos(), (angle - FRAC_PI_2).sin());
        let position = self.world.center + mount * self.world.launch_radius();
        let velocity = Vector2D::new(angle.cos(), angle.sin()) * params.integration_speed();

        self.projectile = Projectile::new(position, velocity);
        self.outcome = None;
        self.running = true;

        log::debug!(
            "launch: speed {:.1} ({:.2} km/s), angle {:.0}°",
            params.speed_input(),
            params.display_speed(),
            params.angle_degrees()
        );
        Ok(())
    }

    /// One unit step: gravity, optional drag, position update, trail append,
    /// terminal checks. Synchronous and atomic over the projectile state.
    pub fn step(&mut self) -> StepResult {
        if !self.running {
            return StepResult::Idle;
        }

        // Radial distance is recomputed from first principles every step and
        // every terminal check below uses this pre-move value.
        let offset = self.projectile.position - self.world.center;
        let distance = offset.magnitude();

        // Constant-magnitude pull toward the center; gravity does not weaken
        // with distance in this model. normalize() guards distance == 0.
        let gravity = (self.world.center - self.projectile.position).normalize()
            * self.world.gravity_strength;
        self.projectile.velocity += gravity;

        if self.has_atmosphere && distance < self.world.atmosphere_ceiling() {
            self.projectile.velocity *= self.world.drag_factor;
        }

        let velocity = self.projectile.velocity;
        self.projectile.position += velocity;
        self.projectile.record_trail(self.world.trail_cap);

        match self.evaluate_terminal(distance) {
            Some(outcome) => {
                log::info!("run finished after {} trail points: {}", self.projectile.trail_len(), outcome);
                self.running = false;
                self.outcome = Some(outcome.clone());
                StepResult::Terminal(outcome)
            }
            None => StepResult::Continue,
        }
    }

    // Fixed priority: impact, then escape, then orbit closure.
    fn evaluate_terminal(&self, distance: f64) -> Option<Outcome> {
        if distance < self.world.body_radius {
            return Some(Outcome::Impact);
        }

        if distance > self.world.escape_distance {
            return Some(Outcome::Escape);
        }

        if self.projectile.trail_len() > self.world.orbit_eval_threshold {
            if let Some(head) = self.projectile.trail_head() {
                if self.projectile.position.distance_to(head) < self.world.closure_tolerance {
                    return Some(classify_closure(&self.world, distance, self.projectile.speed()));
                }
            }
        }

        None
    }

    /// Stops the run and discards the projectile and any prior outcome.
    pub fn reset(&mut self) {
        self.running = false;
        self.projectile = Projectile::zeroed();
        self.outcome = None;
    }

    /// Read-only view of the current frame for rendering and telemetry.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            position: self.projectile.position,
            velocity: self.projectile.velocity,
            trail: self.projectile.trail().iter().copied().collect(),
            running: self.running,
            outcome: self.outcome.clone(),
        }
    }
}

/// Owned per-frame state handed to external consumers. Holding a snapshot
/// never aliases the engine's mutable state.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Chronological, oldest first; rendered as a connected path.
    pub trail: Vec<Vector2D>,
    pub running: bool,
    pub outcome: Option<Outcome>,
}

impl FrameSnapshot {
    /// The projectile is drawn only while a run is active or just finished.
    pub fn draw_projectile(&self) -> bool {
        self.running || self.outcome.is_some()
    }

    pub fn display_speed(&self) -> f64 {
        self.velocity.magnitude() * crate::constants::DISPLAY_SPEED_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> TrajectoryEngine {
        TrajectoryEngine::new(World::default())
    }

    fn params(speed: f64, angle: f64) -> LaunchParams {
        LaunchParams::new(speed, angle).unwrap()
    }

    #[test]
    fn test_launch_geometry_angle_zero() {
        let mut engine = engine();
        engine.launch(params(10.0, 0.0)).unwrap();

        // Mount point rotated -90° from angle 0 puts the cannon at the top
        // of the viewport; the barrel still fires along +x.
        let projectile = engine.projectile();
        assert_relative_eq!(projectile.position.x, 350.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.position.y, 150.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.velocity.x, 8.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.velocity.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_launch_geometry_angle_ninety() {
        let mut engine = engine();
        engine.launch(params(5.0, 90.0)).unwrap();

        // At 90° the mount lands on +x of the center and the barrel fires
        // along +y; only the position offset carries the -90° rotation.
        let projectile = engine.projectile();
        assert_relative_eq!(projectile.position.x, 550.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.position.y, 350.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.velocity.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.velocity.y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gravity_gain_is_constant_magnitude_toward_center() {
        let mut engine = engine();
        engine.launch(params(10.0, 0.0)).unwrap();

        let before = engine.projectile().velocity;
        let toward_center =
            (engine.world().center - engine.projectile().position).normalize();
        engine.step();
        let after = engine.projectile().velocity;

        let gain = after - before;
        assert_relative_eq!(gain.magnitude(), 0.15, epsilon = 1e-9);
        assert_relative_eq!(gain.dot(&toward_center), 0.15, epsilon = 1e-9);
    }

    #[test]
    fn test_gravity_magnitude_is_distance_independent() {
        let mut engine = engine();
        engine.launch(params(10.0, 0.0)).unwrap();

        // Let the shot climb well away from the launch circle, then confirm
        // the per-step velocity gain has not weakened.
        for _ in 0..20 {
            engine.step();
        }
        let distance = engine
            .projectile()
            .position
            .distance_to(&engine.world().center);
        assert!(distance > 220.0, "shot should be well off the launch circle, got {}", distance);

        let before = engine.projectile().velocity;
        engine.step();
        let gain = engine.projectile().velocity - before;
        assert_relative_eq!(gain.magnitude(), 0.15, epsilon = 1e-9);
    }

    #[test]
    fn test_drag_applies_only_inside_band() {
        // Widen the band past the launch circle so drag is active from the
        // first step.
        let world = World {
            atmosphere_band_width: 100.0,
            ..World::default()
        };
        let mut dragged = TrajectoryEngine::new(world);
        dragged.set_atmosphere(true).unwrap();
        dragged.launch(params(5.0, 0.0)).unwrap();

        let before = dragged.projectile().velocity;
        let toward_center = (dragged.world().center - dragged.projectile().position).normalize();
        dragged.step();
        let expected = (before + toward_center * 0.15) * 0.98;
        assert_relative_eq!(dragged.projectile().velocity.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(dragged.projectile().velocity.y, expected.y, epsilon = 1e-9);

        // Same shot with the default band: the launch circle sits exactly at
        // the ceiling, the comparison is strict, so no drag on step one.
        let mut undragged = TrajectoryEngine::new(World::default());
        undragged.set_atmosphere(true).unwrap();
        undragged.launch(params(5.0, 0.0)).unwrap();

        let before = undragged.projectile().velocity;
        let toward_center =
            (undragged.world().center - undragged.projectile().position).normalize();
        undragged.step();
        let expected = before + toward_center * 0.15;
        assert_relative_eq!(undragged.projectile().velocity.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(undragged.projectile().velocity.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_no_drag_without_atmosphere() {
        let world = World {
            atmosphere_band_width: 100.0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(5.0, 0.0)).unwrap();

        let before = engine.projectile().velocity;
        let toward_center = (engine.world().center - engine.projectile().position).normalize();
        engine.step();
        let expected = before + toward_center * 0.15;
        assert_relative_eq!(engine.projectile().velocity.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(engine.projectile().velocity.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_impact_when_distance_falls_below_body_radius() {
        let mut engine = engine();
        engine.launch(params(1.0, 0.0)).unwrap();

        let mut steps = 0;
        let outcome = loop {
            match engine.step() {
                StepResult::Continue => steps += 1,
                StepResult::Terminal(outcome) => break outcome,
                StepResult::Idle => panic!("engine went idle mid-run"),
            }
            assert!(steps < 500, "minimum-power shot should impact quickly");
        };

        assert_eq!(outcome, Outcome::Impact);
        assert!(!engine.is_running());

        let distance = engine
            .projectile()
            .position
            .distance_to(&engine.world().center);
        assert!(
            distance < engine.world().body_radius + 10.0,
            "impact should happen near the surface, got distance {}",
            distance
        );
    }

    #[test]
    fn test_escape_when_distance_exceeds_escape_distance() {
        // A full-power shot tops out near distance 339 in the default world,
        // short of the 450 escape line; pull the line in to cross it.
        let world = World {
            escape_distance: 300.0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(10.0, 0.0)).unwrap();

        let mut steps = 0;
        let outcome = loop {
            match engine.step() {
                StepResult::Continue => steps += 1,
                StepResult::Terminal(outcome) => break outcome,
                StepResult::Idle => panic!("engine went idle mid-run"),
            }
            assert!(steps < 200, "full-power shot should cross the line quickly");
        };

        assert_eq!(outcome, Outcome::Escape);
        assert!(!engine.is_running());

        let distance = engine
            .projectile()
            .position
            .distance_to(&engine.world().center);
        assert!(
            distance > 300.0,
            "final position should be past the escape line, got {:.1}",
            distance
        );
    }

    #[test]
    fn test_impact_beats_closure() {
        // Arm the closure check from the very first step and start below the
        // surface so both conditions hold at once.
        let world = World {
            body_radius: 250.0,
            launch_height: -50.0,
            orbit_eval_threshold: 0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(1.0, 0.0)).unwrap();

        match engine.step() {
            StepResult::Terminal(outcome) => assert_eq!(outcome, Outcome::Impact),
            other => panic!("expected an immediate impact, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_beats_closure() {
        // Escape distance below the launch circle plus an always-armed
        // closure check: escape must win.
        let world = World {
            escape_distance: 150.0,
            orbit_eval_threshold: 0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(1.0, 0.0)).unwrap();

        match engine.step() {
            StepResult::Terminal(outcome) => assert_eq!(outcome, Outcome::Escape),
            other => panic!("expected an immediate escape, got {:?}", other),
        }
    }

    #[test]
    fn test_closure_fires_once_armed() {
        // With the closure check armed immediately and no competing terminal
        // condition, the first step closes on its own trail point.
        let world = World {
            orbit_eval_threshold: 0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(1.0, 0.0)).unwrap();

        match engine.step() {
            StepResult::Terminal(outcome) => {
                // Distance at the start of the step equals the launch radius.
                assert!(matches!(outcome, Outcome::PerfectOrbit { .. }));
                assert_relative_eq!(outcome.speed().unwrap(), 1.0 * 0.8 * 1.5, epsilon = 0.3);
            }
            other => panic!("expected an immediate closure, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_distance_does_not_produce_nan() {
        // Degenerate world whose launch circle collapses onto the center.
        let world = World {
            body_radius: 0.0,
            launch_height: 0.0,
            ..World::default()
        };
        let mut engine = TrajectoryEngine::new(world);
        engine.launch(params(1.0, 0.0)).unwrap();

        engine.step();
        let projectile = engine.projectile();
        assert!(projectile.position.x.is_finite());
        assert!(projectile.position.y.is_finite());
        assert!(projectile.velocity.x.is_finite());
        assert!(projectile.velocity.y.is_finite());
    }

    #[test]
    fn test_step_on_idle_engine_is_a_noop() {
        let mut engine = engine();
        assert_eq!(engine.step(), StepResult::Idle);
        assert_eq!(engine.projectile().position, Vector2D::zero());
    }

    #[test]
    fn test_controls_locked_while_running() {
        let mut engine = engine();
        engine.launch(params(5.0, 0.0)).unwrap();

        assert!(matches!(
            engine.set_atmosphere(true),
            Err(SimulationError::ControlsLocked(_))
        ));
        assert!(matches!(
            engine.launch(params(6.0, 10.0)),
            Err(SimulationError::ControlsLocked(_))
        ));
    }

    #[test]
    fn test_reset_clears_the_run() {
        let mut engine = engine();
        engine.launch(params(5.0, 45.0)).unwrap();
        engine.step();
        engine.reset();

        assert!(!engine.is_running());
        assert!(engine.outcome().is_none());
        assert_eq!(engine.projectile().trail_len(), 0);
        assert_eq!(engine.projectile().position, Vector2D::zero());
        assert_eq!(engine.step(), StepResult::Idle);
    }

    #[test]
    fn test_snapshot_reflects_run_state() {
        let mut engine = engine();
        let snapshot = engine.snapshot();
        assert!(!snapshot.draw_projectile());

        engine.launch(params(5.0, 0.0)).unwrap();
        engine.step();
        let snapshot = engine.snapshot();
        assert!(snapshot.running);
        assert!(snapshot.draw_projectile());
        assert_eq!(snapshot.trail.len(), 1);
        assert_eq!(snapshot.position, engine.projectile().position);
        assert_relative_eq!(
            snapshot.display_speed(),
            engine.projectile().speed() * 1.5,
            epsilon = 1e-9
        );
    }
}

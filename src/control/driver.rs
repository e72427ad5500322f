use crate::control::launch::LaunchParams;
use crate::errors::SimulationError;
use crate::trajectory_system::engine::{FrameSnapshot, TrajectoryEngine};
use crate::trajectory_system::outcome::{Outcome, StepResult};

/// Cooperative, single-threaded frame loop around the engine.
///
/// One engine step per tick with an implicit unit timestep; physics is not
/// wall-clock-scaled, so a caller that ticks at display refresh rate gets
/// frame-coupled motion while a headless caller gets the same deterministic
/// run. The loop re-checks the continuation signal on every iteration, so
/// once a terminal outcome (or a reset) lands, no further step can occur.
pub struct SimulationDriver {
    engine: TrajectoryEngine,
}

impl SimulationDriver {
    pub fn new(engine: TrajectoryEngine) -> Self {
        SimulationDriver { engine }
    }

    pub fn engine(&self) -> &TrajectoryEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TrajectoryEngine {
        &mut self.engine
    }

    pub fn launch(&mut self, params: LaunchParams) -> Result<(), SimulationError> {
        self.engine.launch(params)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Steps the engine until it reports a terminal outcome, feeding a fresh
    /// snapshot to `on_frame` after every step. Returns `None` when the run
    /// is still open at `max_frames` (a bound orbit that never closes) or
    /// when the engine was never launched.
    pub fn run<F>(&mut self, max_frames: usize, mut on_frame: F) -> Option<Outcome>
    where
        F: FnMut(&FrameSnapshot),
    {
        for frame in 0..max_frames {
            match self.engine.step() {
                StepResult::Idle => return None,
                StepResult::Continue => on_frame(&self.engine.snapshot()),
                StepResult::Terminal(outcome) => {
                    on_frame(&self.engine.snapshot());
                    log::debug!("driver stopped at frame {}", frame + 1);
                    return Some(outcome);
                }
            }
        }

        log::debug!("frame bound of {} reached without a terminal outcome", max_frames);
        None
    }

    /// Launch-and-run convenience for headless callers.
    pub fn fly(
        &mut self,
        params: LaunchParams,
        max_frames: usize,
    ) -> Result<Option<Outcome>, SimulationError> {
        self.launch(params)?;
        Ok(self.run(max_frames, |_| {}))
    }
}

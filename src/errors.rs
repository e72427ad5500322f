use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid launch parameters: {0}")]
    InvalidLaunch(String),

    #[error("Controls locked: {0}")]
    ControlsLocked(String),
}

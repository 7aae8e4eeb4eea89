use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("Bailout threshold must be a positive finite number, got {0}")]
    InvalidBailout(f64),
}

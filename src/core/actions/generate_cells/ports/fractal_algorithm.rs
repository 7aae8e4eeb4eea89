use crate::core::data::complex::Complex;

/// Outcome of iterating one sample point.
///
/// `converged` means the orbit stayed bounded for the whole budget, in which
/// case `iterations` equals the budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeResult {
    pub converged: bool,
    pub iterations: u32,
}

impl EscapeResult {
    #[must_use]
    pub const fn escaped(iterations: u32) -> Self {
        Self {
            converged: false,
            iterations,
        }
    }

    #[must_use]
    pub const fn bounded(iterations: u32) -> Self {
        Self {
            converged: true,
            iterations,
        }
    }
}

pub trait FractalAlgorithm: Send + Sync {
    fn evaluate(&self, point: Complex) -> EscapeResult;
}

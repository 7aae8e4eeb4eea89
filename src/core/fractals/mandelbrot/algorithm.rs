use crate::core::actions::generate_cells::ports::fractal_algorithm::{EscapeResult, FractalAlgorithm};
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Squared-magnitude bailout, i.e. `|z| > 4`.
pub const DEFAULT_BAILOUT_SQUARED: f64 = 16.0;

/// Escape-time iteration of `z ← z² + c`.
///
/// The orbit starts from `z₀ = 0`, whose first step always lands on `c`, so
/// iteration begins at `z = c` and the count is the number of steps taken
/// after that before `|z|²` exceeded the bailout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    bailout_squared: f64,
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout_squared: DEFAULT_BAILOUT_SQUARED,
        }
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, bailout_squared: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !bailout_squared.is_finite() || bailout_squared <= 0.0 {
            return Err(MandelbrotError::InvalidBailout(bailout_squared));
        }

        Ok(Self {
            max_iterations,
            bailout_squared,
        })
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn evaluate(&self, c: Complex) -> EscapeResult {
        let mut z = c;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > self.bailout_squared {
                return EscapeResult::escaped(iteration);
            }
            z = z * z + c;
        }

        EscapeResult::bounded(self.max_iterations)
    }
}

/// Classifies `ca + cb·i` with the default budget and bailout.
#[must_use]
pub fn evaluate(ca: f64, cb: f64) -> EscapeResult {
    MandelbrotAlgorithm::default().evaluate(Complex::new(ca, cb))
}

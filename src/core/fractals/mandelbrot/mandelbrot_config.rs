use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_BAILOUT_SQUARED, DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub bailout_squared: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout_squared: DEFAULT_BAILOUT_SQUARED,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.max_iterations, self.bailout_squared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_default_algorithm() {
        let algorithm = MandelbrotConfig::default().build_algorithm().unwrap();

        assert_eq!(algorithm, MandelbrotAlgorithm::default());
    }

    #[test]
    fn test_invalid_settings_surface_engine_error() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.build_algorithm(), Err(MandelbrotError::ZeroMaxIterations));
    }
}

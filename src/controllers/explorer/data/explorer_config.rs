use std::time::Duration;

use crate::controllers::explorer::errors::ConfigError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Session tuning, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Pause between the end of one frame and the start of the next.
    pub frame_interval: Duration,
    pub mandelbrot: MandelbrotConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            mandelbrot: MandelbrotConfig::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_algorithm().map(|_| ())
    }

    pub(crate) fn build_algorithm(&self) -> Result<MandelbrotAlgorithm, ConfigError> {
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }

        Ok(self.mandelbrot.build_algorithm()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert!(config.frame_interval >= Duration::from_millis(10));
        assert!(config.frame_interval <= Duration::from_millis(100));
        assert_eq!(config.mandelbrot.max_iterations, 1000);
        assert_eq!(config.mandelbrot.bailout_squared, 16.0);
    }

    #[test]
    fn test_zero_frame_interval_is_rejected() {
        let config = ExplorerConfig {
            frame_interval: Duration::ZERO,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));
    }

    #[test]
    fn test_engine_errors_are_wrapped() {
        let config = ExplorerConfig {
            mandelbrot: MandelbrotConfig {
                max_iterations: 0,
                bailout_squared: 16.0,
            },
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Mandelbrot(MandelbrotError::ZeroMaxIterations))
        );
    }
}

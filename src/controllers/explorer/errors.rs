use std::io;
use thiserror::Error;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Failures raised by the terminal collaborator.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to initialise terminal: {0}")]
    Init(#[source] io::Error),
    #[error("failed to write to terminal: {0}")]
    Write(#[source] io::Error),
    #[error("failed to query terminal size: {0}")]
    Size(#[source] io::Error),
    #[error("failed to read terminal event: {0}")]
    Event(#[source] io::Error),
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid explorer configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("failed to spawn render thread: {0}")]
    RenderThreadSpawn(#[source] io::Error),
    #[error("render thread panicked")]
    RenderThreadPanicked,
}

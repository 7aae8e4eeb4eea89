use log::{error, info, trace};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::explorer::dispatcher::run_input_loop;
use crate::controllers::explorer::errors::{ExplorerError, SurfaceError};
use crate::controllers::explorer::ports::event_source::EventSource;
use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::controllers::explorer::renderer::render_frame;
use crate::controllers::explorer::session::Session;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotIndexedPalette;

struct SharedState {
    session: Arc<Session>,
    surface: Arc<dyn TerminalSurface>,
    algorithm: MandelbrotAlgorithm,
    palette: MandelbrotIndexedPalette,
    frame_interval: Duration,
    frames_rendered: AtomicU64,
}

/// Drives one explorer session: a render thread redrawing on a fixed
/// interval, and the input loop run on the caller's thread by [`run`].
///
/// The two only meet through the [`Session`]. Dropping the controller
/// terminates the session and joins the render thread.
///
/// [`run`]: ExplorerController::run
pub struct ExplorerController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<Result<(), SurfaceError>>>,
}

impl ExplorerController {
    pub fn new(
        config: ExplorerConfig,
        surface: Arc<dyn TerminalSurface>,
    ) -> Result<Self, ExplorerError> {
        Self::with_session(config, surface, Arc::new(Session::default()))
    }

    pub fn with_session(
        config: ExplorerConfig,
        surface: Arc<dyn TerminalSurface>,
        session: Arc<Session>,
    ) -> Result<Self, ExplorerError> {
        let algorithm = config.build_algorithm()?;

        let shared = Arc::new(SharedState {
            session,
            surface,
            algorithm,
            palette: MandelbrotIndexedPalette,
            frame_interval: config.frame_interval,
            frames_rendered: AtomicU64::new(0),
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("mandelterm-render".into())
            .spawn(move || Self::render_loop(&worker_shared))
            .map_err(ExplorerError::RenderThreadSpawn)?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn session(&self) -> Arc<Session> {
        Arc::clone(&self.shared.session)
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.shared.frames_rendered.load(Ordering::Acquire)
    }

    /// Runs the input loop until quit, then stops the render thread.
    ///
    /// Returns the number of frames drawn. An event read failure takes
    /// precedence over a render failure when both occur.
    pub fn run(&mut self, events: &mut dyn EventSource) -> Result<u64, ExplorerError> {
        let input_result = run_input_loop(
            events,
            &self.shared.session,
            self.shared.surface.as_ref(),
        );

        let render_result = self.shutdown();
        input_result?;
        render_result?;

        let frames = self.frames_rendered();
        info!("session ended after {} frames", frames);
        Ok(frames)
    }

    /// Terminates the session and waits for the render thread to finish
    /// its current frame.
    pub fn shutdown(&mut self) -> Result<(), ExplorerError> {
        self.shared.session.terminate();

        let Some(handle) = self.worker.take() else {
            return Ok(());
        };

        match handle.join() {
            Ok(result) => Ok(result?),
            Err(_) => Err(ExplorerError::RenderThreadPanicked),
        }
    }

    fn render_loop(shared: &SharedState) -> Result<(), SurfaceError> {
        loop {
            if shared.session.is_terminated() {
                return Ok(());
            }

            let viewport = shared.session.viewport();
            let start = Instant::now();

            match render_frame(
                shared.surface.as_ref(),
                &viewport,
                &shared.algorithm,
                &shared.palette,
            ) {
                Ok(Some(stats)) => {
                    shared.frames_rendered.fetch_add(1, Ordering::AcqRel);
                    trace!(
                        "frame {}x{} rendered in {:?}",
                        stats.grid.width,
                        stats.grid.height,
                        start.elapsed()
                    );
                }
                Ok(None) => trace!("skipped frame on empty grid"),
                Err(e) => {
                    error!("render failed, ending session: {}", e);
                    shared.session.terminate();
                    return Err(e);
                }
            }

            if shared.session.wait_for_termination(shared.frame_interval) {
                return Ok(());
            }
        }
    }
}

impl Drop for ExplorerController {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

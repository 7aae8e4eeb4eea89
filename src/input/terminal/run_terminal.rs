use log::info;
use std::sync::Arc;

use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::controllers::explorer::{ExplorerConfig, ExplorerController, ExplorerError};
use crate::input::terminal::crossterm_events::CrosstermEvents;
use crate::presenters::terminal::surface::CrosstermSurface;

/// Runs an interactive session on the controlling terminal.
pub struct RunTerminalCommand {
    config: ExplorerConfig,
}

impl RunTerminalCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Blocks until the user quits. The terminal is restored before
    /// returning, whether or not the session failed.
    pub fn run(&self) -> Result<(), ExplorerError> {
        self.config.validate()?;

        let surface: Arc<CrosstermSurface> = Arc::new(CrosstermSurface::init()?);
        let grid = surface.size();
        info!(
            "starting session on {}x{} grid, {:?}",
            grid.width, grid.height, self.config
        );

        let session_result = ExplorerController::new(
            self.config,
            Arc::clone(&surface) as Arc<dyn TerminalSurface>,
        )
        .and_then(|mut controller| controller.run(&mut CrosstermEvents));

        let restore_result = surface.finalize();

        session_result?;
        restore_result?;
        Ok(())
    }
}

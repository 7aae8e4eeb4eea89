use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::{debug, warn};
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::core::data::colour::PaletteColour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

type SizeQuery = fn() -> io::Result<(u16, u16)>;

struct SurfaceState<W> {
    out: W,
    frame: Vec<u8>,
    size: GridSize,
    cursor: Option<Point>,
    last_fg: Option<PaletteColour>,
    last_bg: Option<PaletteColour>,
}

impl<W: Write> SurfaceState<W> {
    fn queue_cell(
        &mut self,
        position: Point,
        glyph: char,
        foreground: PaletteColour,
        background: PaletteColour,
    ) -> io::Result<()> {
        if self.cursor != Some(position) {
            queue!(self.frame, MoveTo(position.x, position.y))?;
        }

        if self.last_fg != Some(foreground) {
            queue!(self.frame, SetForegroundColor(Color::AnsiValue(foreground.index())))?;
            self.last_fg = Some(foreground);
        }

        if self.last_bg != Some(background) {
            queue!(self.frame, SetBackgroundColor(Color::AnsiValue(background.index())))?;
            self.last_bg = Some(background);
        }

        queue!(self.frame, Print(glyph))?;

        self.cursor = position.x.checked_add(1).map(|x| Point { x, y: position.y });
        Ok(())
    }

    /// Writes the pending frame in one go. The next frame starts with no
    /// assumed cursor position or colours.
    fn present(&mut self) -> io::Result<()> {
        queue!(self.frame, ResetColor)?;

        self.cursor = None;
        self.last_fg = None;
        self.last_bg = None;

        let result = self
            .out
            .write_all(&self.frame)
            .and_then(|()| self.out.flush());
        self.frame.clear();
        result
    }
}

/// Full-screen surface: raw mode, alternate screen, mouse capture.
///
/// Cell writes stay in memory until [`show`](TerminalSurface::show), which
/// hands the whole frame to the terminal at once. Call
/// [`finalize`](CrosstermSurface::finalize) to give the terminal back.
pub struct CrosstermSurface<W = Stdout> {
    state: Mutex<SurfaceState<W>>,
    query_size: SizeQuery,
}

impl CrosstermSurface<Stdout> {
    pub fn init() -> Result<Self, SurfaceError> {
        terminal::enable_raw_mode().map_err(SurfaceError::Init)?;

        let mut out = io::stdout();
        let setup = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            ResetColor,
            Clear(ClearType::All)
        )
        .and_then(|()| terminal::size());

        let size = match setup {
            Ok(size) => GridSize::from(size),
            Err(e) => {
                let _ = execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen);
                let _ = terminal::disable_raw_mode();
                return Err(SurfaceError::Init(e));
            }
        };

        debug!("terminal initialised at {}x{}", size.width, size.height);

        Ok(Self::with_writer(out, size, terminal::size))
    }

    /// Restores the terminal. Every step is attempted; the first failure
    /// is returned.
    pub fn finalize(&self) -> Result<(), SurfaceError> {
        let mut state = self.lock();

        let screen = execute!(
            state.out,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let raw_mode = terminal::disable_raw_mode();

        if let Err(e) = &raw_mode {
            warn!("failed to leave raw mode: {}", e);
        }

        screen.and(raw_mode).map_err(SurfaceError::Restore)
    }
}

impl<W: Write> CrosstermSurface<W> {
    fn with_writer(out: W, size: GridSize, query_size: SizeQuery) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                out,
                frame: Vec::new(),
                size,
                cursor: None,
                last_fg: None,
                last_bg: None,
            }),
            query_size,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> TerminalSurface for CrosstermSurface<W> {
    fn size(&self) -> GridSize {
        self.lock().size
    }

    fn set_cell(
        &self,
        position: Point,
        glyph: char,
        foreground: PaletteColour,
        background: PaletteColour,
    ) -> Result<(), SurfaceError> {
        self.lock()
            .queue_cell(position, glyph, foreground, background)
            .map_err(SurfaceError::Write)
    }

    fn show(&self) -> Result<(), SurfaceError> {
        self.lock().present().map_err(SurfaceError::Write)
    }

    fn sync(&self) -> Result<(), SurfaceError> {
        let size = (self.query_size)().map_err(SurfaceError::Size)?;
        let mut state = self.lock();

        state.size = GridSize::from(size);
        execute!(state.out, ResetColor, Clear(ClearType::All)).map_err(SurfaceError::Write)
    }
}

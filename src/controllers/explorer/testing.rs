//! In-memory stand-ins for the terminal, shared by the explorer tests.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::events::input_event::InputEvent;
use crate::controllers::explorer::ports::event_source::EventSource;
use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::core::data::colour::PaletteColour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedCell {
    pub position: Point,
    pub glyph: char,
    pub foreground: PaletteColour,
    pub background: PaletteColour,
}

/// Records every call. `size` reports the synchronised geometry; a
/// physical resize only shows up after `sync`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    synced_size: Mutex<GridSize>,
    physical_size: Mutex<GridSize>,
    painted: Mutex<Vec<PaintedCell>>,
    paints_before_first_show: Mutex<Option<usize>>,
    shows: AtomicUsize,
    syncs: AtomicUsize,
    fail_writes: AtomicBool,
}

impl RecordingSurface {
    pub fn new(size: GridSize) -> Self {
        Self {
            synced_size: Mutex::new(size),
            physical_size: Mutex::new(size),
            ..Self::default()
        }
    }

    /// Changes the physical size and synchronises immediately.
    pub fn resize_to(&self, size: GridSize) {
        self.set_physical_size(size);
        *self.synced_size.lock().unwrap() = size;
    }

    /// Changes the physical size; `size` reports it after the next `sync`.
    pub fn set_physical_size(&self, size: GridSize) {
        *self.physical_size.lock().unwrap() = size;
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn painted(&self) -> Vec<PaintedCell> {
        self.painted.lock().unwrap().clone()
    }

    pub fn clear_painted(&self) {
        self.painted.lock().unwrap().clear();
    }

    pub fn paints_before_first_show(&self) -> Option<usize> {
        *self.paints_before_first_show.lock().unwrap()
    }

    pub fn show_count(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }

    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<(), SurfaceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SurfaceError::Write(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "recording surface closed",
            )));
        }
        Ok(())
    }
}

impl TerminalSurface for RecordingSurface {
    fn size(&self) -> GridSize {
        *self.synced_size.lock().unwrap()
    }

    fn set_cell(
        &self,
        position: Point,
        glyph: char,
        foreground: PaletteColour,
        background: PaletteColour,
    ) -> Result<(), SurfaceError> {
        self.check_writable()?;
        self.painted.lock().unwrap().push(PaintedCell {
            position,
            glyph,
            foreground,
            background,
        });
        Ok(())
    }

    fn show(&self) -> Result<(), SurfaceError> {
        self.check_writable()?;
        let painted = self.painted.lock().unwrap().len();
        self.paints_before_first_show.lock().unwrap().get_or_insert(painted);
        self.shows.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn sync(&self) -> Result<(), SurfaceError> {
        let physical = *self.physical_size.lock().unwrap();
        *self.synced_size.lock().unwrap() = physical;
        self.syncs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Replays a fixed list of events, then reports termination forever.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
    fail: bool,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            fail: false,
        }
    }

    /// A source whose every read fails.
    pub fn failing() -> Self {
        Self {
            events: VecDeque::new(),
            fail: true,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Result<InputEvent, SurfaceError> {
        if self.fail {
            return Err(SurfaceError::Event(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "event stream closed",
            )));
        }

        Ok(self.events.pop_front().unwrap_or(InputEvent::Terminate))
    }
}

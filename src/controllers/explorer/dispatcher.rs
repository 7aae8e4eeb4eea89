use log::debug;

use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::events::input_event::{InputEvent, Key, MouseButton, MouseInput};
use crate::controllers::explorer::ports::event_source::EventSource;
use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::controllers::explorer::session::Session;
use crate::core::data::point::Point;
use crate::core::data::viewport::{PanDirection, ZoomDirection};

/// What an input event asks the explorer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    /// Zoom about the current center.
    Zoom(ZoomDirection),
    Pan(PanDirection),
    Reset,
    /// Center the view on a cell, then zoom in.
    RecenterZoom(Point),
    Resync,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Quit,
}

/// Translates an input event into a command; `None` for events with no binding.
#[must_use]
pub fn command_for(event: &InputEvent) -> Option<ExplorerCommand> {
    match *event {
        InputEvent::Key(key) => command_for_key(key),
        InputEvent::Mouse(mouse) => command_for_mouse(mouse),
        InputEvent::Resize => Some(ExplorerCommand::Resync),
        InputEvent::Terminate => Some(ExplorerCommand::Quit),
    }
}

fn command_for_key(key: Key) -> Option<ExplorerCommand> {
    let command = match key {
        Key::Escape | Key::Char('q') => ExplorerCommand::Quit,
        Key::Char('z' | '+' | '=') | Key::PageUp => ExplorerCommand::Zoom(ZoomDirection::In),
        Key::Char('x' | '-' | '_') | Key::PageDown => ExplorerCommand::Zoom(ZoomDirection::Out),
        Key::Up | Key::Char('w') => ExplorerCommand::Pan(PanDirection::Up),
        Key::Down | Key::Char('s') => ExplorerCommand::Pan(PanDirection::Down),
        Key::Left | Key::Char('a') => ExplorerCommand::Pan(PanDirection::Left),
        Key::Right | Key::Char('d') => ExplorerCommand::Pan(PanDirection::Right),
        Key::Home => ExplorerCommand::Reset,
        Key::Char(_) => return None,
    };

    Some(command)
}

fn command_for_mouse(mouse: MouseInput) -> Option<ExplorerCommand> {
    match mouse.button {
        MouseButton::Primary => Some(ExplorerCommand::RecenterZoom(mouse.position)),
        MouseButton::Secondary | MouseButton::WheelDown => {
            Some(ExplorerCommand::Zoom(ZoomDirection::Out))
        }
        MouseButton::WheelUp => Some(ExplorerCommand::Zoom(ZoomDirection::In)),
        MouseButton::Middle => None,
    }
}

/// Carries out `command` against the session and surface.
pub fn apply(
    command: ExplorerCommand,
    session: &Session,
    surface: &dyn TerminalSurface,
) -> Result<DispatchOutcome, SurfaceError> {
    let viewport = match command {
        ExplorerCommand::Quit => {
            session.terminate();
            return Ok(DispatchOutcome::Quit);
        }
        ExplorerCommand::Resync => {
            surface.sync()?;
            debug!("resynchronised terminal geometry to {:?}", surface.size());
            return Ok(DispatchOutcome::Continue);
        }
        ExplorerCommand::Zoom(direction) => session.update_viewport(|v| v.zoom(direction)),
        ExplorerCommand::Pan(direction) => session.update_viewport(|v| v.pan(direction)),
        ExplorerCommand::Reset => session.update_viewport(|v| v.reset()),
        ExplorerCommand::RecenterZoom(cell) => {
            let grid = surface.size();
            session.update_viewport(|v| {
                v.recenter(cell, grid);
                v.zoom(ZoomDirection::In);
            })
        }
    };

    debug!("{:?} -> {:?}", command, viewport);
    Ok(DispatchOutcome::Continue)
}

/// Handles one event. Unbound events are ignored.
pub fn dispatch(
    event: &InputEvent,
    session: &Session,
    surface: &dyn TerminalSurface,
) -> Result<DispatchOutcome, SurfaceError> {
    match command_for(event) {
        Some(command) => apply(command, session, surface),
        None => Ok(DispatchOutcome::Continue),
    }
}

/// Blocks on `events` and dispatches each one until the session ends.
///
/// Returns when a quit command arrives, when the session was terminated
/// elsewhere (checked between events), or with the error if reading
/// events fails.
pub fn run_input_loop(
    events: &mut dyn EventSource,
    session: &Session,
    surface: &dyn TerminalSurface,
) -> Result<(), SurfaceError> {
    while !session.is_terminated() {
        let event = events.poll_event()?;

        if dispatch(&event, session, surface)? == DispatchOutcome::Quit {
            debug!("quit requested by {:?}", event);
            break;
        }
    }

    Ok(())
}

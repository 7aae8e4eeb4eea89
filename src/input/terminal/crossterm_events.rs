use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};
use log::trace;

use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::events::input_event::{InputEvent, Key, MouseButton, MouseInput};
use crate::controllers::explorer::ports::event_source::EventSource;
use crate::core::data::point::Point;

/// Converts a crossterm event, dropping anything the explorer has no use for.
#[must_use]
pub fn convert_event(event: CrosstermEvent) -> Option<InputEvent> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn convert_key_event(event: CrosstermKeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    // Raw mode delivers Ctrl+C as a key instead of a signal.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C'))
    {
        return Some(InputEvent::Terminate);
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };

    Some(InputEvent::Key(key))
}

fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<InputEvent> {
    let button = match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => MouseButton::Primary,
        MouseEventKind::Down(CrosstermMouseButton::Right) => MouseButton::Secondary,
        MouseEventKind::Down(CrosstermMouseButton::Middle) => MouseButton::Middle,
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        _ => return None,
    };

    Some(InputEvent::Mouse(MouseInput {
        button,
        position: Point {
            x: event.column,
            y: event.row,
        },
    }))
}

/// Blocking reader over crossterm's global event queue.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self) -> Result<InputEvent, SurfaceError> {
        loop {
            let raw = event::read().map_err(SurfaceError::Event)?;
            trace!("terminal event {:?}", raw);

            if let Some(event) = convert_event(raw) {
                return Ok(event);
            }
        }
    }
}

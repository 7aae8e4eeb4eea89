use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::events::input_event::InputEvent;

pub trait EventSource {
    /// Blocks until the next input event arrives.
    fn poll_event(&mut self) -> Result<InputEvent, SurfaceError>;
}

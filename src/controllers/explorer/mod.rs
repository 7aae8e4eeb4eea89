//! Interactive explorer session.
//!
//! Glues the core escape-time pipeline to a terminal:
//! - **Input**: [`EventSource`] yields [`InputEvent`]s, which the dispatcher
//!   turns into viewport commands on the shared [`Session`]
//! - **Output**: the renderer paints half-block cells onto a
//!   [`TerminalSurface`] on a fixed interval
//! - **Glue**: [`ExplorerController`] runs both loops and owns shutdown

mod controller;
pub mod data;
pub mod dispatcher;
pub mod errors;
pub mod events;
pub mod ports;
pub mod renderer;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use controller::ExplorerController;
pub use data::explorer_config::ExplorerConfig;
pub use errors::{ConfigError, ExplorerError, SurfaceError};
pub use events::input_event::{InputEvent, Key, MouseButton, MouseInput};
pub use ports::event_source::EventSource;
pub use ports::surface::TerminalSurface;
pub use session::Session;

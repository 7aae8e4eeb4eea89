//! Terminal input adapter: crossterm events in, explorer session out.

pub mod crossterm_events;
pub mod run_terminal;

pub use run_terminal::RunTerminalCommand;

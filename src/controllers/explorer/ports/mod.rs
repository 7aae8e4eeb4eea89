//! Interfaces between the explorer and the terminal it draws on and reads from.

pub mod event_source;
pub mod surface;

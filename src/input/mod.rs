//! Input adapters for the explorer.
//!
//! Adapters receive input from a concrete source and drive an explorer
//! session with it.

pub mod terminal;

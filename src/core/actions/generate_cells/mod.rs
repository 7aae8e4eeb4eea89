#[allow(clippy::module_inception)]
pub mod generate_cells;
pub mod ports;

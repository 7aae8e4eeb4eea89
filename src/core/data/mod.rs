pub mod colour;
pub mod complex;
pub mod grid_size;
pub mod point;
pub mod viewport;

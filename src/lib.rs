mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::explorer::{
    ConfigError, EventSource, ExplorerConfig, ExplorerController, ExplorerError, InputEvent, Key,
    MouseButton, MouseInput, Session, SurfaceError, TerminalSurface,
};
pub use crate::core::actions::generate_cells::generate_cells::{HALF_BLOCK, HalfBlockCell, generate_cells};
pub use crate::core::actions::generate_cells::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_cells::ports::fractal_algorithm::{EscapeResult, FractalAlgorithm};
pub use crate::core::data::colour::PaletteColour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{PanDirection, Viewport, ZoomDirection};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, evaluate};
pub use crate::core::fractals::mandelbrot::colour_map::{MandelbrotIndexedPalette, colour_for};
pub use crate::core::util::map_coordinate::map_coordinate;
pub use crate::input::terminal::RunTerminalCommand;

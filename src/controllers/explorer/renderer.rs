use crate::controllers::explorer::errors::SurfaceError;
use crate::controllers::explorer::ports::surface::TerminalSurface;
use crate::core::actions::generate_cells::generate_cells::{HALF_BLOCK, generate_cells};
use crate::core::actions::generate_cells::ports::colour_map::ColourMap;
use crate::core::actions::generate_cells::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub grid: GridSize,
    pub cells_painted: usize,
}

/// Draws one full frame of `viewport` onto `surface` and flushes it.
///
/// The grid size is read once per frame, so a resize takes effect on the
/// next call. Returns `Ok(None)` without touching the surface when the
/// grid has no cells.
pub fn render_frame(
    surface: &dyn TerminalSurface,
    viewport: &Viewport,
    algorithm: &dyn FractalAlgorithm,
    colour_map: &dyn ColourMap,
) -> Result<Option<FrameStats>, SurfaceError> {
    let grid = surface.size();
    if grid.is_empty() {
        return Ok(None);
    }

    let cells = generate_cells(grid, viewport, algorithm, colour_map);
    let width = usize::from(grid.width);

    for (index, cell) in cells.iter().enumerate() {
        // Indices are bounded by the u16 grid dimensions.
        let position = Point {
            x: (index % width) as u16,
            y: (index / width) as u16,
        };
        surface.set_cell(position, HALF_BLOCK, cell.foreground, cell.background)?;
    }

    surface.show()?;

    Ok(Some(FrameStats {
        grid,
        cells_painted: cells.len(),
    }))
}

use rayon::prelude::*;

use crate::core::actions::generate_cells::ports::colour_map::ColourMap;
use crate::core::actions::generate_cells::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::PaletteColour;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_coordinate::map_coordinate;

/// Glyph whose lower half takes the foreground colour and upper half the
/// background colour.
pub const HALF_BLOCK: char = '▄';

/// Colours for one character cell packing two vertical samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HalfBlockCell {
    /// Upper sample.
    pub background: PaletteColour,
    /// Lower sample.
    pub foreground: PaletteColour,
}

/// Plane coordinates of the upper and lower samples packed into cell `(x, row)`.
///
/// Row `row` covers sample rows `2·row` and `2·row + 1`, mapped over the
/// doubled index range `[0, 2·height]`.
#[must_use]
pub fn cell_samples(x: u16, row: u16, grid: GridSize, viewport: &Viewport) -> (Complex, Complex) {
    let sample_rows = grid.sample_rows();
    let upper_row = u32::from(row) * 2;

    let real = map_coordinate(u32::from(x), 0, u32::from(grid.width), viewport.x0(), viewport.x1());
    let upper = map_coordinate(upper_row, 0, sample_rows, viewport.y0(), viewport.y1());
    let lower = map_coordinate(upper_row + 1, 0, sample_rows, viewport.y0(), viewport.y1());

    (Complex::new(real, upper), Complex::new(real, lower))
}

/// Classifies and colours every cell of `grid` under `viewport`.
///
/// Rows are evaluated in parallel on rayon's pool; the result is row-major.
/// Each cell costs exactly two calls to the algorithm. An empty grid yields
/// no cells.
pub fn generate_cells<Alg, Map>(
    grid: GridSize,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &Map,
) -> Vec<HalfBlockCell>
where
    Alg: FractalAlgorithm + ?Sized,
    Map: ColourMap + ?Sized,
{
    if grid.is_empty() {
        return Vec::new();
    }

    let rows: Vec<Vec<HalfBlockCell>> = (0..grid.height)
        .into_par_iter()
        .map(|row| {
            (0..grid.width)
                .map(|x| {
                    let (upper, lower) = cell_samples(x, row, grid, viewport);

                    HalfBlockCell {
                        background: colour_map.map(algorithm.evaluate(upper)),
                        foreground: colour_map.map(algorithm.evaluate(lower)),
                    }
                })
                .collect()
        })
        .collect();

    let mut cells = Vec::with_capacity(grid.cell_count());
    for row in rows {
        cells.extend(row);
    }
    cells
}

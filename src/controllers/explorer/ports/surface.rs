use crate::controllers::explorer::errors::SurfaceError;
use crate::core::data::colour::PaletteColour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Character-grid display shared by the render and input loops.
pub trait TerminalSurface: Send + Sync {
    /// Current grid dimensions as last synchronised.
    fn size(&self) -> GridSize;

    fn set_cell(
        &self,
        position: Point,
        glyph: char,
        foreground: PaletteColour,
        background: PaletteColour,
    ) -> Result<(), SurfaceError>;

    /// Flushes painted cells to the display.
    fn show(&self) -> Result<(), SurfaceError>;

    /// Re-reads the physical geometry after a resize and clears the display.
    fn sync(&self) -> Result<(), SurfaceError>;
}

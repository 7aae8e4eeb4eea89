use crate::core::actions::generate_cells::ports::fractal_algorithm::EscapeResult;
use crate::core::data::colour::PaletteColour;

pub trait ColourMap: Send + Sync {
    fn map(&self, escape: EscapeResult) -> PaletteColour;
}

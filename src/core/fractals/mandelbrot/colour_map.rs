use crate::core::actions::generate_cells::ports::colour_map::ColourMap;
use crate::core::actions::generate_cells::ports::fractal_algorithm::EscapeResult;
use crate::core::data::colour::PaletteColour;

/// Skips the 16 basic terminal colours.
pub const PALETTE_OFFSET: u32 = 16;
pub const PALETTE_PERIOD: u32 = 229;
pub const INSIDE_COLOUR: PaletteColour = PaletteColour(232);

/// Palette index for a point that escaped after `iterations` steps.
#[must_use]
pub fn colour_for(iterations: u32) -> PaletteColour {
    // The modulus keeps the index below 229, so the narrowing cannot truncate.
    PaletteColour(((PALETTE_OFFSET + iterations % PALETTE_PERIOD) % PALETTE_PERIOD) as u8)
}

/// Wrapping indexed palette; points inside the set get a fixed dark colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct MandelbrotIndexedPalette;

impl ColourMap for MandelbrotIndexedPalette {
    #[inline]
    fn map(&self, escape: EscapeResult) -> PaletteColour {
        if escape.converged {
            INSIDE_COLOUR
        } else {
            colour_for(escape.iterations)
        }
    }
}

/// An entry of the terminal's 256-colour indexed palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PaletteColour(pub u8);

impl PaletteColour {
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

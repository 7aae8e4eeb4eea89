/// Dimensions of the character grid, in cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A grid with no columns or no rows has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Each character row packs two plane-sample rows.
    #[must_use]
    pub fn sample_rows(&self) -> u32 {
        u32::from(self.height) * 2
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl From<(u16, u16)> for GridSize {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(GridSize::new(0, 24).is_empty());
        assert!(GridSize::new(80, 0).is_empty());
        assert!(GridSize::new(0, 0).is_empty());
        assert!(!GridSize::new(1, 1).is_empty());
    }

    #[test]
    fn test_sample_rows_doubles_height() {
        assert_eq!(GridSize::new(10, 5).sample_rows(), 10);
        assert_eq!(GridSize::new(80, u16::MAX).sample_rows(), 131_070);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(GridSize::new(10, 5).cell_count(), 50);
        assert_eq!(GridSize::new(0, 5).cell_count(), 0);
    }
}

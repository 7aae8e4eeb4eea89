use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::util::map_coordinate::map_coordinate;

/// Fraction of the current span each bound moves per zoom-in step.
pub const ZOOM_FRACTION: f64 = 1.0 / 10.0;

/// Fraction of the current span the view shifts per pan step.
pub const PAN_FRACTION: f64 = 1.0 / 10.0;

pub const DEFAULT_X0: f64 = -2.0;
pub const DEFAULT_X1: f64 = 1.0;
pub const DEFAULT_Y0: f64 = -1.0;
pub const DEFAULT_Y1: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The rectangle of the complex plane mapped onto the character grid.
///
/// `x0` is the left edge, `x1` the right edge, `y0` the top row and `y1`
/// the bottom row. Bounds are never normalised: the sign of each span sets
/// the direction every operation moves in, and a span collapsed to zero
/// stays collapsed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_X0, DEFAULT_X1, DEFAULT_Y0, DEFAULT_Y1)
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Signed `(x1 - x0, y1 - y0)`.
    #[must_use]
    pub fn span(&self) -> (f64, f64) {
        (self.x1 - self.x0, self.y1 - self.y0)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Symmetric zoom about the current center.
    ///
    /// Zooming in pulls each bound `ZOOM_FRACTION` of its span towards the
    /// center. Zooming out pushes the bounds out by the amount that undoes
    /// one zoom-in step, so the two directions are inverses.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let (span_x, span_y) = self.span();

        let factor = match direction {
            ZoomDirection::In => ZOOM_FRACTION,
            ZoomDirection::Out => -ZOOM_FRACTION / (1.0 - 2.0 * ZOOM_FRACTION),
        };

        let dx = span_x * factor;
        let dy = span_y * factor;

        self.x0 += dx;
        self.x1 -= dx;
        self.y0 += dy;
        self.y1 -= dy;
    }

    /// Translates the view by `PAN_FRACTION` of the span, keeping the span.
    pub fn pan(&mut self, direction: PanDirection) {
        let (span_x, span_y) = self.span();
        let step_x = span_x * PAN_FRACTION;
        let step_y = span_y * PAN_FRACTION;

        match direction {
            PanDirection::Up => {
                self.y0 -= step_y;
                self.y1 -= step_y;
            }
            PanDirection::Down => {
                self.y0 += step_y;
                self.y1 += step_y;
            }
            PanDirection::Left => {
                self.x0 -= step_x;
                self.x1 -= step_x;
            }
            PanDirection::Right => {
                self.x0 += step_x;
                self.x1 += step_x;
            }
        }
    }

    /// Plane point under the top-left corner of `cell` on a grid of `grid`.
    ///
    /// Returns `None` for an empty grid, where the mapping is undefined.
    #[must_use]
    pub fn plane_point_at(&self, cell: Point, grid: GridSize) -> Option<Complex> {
        if grid.is_empty() {
            return None;
        }

        let real = map_coordinate(u32::from(cell.x), 0, u32::from(grid.width), self.x0, self.x1);
        let imag = map_coordinate(u32::from(cell.y), 0, u32::from(grid.height), self.y0, self.y1);

        Some(Complex::new(real, imag))
    }

    /// Moves the view so the plane point under `cell` becomes the center,
    /// keeping both spans. A no-op on an empty grid.
    pub fn recenter(&mut self, cell: Point, grid: GridSize) {
        let Some(target) = self.plane_point_at(cell, grid) else {
            return;
        };

        let (span_x, span_y) = self.span();

        self.x0 = target.real - span_x / 2.0;
        self.x1 = target.real + span_x / 2.0;
        self.y0 = target.imag - span_y / 2.0;
        self.y1 = target.imag + span_y / 2.0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Affine interpolation of a discrete grid index onto a continuous range.
///
/// `index_min` maps to `out_min` and `index_max` maps to `out_max`. The
/// output range may be inverted (`out_max < out_min`); the mapping follows
/// it without normalising. `index_min == index_max` divides by zero, so
/// callers skip zero-sized grids before mapping.
#[must_use]
pub fn map_coordinate(index: u32, index_min: u32, index_max: u32, out_min: f64, out_max: f64) -> f64 {
    (f64::from(index) - f64::from(index_min)) * (out_max - out_min)
        / (f64::from(index_max) - f64::from(index_min))
        + out_min
}

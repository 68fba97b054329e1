///
/// Number of fixed-point sub-units per pixel
///
/// The centre of the pixel at `(x, y)` is at `(x*SUBPIXELS, y*SUBPIXELS)` in fixed-point coordinates.
///
pub const SUBPIXELS: i64 = 16;

///
/// Extra half-width added when looking for candidate pixels in the multi-sample tiers
///
/// No sample is further than this from the centre of its pixel, so a pixel whose centre is outside of a shape grown by
/// this amount cannot have any samples inside the shape.
///
pub const CANDIDATE_MARGIN: i64 = 12;

/// The single sample used by the solid tier
pub const SOLID_PATTERN: [(i64, i64); 1] = [(0, 0)];

/// Rotated-grid pattern for the 4x tier (offsets from the pixel centre in sub-units)
pub const MSAA4_PATTERN: [(i64, i64); 4] = [(-6, -2), (2, -6), (6, 2), (-2, 6)];

/// Point-symmetric sparse pattern for the 8x tier, one sample per column and row of a 16x16 grid
pub const MSAA8_PATTERN: [(i64, i64); 8] = [
    (-7, -1), (-5, 5), (-3, -5), (-1, 3),
    (1, -3), (3, 5), (5, -5), (7, 1),
];

///
/// The anti-aliasing quality that the canvas should be drawn at
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Antialiasing {
    /// One sample per pixel, no anti-aliasing
    Solid,

    /// Four samples per pixel
    Msaa4,

    /// Eight samples per pixel
    Msaa8,
}

impl Default for Antialiasing {
    fn default() -> Self {
        Antialiasing::Msaa4
    }
}

impl Antialiasing {
    ///
    /// The sample offsets used by this tier
    ///
    #[inline]
    pub fn pattern(&self) -> &'static [(i64, i64)] {
        match self {
            Antialiasing::Solid => &SOLID_PATTERN,
            Antialiasing::Msaa4 => &MSAA4_PATTERN,
            Antialiasing::Msaa8 => &MSAA8_PATTERN,
        }
    }

    ///
    /// The number of samples per pixel for this tier
    ///
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.pattern().len()
    }
}

///
/// Converts a coordinate in pixels to fixed point
///
#[inline]
pub fn to_fixed(pixels: f64) -> i64 {
    (pixels * (SUBPIXELS as f64)).round() as i64
}

///
/// The half-thickness of a stroke or the half-size of a dot, in sub-units
///
/// A thickness of 0 is a hairline, which is slightly thinner than a 1 pixel line.
///
#[inline]
pub fn half_thickness(thickness: u32) -> i64 {
    if thickness > 0 {
        (thickness as i64) * (SUBPIXELS / 2)
    } else {
        5
    }
}

/// Floor division of fixed point values to pixels
#[inline]
pub(crate) fn floor_pixel(fixed: i64) -> i64 {
    fixed.div_euclid(SUBPIXELS)
}

/// Ceiling division of fixed point values to pixels
#[inline]
pub(crate) fn ceil_pixel(fixed: i64) -> i64 {
    -((-fixed).div_euclid(SUBPIXELS))
}

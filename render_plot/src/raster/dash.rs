use super::sample_pattern::*;

///
/// The on/off pattern of a dashed line, in fixed-point sub-units
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashPattern {
    /// Length of the inked part of each period
    pub dash:   i64,

    /// Length of a whole dash plus the gap that follows it
    pub period: i64,
}

impl DashPattern {
    ///
    /// Creates the dash pattern for a line of a given thickness, with `dash` and `space` in pixels
    ///
    /// Thicker lines get longer dashes so that the round look of the line survives.
    ///
    pub fn new(dash: u32, space: u32, thickness: u32) -> DashPattern {
        let dash    = (dash as i64 + thickness as i64) * SUBPIXELS;
        let period  = (dash + (space as i64) * SUBPIXELS).max(1);

        DashPattern { dash, period }
    }

    ///
    /// True if the specified distance along the line (with the phase already added) is inked
    ///
    #[inline]
    pub fn is_ink(&self, along: i64) -> bool {
        along.rem_euclid(self.period) < self.dash
    }
}

///
/// The running position within the dash pattern, carried between the segments of a polyline
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashPhase(pub i64);

impl DashPhase {
    /// Starts an independent dash pattern
    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    ///
    /// Moves the phase along by a segment of the specified length (in sub-units)
    ///
    #[inline]
    pub fn advance(&mut self, pattern: &DashPattern, length: i64) {
        self.0 = (self.0 + length).rem_euclid(pattern.period);
    }
}

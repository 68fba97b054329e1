use crate::raster::*;

///
/// Options that control how a drawing context renders
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawOptions {
    /// The number of samples per pixel for the anti-aliased primitives
    pub antialiasing:   Antialiasing,

    /// The gamma correction value used when averaging samples
    pub gamma:          f64,

    /// Stroke thickness, in pixels, of the aliased lines drawn directly to a frame
    pub thickness:      u32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        DrawOptions {
            antialiasing:   Antialiasing::default(),
            gamma:          2.2,
            thickness:      1,
        }
    }
}

impl DrawOptions {
    ///
    /// Sets the anti-aliasing tier
    ///
    pub fn with_antialiasing(mut self, antialiasing: Antialiasing) -> Self {
        self.antialiasing = antialiasing;
        self
    }

    ///
    /// Sets the gamma correction value
    ///
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    ///
    /// Sets the gamma correction from a percentage (100% is no correction, 50% is a gamma of 2)
    ///
    pub fn with_gamma_percent(mut self, percent: u32) -> Self {
        self.gamma = 100.0 / (percent.max(1) as f64);
        self
    }

    ///
    /// Sets the thickness of the aliased lines
    ///
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }
}

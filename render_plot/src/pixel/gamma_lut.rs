///
/// A pair of 8-bit gamma correction look-up tables
///
/// `to_linear` maps a gamma-encoded channel value to a (roughly) linear intensity, and `to_gamma` maps it back again. Samples
/// are converted to linear before they are averaged so that the coverage blends evenly.
///
#[derive(Clone)]
pub struct GammaLut {
    gamma:      f64,
    to_linear:  [u8; 256],
    to_gamma:   [u8; 256],
}

impl GammaLut {
    ///
    /// Creates the gamma look-up tables for a gamma correction value
    ///
    pub fn new(gamma: f64) -> Self {
        let gamma = if gamma.is_finite() && gamma > 0.0 { gamma } else { 1.0 };

        let mut to_linear   = [0u8; 256];
        let mut to_gamma    = [0u8; 256];

        // Calculate both directions of the conversion
        for idx in 0..256 {
            let t = (idx as f64)/255.0;

            to_linear[idx]  = (t.powf(gamma) * 255.0).ceil().min(255.0) as u8;
            to_gamma[idx]   = (t.powf(1.0/gamma) * 255.0).ceil().min(255.0) as u8;
        }

        GammaLut {
            gamma:      gamma,
            to_linear:  to_linear,
            to_gamma:   to_gamma,
        }
    }

    ///
    /// Creates the gamma look-up tables from a percentage, where 100% is no correction and 50% is a gamma of 2
    ///
    pub fn from_percent(percent: u32) -> Self {
        Self::new(100.0 / (percent.max(1) as f64))
    }

    ///
    /// Returns the gamma correction value this table is using
    ///
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Converts a gamma-encoded channel value to linear
    #[inline]
    pub fn to_linear(&self, val: u8) -> u8 {
        self.to_linear[val as usize]
    }

    /// Converts a linear channel value back to gamma-encoded
    #[inline]
    pub fn to_gamma(&self, val: u8) -> u8 {
        self.to_gamma[val as usize]
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        GammaLut::new(2.2)
    }
}

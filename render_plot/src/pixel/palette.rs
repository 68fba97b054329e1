/// The number of entries in a palette
pub const PALETTE_SIZE: usize = 16;

///
/// Maps the small colour indexes stored in the canvas to true RGB colours (`0x00RRGGBB`)
///
/// Index 0 is reserved to mean 'nothing has been drawn here': the palette entry is the background colour, which is only
/// used when clearing frames.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [u32; PALETTE_SIZE],
}

impl Palette {
    ///
    /// Creates a palette where every entry is black
    ///
    pub fn black() -> Palette {
        Palette { colors: [0; PALETTE_SIZE] }
    }

    ///
    /// Sets the RGB colour of an entry in this palette (indexes outside of the palette are ignored)
    ///
    #[inline]
    pub fn set_color(&mut self, index: u8, rgb: u32) {
        if let Some(color) = self.colors.get_mut(index as usize) {
            *color = rgb & 0x00ff_ffff;
        }
    }

    ///
    /// Retrieves the RGB colour for an index (indexes outside of the palette are black)
    ///
    #[inline]
    pub fn color(&self, index: u8) -> u32 {
        self.colors.get(index as usize).copied().unwrap_or(0)
    }

    ///
    /// True if the index can be drawn with (index 0 is the 'untouched' sentinel so can't be used)
    ///
    #[inline]
    pub fn is_drawable(index: u8) -> bool {
        index > 0 && (index as usize) < PALETTE_SIZE
    }
}

impl Default for Palette {
    ///
    /// A light scheme with a white background, a set of distinct colours for the curves and a grey for hidden curves
    ///
    fn default() -> Self {
        Palette {
            colors: [
                0xffffff,
                0xa00000, 0x00a000, 0x0000a0, 0xc0a000,
                0x00a0a0, 0xa000a0, 0x505050, 0xc05000,
                0xb0b0b0,
                0x000000,
                0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            ]
        }
    }
}

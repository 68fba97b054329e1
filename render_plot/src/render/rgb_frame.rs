use crate::error::*;
use crate::geometry::*;

///
/// A frame of `0x00RRGGBB` pixels that a plot can be flushed to
///
/// The pitch is the number of pixels between the start of each row, which can be larger than the width when the frame
/// is part of a larger surface.
///
pub struct RgbFrame<'a> {
    pub width:  usize,
    pub height: usize,
    pub pitch:  usize,
    pub pixels: &'a mut [u32],
}

impl<'a> RgbFrame<'a> {
    ///
    /// Creates a RgbFrame from a buffer of pixels (returns an error if the buffer is not big enough)
    ///
    #[inline]
    pub fn from_pixels(width: usize, height: usize, pixels: &'a mut [u32]) -> Result<Self, RenderError> {
        Self::from_pixels_with_pitch(width, height, width, pixels)
    }

    ///
    /// Creates a RgbFrame from a buffer of pixels with a separate row pitch
    ///
    pub fn from_pixels_with_pitch(width: usize, height: usize, pitch: usize, pixels: &'a mut [u32]) -> Result<Self, RenderError> {
        let required = if height == 0 { 0 } else { pitch * (height-1) + width };

        if pitch < width || pixels.len() < required {
            Err(RenderError::FrameTooSmall)
        } else {
            Ok(RgbFrame {
                width:  width,
                height: height,
                pitch:  pitch,
                pixels: pixels,
            })
        }
    }

    ///
    /// A clip box that covers the whole of this frame
    ///
    #[inline]
    pub fn clip_box(&self) -> ClipBox {
        ClipBox::with_size(self.width, self.height)
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || (x as usize) >= self.width || (y as usize) >= self.height {
            None
        } else {
            Some((y as usize) * self.pitch + (x as usize))
        }
    }

    ///
    /// Reads the pixel at a position (None if it's outside the frame)
    ///
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        let offset = self.offset(x, y)?;
        self.pixels.get(offset).copied()
    }

    ///
    /// Sets the pixel at a position (does nothing if the position is outside the frame)
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, rgb: u32) {
        if let Some(offset) = self.offset(x, y) {
            if let Some(pixel) = self.pixels.get_mut(offset) {
                *pixel = rgb;
            }
        }
    }

    ///
    /// The pixels making up a row of this frame
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u32] {
        if y >= self.height {
            &mut []
        } else {
            let start = y * self.pitch;
            &mut self.pixels[start..(start + self.width)]
        }
    }

    ///
    /// Sets every pixel in this frame to the same colour
    ///
    pub fn fill(&mut self, rgb: u32) {
        for y in 0..self.height {
            self.row_mut(y).iter_mut().for_each(|pixel| *pixel = rgb);
        }
    }

    ///
    /// Converts this frame to opaque RGBA bytes, with no padding between the rows
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);

        for y in 0..self.height {
            let start = y * self.pitch;

            for rgb in self.pixels[start..(start + self.width)].iter() {
                bytes.extend_from_slice(&[(rgb >> 16) as u8, (rgb >> 8) as u8, *rgb as u8, 255]);
            }
        }

        bytes
    }
}

use super::sample_buffer::*;

use crate::raster::*;

///
/// Coverage writer that sets the covered samples of the canvas to a palette index
///
pub struct CanvasWriter<'a, const N: usize> {
    buffer:     &'a mut SampleBuffer<N>,
    pattern:    &'static [(i64, i64)],
    color:      u8,
}

///
/// Coverage writer for the trial buffer: it writes a colour in the same way as the canvas writer, but also counts how many
/// samples actually changed
///
pub struct TrialWriter<'a, const N: usize> {
    buffer:     &'a mut SampleBuffer<N>,
    pattern:    &'static [(i64, i64)],
    color:      u8,
    changed:    usize,
}

impl<'a, const N: usize> CanvasWriter<'a, N> {
    ///
    /// Creates a writer that sets samples to the specified colour
    ///
    pub fn new(buffer: &'a mut SampleBuffer<N>, pattern: &'static [(i64, i64)], color: u8) -> Self {
        CanvasWriter { buffer, pattern, color }
    }
}

impl<'a, const N: usize> TrialWriter<'a, N> {
    ///
    /// Creates a writer that sets samples to the specified colour and counts the changes
    ///
    pub fn new(buffer: &'a mut SampleBuffer<N>, pattern: &'static [(i64, i64)], color: u8) -> Self {
        TrialWriter { buffer, pattern, color, changed: 0 }
    }

    ///
    /// The number of samples that have been changed by this writer so far
    ///
    #[inline]
    pub fn changed(&self) -> usize {
        self.changed
    }
}

impl<'a, const N: usize> CoverageWriter for CanvasWriter<'a, N> {
    #[inline]
    fn samples(&self) -> &[(i64, i64)] {
        self.pattern
    }

    #[inline]
    fn write_samples(&mut self, x: i32, y: i32, mask: u8) {
        let color = self.color;

        if let Some(pixel) = self.buffer.pixel_mut(x, y) {
            for (idx, sample) in pixel.iter_mut().enumerate() {
                if (mask & (1 << idx)) != 0 {
                    *sample = color;
                }
            }
        }
    }
}

impl<'a, const N: usize> CoverageWriter for TrialWriter<'a, N> {
    #[inline]
    fn samples(&self) -> &[(i64, i64)] {
        self.pattern
    }

    #[inline]
    fn write_samples(&mut self, x: i32, y: i32, mask: u8) {
        let color = self.color;

        if let Some(pixel) = self.buffer.pixel_mut(x, y) {
            for (idx, sample) in pixel.iter_mut().enumerate() {
                if (mask & (1 << idx)) != 0 && *sample != color {
                    *sample = color;
                    self.changed += 1;
                }
            }
        }
    }
}

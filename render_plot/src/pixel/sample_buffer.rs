use crate::error::*;

///
/// The size that sample buffers are aligned to
///
pub const PIXMAP_ALIGNMENT: usize = 8;

///
/// A buffer of pixels, each of which is made up of `N` samples
///
/// Each sample is a palette index, where 0 means that nothing has been drawn there.
///
#[derive(Clone, Debug)]
pub struct SampleBuffer<const N: usize> {
    width:      usize,
    height:     usize,
    samples:    Vec<[u8; N]>,
}

impl<const N: usize> SampleBuffer<N> {
    ///
    /// Creates an empty sample buffer
    ///
    pub fn empty() -> Self {
        SampleBuffer {
            width:      0,
            height:     0,
            samples:    vec![],
        }
    }

    ///
    /// Allocates a cleared sample buffer for at least the specified size
    ///
    pub fn with_size(width: usize, height: usize) -> Result<Self, RenderError> {
        let mut buffer = Self::empty();
        buffer.resize(width, height)?;

        Ok(buffer)
    }

    ///
    /// Resizes this buffer (rounding up the size to the alignment) and clears it
    ///
    /// The storage is only reallocated if it's too small for the new size.
    ///
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        let width   = align(width);
        let height  = align(height);
        let len     = width.checked_mul(height).ok_or(RenderError::PixmapAllocation)?;

        self.samples.clear();

        if self.samples.capacity() < len {
            // Release the old storage before trying to reserve the new one
            self.samples = vec![];
            self.samples.try_reserve_exact(len).map_err(|_| RenderError::PixmapAllocation)?;
        }

        self.samples.resize(len, [0; N]);
        self.width  = width;
        self.height = height;

        Ok(())
    }

    /// The width of this buffer in pixels
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of this buffer in pixels
    #[inline]
    pub fn height(&self) -> usize { self.height }

    ///
    /// Resets every sample to 0
    ///
    pub fn clear(&mut self) {
        self.samples.iter_mut().for_each(|pixel| *pixel = [0; N]);
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || (x as usize) >= self.width || (y as usize) >= self.height {
            None
        } else {
            Some((y as usize) * self.width + (x as usize))
        }
    }

    ///
    /// Retrieves the samples for a pixel, or None if the pixel is outside of the buffer
    ///
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8; N]> {
        let offset = self.offset(x, y)?;
        self.samples.get(offset)
    }

    ///
    /// Retrieves the samples for a pixel for editing
    ///
    #[inline]
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [u8; N]> {
        let offset = self.offset(x, y)?;
        self.samples.get_mut(offset)
    }

    ///
    /// Returns the samples for a row of pixels
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[[u8; N]] {
        if y >= self.height {
            &[]
        } else {
            &self.samples[(y*self.width)..((y+1)*self.width)]
        }
    }
}

#[inline]
fn align(size: usize) -> usize {
    let remainder = size % PIXMAP_ALIGNMENT;

    if remainder == 0 {
        size
    } else {
        size + (PIXMAP_ALIGNMENT - remainder)
    }
}

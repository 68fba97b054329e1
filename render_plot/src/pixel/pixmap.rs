use super::sample_buffer::*;
use super::sample_writer::*;

use crate::error::*;
use crate::raster::*;

use log::*;

///
/// The canvas and trial buffers for a single anti-aliasing tier
///
#[derive(Clone, Debug)]
pub struct SamplePair<const N: usize> {
    /// The buffer that accumulates the output that will be flushed to the frame
    pub canvas: SampleBuffer<N>,

    /// Scratch buffer used to test whether or not drawing something would change anything
    pub trial:  SampleBuffer<N>,
}

///
/// The sample buffers for each of the anti-aliasing tiers
///
#[derive(Clone, Debug)]
pub enum PixmapSamples {
    Solid(SamplePair<1>),
    Msaa4(SamplePair<4>),
    Msaa8(SamplePair<8>),
}

///
/// The canvas and trial buffers used by a drawing context
///
/// The buffers are sized to the viewport rounded up to 8 pixels, and are only reallocated when the viewport grows past
/// their capacity or the anti-aliasing tier changes.
///
#[derive(Clone, Debug)]
pub struct Pixmap {
    width:      usize,
    height:     usize,
    samples:    Option<PixmapSamples>,
}

impl<const N: usize> SamplePair<N> {
    fn with_size(width: usize, height: usize) -> Result<Self, RenderError> {
        Ok(SamplePair {
            canvas: SampleBuffer::with_size(width, height)?,
            trial:  SampleBuffer::with_size(width, height)?,
        })
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        self.canvas.resize(width, height)?;
        self.trial.resize(width, height)?;

        Ok(())
    }
}

impl PixmapSamples {
    fn with_size(antialiasing: Antialiasing, width: usize, height: usize) -> Result<Self, RenderError> {
        match antialiasing {
            Antialiasing::Solid => Ok(PixmapSamples::Solid(SamplePair::with_size(width, height)?)),
            Antialiasing::Msaa4 => Ok(PixmapSamples::Msaa4(SamplePair::with_size(width, height)?)),
            Antialiasing::Msaa8 => Ok(PixmapSamples::Msaa8(SamplePair::with_size(width, height)?)),
        }
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        match self {
            PixmapSamples::Solid(pair) => pair.resize(width, height),
            PixmapSamples::Msaa4(pair) => pair.resize(width, height),
            PixmapSamples::Msaa8(pair) => pair.resize(width, height),
        }
    }

    fn antialiasing(&self) -> Antialiasing {
        match self {
            PixmapSamples::Solid(_) => Antialiasing::Solid,
            PixmapSamples::Msaa4(_) => Antialiasing::Msaa4,
            PixmapSamples::Msaa8(_) => Antialiasing::Msaa8,
        }
    }
}

impl Pixmap {
    ///
    /// Creates a pixmap with no buffers allocated
    ///
    pub fn empty() -> Pixmap {
        Pixmap {
            width:      0,
            height:     0,
            samples:    None,
        }
    }

    ///
    /// Makes sure that the buffers are allocated for a viewport of the specified size and anti-aliasing tier
    ///
    /// Both buffers are cleared if they are resized. If allocation fails, the pixmap is left unallocated (and drawing
    /// operations will do nothing) until the next time this is called.
    ///
    pub fn allocate(&mut self, antialiasing: Antialiasing, width: usize, height: usize) -> Result<(), RenderError> {
        let is_same_size    = self.width == width && self.height == height;
        let is_same_tier    = self.antialiasing() == Some(antialiasing);

        if is_same_size && is_same_tier {
            return Ok(());
        }

        let result = if is_same_tier {
            match self.samples.as_mut() {
                Some(samples)   => samples.resize(width, height),
                None            => Ok(()),
            }
        } else {
            // Free the old buffers before allocating the new ones
            self.samples = None;

            debug!("Allocating {}x{} pixmap ({:?})", width, height, antialiasing);
            PixmapSamples::with_size(antialiasing, width, height)
                .map(|samples| { self.samples = Some(samples); })
        };

        match result {
            Ok(()) => {
                self.width  = width;
                self.height = height;

                Ok(())
            }

            Err(err) => {
                error!("Unable to allocate memory for a {}x{} pixmap: {}", width, height, err);

                self.samples    = None;
                self.width      = 0;
                self.height     = 0;

                Err(err)
            }
        }
    }

    ///
    /// Frees the buffers
    ///
    pub fn clean(&mut self) {
        self.samples    = None;
        self.width      = 0;
        self.height     = 0;
    }

    /// True if the buffers are allocated
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.samples.is_some()
    }

    /// The anti-aliasing tier of the allocated buffers
    #[inline]
    pub fn antialiasing(&self) -> Option<Antialiasing> {
        self.samples.as_ref().map(|samples| samples.antialiasing())
    }

    /// The width of the viewport (the buffers may be wider)
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of the viewport (the buffers may be taller)
    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// The sample buffers
    #[inline]
    pub fn samples(&self) -> Option<&PixmapSamples> {
        self.samples.as_ref()
    }

    ///
    /// Resets the canvas to 'nothing drawn'
    ///
    pub fn clear_canvas(&mut self) {
        match &mut self.samples {
            Some(PixmapSamples::Solid(pair)) => pair.canvas.clear(),
            Some(PixmapSamples::Msaa4(pair)) => pair.canvas.clear(),
            Some(PixmapSamples::Msaa8(pair)) => pair.canvas.clear(),
            None                             => { }
        }
    }

    ///
    /// Resets the trial buffer to 'nothing drawn'
    ///
    pub fn clear_trial(&mut self) {
        match &mut self.samples {
            Some(PixmapSamples::Solid(pair)) => pair.trial.clear(),
            Some(PixmapSamples::Msaa4(pair)) => pair.trial.clear(),
            Some(PixmapSamples::Msaa8(pair)) => pair.trial.clear(),
            None                             => { }
        }
    }

    ///
    /// Calls a rasterizing function with a writer that sets samples in the canvas to the specified colour
    ///
    /// Nothing is drawn if the pixmap is not allocated.
    ///
    pub fn draw_canvas<TDrawFn>(&mut self, color: u8, draw: TDrawFn)
    where
        TDrawFn: FnOnce(&mut dyn CoverageWriter),
    {
        match &mut self.samples {
            Some(PixmapSamples::Solid(pair)) => draw(&mut CanvasWriter::new(&mut pair.canvas, &SOLID_PATTERN, color)),
            Some(PixmapSamples::Msaa4(pair)) => draw(&mut CanvasWriter::new(&mut pair.canvas, &MSAA4_PATTERN, color)),
            Some(PixmapSamples::Msaa8(pair)) => draw(&mut CanvasWriter::new(&mut pair.canvas, &MSAA8_PATTERN, color)),
            None                             => { }
        }
    }

    ///
    /// Calls a rasterizing function with a writer that sets samples in the trial buffer, returning the number of samples
    /// that changed value
    ///
    pub fn draw_trial<TDrawFn>(&mut self, color: u8, draw: TDrawFn) -> usize
    where
        TDrawFn: FnOnce(&mut dyn CoverageWriter),
    {
        match &mut self.samples {
            Some(PixmapSamples::Solid(pair)) => {
                let mut writer = TrialWriter::new(&mut pair.trial, &SOLID_PATTERN, color);
                draw(&mut writer);
                writer.changed()
            }

            Some(PixmapSamples::Msaa4(pair)) => {
                let mut writer = TrialWriter::new(&mut pair.trial, &MSAA4_PATTERN, color);
                draw(&mut writer);
                writer.changed()
            }

            Some(PixmapSamples::Msaa8(pair)) => {
                let mut writer = TrialWriter::new(&mut pair.trial, &MSAA8_PATTERN, color);
                draw(&mut writer);
                writer.changed()
            }

            None => 0
        }
    }

    ///
    /// Returns a copy of the samples of a canvas pixel (None if the pixel is outside the pixmap or it's not allocated)
    ///
    pub fn canvas_samples(&self, x: i32, y: i32) -> Option<Vec<u8>> {
        match &self.samples {
            Some(PixmapSamples::Solid(pair)) => pair.canvas.pixel(x, y).map(|pixel| pixel.to_vec()),
            Some(PixmapSamples::Msaa4(pair)) => pair.canvas.pixel(x, y).map(|pixel| pixel.to_vec()),
            Some(PixmapSamples::Msaa8(pair)) => pair.canvas.pixel(x, y).map(|pixel| pixel.to_vec()),
            None                             => None,
        }
    }

    ///
    /// Returns a copy of the samples of a trial pixel (None if the pixel is outside the pixmap or it's not allocated)
    ///
    pub fn trial_samples(&self, x: i32, y: i32) -> Option<Vec<u8>> {
        match &self.samples {
            Some(PixmapSamples::Solid(pair)) => pair.trial.pixel(x, y).map(|pixel| pixel.to_vec()),
            Some(PixmapSamples::Msaa4(pair)) => pair.trial.pixel(x, y).map(|pixel| pixel.to_vec()),
            Some(PixmapSamples::Msaa8(pair)) => pair.trial.pixel(x, y).map(|pixel| pixel.to_vec()),
            None                             => None,
        }
    }
}

impl Default for Pixmap {
    fn default() -> Self {
        Pixmap::empty()
    }
}

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while rendering a plot
///
/// None of these are fatal: the renderer reports them and carries on with a degraded frame (either drawing nothing or
/// drawing without caching).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The canvas or trial buffer could not be allocated
    PixmapAllocation,

    /// The storage for a sketch chunk could not be allocated
    SketchAllocation,

    /// There are no free sketch chunks left in the pool
    SketchPoolExhausted,

    /// A frame buffer is smaller than its stated size
    FrameTooSmall,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PixmapAllocation       => write!(f, "unable to allocate memory for the canvas pixmap"),
            RenderError::SketchAllocation       => write!(f, "unable to allocate memory for a sketch chunk"),
            RenderError::SketchPoolExhausted    => write!(f, "unable to get a free sketch chunk"),
            RenderError::FrameTooSmall          => write!(f, "frame buffer is smaller than the frame size"),
        }
    }
}

impl Error for RenderError { }

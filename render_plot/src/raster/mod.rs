//!
//! The rasterizer works in a fixed-point space with 16 sub-units per pixel. Shapes are described by edge functions that
//! are tested against the sample positions of each candidate pixel, and the resulting coverage is passed to a
//! `CoverageWriter` which decides what to do with it (write it to the canvas, or compare it against the trial buffer).
//!

mod sample_pattern;
mod coverage;
mod dash;
mod stadium;
mod dot;
mod mark;

pub use sample_pattern::*;
pub use coverage::*;
pub use dash::*;
pub use stadium::*;
pub use dot::*;
pub use mark::*;

//!
//! # flo_render_plot
//!
//! A progressive software renderer for plots of very large time series.
//!
//! Curves are drawn as anti-aliased thick lines, dashed lines or dots into a multi-sample pixmap, which is composited into
//! a true-colour frame using a small palette and a gamma-correct average of the samples. Rather than drawing every sample
//! of a curve every frame, a `ProgressiveScheduler` runs a time-budgeted 'trial' pass that only keeps the segments that
//! actually change some pixels. These are cached in a pool of sketch chunks that can be replayed cheaply on subsequent
//! frames until the data changes.
//!
//! The modules are layered: `geometry` and `raster` do the fixed-point rasterization, `pixel` stores and composites the
//! samples, `render` writes frames (including PNG and terminal output), `vector` mirrors the drawing into a vector sink,
//! `draw` ties these together into a `DrawContext` and `sketch` and `schedule` implement the progressive drawing.
//!

mod error;

/// Clip boxes and line clipping
pub mod geometry;

/// The fixed-point rasterizer for lines, dashes, dots and markers
pub mod raster;

/// A pixel is represented by a set of palette indexes (one per sample), which are averaged when the canvas is flushed to a frame
pub mod pixel;

/// Frames that can be rendered to, and the aliased 'rough' drawing operations that write to them directly
pub mod render;

/// Sinks that receive a vector copy of everything that's drawn
pub mod vector;

/// The drawing context, which owns the pixmap and the drawing state
pub mod draw;

/// Cached sketches of curves that can be replayed without touching the data
pub mod sketch;

/// Progressive, time-budgeted drawing of curves
pub mod schedule;

pub use error::*;

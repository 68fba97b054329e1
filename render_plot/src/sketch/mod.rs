//!
//! The sketch is a cache of the line segments and dots that actually changed the trial buffer during the last complete
//! pass over the data. Replaying it redraws the plot without having to visit the samples again.
//!
//! Chunks are kept in a fixed-size arena and referred to by handle. The chunks being filled by the current pass are
//! kept separately from the chunks from the last complete pass, which are the ones that are replayed.
//!

mod curve_id;
mod sketch_chunk;
mod sketch_pool;

pub use curve_id::*;
pub use sketch_chunk::*;
pub use sketch_pool::*;

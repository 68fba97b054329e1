mod vector_sink;
mod vector_recorder;
mod svg_writer;

pub use vector_sink::*;
pub use vector_recorder::*;
pub use svg_writer::*;

mod palette;
mod gamma_lut;
mod sample_buffer;
mod sample_writer;
mod pixmap;
mod flush;

pub use palette::*;
pub use gamma_lut::*;
pub use sample_buffer::*;
pub use sample_writer::*;
pub use pixmap::*;
pub use flush::*;

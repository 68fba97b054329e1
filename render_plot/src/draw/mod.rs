mod draw_options;
mod draw_context;

pub use draw_options::*;
pub use draw_context::*;

mod rgb_frame;
mod rough;
mod png_render;
mod terminal_render;

pub use rgb_frame::*;
pub use rough::*;
pub use png_render::*;
pub use terminal_render::*;

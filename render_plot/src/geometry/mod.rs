mod clip_box;

pub use clip_box::*;

//!
//! The scheduler draws a set of curves progressively: each frame it draws as much as it can into the trial buffer in a
//! fixed amount of time, remembering where each curve got to so that it can carry on in the next frame. Curves take
//! turns, with the curve that has read the fewest samples always going next.
//!

mod sample_source;
mod chunked_series;
mod screen_map;
mod tick_clock;
mod draw_state;
mod schedule_options;
mod scheduler;

pub use sample_source::*;
pub use chunked_series::*;
pub use screen_map::*;
pub use tick_clock::*;
pub use draw_state::*;
pub use schedule_options::*;
pub use scheduler::*;

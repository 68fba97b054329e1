use std::time::{Duration};

///
/// Options that control how the progressive scheduler divides up its work
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleOptions {
    /// The time to spend drawing each frame
    pub frame_budget:           Duration,

    /// The number of samples drawn between reads of the clock
    pub clock_stride:           u32,

    /// The number of chunks in the sketch pool
    pub sketch_pool_size:       usize,

    /// The number of coordinate values each sketch chunk can store
    pub sketch_chunk_capacity:  usize,

    /// The length of the dashes of dashed curves, in pixels
    pub dash:                   u32,

    /// The length of the gaps between dashes, in pixels
    pub space:                  u32,

    /// Chunks of samples are culled if they're further than this from the viewport, in pixels
    pub cull_margin:            f64,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        ScheduleOptions {
            frame_budget:           Duration::from_millis(20),
            clock_stride:           64,
            sketch_pool_size:       800,
            sketch_chunk_capacity:  32768,
            dash:                   8,
            space:                  12,
            cull_margin:            16.0,
        }
    }
}

impl ScheduleOptions {
    pub fn with_frame_budget(mut self, frame_budget: Duration) -> Self {
        self.frame_budget = frame_budget;
        self
    }

    pub fn with_clock_stride(mut self, clock_stride: u32) -> Self {
        self.clock_stride = clock_stride;
        self
    }

    pub fn with_sketch_pool(mut self, pool_size: usize, chunk_capacity: usize) -> Self {
        self.sketch_pool_size       = pool_size;
        self.sketch_chunk_capacity  = chunk_capacity;
        self
    }

    pub fn with_dash(mut self, dash: u32, space: u32) -> Self {
        self.dash   = dash;
        self.space  = space;
        self
    }

    pub fn with_cull_margin(mut self, cull_margin: f64) -> Self {
        self.cull_margin = cull_margin;
        self
    }
}

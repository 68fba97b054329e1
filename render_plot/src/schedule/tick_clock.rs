use once_cell::sync::{Lazy};

use std::time::{Duration, Instant};

///
/// A source of monotonic time
///
pub trait TickSource {
    /// The time since an arbitrary fixed point
    fn now(&mut self) -> Duration;
}

///
/// Reads the time from the system's monotonic clock
///
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTicks;

static CLOCK_START: Lazy<Instant> = Lazy::new(|| Instant::now());

impl TickSource for SystemTicks {
    #[inline]
    fn now(&mut self) -> Duration {
        CLOCK_START.elapsed()
    }
}

///
/// A clock that only reads the time on one of every `stride` calls to `tick()`, returning the last time it read otherwise
///
/// Reading the time is slow compared to drawing a single line, so the scheduler checks its deadline through this.
///
pub struct ThrottledClock<TTicks>
where
    TTicks: TickSource,
{
    ticks:      TTicks,
    stride:     u32,
    skip:       u32,
    cached:     Duration,
}

impl<TTicks> ThrottledClock<TTicks>
where
    TTicks: TickSource,
{
    ///
    /// Creates a clock that reads the time once every `stride` ticks
    ///
    pub fn new(ticks: TTicks, stride: u32) -> Self {
        ThrottledClock {
            ticks:      ticks,
            stride:     stride.max(1),
            skip:       0,
            cached:     Duration::ZERO,
        }
    }

    ///
    /// Reads the time, ignoring the throttle
    ///
    pub fn now(&mut self) -> Duration {
        self.cached = self.ticks.now();
        self.cached
    }

    ///
    /// Returns the time, reading the clock only if enough ticks have passed since it was last read
    ///
    #[inline]
    pub fn tick(&mut self) -> Duration {
        if self.skip > 0 {
            self.skip -= 1;
            self.cached
        } else {
            self.skip = self.stride - 1;
            self.now()
        }
    }

    ///
    /// Restarts the throttle, so the next tick reads the clock
    ///
    pub fn reset(&mut self) {
        self.skip = 0;
    }
}

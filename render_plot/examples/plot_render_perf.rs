//!
//! Measures the performance of the stages of progressive plot rendering
//!
//! Each stage can be called on its own: rasterizing lines into the canvas, drawing lines as trials, flushing the canvas
//! to a frame and running or replaying a progressive pass.
//!

use flo_render_plot::draw::*;
use flo_render_plot::geometry::*;
use flo_render_plot::raster::*;
use flo_render_plot::render::*;
use flo_render_plot::schedule::*;
use flo_render_plot::sketch::*;

use std::time::{Instant, Duration};

struct TimingResult {
    /// The number of times the function was called
    iterations: usize,

    /// The total time taken to call the specified number of iterations
    total_time: Duration,

    /// The time for each call (seconds)
    time_per_call: f64,

    /// The number of calls that can be made in 1 frame (~16ms)
    calls_per_frame: f64,
}

///
/// Formats a value in seconds for display
///
fn format_seconds(seconds: f64) -> String {
    if seconds < 1e-6 {
        format!("{:.1}ns", seconds * 1e9)
    } else if seconds < 1e-3 {
        format!("{:.1}µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.1}ms", seconds * 1e3)
    } else {
        format!("{:.1}s", seconds)
    }
}

impl TimingResult {
    ///
    /// Creates a summary of this timing result
    ///
    pub fn summary(&self) -> String {
        format!("{} calls made in {}. {} per call, {:.1} calls per frame",
            self.iterations,
            format_seconds((self.total_time.as_nanos() as f64) / 1e9),
            format_seconds(self.time_per_call),
            self.calls_per_frame)
    }

    ///
    /// Creates a summary of this timing result with an FPS value
    ///
    pub fn summary_fps(&self) -> String {
        format!("{} calls made in {}. {} per call, {:.1} fps",
            self.iterations,
            format_seconds((self.total_time.as_nanos() as f64) / 1e9),
            format_seconds(self.time_per_call),
            1.0 / self.time_per_call)
    }
}

///
/// Calls a function `iterations` times and times it
///
fn time<T>(iterations: usize, action: impl FnMut() -> T) -> TimingResult {
    use std::hint::{black_box};

    let mut action = action;

    // Warm up
    for _ in 0..10 {
        black_box(action());
    }

    let start_time = Instant::now();

    for _ in 0..iterations {
        black_box(action());
    }

    let total_time      = Instant::now().duration_since(start_time);
    let total_seconds   = (total_time.as_nanos() as f64) / 1_000_000_000.0;

    TimingResult {
        iterations:         iterations,
        total_time:         total_time,
        time_per_call:      total_seconds / (iterations as f64),
        calls_per_frame:    (1.0/60.0) / (total_seconds / (iterations as f64)),
    }
}

fn print_header(name: &str) {
    println!("\n\x1b[1m{}\x1b[22m", name);
}

fn main() {
    const WIDTH: usize  = 1920;
    const HEIGHT: usize = 1080;

    let clip        = ClipBox::with_size(WIDTH, HEIGHT);
    let mut pixels  = vec![0u32; WIDTH * HEIGHT];
    let mut frame   = RgbFrame::from_pixels(WIDTH, HEIGHT, &mut pixels).unwrap();

    // Rasterizing single lines at each anti-aliasing tier
    print_header("Line rasterization");

    for antialiasing in [Antialiasing::Solid, Antialiasing::Msaa4, Antialiasing::Msaa8] {
        let mut context = DrawContext::new(DrawOptions::default().with_antialiasing(antialiasing));
        context.pixmap_alloc(WIDTH, HEIGHT).unwrap();

        let short_lines = time(100_000, || context.draw_line_canvas(&clip, (100.0, 100.0), (110.0, 103.0), 1, 1));
        let long_lines  = time(1_000, || context.draw_line_canvas(&clip, (0.0, 0.0), (1919.0, 1079.0), 1, 2));
        let dashes      = time(1_000, || context.draw_dash_canvas(&clip, (0.0, 540.0), (1919.0, 540.0), 2, 1, 8, 12));
        let trials      = time(100_000, || context.draw_line_trial(&clip, (100.0, 100.0), (110.0, 130.0), 1, 1));

        println!("  {:?} short line: {}", antialiasing, short_lines.summary());
        println!("  {:?} diagonal line: {}", antialiasing, long_lines.summary());
        println!("  {:?} dashed line: {}", antialiasing, dashes.summary());
        println!("  {:?} trial line: {}", antialiasing, trials.summary());

        let flush = time(100, || context.flush_canvas(&mut frame, &clip));
        println!("  {:?} flush: {}", antialiasing, flush.summary_fps());
    }

    // Progressive passes over a large series
    print_header("Progressive drawing");

    let series      = ChunkedSeries::from_samples(4096, (0..1_000_000).map(|i| {
        let t = (i as f64) / 1_000_000.0;
        (t, (t * 60.0).sin() * 0.45 + 0.5)
    }));
    let screen_map  = ScreenMap::from_axes((1.0, 0.0), (1.0, 0.0), &clip);
    let curves      = vec![PlotCurve::from_series(CurveId::new(), &series, 1).with_screen_map(screen_map)];
    let options     = ScheduleOptions::default().with_frame_budget(Duration::from_secs(60));

    let mut context = DrawContext::default();
    context.pixmap_alloc(WIDTH, HEIGHT).unwrap();

    let full_pass = time(5, || {
        let mut scheduler = ProgressiveScheduler::new(options);
        scheduler.draw_trial_pass(&mut context, &clip, &curves)
    });

    let mut scheduler = ProgressiveScheduler::new(options);
    scheduler.draw_trial_pass(&mut context, &clip, &curves);

    let replay = time(50, || {
        context.clear_canvas();
        scheduler.draw_sketch(&mut context, &clip, &curves);
    });

    println!("  Trial pass over 1,000,000 samples: {}", full_pass.summary());
    println!("  Sketch replay ({} coordinates): {}", scheduler.sketch_pool().todraw_length(), replay.summary_fps());
}

use flo_render_plot::draw::*;
use flo_render_plot::geometry::*;
use flo_render_plot::render::*;
use flo_render_plot::schedule::*;
use flo_render_plot::sketch::*;

use std::time::{Duration, Instant};

///
/// Plots a few waves to the terminal, using the progressive scheduler to build up the image over several frames
///
pub fn main() {
    const WIDTH: usize  = 1024;
    const HEIGHT: usize = 512;

    // A few curves with a lot more samples than there are pixels
    let sine        = ChunkedSeries::from_samples(4096, (0..2_000_000).map(|i| {
        let t = (i as f64) / 2_000_000.0;
        (t, (t * 40.0).sin() * 0.4 + 0.5)
    }));
    let noisy       = ChunkedSeries::from_samples(4096, (0..2_000_000).map(|i| {
        let t       = (i as f64) / 2_000_000.0;
        let wobble  = ((i as f64) * 0.37).sin() * 0.05;
        (t, (t * 7.0).cos() * 0.3 + 0.5 + wobble)
    }));
    let dots        = ChunkedSeries::from_samples(64, (0..400).map(|i| {
        let t = (i as f64) / 400.0;
        (t, 0.1 + t * 0.8)
    }));

    let viewport    = ClipBox::with_size(WIDTH, HEIGHT);
    let screen_map  = ScreenMap::from_axes((1.0, 0.0), (1.0, 0.0), &viewport);

    let sine_id     = CurveId::new();
    let noisy_id    = CurveId::new();
    let dots_id     = CurveId::new();

    let curves      = vec![
        PlotCurve::from_series(sine_id, &sine, 1).with_screen_map(screen_map).with_width(2),
        PlotCurve::from_series(noisy_id, &noisy, 3).with_screen_map(screen_map).with_style(DrawingStyle::Dash),
        PlotCurve::from_series(dots_id, &dots, 2).with_screen_map(screen_map).with_style(DrawingStyle::Dot).with_width(3),
    ];

    // Draw frames until the scheduler has finished a complete pass
    let mut scheduler   = ProgressiveScheduler::new(ScheduleOptions::default().with_frame_budget(Duration::from_millis(15)));
    let mut context     = DrawContext::default();
    let mut pixels      = vec![0u32; WIDTH * HEIGHT];
    let mut frame       = RgbFrame::from_pixels(WIDTH, HEIGHT, &mut pixels).unwrap();

    let start_time      = Instant::now();
    let mut num_frames  = 0;

    loop {
        context.clear_frame(&mut frame, 0xffffff);
        let status = scheduler.draw_frame(&mut context, &mut frame, &viewport, &curves).unwrap();
        num_frames += 1;

        if status == PassStatus::Complete {
            break;
        }
    }

    let trial_time = Instant::now().duration_since(start_time);

    // Once the pass is complete, the sketch can be redrawn without looking at the data again
    let start_time = Instant::now();
    for _ in 0..10 {
        context.clear_frame(&mut frame, 0xffffff);
        scheduler.draw_frame(&mut context, &mut frame, &viewport, &curves).unwrap();
    }
    let replay_time = Instant::now().duration_since(start_time) / 10;

    // Put a border around the plot area
    context.draw_line(&mut frame, &viewport, (0.0, 0.0), ((WIDTH-1) as f64, 0.0), 0x000000);
    context.draw_line(&mut frame, &viewport, (0.0, (HEIGHT-1) as f64), ((WIDTH-1) as f64, (HEIGHT-1) as f64), 0x000000);

    show_frame_in_terminal(&frame).unwrap();

    println!();
    println!("Trial pass: {} frames, {}ms", num_frames, trial_time.as_millis());
    println!("Sketch replay: {}ms per frame, {} coordinates", replay_time.as_millis(), scheduler.sketch_pool().todraw_length());
}

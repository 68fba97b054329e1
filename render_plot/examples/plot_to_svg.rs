use flo_render_plot::draw::*;
use flo_render_plot::geometry::*;
use flo_render_plot::render::*;
use flo_render_plot::schedule::*;
use flo_render_plot::sketch::*;
use flo_render_plot::vector::*;

use std::io;
use std::io::{Write};

///
/// Writes a small plot as an SVG file to stdout
///
/// The raster output is thrown away: a recorder receives a copy of everything that's drawn to the frame, which is then
/// replayed into an SVG writer.
///
pub fn main() {
    const WIDTH: usize  = 640;
    const HEIGHT: usize = 320;

    let series      = ChunkedSeries::from_samples(256, (0..2_000).map(|i| {
        let t = (i as f64) / 2_000.0;
        (t, (t * 12.0).sin() * 0.4 + 0.5)
    }));

    let viewport    = ClipBox::with_size(WIDTH, HEIGHT);
    let plot_area   = ClipBox::new(40, 10, (WIDTH as i32) - 10, (HEIGHT as i32) - 30);
    let screen_map  = ScreenMap::from_axes((1.0, 0.0), (1.0, 0.0), &plot_area);
    let curves      = vec![PlotCurve::from_series(CurveId::new(), &series, 1).with_screen_map(screen_map)];

    let mut context = DrawContext::default();
    let mut pixels  = vec![0u32; WIDTH * HEIGHT];
    let mut frame   = RgbFrame::from_pixels(WIDTH, HEIGHT, &mut pixels).unwrap();

    // Run the trial pass to completion so the sketch is available
    let mut scheduler = ProgressiveScheduler::default();
    while scheduler.draw_trial_pass(&mut context, &plot_area, &curves) == PassStatus::InProgress { }

    // Draw the frame with a recorder attached
    let recorder = VectorRecorder::new();
    context.set_vector_sink(Box::new(recorder.clone()));

    context.clear_frame(&mut frame, 0xffffff);
    context.clip_rect(&mut frame, &viewport, (plot_area.min_x, plot_area.min_y), (plot_area.max_x, plot_area.max_y), 0xf0f0f0);
    scheduler.draw_frame(&mut context, &mut frame, &plot_area, &curves).unwrap();
    context.draw_line(&mut frame, &viewport, (plot_area.min_x as f64, plot_area.max_y as f64), (plot_area.max_x as f64, plot_area.max_y as f64), 0x000000);
    context.draw_line(&mut frame, &viewport, (plot_area.min_x as f64, plot_area.min_y as f64), (plot_area.min_x as f64, plot_area.max_y as f64), 0x000000);
    context.vector_text((plot_area.min_x as f64, (HEIGHT - 8) as f64), "sin(12t)", 0x000000);

    // Replay what was drawn as an SVG document
    let mut svg = SvgWriter::new(vec![], WIDTH, HEIGHT);
    for primitive in recorder.take() {
        primitive.send_to(&mut svg);
    }

    let svg = svg.finish().unwrap();
    io::stdout().write_all(&svg).unwrap();
}

use flo_render_plot::draw::*;
use flo_render_plot::geometry::*;
use flo_render_plot::raster::*;
use flo_render_plot::render::*;
use flo_render_plot::schedule::*;
use flo_render_plot::sketch::*;

use std::cell::*;
use std::sync::{Once};
use std::time::{Duration};

thread_local! {
    static WARNINGS: Cell<usize> = Cell::new(0);
}

///
/// Logger that counts the warnings from this crate that are logged on each thread
///
struct WarningCounter;

static WARNING_COUNTER: WarningCounter  = WarningCounter;
static INSTALL_LOGGER: Once             = Once::new();

impl log::Log for WarningCounter {
    fn enabled(&self, _metadata: &log::Metadata) -> bool { true }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn && record.target().starts_with("flo_render_plot") {
            WARNINGS.with(|warnings| warnings.set(warnings.get() + 1));
        }
    }

    fn flush(&self) { }
}

fn warnings_on_this_thread() -> usize {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&WARNING_COUNTER).ok();
        log::set_max_level(log::LevelFilter::Trace);
    });

    WARNINGS.with(|warnings| warnings.get())
}

///
/// Tick source that reports a time of 0 for a fixed number of reads, then moves on by an hour every time it's read
///
struct ScriptedTicks {
    reads:      usize,
    zero_reads: usize,
}

impl ScriptedTicks {
    fn new(zero_reads: usize) -> ScriptedTicks {
        ScriptedTicks { reads: 0, zero_reads: zero_reads }
    }
}

impl TickSource for ScriptedTicks {
    fn now(&mut self) -> Duration {
        self.reads += 1;

        if self.reads <= self.zero_reads {
            Duration::ZERO
        } else {
            Duration::from_secs(3600 * (self.reads - self.zero_reads) as u64)
        }
    }
}

///
/// Sample source that counts how many samples were read
///
struct CountingSource {
    series:     ChunkedSeries,
    fetches:    Cell<usize>,
}

impl SampleSource for CountingSource {
    fn head(&self) -> SampleCursor { self.series.head() }
    fn chunk_len(&self) -> usize { self.series.chunk_len() }
    fn chunk_index(&self, cursor: &SampleCursor) -> usize { self.series.chunk_index(cursor) }
    fn skip_to_chunk_end(&self, cursor: &mut SampleCursor, chunk: usize) { self.series.skip_to_chunk_end(cursor, chunk) }
    fn chunk_range(&self, chunk: usize) -> ChunkRange { self.series.chunk_range(chunk) }

    fn fetch(&self, cursor: &mut SampleCursor) -> Option<(f64, f64)> {
        let sample = self.series.fetch(cursor);

        if sample.is_some() {
            self.fetches.set(self.fetches.get() + 1);
        }

        sample
    }
}

fn context(width: usize, height: usize) -> DrawContext {
    let mut context = DrawContext::new(DrawOptions::default().with_antialiasing(Antialiasing::Solid));
    context.pixmap_alloc(width, height).unwrap();

    context
}

fn slow_options() -> ScheduleOptions {
    ScheduleOptions::default().with_frame_budget(Duration::from_secs(60))
}

fn wave(len: usize) -> ChunkedSeries {
    ChunkedSeries::from_samples(64, (0..len).map(|idx| {
        let x = idx as f64 * 0.25;
        let y = 50.0 + 30.0 * (idx as f64 / 10.0).sin();

        (x, y)
    }))
}

#[test]
pub fn pass_completes_within_generous_budget() {
    let series          = wave(400);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(128, 128);
    let mut scheduler   = ProgressiveScheduler::new(slow_options());
    let viewport        = ClipBox::new(0, 0, 127, 127);

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(status == PassStatus::Complete, "{:?}", status);
    assert!(!scheduler.is_in_progress());
    assert!(scheduler.curve_state(curve.id).map(|state| state.status()) == Some(SketchStatus::Finished));
    assert!(scheduler.sketch_pool().todraw_length() > 0);
}

#[test]
pub fn sketch_replay_matches_trial() {
    let series          = wave(400);
    let dashed          = ChunkedSeries::from_samples(16, (0..100).map(|idx| (idx as f64, 100.0 - idx as f64 * 0.5)));
    let dots            = ChunkedSeries::from_samples(16, (0..100).map(|idx| ((idx * 7 % 120) as f64, (idx * 13 % 120) as f64)));

    let line_curve      = PlotCurve::new(CurveId::new(), &series, 1).with_width(2);
    let dash_curve      = PlotCurve::new(CurveId::new(), &dashed, 2).with_style(DrawingStyle::Dash);
    let dot_curve       = PlotCurve::new(CurveId::new(), &dots, 3).with_style(DrawingStyle::Dot).with_width(3);

    for curves in [vec![line_curve], vec![dot_curve], vec![dash_curve]] {
        let mut context     = context(128, 128);
        let mut scheduler   = ProgressiveScheduler::new(slow_options());
        let viewport        = ClipBox::new(0, 0, 127, 127);

        let status = scheduler.draw_trial_pass(&mut context, &viewport, &curves);
        assert!(status == PassStatus::Complete);

        context.clear_canvas();
        scheduler.draw_sketch(&mut context, &viewport, &curves);

        if curves[0].style == DrawingStyle::Dash {
            // Dashed curves are tested as solid lines, so the replayed dashes are a subset of the trial
            for y in 0..128 {
                for x in 0..128 {
                    let canvas  = context.pixmap().canvas_samples(x, y).unwrap();
                    let trial   = context.pixmap().trial_samples(x, y).unwrap();

                    assert!(canvas[0] == 0 || canvas == trial, "({}, {}) {:?} {:?}", x, y, canvas, trial);
                }
            }
        } else {
            for y in 0..128 {
                for x in 0..128 {
                    let canvas  = context.pixmap().canvas_samples(x, y).unwrap();
                    let trial   = context.pixmap().trial_samples(x, y).unwrap();

                    assert!(canvas == trial, "({}, {}) {:?} {:?}", x, y, canvas, trial);
                }
            }
        }
    }
}

#[test]
pub fn overlapping_segments_are_not_cached() {
    // Going backwards and forwards over the same line only changes the trial buffer the first time
    let series          = ChunkedSeries::from_samples(64, (0..40).map(|idx| (if idx % 2 == 0 { 10.0 } else { 50.0 }, 20.0)));
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(64, 64);
    let mut scheduler   = ProgressiveScheduler::new(slow_options());
    let viewport        = ClipBox::new(0, 0, 63, 63);

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(scheduler.sketch_pool().todraw_length() == 4, "{:?}", scheduler.sketch_pool().todraw_length());
}

#[test]
pub fn budget_allows_one_more_sample() {
    // One read for the deadline, one for the check before the curve is drawn and then one per sample
    const K: usize = 5;

    let series          = ChunkedSeries::from_samples(10000, (0..1000).map(|idx| ((idx % 100) as f64, 20.0)));
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(128, 64);
    let options         = ScheduleOptions::default().with_clock_stride(1);
    let mut scheduler   = ProgressiveScheduler::with_ticks(options, ScriptedTicks::new(2 + K));
    let viewport        = ClipBox::new(0, 0, 127, 63);

    let status  = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    let state   = scheduler.curve_state(curve.id).unwrap();

    assert!(status == PassStatus::InProgress, "{:?}", status);
    assert!(state.status() == SketchStatus::Interrupted, "{:?}", state.status());
    assert!(state.cursor().index == (K + 1) as u64, "{:?}", state.cursor());
    assert!(scheduler.is_in_progress());
}

#[test]
pub fn interrupted_pass_resumes() {
    let series          = wave(400);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(128, 128);
    let options         = ScheduleOptions::default().with_clock_stride(1);
    let mut scheduler   = ProgressiveScheduler::with_ticks(options, ScriptedTicks::new(10));
    let viewport        = ClipBox::new(0, 0, 127, 127);

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    assert!(status == PassStatus::InProgress);

    let interrupted_at = scheduler.curve_state(curve.id).unwrap().cursor().index;
    assert!(interrupted_at > 0);

    // The scripted clock has now run out, so nothing more happens
    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(status == PassStatus::InProgress);
    assert!(scheduler.curve_state(curve.id).unwrap().cursor().index == interrupted_at);
    assert!(scheduler.sketch_pool().todraw_length() == 0);
}

#[test]
pub fn curves_take_turns() {
    let first           = ChunkedSeries::from_samples(10, (0..1000).map(|idx| ((idx % 100) as f64, 20.0)));
    let second          = ChunkedSeries::from_samples(10, (0..1000).map(|idx| ((idx % 100) as f64, 40.0)));
    let curves          = [PlotCurve::new(CurveId::new(), &first, 1), PlotCurve::new(CurveId::new(), &second, 2)];
    let mut context     = context(128, 64);
    let options         = ScheduleOptions::default().with_clock_stride(1000);
    let mut scheduler   = ProgressiveScheduler::with_ticks(options, ScriptedTicks::new(10));
    let viewport        = ClipBox::new(0, 0, 127, 63);

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &curves);
    assert!(status == PassStatus::InProgress);

    let first_index     = scheduler.curve_state(curves[0].id).unwrap().cursor().index;
    let second_index    = scheduler.curve_state(curves[1].id).unwrap().cursor().index;

    assert!(first_index > 0 && second_index > 0, "{} {}", first_index, second_index);
    assert!((first_index as i64 - second_index as i64).abs() <= 11, "{} {}", first_index, second_index);
}

#[test]
pub fn invisible_chunks_are_skipped() {
    // The middle chunk is far below the viewport
    let samples = (0..30).map(|idx| {
        let y = match idx / 10 {
            0 => 20.0,
            1 => 10000.0,
            _ => 30.0,
        };

        (idx as f64, y)
    });

    let source          = CountingSource { series: ChunkedSeries::from_samples(10, samples), fetches: Cell::new(0) };
    let curve           = PlotCurve::new(CurveId::new(), &source, 1);
    let mut context     = context(64, 64);
    let mut scheduler   = ProgressiveScheduler::new(slow_options());
    let viewport        = ClipBox::new(0, 0, 63, 63);

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(status == PassStatus::Complete);

    // Only the first sample (to finish the line) and last sample (to start the next line) are read from the hidden chunk
    assert!(source.fetches.get() == 22, "{:?}", source.fetches.get());

    assert!(context.pixmap().trial_samples(5, 20) == Some(vec![1]));
    assert!(context.pixmap().trial_samples(25, 30) == Some(vec![1]));
    assert!(context.pixmap().trial_samples(15, 20) == Some(vec![0]));
}

#[test]
pub fn chunks_without_ranges_are_not_skipped() {
    let samples         = (0..30).map(|idx| (idx as f64, if idx / 10 == 1 { 10000.0 } else { 20.0 }));
    let source          = CountingSource { series: ChunkedSeries::from_samples(10, samples).without_range_cache(), fetches: Cell::new(0) };
    let curve           = PlotCurve::new(CurveId::new(), &source, 1);
    let mut context     = context(64, 64);
    let mut scheduler   = ProgressiveScheduler::new(slow_options());
    let viewport        = ClipBox::new(0, 0, 63, 63);

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(source.fetches.get() == 30, "{:?}", source.fetches.get());
}

#[test]
pub fn non_finite_samples_break_lines() {
    let samples         = vec![(0.0, 20.0), (20.0, 20.0), (f64::NAN, 20.0), (40.0, 20.0), (60.0, 20.0)];
    let series          = ChunkedSeries::from_samples(64, samples);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(64, 64);
    let mut scheduler   = ProgressiveScheduler::new(slow_options());
    let viewport        = ClipBox::new(0, 0, 63, 63);

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(context.pixmap().trial_samples(10, 20) == Some(vec![1]));
    assert!(context.pixmap().trial_samples(30, 20) == Some(vec![0]));
    assert!(context.pixmap().trial_samples(50, 20) == Some(vec![1]));
}

#[test]
pub fn exhausted_pool_still_draws_trial() {
    let series          = wave(100);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(64, 128);
    let mut scheduler   = ProgressiveScheduler::new(slow_options().with_sketch_pool(0, 64));
    let viewport        = ClipBox::new(0, 0, 63, 127);

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(status == PassStatus::Complete);
    assert!(scheduler.sketch_pool().todraw_length() == 0);
    assert!(context.pixmap().trial_samples(0, 50) == Some(vec![1]));
}

#[test]
pub fn exhausted_pool_is_reported_once_per_pass() {
    let series          = wave(640);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(160, 128);
    let mut scheduler   = ProgressiveScheduler::new(slow_options().with_sketch_pool(0, 64));
    let viewport        = ClipBox::new(0, 0, 159, 127);

    let before = warnings_on_this_thread();

    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    assert!(status == PassStatus::Complete);

    let after_first = warnings_on_this_thread();
    assert!(after_first - before == 1, "{:?}", after_first - before);

    // A new pass reports the problem again
    let status = scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    assert!(status == PassStatus::Complete);

    let after_second = warnings_on_this_thread();
    assert!(after_second - after_first == 1, "{:?}", after_second - after_first);
}

#[test]
pub fn invalidate_discards_sketch() {
    let series          = wave(400);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(128, 128);
    let options         = slow_options().with_sketch_pool(16, 4096);
    let mut scheduler   = ProgressiveScheduler::new(options);
    let viewport        = ClipBox::new(0, 0, 127, 127);

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    assert!(scheduler.sketch_pool().todraw_length() > 0);

    scheduler.invalidate();

    assert!(scheduler.sketch_pool().todraw_length() == 0);
    assert!(scheduler.sketch_pool().free_count() == 16);
    assert!(!scheduler.is_in_progress());
    assert!(scheduler.curve_state(curve.id).is_none());
}

#[test]
pub fn later_passes_replace_sketch() {
    let series          = wave(400);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = context(128, 128);
    let options         = slow_options().with_sketch_pool(16, 4096);
    let mut scheduler   = ProgressiveScheduler::new(options);
    let viewport        = ClipBox::new(0, 0, 127, 127);

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);
    let first_length = scheduler.sketch_pool().todraw_length();
    let first_free   = scheduler.sketch_pool().free_count();

    scheduler.draw_trial_pass(&mut context, &viewport, &[curve]);

    assert!(scheduler.sketch_pool().todraw_length() == first_length);
    assert!(scheduler.sketch_pool().free_count() == first_free);
}

#[test]
pub fn changing_curves_restarts_pass() {
    let series          = wave(400);
    let first           = PlotCurve::new(CurveId::new(), &series, 1);
    let second          = PlotCurve::new(CurveId::new(), &series, 2);
    let mut context     = context(128, 128);
    let options         = ScheduleOptions::default().with_clock_stride(1);
    let mut scheduler   = ProgressiveScheduler::with_ticks(options, ScriptedTicks::new(10));
    let viewport        = ClipBox::new(0, 0, 127, 127);

    scheduler.draw_trial_pass(&mut context, &viewport, &[first]);
    assert!(scheduler.curve_state(first.id).is_some());

    scheduler.draw_trial_pass(&mut context, &viewport, &[first, second]);

    assert!(scheduler.curve_state(second.id).map(|state| state.status()) == Some(SketchStatus::Started));
    assert!(scheduler.curve_state(first.id).map(|state| state.cursor().index) == Some(0));
    assert!(scheduler.sketch_pool().free_count() == scheduler.options().sketch_pool_size);
}

#[test]
pub fn draw_frame_shows_curve() {
    let series          = ChunkedSeries::from_samples(64, vec![(0.0, 20.0), (63.0, 20.0)]);
    let curve           = PlotCurve::new(CurveId::new(), &series, 1);
    let mut context     = DrawContext::new(DrawOptions::default().with_antialiasing(Antialiasing::Solid));
    let mut scheduler   = ProgressiveScheduler::new(slow_options());

    let mut pixels      = vec![0xffffff; 64*64];
    let mut frame       = RgbFrame::from_pixels(64, 64, &mut pixels).unwrap();
    let viewport        = frame.clip_box();

    let status = scheduler.draw_frame(&mut context, &mut frame, &viewport, &[curve]);

    assert!(status == Ok(PassStatus::Complete), "{:?}", status);
    assert!(frame.pixel(30, 20) == Some(0xa00000), "{:x?}", frame.pixel(30, 20));
    assert!(frame.pixel(30, 21) == Some(0xffffff), "{:x?}", frame.pixel(30, 21));
}

#[test]
pub fn screen_map_from_axes() {
    let viewport    = ClipBox::new(0, 0, 100, 100);
    let map         = ScreenMap::from_axes((0.01, 0.0), (0.01, 0.0), &viewport);

    let (x, y) = map.map((0.0, 0.0));
    assert!((x - 0.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9, "{} {}", x, y);

    let (x, y) = map.map((100.0, 100.0));
    assert!((x - 100.0).abs() < 1e-9 && (y - 0.0).abs() < 1e-9, "{} {}", x, y);

    let (x, y) = map.map((25.0, 75.0));
    assert!((x - 25.0).abs() < 1e-9 && (y - 25.0).abs() < 1e-9, "{} {}", x, y);
}

#[test]
pub fn chunked_series_ranges() {
    let series = ChunkedSeries::from_samples(4, vec![
        (0.0, 5.0), (1.0, -2.0), (2.0, f64::NAN), (3.0, 1.0),
        (f64::NAN, f64::NAN), (f64::NAN, f64::NAN),
    ]);

    assert!(series.chunk_range(0) == ChunkRange { x: SampleRange::Span(0.0, 3.0), y: SampleRange::Span(-2.0, 5.0) }, "{:?}", series.chunk_range(0));
    assert!(series.chunk_range(1) == ChunkRange { x: SampleRange::NotFinite, y: SampleRange::NotFinite }, "{:?}", series.chunk_range(1));
    assert!(series.chunk_range(2) == ChunkRange::UNKNOWN);
}

#[test]
pub fn chunked_series_skip() {
    let series      = ChunkedSeries::from_samples(4, (0..10).map(|idx| (idx as f64, 0.0)));
    let mut cursor  = series.head();

    assert!(series.fetch(&mut cursor) == Some((0.0, 0.0)));
    assert!(series.chunk_index(&cursor) == 0);

    series.skip_to_chunk_end(&mut cursor, 0);
    assert!(cursor == SampleCursor { position: 3, index: 3 }, "{:?}", cursor);
    assert!(series.fetch(&mut cursor) == Some((3.0, 0.0)));
    assert!(series.chunk_index(&cursor) == 1);

    // The last chunk is only partly full
    series.skip_to_chunk_end(&mut cursor, 2);
    assert!(cursor == SampleCursor { position: 9, index: 9 }, "{:?}", cursor);
    assert!(series.fetch(&mut cursor) == Some((9.0, 0.0)));
    assert!(series.fetch(&mut cursor).is_none());
}

#[test]
pub fn throttled_clock_reads_once_per_stride() {
    struct CountingTicks(usize);

    impl TickSource for CountingTicks {
        fn now(&mut self) -> Duration {
            self.0 += 1;
            Duration::from_millis(self.0 as u64)
        }
    }

    let mut clock = ThrottledClock::new(CountingTicks(0), 4);

    let ticks = (0..8).map(|_| clock.tick()).collect::<Vec<_>>();
    let millis = ticks.iter().map(|tick| tick.as_millis()).collect::<Vec<_>>();

    assert!(millis == vec![1, 1, 1, 1, 2, 2, 2, 2], "{:?}", millis);

    clock.reset();
    assert!(clock.tick() == Duration::from_millis(3));
    assert!(clock.now() == Duration::from_millis(4));
}

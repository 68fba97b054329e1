use super::chunked_series::*;
use super::draw_state::*;
use super::sample_source::*;
use super::schedule_options::*;
use super::screen_map::*;
use super::tick_clock::*;

use crate::draw::*;
use crate::error::*;
use crate::geometry::*;
use crate::render::*;
use crate::sketch::*;

use itertools::{Itertools};
use log::{debug, error, trace, warn};

use std::time::{Duration};

///
/// A curve to be drawn by the progressive scheduler
///
#[derive(Clone, Copy)]
pub struct PlotCurve<'a> {
    /// Identifies the curve from frame to frame (and the sketch chunks that belong to it)
    pub id:         CurveId,

    /// Where the samples for the curve come from
    pub source:     &'a dyn SampleSource,

    /// The palette index to draw the curve with
    pub color:      u8,

    /// How the samples are joined up
    pub style:      DrawingStyle,

    /// The thickness of lines, or the size of dots
    pub width:      u32,

    /// Maps the samples to screen coordinates
    pub screen_map: ScreenMap,
}

impl<'a> PlotCurve<'a> {
    ///
    /// Creates a curve that's drawn with a solid line of thickness 1
    ///
    pub fn new(id: CurveId, source: &'a dyn SampleSource, color: u8) -> PlotCurve<'a> {
        PlotCurve {
            id:         id,
            source:     source,
            color:      color,
            style:      DrawingStyle::Line,
            width:      1,
            screen_map: ScreenMap::identity(),
        }
    }

    pub fn with_style(mut self, style: DrawingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_screen_map(mut self, screen_map: ScreenMap) -> Self {
        self.screen_map = screen_map;
        self
    }

    /// Convenience for creating a curve from an in-memory series
    pub fn from_series(id: CurveId, series: &'a ChunkedSeries, color: u8) -> PlotCurve<'a> {
        PlotCurve::new(id, series, color)
    }
}

///
/// The result of running part of a trial pass
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStatus {
    /// The time budget ran out before every curve was finished
    InProgress,

    /// Every curve has been visited, and the sketch now reflects the whole data set
    Complete,
}

///
/// Draws large sets of curves a little at a time, within a time budget for each frame
///
/// Each frame, the curves are drawn into the trial buffer until the budget runs out, and the line segments that changed
/// the trial buffer are recorded in the sketch. When every curve has been visited, the sketch is swapped over to become
/// the one that's replayed onto the canvas, so the canvas always shows the last complete pass.
///
pub struct ProgressiveScheduler<TTicks = SystemTicks>
where
    TTicks: TickSource,
{
    options:        ScheduleOptions,
    pool:           SketchPool,
    states:         Vec<DrawState>,
    in_progress:    bool,
    clock:          ThrottledClock<TTicks>,
}

impl ProgressiveScheduler<SystemTicks> {
    ///
    /// Creates a scheduler that uses the system clock
    ///
    pub fn new(options: ScheduleOptions) -> Self {
        ProgressiveScheduler::with_ticks(options, SystemTicks)
    }
}

impl Default for ProgressiveScheduler<SystemTicks> {
    fn default() -> Self {
        ProgressiveScheduler::new(ScheduleOptions::default())
    }
}

///
/// Everything a curve needs while it's being drawn into the trial buffer
///
struct TrialRun<'a, TTicks>
where
    TTicks: TickSource,
{
    context:    &'a mut DrawContext,
    pool:       &'a mut SketchPool,
    clock:      &'a mut ThrottledClock<TTicks>,
    viewport:   &'a ClipBox,
    margin:     f64,
    deadline:   Duration,
}

impl<TTicks> ProgressiveScheduler<TTicks>
where
    TTicks: TickSource,
{
    ///
    /// Creates a scheduler that reads the time from a custom source
    ///
    pub fn with_ticks(options: ScheduleOptions, ticks: TTicks) -> Self {
        ProgressiveScheduler {
            options:        options,
            pool:           SketchPool::new(options.sketch_pool_size, options.sketch_chunk_capacity),
            states:         vec![],
            in_progress:    false,
            clock:          ThrottledClock::new(ticks, options.clock_stride),
        }
    }

    /// The options for this scheduler
    #[inline]
    pub fn options(&self) -> &ScheduleOptions { &self.options }

    /// The sketch that's replayed each frame
    #[inline]
    pub fn sketch_pool(&self) -> &SketchPool { &self.pool }

    /// True if a pass has been started and has not yet completed
    #[inline]
    pub fn is_in_progress(&self) -> bool { self.in_progress }

    ///
    /// The state of a curve in the current pass
    ///
    pub fn curve_state(&self, curve: CurveId) -> Option<&DrawState> {
        self.states.iter().find(|state| state.curve == curve)
    }

    ///
    /// Discards the sketch so that everything is drawn from scratch by the next pass (eg, because the data has changed)
    ///
    pub fn invalidate(&mut self) {
        self.pool.clean();
        self.states.clear();
        self.in_progress = false;
    }

    ///
    /// Starts a new pass if there isn't one in progress or the set of curves has changed
    ///
    fn seed_pass(&mut self, context: &mut DrawContext, curves: &[PlotCurve]) {
        let same_curves = self.states.len() == curves.len()
            && self.states.iter().zip(curves.iter()).all(|(state, curve)| state.curve == curve.id);

        if self.in_progress && same_curves {
            return;
        }

        if self.in_progress {
            // Whatever was written by the abandoned pass no longer matches the curves
            self.pool.discard_current();
        }

        self.states = curves.iter()
            .map(|curve| DrawState::new(curve.id, curve.source.head()))
            .collect();

        context.clear_trial();
        self.in_progress = true;

        debug!("Starting trial pass for {} curves", curves.len());
    }

    ///
    /// Spends up to a frame's budget drawing the curves into the trial buffer and recording the changes in the sketch
    ///
    pub fn draw_trial_pass(&mut self, context: &mut DrawContext, viewport: &ClipBox, curves: &[PlotCurve]) -> PassStatus {
        self.seed_pass(context, curves);

        self.clock.reset();
        let deadline = self.clock.now() + self.options.frame_budget;

        loop {
            // The curve that has got the least far goes next
            let next = self.states.iter()
                .position_min_by_key(|state| (state.status == SketchStatus::Finished, state.cursor.index))
                .filter(|idx| self.states[*idx].status != SketchStatus::Finished);

            let idx = match next {
                Some(idx)   => idx,
                None        => {
                    self.pool.recycle_generation();
                    self.states.iter_mut().for_each(|state| state.sketch = None);
                    self.in_progress = false;

                    debug!("Trial pass complete: {} values in sketch", self.pool.todraw_length());
                    return PassStatus::Complete;
                }
            };

            if self.clock.now() > deadline {
                return PassStatus::InProgress;
            }

            let mut run = TrialRun {
                context:    &mut *context,
                pool:       &mut self.pool,
                clock:      &mut self.clock,
                viewport:   viewport,
                margin:     self.options.cull_margin,
                deadline:   deadline,
            };

            run.draw_curve(&curves[idx], &mut self.states[idx]);
        }
    }

    ///
    /// Replays the sketch from the last complete pass onto the canvas
    ///
    pub fn draw_sketch(&self, context: &mut DrawContext, viewport: &ClipBox, curves: &[PlotCurve]) {
        context.dash_reset();

        for chunk in self.pool.iter_todraw() {
            let curve = match curves.iter().find(|curve| curve.id == chunk.curve()) {
                Some(curve) => curve,
                None        => { continue; }
            };

            let map = &curve.screen_map;

            match chunk.style() {
                DrawingStyle::Line => {
                    for (start, end) in chunk.points().iter().tuples() {
                        context.draw_line_canvas(viewport, map.map(*start), map.map(*end), curve.color, chunk.width());
                    }
                }

                DrawingStyle::Dash => {
                    for (start, end) in chunk.points().iter().tuples() {
                        context.draw_dash_canvas(viewport, map.map(*start), map.map(*end), curve.color, chunk.width(), self.options.dash, self.options.space);
                    }
                }

                DrawingStyle::Dot => {
                    for point in chunk.points().iter() {
                        context.draw_dot_canvas(viewport, map.map(*point), chunk.width(), curve.color, true);
                    }
                }
            }
        }
    }

    ///
    /// Renders a frame: runs the trial pass for this frame, then draws the sketch from the last complete pass onto the canvas
    /// and flushes it to the frame
    ///
    pub fn draw_frame(&mut self, context: &mut DrawContext, frame: &mut RgbFrame, viewport: &ClipBox, curves: &[PlotCurve]) -> Result<PassStatus, RenderError> {
        context.pixmap_alloc(frame.width, frame.height)?;

        let status = self.draw_trial_pass(context, viewport, curves);

        context.clear_canvas();
        self.draw_sketch(context, viewport, curves);
        context.flush_canvas(frame, viewport);

        Ok(status)
    }
}

impl<'a, TTicks> TrialRun<'a, TTicks>
where
    TTicks: TickSource,
{
    ///
    /// True if any of the samples in a chunk with the specified range could be visible in the viewport
    ///
    fn chunk_visible(&self, range: ChunkRange, map: &ScreenMap) -> bool {
        let viewport    = self.viewport;
        let margin      = self.margin;

        let x_visible = match range.x {
            SampleRange::Unknown            => true,
            SampleRange::NotFinite          => false,
            SampleRange::Span(min, max)     => {
                let (a, b) = (map.map_x(min), map.map_x(max));
                !(a.max(b) < viewport.min_x as f64 - margin || a.min(b) > viewport.max_x as f64 + margin)
            }
        };

        let y_visible = match range.y {
            SampleRange::Unknown            => true,
            SampleRange::NotFinite          => false,
            SampleRange::Span(min, max)     => {
                let (a, b) = (map.map_y(min), map.map_y(max));
                !(a.max(b) < viewport.min_y as f64 - margin || a.min(b) > viewport.max_y as f64 + margin)
            }
        };

        x_visible && y_visible
    }

    ///
    /// Finds a sketch chunk to write the next points for a curve to
    ///
    fn begin_sketch(&mut self, curve: &PlotCurve, state: &mut DrawState) {
        match self.pool.begin_chunk(state.sketch, curve.id, curve.style, curve.width) {
            Ok(handle) => {
                state.sketch = Some(handle);
            }

            Err(RenderError::SketchPoolExhausted) => {
                if state.pool_exhausted {
                    trace!("Sketch pool is still exhausted for curve {:?}", curve.id);
                } else {
                    warn!("Sketch pool is exhausted: curve {:?} will be drawn without caching", curve.id);
                    state.pool_exhausted = true;
                }

                state.sketch = None;
            }

            Err(err) => {
                error!("Could not allocate sketch chunk: {}", err);
                state.sketch = None;
            }
        }
    }

    ///
    /// Records points that changed the trial buffer
    ///
    fn commit(&mut self, curve: &PlotCurve, state: &mut DrawState, points: &[(f64, f64)]) {
        if let Some(handle) = state.sketch {
            if self.pool.is_full(handle) {
                self.begin_sketch(curve, state);
            }
        }

        if let Some(handle) = state.sketch {
            points.iter().for_each(|point| { self.pool.append_point(handle, *point); });
        }
    }

    ///
    /// Draws a curve into the trial buffer until it has consumed a chunk's worth of samples, the deadline passes or it
    /// runs out of samples
    ///
    fn draw_curve(&mut self, curve: &PlotCurve, state: &mut DrawState) {
        let source      = curve.source;
        let map         = curve.screen_map;
        let polyline    = curve.style != DrawingStyle::Dot;
        let top         = state.cursor.index + source.chunk_len() as u64;

        self.context.dash_reset();
        self.begin_sketch(curve, state);

        loop {
            let chunk = source.chunk_index(&state.cursor);

            if state.skipped {
                // The last sample of a culled chunk is where the line carries on from
                state.skipped = false;

                let sample = match source.fetch(&mut state.cursor) {
                    Some(sample)    => sample,
                    None            => { state.status = SketchStatus::Finished; return; }
                };

                let point = map.map(sample);
                if polyline && point.0.is_finite() && point.1.is_finite() {
                    state.line          = true;
                    state.last_point    = sample;
                }
            } else {
                let visible = match state.tested_chunk {
                    Some((tested, visible)) if tested == chunk  => visible,
                    _                                           => {
                        let visible = self.chunk_visible(source.chunk_range(chunk), &map);
                        state.tested_chunk = Some((chunk, visible));
                        visible
                    }
                };

                if visible || (polyline && state.line) {
                    let sample = match source.fetch(&mut state.cursor) {
                        Some(sample)    => sample,
                        None            => { state.status = SketchStatus::Finished; return; }
                    };

                    let point = map.map(sample);

                    if point.0.is_finite() && point.1.is_finite() {
                        if polyline {
                            if state.line {
                                let changed = self.context.draw_line_trial(self.viewport, map.map(state.last_point), point, curve.color, curve.width);

                                if changed > 0 {
                                    let last_point = state.last_point;
                                    self.commit(curve, state, &[last_point, sample]);
                                }
                            } else {
                                state.line = true;
                            }

                            state.last_point = sample;
                        } else {
                            let changed = self.context.draw_dot_trial(self.viewport, point, curve.width, curve.color, true);

                            if changed > 0 {
                                self.commit(curve, state, &[sample]);
                            }
                        }
                    } else {
                        state.line = false;
                    }
                }

                if !visible {
                    source.skip_to_chunk_end(&mut state.cursor, chunk);

                    state.skipped   = true;
                    state.line      = false;
                }
            }

            if state.cursor.index > top || self.clock.tick() > self.deadline {
                state.status = SketchStatus::Interrupted;

                trace!("Curve {:?} interrupted at sample {}", curve.id, state.cursor.index);
                return;
            }
        }
    }
}

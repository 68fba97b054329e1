use super::draw_options::*;

use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::raster::*;
use crate::render::*;
use crate::vector::*;

///
/// Distance (in pixels) beyond the clip box that lines are clipped to before they are rasterized
///
/// Lines are clipped a little outside of the clip box so that their caps are drawn correctly at the edges.
///
pub const RASTER_CLIP_MARGIN: i32 = 16;

///
/// Remembers the range covered by the last vertical lines drawn to the trial buffer, so that following vertical lines that
/// are entirely inside that range can be skipped
///
#[derive(Clone, Copy, Debug, PartialEq)]
struct TrialLineCache {
    color:      u8,
    half_width: i64,
    clip:       ClipBox,
    x:          i64,
    min_y:      i64,
    max_y:      i64,
}

///
/// The drawing context owns the pixmap and the state shared between drawing operations: the palette, the gamma
/// look-up tables, the dash phase and the vector sink
///
/// Anti-aliased primitives are drawn to the canvas (`draw_*_canvas`), or tested against the trial buffer
/// (`draw_*_trial`). The canvas is composited onto a frame using `flush_canvas()`. The aliased primitives (`draw_line`,
/// `draw_dash`, `fill_rect` and `clip_rect`) are drawn directly to a frame.
///
pub struct DrawContext {
    options:        DrawOptions,
    palette:        Palette,
    gamma_lut:      GammaLut,
    pixmap:         Pixmap,
    dash_phase:     DashPhase,
    trial_cache:    Option<TrialLineCache>,
    vector_sink:    Option<Box<dyn VectorSink>>,
}

///
/// Returns true if a point has finite coordinates
///
#[inline]
fn is_finite(point: (f64, f64)) -> bool {
    point.0.is_finite() && point.1.is_finite()
}

///
/// Distance between two points in fixed-point units
///
#[inline]
fn fixed_distance(from: (f64, f64), to: (f64, f64)) -> i64 {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;

    to_fixed((dx*dx + dy*dy).sqrt())
}

impl DrawContext {
    ///
    /// Creates a new drawing context
    ///
    pub fn new(options: DrawOptions) -> DrawContext {
        DrawContext {
            options:        options,
            palette:        Palette::default(),
            gamma_lut:      GammaLut::new(options.gamma),
            pixmap:         Pixmap::empty(),
            dash_phase:     DashPhase::default(),
            trial_cache:    None,
            vector_sink:    None,
        }
    }

    /// The options for this context
    #[inline]
    pub fn options(&self) -> &DrawOptions { &self.options }

    /// The palette used to flush the canvas
    #[inline]
    pub fn palette(&self) -> &Palette { &self.palette }

    /// The gamma tables used to flush the canvas
    #[inline]
    pub fn gamma_lut(&self) -> &GammaLut { &self.gamma_lut }

    /// The canvas and trial buffers
    #[inline]
    pub fn pixmap(&self) -> &Pixmap { &self.pixmap }

    /// The current dash phase
    #[inline]
    pub fn dash_phase(&self) -> DashPhase { self.dash_phase }

    ///
    /// Sets the RGB colour (`0x00RRGGBB`) for a palette index
    ///
    pub fn set_palette_color(&mut self, index: u8, rgb: u32) {
        self.palette.set_color(index, rgb);
    }

    ///
    /// Changes the gamma correction value
    ///
    pub fn set_gamma(&mut self, gamma: f64) {
        self.options.gamma  = gamma;
        self.gamma_lut      = GammaLut::new(gamma);
    }

    ///
    /// Changes the gamma correction value from a percentage (100% is no correction, 50% is a gamma of 2)
    ///
    pub fn set_gamma_percent(&mut self, percent: u32) {
        self.gamma_lut      = GammaLut::from_percent(percent);
        self.options.gamma  = self.gamma_lut.gamma();
    }

    ///
    /// Changes the anti-aliasing tier (the pixmap is reallocated by the next call to `pixmap_alloc()`)
    ///
    pub fn set_antialiasing(&mut self, antialiasing: Antialiasing) {
        self.options.antialiasing = antialiasing;
    }

    ///
    /// Sets the thickness of the aliased lines drawn by `draw_line()` and `draw_dash()`
    ///
    pub fn set_thickness(&mut self, thickness: u32) {
        self.options.thickness = thickness;
    }

    ///
    /// Sets a vector sink that will receive a copy of everything drawn to the canvas and the frame
    ///
    pub fn set_vector_sink(&mut self, sink: Box<dyn VectorSink>) {
        self.vector_sink = Some(sink);
    }

    ///
    /// Removes the vector sink from this context
    ///
    pub fn take_vector_sink(&mut self) -> Option<Box<dyn VectorSink>> {
        self.vector_sink.take()
    }

    ///
    /// Makes sure the pixmap is allocated for a viewport of the specified size
    ///
    /// On failure the error is logged, and the drawing operations do nothing until a later call succeeds.
    ///
    pub fn pixmap_alloc(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        let was_allocated   = self.pixmap.is_allocated();
        let old_size        = (self.pixmap.width(), self.pixmap.height(), self.pixmap.antialiasing());

        let result          = self.pixmap.allocate(self.options.antialiasing, width, height);

        if !was_allocated || old_size != (self.pixmap.width(), self.pixmap.height(), self.pixmap.antialiasing()) {
            self.trial_cache = None;
        }

        result
    }

    ///
    /// Frees the pixmap
    ///
    pub fn pixmap_clean(&mut self) {
        self.pixmap.clean();
        self.trial_cache = None;
    }

    ///
    /// Starts a new, independent, dash pattern (and forgets the lines tested in the trial buffer)
    ///
    pub fn dash_reset(&mut self) {
        self.dash_phase.reset();
        self.trial_cache = None;
    }

    /// Erases everything drawn on the canvas
    pub fn clear_canvas(&mut self) {
        self.pixmap.clear_canvas();
    }

    /// Erases everything drawn on the trial buffer
    pub fn clear_trial(&mut self) {
        self.pixmap.clear_trial();
        self.trial_cache = None;
    }

    ///
    /// Fills a whole frame with a single colour and resets the dash phase
    ///
    pub fn clear_frame(&mut self, frame: &mut RgbFrame, rgb: u32) {
        frame.fill(rgb);
        self.dash_reset();
    }

    ///
    /// Composites the canvas onto a frame, within a clip box
    ///
    pub fn flush_canvas(&self, frame: &mut RgbFrame, clip: &ClipBox) {
        if let Some(samples) = self.pixmap.samples() {
            flush_canvas(samples, &self.palette, &self.gamma_lut, frame, clip);
        }
    }

    ///
    /// Clips a line to the region that's rasterized for a clip box
    ///
    #[inline]
    fn raster_clip(clip: &ClipBox, start: (f64, f64), end: (f64, f64)) -> ClippedLine {
        if is_finite(start) && is_finite(end) {
            clip.expanded(RASTER_CLIP_MARGIN).clip_line(start, end)
        } else {
            ClippedLine::Outside
        }
    }

    ///
    /// Draws an anti-aliased line of the specified thickness onto the canvas
    ///
    pub fn draw_line_canvas(&mut self, clip: &ClipBox, start: (f64, f64), end: (f64, f64), color: u8, thickness: u32) {
        if !Palette::is_drawable(color) { return; }

        let (start, end) = match Self::raster_clip(clip, start, end).points() {
            Some(points)    => points,
            None            => { return; }
        };

        if let Some(sink) = &mut self.vector_sink {
            if let Some((vs, ve)) = clip.clip_line(start, end).points() {
                sink.line(vs, ve, self.palette.color(color), thickness, 0, 0);
            }
        }

        let stadium = Stadium::new(start, end, thickness);
        self.pixmap.draw_canvas(color, |writer| stadium.rasterize(clip, writer));
    }

    ///
    /// Draws an anti-aliased dashed line onto the canvas, continuing the pattern from the previous dashed line
    ///
    /// `dash` and `space` are the lengths of the dashes and gaps in pixels (the dashes are lengthened by the thickness).
    ///
    pub fn draw_dash_canvas(&mut self, clip: &ClipBox, start: (f64, f64), end: (f64, f64), color: u8, thickness: u32, dash: u32, space: u32) {
        if !Palette::is_drawable(color) { return; }
        if !is_finite(start) || !is_finite(end) { return; }

        let pattern = DashPattern::new(dash, space, thickness);

        let (clipped_start, clipped_end) = match Self::raster_clip(clip, start, end).points() {
            Some(points)    => points,
            None            => {
                // Keep the pattern continuous for the next segment
                self.dash_phase.advance(&pattern, fixed_distance(start, end));
                return;
            }
        };

        if let Some(sink) = &mut self.vector_sink {
            if let Some((vs, ve)) = clip.clip_line(clipped_start, clipped_end).points() {
                sink.line(vs, ve, self.palette.color(color), thickness, dash + thickness, space);
            }
        }

        // Account for any part of the line that was clipped away before the start
        self.dash_phase.advance(&pattern, fixed_distance(start, clipped_start));

        let stadium     = Stadium::new(clipped_start, clipped_end, thickness);
        let phase       = self.dash_phase;

        self.pixmap.draw_canvas(color, |writer| { stadium.rasterize_dashed(clip, &pattern, phase, writer); });

        self.dash_phase.advance(&pattern, stadium.length());
        self.dash_phase.advance(&pattern, fixed_distance(clipped_end, end));
    }

    ///
    /// Draws a square or round dot, `size` pixels across, onto the canvas
    ///
    pub fn draw_dot_canvas(&mut self, clip: &ClipBox, centre: (f64, f64), size: u32, color: u8, round: bool) {
        if !Palette::is_drawable(color) { return; }
        if !is_finite(centre) { return; }

        let reach = clip.expanded(RASTER_CLIP_MARGIN);
        if centre.0 < reach.min_x as f64 || centre.0 > reach.max_x as f64 || centre.1 < reach.min_y as f64 || centre.1 > reach.max_y as f64 {
            return;
        }

        if let Some(sink) = &mut self.vector_sink {
            let inside = centre.0 > clip.min_x as f64 && centre.0 < clip.max_x as f64 && centre.1 > clip.min_y as f64 && centre.1 < clip.max_y as f64;

            if inside {
                let radius  = (size as f64) * 0.5;
                let rgb     = self.palette.color(color);

                if round {
                    sink.circle(centre, radius, rgb);
                } else {
                    sink.rect((centre.0 - radius, centre.1 - radius), (centre.0 + radius, centre.1 + radius), rgb);
                }
            }
        }

        let dot = Dot::new(centre, size, round);
        self.pixmap.draw_canvas(color, |writer| dot.rasterize(clip, writer));
    }

    ///
    /// Draws a marker shape with a radius of `size` pixels onto the canvas
    ///
    pub fn draw_mark_canvas(&mut self, clip: &ClipBox, centre: (f64, f64), size: u32, shape: MarkShape, color: u8, thickness: u32) {
        match shape.outline(centre.0, centre.1, size) {
            MarkOutline::Segments(segments) => {
                for (start, end) in segments {
                    self.draw_line_canvas(clip, start, end, color, thickness);
                }
            }

            MarkOutline::Square(size) => {
                self.draw_dot_canvas(clip, centre, size, color, false);
            }
        }
    }

    ///
    /// Draws an anti-aliased line into the trial buffer, returning the number of samples that changed
    ///
    /// A result of 0 means that drawing this line onto the canvas would not change anything that has already been tested.
    ///
    pub fn draw_line_trial(&mut self, clip: &ClipBox, start: (f64, f64), end: (f64, f64), color: u8, thickness: u32) -> usize {
        if !Palette::is_drawable(color) { return 0; }

        let (start, end) = match Self::raster_clip(clip, start, end).points() {
            Some(points)    => points,
            None            => { return 0; }
        };

        self.forget_other_colors(color);

        let stadium     = Stadium::new(start, end, thickness);
        let half_width  = stadium.half_width();
        let vertical    = stadium.vertical_span();

        // Vertical runs inside a range that has already been tested can't change anything
        let mut extend_cache = false;

        if let (Some((x, min_y, max_y)), Some(cache)) = (vertical, self.trial_cache) {
            if cache.color == color && cache.half_width == half_width && cache.clip == *clip && cache.x == x {
                if min_y >= cache.min_y && max_y <= cache.max_y {
                    return 0;
                }

                extend_cache = min_y <= cache.max_y && max_y >= cache.min_y;
            }
        }

        let changed = self.pixmap.draw_trial(color, |writer| stadium.rasterize(clip, writer));

        if !self.pixmap.is_allocated() {
            return 0;
        }

        if let Some((x, min_y, max_y)) = vertical {
            self.trial_cache = match (extend_cache, self.trial_cache) {
                (true, Some(cache)) => Some(TrialLineCache { min_y: cache.min_y.min(min_y), max_y: cache.max_y.max(max_y), ..cache }),
                _                   => Some(TrialLineCache { color, half_width, clip: *clip, x, min_y, max_y }),
            };
        }

        changed
    }

    ///
    /// Draws a square or round dot into the trial buffer, returning the number of samples that changed
    ///
    pub fn draw_dot_trial(&mut self, clip: &ClipBox, centre: (f64, f64), size: u32, color: u8, round: bool) -> usize {
        if !Palette::is_drawable(color) { return 0; }
        if !is_finite(centre) { return 0; }

        let reach = clip.expanded(RASTER_CLIP_MARGIN);
        if centre.0 < reach.min_x as f64 || centre.0 > reach.max_x as f64 || centre.1 < reach.min_y as f64 || centre.1 > reach.max_y as f64 {
            return 0;
        }

        self.forget_other_colors(color);

        let dot = Dot::new(centre, size, round);
        self.pixmap.draw_trial(color, |writer| dot.rasterize(clip, writer))
    }

    ///
    /// Discards the vertical line cache if a trial write in a different colour could overwrite the range it covers
    ///
    #[inline]
    fn forget_other_colors(&mut self, color: u8) {
        if let Some(cache) = self.trial_cache {
            if cache.color != color {
                self.trial_cache = None;
            }
        }
    }

    ///
    /// Draws an aliased line directly to a frame, using the thickness from the options
    ///
    pub fn draw_line(&mut self, frame: &mut RgbFrame, clip: &ClipBox, start: (f64, f64), end: (f64, f64), rgb: u32) {
        let (start, end) = match clip.clip_line(start, end).points() {
            Some(points)    => points,
            None            => { return; }
        };

        let thickness = self.options.thickness;

        if let Some(sink) = &mut self.vector_sink {
            sink.line(start, end, rgb, thickness, 0, 0);
        }

        let start   = (start.0 as i32, start.1 as i32);
        let end     = (end.0 as i32, end.1 as i32);
        let steep   = (start.0 - end.0).abs() < (start.1 - end.1).abs();

        rough_line(frame, start, end, rgb);

        // Thicker lines are drawn as extra passes alongside the first one
        for offset in 1..(thickness as i32) {
            let (offset_x, offset_y) = if steep { (offset, 0) } else { (0, -offset) };

            rough_line(frame, (start.0 + offset_x, start.1 + offset_y), (end.0 + offset_x, end.1 + offset_y), rgb);
        }
    }

    ///
    /// Draws an aliased dashed line directly to a frame, continuing the dash pattern
    ///
    pub fn draw_dash(&mut self, frame: &mut RgbFrame, clip: &ClipBox, start: (f64, f64), end: (f64, f64), rgb: u32, dash: u32, space: u32) {
        let (start, end) = match clip.clip_line(start, end).points() {
            Some(points)    => points,
            None            => { return; }
        };

        let thickness   = self.options.thickness;
        let dash        = dash + thickness;

        if let Some(sink) = &mut self.vector_sink {
            sink.line(start, end, rgb, thickness, dash, space);
        }

        let start   = (start.0 as i32, start.1 as i32);
        let end     = (end.0 as i32, end.1 as i32);
        let steep   = (start.0 - end.0).abs() < (start.1 - end.1).abs();

        // The rough dash pattern counts whole pixels
        let initial_phase   = (self.dash_phase.0 / SUBPIXELS).max(0) as u32;
        let mut phase       = initial_phase;

        rough_dash(frame, start, end, rgb, dash, space, &mut phase);

        for offset in 1..(thickness as i32) {
            let (offset_x, offset_y) = if steep { (offset, 0) } else { (0, -offset) };

            phase = initial_phase;
            rough_dash(frame, (start.0 + offset_x, start.1 + offset_y), (end.0 + offset_x, end.1 + offset_y), rgb, dash, space, &mut phase);
        }

        self.dash_phase = DashPhase((phase as i64) * SUBPIXELS);
    }

    ///
    /// Fills a rectangle in a frame (clamped to the frame)
    ///
    pub fn fill_rect(&mut self, frame: &mut RgbFrame, min: (i32, i32), max: (i32, i32), rgb: u32) {
        if let Some(rect) = ClipBox::new(min.0, min.1, max.0, max.1).intersect(&frame.clip_box()) {
            if let Some(sink) = &mut self.vector_sink {
                sink.rect((rect.min_x as f64, rect.min_y as f64), (rect.max_x as f64, rect.max_y as f64), rgb);
            }
        }

        fill_rect(frame, min, max, rgb);
    }

    ///
    /// Fills a rectangle in a frame (clamped to a clip box)
    ///
    pub fn clip_rect(&mut self, frame: &mut RgbFrame, clip: &ClipBox, min: (i32, i32), max: (i32, i32), rgb: u32) {
        if let Some(rect) = ClipBox::new(min.0, min.1, max.0, max.1).intersect(clip) {
            if let Some(sink) = &mut self.vector_sink {
                sink.rect((rect.min_x as f64, rect.min_y as f64), (rect.max_x as f64, rect.max_y as f64), rgb);
            }
        }

        clip_rect(frame, clip, min, max, rgb);
    }

    ///
    /// Sends text to the vector sink (text is not rasterized by this context)
    ///
    pub fn vector_text(&mut self, position: (f64, f64), text: &str, rgb: u32) {
        if let Some(sink) = &mut self.vector_sink {
            sink.text(position, text, rgb);
        }
    }
}

impl Default for DrawContext {
    fn default() -> Self {
        DrawContext::new(DrawOptions::default())
    }
}

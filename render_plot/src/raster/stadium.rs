use super::coverage::*;
use super::dash::*;
use super::sample_pattern::*;

use crate::geometry::*;

///
/// A thick line segment: a rectangle with a semicircular cap at each end
///
/// Coverage is decided by three edge functions, evaluated in fixed point:
///
/// * `w1` is the perpendicular distance from the axis of the line, multiplied by its length
/// * `w2` is the distance along the line from the start point, multiplied by its length
/// * `w3` is the distance along the line (backwards) from the end point, multiplied by its length
///
/// A position is inside the stadium if it's within the half-width of one of the endpoints (when it's beyond that end of
/// the line), or if it's between the endpoints and `|w1|` is at most the half-width times the length.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stadium {
    /// The start point in fixed point (the endpoints are ordered so that this has the larger y coordinate)
    start:      (i64, i64),

    /// The end point in fixed point
    end:        (i64, i64),

    /// True if the start and end point were swapped from the order they were supplied in
    reversed:   bool,

    /// Half the thickness of the line, in sub-units
    half_width: i64,

    /// The length of the line in sub-units, rounded up
    length:     i64,
}

impl Stadium {
    ///
    /// Creates a stadium from two points in pixel coordinates
    ///
    /// The points should already be clipped to a region near the clip box, so that the fixed-point arithmetic stays in range.
    ///
    pub fn new(start: (f64, f64), end: (f64, f64), thickness: u32) -> Stadium {
        let start   = (to_fixed(start.0), to_fixed(start.1));
        let end     = (to_fixed(end.0), to_fixed(end.1));

        // Order the points so that w1 never decreases from left to right along a row
        let reversed        = start.1 < end.1;
        let (start, end)    = if reversed { (end, start) } else { (start, end) };

        let dx      = end.0 - start.0;
        let dy      = end.1 - start.1;
        let length  = ((dx*dx + dy*dy) as f64).sqrt().ceil() as i64;

        Stadium {
            start:      start,
            end:        end,
            reversed:   reversed,
            half_width: half_thickness(thickness),
            length:     length,
        }
    }

    /// The length of this line in sub-units
    #[inline]
    pub fn length(&self) -> i64 { self.length }

    /// Half the thickness of this line in sub-units
    #[inline]
    pub fn half_width(&self) -> i64 { self.half_width }

    ///
    /// If this line is exactly vertical, the fixed-point x position and y range it covers
    ///
    pub fn vertical_span(&self) -> Option<(i64, i64, i64)> {
        if self.start.0 == self.end.0 {
            Some((self.start.0, self.end.1, self.start.1))
        } else {
            None
        }
    }

    #[inline]
    fn w1(&self, px: i64, py: i64) -> i64 {
        let (xs, ys) = self.start;
        let (xe, ye) = self.end;

        (ys - ye) * (px - xe) - (xs - xe) * (py - ye)
    }

    #[inline]
    fn w2(&self, px: i64, py: i64) -> i64 {
        let (xs, ys) = self.start;
        let (xe, ye) = self.end;

        (xe - xs) * (px - xs) + (ye - ys) * (py - ys)
    }

    #[inline]
    fn w3(&self, px: i64, py: i64) -> i64 {
        let (xs, ys) = self.start;
        let (xe, ye) = self.end;

        (xs - xe) * (px - xe) + (ys - ye) * (py - ye)
    }

    ///
    /// True if the fixed-point position `(px, py)` is inside this stadium
    ///
    #[inline]
    pub fn contains(&self, px: i64, py: i64) -> bool {
        let r = self.half_width * self.half_width;

        if self.w2(px, py) <= 0 {
            let (dx, dy) = (px - self.start.0, py - self.start.1);
            dx*dx + dy*dy <= r
        } else if self.w3(px, py) <= 0 {
            let (dx, dy) = (px - self.end.0, py - self.end.1);
            dx*dx + dy*dy <= r
        } else {
            self.w1(px, py).abs() <= self.length * self.half_width
        }
    }

    ///
    /// True if the fixed-point position `(px, py)` is inked when this line is dashed with the specified pattern and phase
    ///
    /// Dashes have square ends and do not extend past the endpoints. Distances along the line are measured from the point
    /// that was supplied first, and a position exactly on the last point belongs to the next segment.
    ///
    #[inline]
    pub fn dash_contains(&self, px: i64, py: i64, pattern: &DashPattern, phase: i64) -> bool {
        if self.length == 0 {
            return false;
        }

        let w2 = self.w2(px, py);
        let w3 = self.w3(px, py);

        let (along, remaining) = if self.reversed { (w3, w2) } else { (w2, w3) };

        if along < 0 || remaining <= 0 {
            false
        } else if self.w1(px, py).abs() > self.length * self.half_width {
            false
        } else {
            pattern.is_ink((along + phase * self.length) / self.length)
        }
    }

    ///
    /// Writes the coverage of this line within a clip box
    ///
    pub fn rasterize<TWriter>(&self, clip: &ClipBox, writer: &mut TWriter)
    where
        TWriter: ?Sized + CoverageWriter,
    {
        self.scan(clip, writer, |px, py| self.contains(px, py));
    }

    ///
    /// Writes the coverage of this line as a dashed line, starting at the specified phase. Returns the phase at the end of the line.
    ///
    pub fn rasterize_dashed<TWriter>(&self, clip: &ClipBox, pattern: &DashPattern, phase: DashPhase, writer: &mut TWriter) -> DashPhase
    where
        TWriter: ?Sized + CoverageWriter,
    {
        if self.length > 0 {
            self.scan(clip, writer, |px, py| self.dash_contains(px, py, pattern, phase.0));
        }

        let mut phase = phase;
        phase.advance(pattern, self.length);
        phase
    }

    ///
    /// Visits the candidate pixels of this stadium a row at a time, writing the coverage reported by `inside`
    ///
    fn scan<TWriter, TInside>(&self, clip: &ClipBox, writer: &mut TWriter, inside: TInside)
    where
        TWriter: ?Sized + CoverageWriter,
        TInside: Fn(i64, i64) -> bool,
    {
        let reach   = self.half_width + writer.candidate_margin();
        let min     = (self.start.0.min(self.end.0), self.end.1);
        let max     = (self.start.0.max(self.end.0), self.start.1);

        let bounds  = match candidate_bounds(min, max, reach, clip) {
            Some(bounds)    => bounds,
            None            => { return; }
        };

        // Candidate pixels are those whose centres are within the band grown by the reach (caps are always inside the band)
        let band    = self.length * reach;
        let w1dx    = (self.start.1 - self.end.1) * SUBPIXELS;
        let w1dy    = (self.end.0 - self.start.0) * SUBPIXELS;
        let max_x   = bounds.max_x as i64;

        let mut row_w1 = self.w1((bounds.min_x as i64) * SUBPIXELS, (bounds.min_y as i64) * SUBPIXELS);

        for y in bounds.y_range() {
            let mut x   = bounds.min_x as i64;
            let mut w1  = row_w1;
            row_w1      += w1dy;

            // Skip the pixels to the left of the band
            if w1 < -band {
                if w1dx == 0 { continue; }

                let skip = (-band - w1) / w1dx;
                x   += skip;
                w1  += skip * w1dx;
            }

            while x <= max_x {
                // w1 never decreases along a row, so there's nothing more once we're past the band
                if w1 > band { break; }

                if w1 >= -band {
                    let mask = coverage_mask(writer.samples(), x, y as i64, &inside);

                    if mask != 0 {
                        writer.write_samples(x as i32, y, mask);
                    }
                }

                x   += 1;
                w1  += w1dx;
            }
        }
    }
}

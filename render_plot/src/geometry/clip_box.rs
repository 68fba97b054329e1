use std::ops::{RangeInclusive};

/// Point is left of the clip box
pub const CLIP_LEFT: u8     = 0b0001;

/// Point is right of the clip box
pub const CLIP_RIGHT: u8    = 0b0010;

/// Point is above the clip box (lower y values)
pub const CLIP_ABOVE: u8    = 0b0100;

/// Point is below the clip box (higher y values)
pub const CLIP_BELOW: u8    = 0b1000;

///
/// An axis-aligned rectangle of pixels, inclusive at both ends
///
/// All raster writes are bounded by a clip box. The constructors order the corners so a clip box never has a negative area.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClipBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

///
/// The result of clipping a line segment against a clip box
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClippedLine {
    /// The segment lies entirely outside of the clip box
    Outside,

    /// The segment was already inside the clip box
    Unmodified((f64, f64), (f64, f64)),

    /// One or both of the endpoints were moved onto the edge of the clip box
    Clipped((f64, f64), (f64, f64)),
}

impl ClippedLine {
    ///
    /// Returns the visible part of the line, if there is one
    ///
    #[inline]
    pub fn points(&self) -> Option<((f64, f64), (f64, f64))> {
        match self {
            ClippedLine::Outside                    => None,
            ClippedLine::Unmodified(start, end)     => Some((*start, *end)),
            ClippedLine::Clipped(start, end)        => Some((*start, *end)),
        }
    }

    ///
    /// True if no part of the line was visible
    ///
    #[inline]
    pub fn is_outside(&self) -> bool {
        match self {
            ClippedLine::Outside    => true,
            _                       => false,
        }
    }
}

impl ClipBox {
    ///
    /// Creates a clip box covering the pixels between two corners (inclusive)
    ///
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> ClipBox {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        ClipBox { min_x, min_y, max_x, max_y }
    }

    ///
    /// Creates a clip box covering a whole frame of the specified size
    ///
    pub fn with_size(width: usize, height: usize) -> ClipBox {
        let max_x = (width as i32 - 1).max(0);
        let max_y = (height as i32 - 1).max(0);

        ClipBox { min_x: 0, min_y: 0, max_x, max_y }
    }

    ///
    /// The number of pixels covered horizontally
    ///
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    ///
    /// The number of pixels covered vertically
    ///
    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// The range of x values covered by this box
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<i32> { self.min_x..=self.max_x }

    /// The range of y values covered by this box
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<i32> { self.min_y..=self.max_y }

    ///
    /// Returns this clip box grown by `margin` pixels on every side
    ///
    #[inline]
    pub fn expanded(&self, margin: i32) -> ClipBox {
        ClipBox {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    ///
    /// Returns the overlap between this box and another, or None if they don't overlap
    ///
    pub fn intersect(&self, other: &ClipBox) -> Option<ClipBox> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);

        if min_x > max_x || min_y > max_y {
            None
        } else {
            Some(ClipBox { min_x, min_y, max_x, max_y })
        }
    }

    ///
    /// Computes the out-code of a point relative to this box (0 if the point is inside)
    ///
    #[inline]
    pub fn clip_code(&self, x: f64, y: f64) -> u8 {
        let mut code = 0;

        if x < self.min_x as f64 {
            code |= CLIP_LEFT;
        } else if x > self.max_x as f64 {
            code |= CLIP_RIGHT;
        }

        if y < self.min_y as f64 {
            code |= CLIP_ABOVE;
        } else if y > self.max_y as f64 {
            code |= CLIP_BELOW;
        }

        code
    }

    ///
    /// True if the pixel at (x, y) is inside this box
    ///
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    ///
    /// Clips a line segment against this clip box
    ///
    /// This is the Cohen-Sutherland algorithm: whichever endpoint is outside the box is moved to where the line crosses the
    /// violated edge, until either both endpoints are inside or both are known to be on the same outside half-plane.
    ///
    pub fn clip_line(&self, start: (f64, f64), end: (f64, f64)) -> ClippedLine {
        let (min_x, min_y) = (self.min_x as f64, self.min_y as f64);
        let (max_x, max_y) = (self.max_x as f64, self.max_y as f64);

        let (mut xs, mut ys) = start;
        let (mut xe, mut ye) = end;

        let mut start_code  = self.clip_code(xs, ys);
        let mut end_code    = self.clip_code(xe, ye);
        let mut clipped     = false;

        loop {
            if (start_code & end_code) != 0 {
                return ClippedLine::Outside;
            }

            if (start_code | end_code) == 0 {
                return if clipped {
                    ClippedLine::Clipped((xs, ys), (xe, ye))
                } else {
                    ClippedLine::Unmodified((xs, ys), (xe, ye))
                };
            }

            // An endpoint outside a half-plane means the other one is inside it, so the relevant delta is never zero
            let dx = xe - xs;
            let dy = ye - ys;

            clipped = true;

            if start_code != 0 {
                if (start_code & CLIP_LEFT) != 0 {
                    ys = ys + (min_x - xs) * dy / dx;
                    xs = min_x;
                } else if (start_code & CLIP_RIGHT) != 0 {
                    ys = ys + (max_x - xs) * dy / dx;
                    xs = max_x;
                } else if (start_code & CLIP_ABOVE) != 0 {
                    xs = xs + (min_y - ys) * dx / dy;
                    ys = min_y;
                } else {
                    xs = xs + (max_y - ys) * dx / dy;
                    ys = max_y;
                }

                start_code = self.clip_code(xs, ys);
            } else {
                if (end_code & CLIP_LEFT) != 0 {
                    ye = ye + (min_x - xe) * dy / dx;
                    xe = min_x;
                } else if (end_code & CLIP_RIGHT) != 0 {
                    ye = ye + (max_x - xe) * dy / dx;
                    xe = max_x;
                } else if (end_code & CLIP_ABOVE) != 0 {
                    xe = xe + (min_y - ye) * dx / dy;
                    ye = min_y;
                } else {
                    xe = xe + (max_y - ye) * dx / dy;
                    ye = max_y;
                }

                end_code = self.clip_code(xe, ye);
            }
        }
    }
}

///
/// Clips a line segment against a clip box (see `ClipBox::clip_line()`)
///
#[inline]
pub fn clip_line(clip_box: &ClipBox, start: (f64, f64), end: (f64, f64)) -> ClippedLine {
    clip_box.clip_line(start, end)
}

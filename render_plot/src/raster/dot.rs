use super::coverage::*;
use super::sample_pattern::*;

use crate::geometry::*;

///
/// A square or round dot
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    centre:     (i64, i64),
    half_size:  i64,
    round:      bool,
}

impl Dot {
    ///
    /// Creates a dot centred on a point in pixel coordinates, `size` pixels across
    ///
    pub fn new(centre: (f64, f64), size: u32, round: bool) -> Dot {
        Dot {
            centre:     (to_fixed(centre.0), to_fixed(centre.1)),
            half_size:  half_thickness(size),
            round:      round,
        }
    }

    ///
    /// True if the fixed-point position `(px, py)` is inside this dot
    ///
    #[inline]
    pub fn contains(&self, px: i64, py: i64) -> bool {
        let dx = px - self.centre.0;
        let dy = py - self.centre.1;
        let h  = self.half_size;

        if self.round {
            dx*dx + dy*dy <= h*h
        } else {
            dx.abs() < h && dy.abs() < h
        }
    }

    ///
    /// Writes the coverage of this dot within a clip box
    ///
    pub fn rasterize<TWriter>(&self, clip: &ClipBox, writer: &mut TWriter)
    where
        TWriter: ?Sized + CoverageWriter,
    {
        let reach   = self.half_size + writer.candidate_margin();
        let bounds  = match candidate_bounds(self.centre, self.centre, reach, clip) {
            Some(bounds)    => bounds,
            None            => { return; }
        };

        for y in bounds.y_range() {
            for x in bounds.x_range() {
                let mask = coverage_mask(writer.samples(), x as i64, y as i64, |px, py| self.contains(px, py));

                if mask != 0 {
                    writer.write_samples(x, y, mask);
                }
            }
        }
    }
}

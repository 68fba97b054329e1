use super::sample_pattern::*;

use crate::geometry::*;

///
/// Receives the coverage generated by the rasterizer
///
/// The rasterizer tests every sample offset returned by `samples()` for each candidate pixel and passes the ones that are
/// inside the shape as a bit mask (bit `n` set means that sample `n` is covered). The mask is never empty and only ever
/// has bits set for the samples in the pattern.
///
pub trait CoverageWriter {
    ///
    /// The sample offsets to test, in sub-units relative to the pixel centre (at most 8)
    ///
    fn samples(&self) -> &[(i64, i64)];

    ///
    /// Writes the samples in `mask` for the pixel at `(x, y)`
    ///
    fn write_samples(&mut self, x: i32, y: i32, mask: u8);

    ///
    /// Extra distance to add to shapes when searching for candidate pixels
    ///
    #[inline]
    fn candidate_margin(&self) -> i64 {
        if self.samples().len() > 1 {
            CANDIDATE_MARGIN
        } else {
            0
        }
    }
}

///
/// Computes the coverage mask for the pixel at `(x, y)`, given a function that tests whether or not a fixed-point
/// position is inside a shape
///
#[inline]
pub(crate) fn coverage_mask<TInside>(samples: &[(i64, i64)], x: i64, y: i64, inside: TInside) -> u8
where
    TInside: Fn(i64, i64) -> bool,
{
    let px = x * SUBPIXELS;
    let py = y * SUBPIXELS;

    samples.iter()
        .take(8)
        .enumerate()
        .fold(0u8, |mask, (idx, (ox, oy))| {
            if inside(px + ox, py + oy) {
                mask | (1 << idx)
            } else {
                mask
            }
        })
}

///
/// Finds the pixels that might be covered by a shape with the fixed-point bounds `min` to `max`, grown by `margin`,
/// restricted to a clip box
///
pub(crate) fn candidate_bounds(min: (i64, i64), max: (i64, i64), margin: i64, clip: &ClipBox) -> Option<ClipBox> {
    let min_x = floor_pixel(min.0 - margin).max(clip.min_x as i64);
    let min_y = floor_pixel(min.1 - margin).max(clip.min_y as i64);
    let max_x = ceil_pixel(max.0 + margin).min(clip.max_x as i64);
    let max_y = ceil_pixel(max.1 + margin).min(clip.max_y as i64);

    if min_x > max_x || min_y > max_y {
        None
    } else {
        Some(ClipBox::new(min_x as i32, min_y as i32, max_x as i32, max_y as i32))
    }
}

use crate::geometry::*;

///
/// Maps the data coordinates of a curve onto the screen
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMap {
    pub x_scale:    f64,
    pub x_offset:   f64,
    pub y_scale:    f64,
    pub y_offset:   f64,
}

impl ScreenMap {
    ///
    /// A mapping that leaves coordinates as they are
    ///
    pub fn identity() -> ScreenMap {
        ScreenMap { x_scale: 1.0, x_offset: 0.0, y_scale: 1.0, y_offset: 0.0 }
    }

    ///
    /// Creates the screen mapping for a pair of axes
    ///
    /// Each axis is a `(scale, offset)` pair that maps data values onto the range 0-1 across the viewport. The y axis
    /// points upwards, so a value of 0 is at the bottom of the viewport and 1 is at the top.
    ///
    pub fn from_axes(x_axis: (f64, f64), y_axis: (f64, f64), viewport: &ClipBox) -> ScreenMap {
        let width   = (viewport.max_x - viewport.min_x) as f64;
        let height  = (viewport.min_y - viewport.max_y) as f64;

        ScreenMap {
            x_scale:    x_axis.0 * width,
            x_offset:   x_axis.1 * width + viewport.min_x as f64,
            y_scale:    y_axis.0 * height,
            y_offset:   y_axis.1 * height + viewport.max_y as f64,
        }
    }

    ///
    /// Creates the mapping for an axis that's defined relative to another one
    ///
    /// `self` is the mapping for the main axes, and the new mapping applies `x_axis` and `y_axis` before it.
    ///
    pub fn then_axes(&self, x_axis: (f64, f64), y_axis: (f64, f64)) -> ScreenMap {
        ScreenMap {
            x_scale:    x_axis.0 * self.x_scale,
            x_offset:   x_axis.1 * self.x_scale + self.x_offset,
            y_scale:    y_axis.0 * self.y_scale,
            y_offset:   y_axis.1 * self.y_scale + self.y_offset,
        }
    }

    /// Maps an x coordinate to the screen
    #[inline]
    pub fn map_x(&self, x: f64) -> f64 { x * self.x_scale + self.x_offset }

    /// Maps a y coordinate to the screen
    #[inline]
    pub fn map_y(&self, y: f64) -> f64 { y * self.y_scale + self.y_offset }

    /// Maps a point to the screen
    #[inline]
    pub fn map(&self, point: (f64, f64)) -> (f64, f64) {
        (self.map_x(point.0), self.map_y(point.1))
    }
}

impl Default for ScreenMap {
    fn default() -> Self {
        ScreenMap::identity()
    }
}

///
/// Receives a vector copy of the primitives that are drawn to a plot
///
/// Coordinates are in pixels, after clipping. Colours are `0x00RRGGBB`.
///
pub trait VectorSink {
    ///
    /// A line segment. `width` is the stroke width that was requested for the raster line. A non-zero `dash` means
    /// the line is dashed, with `dash` and `space` being the lengths of the dashes and gaps in pixels.
    ///
    fn line(&mut self, start: (f64, f64), end: (f64, f64), rgb: u32, width: u32, dash: u32, space: u32);

    /// A filled rectangle
    fn rect(&mut self, min: (f64, f64), max: (f64, f64), rgb: u32);

    /// A filled circle
    fn circle(&mut self, centre: (f64, f64), radius: f64, rgb: u32);

    /// A run of text with its top-left corner at `position`
    fn text(&mut self, position: (f64, f64), text: &str, rgb: u32);
}

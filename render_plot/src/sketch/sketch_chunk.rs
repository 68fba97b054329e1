use super::curve_id::*;

///
/// How the points of a curve are joined up when it's drawn
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawingStyle {
    /// Consecutive samples are joined by solid lines
    Line,

    /// Consecutive samples are joined by dashed lines
    Dash,

    /// Each sample is drawn as a round dot
    Dot,
}

///
/// Refers to a chunk in a sketch pool
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SketchHandle(pub (crate) usize);

///
/// A chunk of cached points for a curve, in data coordinates
///
/// Line and dash chunks contain pairs of points (the start and end of each segment that changed the trial buffer), dot
/// chunks contain one point per dot.
///
#[derive(Clone, Debug)]
pub struct SketchChunk {
    pub (crate) curve:      CurveId,
    pub (crate) style:      DrawingStyle,
    pub (crate) width:      u32,
    pub (crate) points:     Vec<(f64, f64)>,

    /// The chunk after this one in whichever list this chunk is in
    pub (crate) next:       Option<usize>,

    /// The pool generation this chunk was taken from the free list in
    pub (crate) generation: u64,
}

impl SketchChunk {
    /// The curve that owns this chunk
    #[inline] pub fn curve(&self) -> CurveId { self.curve }

    /// How the points in this chunk are drawn
    #[inline] pub fn style(&self) -> DrawingStyle { self.style }

    /// The thickness or dot size that this chunk is drawn with
    #[inline] pub fn width(&self) -> u32 { self.width }

    /// The points stored in this chunk
    #[inline] pub fn points(&self) -> &[(f64, f64)] { &self.points }
}

use super::sample_source::*;
use crate::sketch::*;

///
/// The progress of a curve through the current pass
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchStatus {
    /// The curve has not been drawn yet in this pass
    Started,

    /// The curve has been partially drawn and will resume where it left off
    Interrupted,

    /// Every sample in the curve has been visited
    Finished,
}

///
/// The saved state of a curve that's being drawn by the scheduler
///
#[derive(Clone, Copy, Debug)]
pub struct DrawState {
    pub (crate) curve:          CurveId,
    pub (crate) status:         SketchStatus,
    pub (crate) cursor:         SampleCursor,

    /// True if the previous sample is the start of a line to the next one
    pub (crate) line:           bool,

    /// True if the cursor was moved to the last sample of a culled chunk
    pub (crate) skipped:        bool,

    /// The last sample read, in data coordinates
    pub (crate) last_point:     (f64, f64),

    /// The last chunk tested against the viewport, and whether or not it was visible
    pub (crate) tested_chunk:   Option<(usize, bool)>,

    /// The sketch chunk that changed lines are written to
    pub (crate) sketch:         Option<SketchHandle>,

    /// Set once the curve has reported that the sketch pool ran out during this pass
    pub (crate) pool_exhausted: bool,
}

impl DrawState {
    ///
    /// Creates the state for a curve at the start of a pass
    ///
    pub fn new(curve: CurveId, head: SampleCursor) -> DrawState {
        DrawState {
            curve:          curve,
            status:         SketchStatus::Started,
            cursor:         head,
            line:           false,
            skipped:        false,
            last_point:     (0.0, 0.0),
            tested_chunk:   None,
            sketch:         None,
            pool_exhausted: false,
        }
    }

    /// The curve this state is for
    #[inline] pub fn curve(&self) -> CurveId { self.curve }

    /// How far the curve has got through the pass
    #[inline] pub fn status(&self) -> SketchStatus { self.status }

    /// The position of the next sample to read
    #[inline] pub fn cursor(&self) -> SampleCursor { self.cursor }
}

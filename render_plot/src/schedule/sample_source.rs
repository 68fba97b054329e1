///
/// The position of a curve's reader within its samples
///
/// `index` counts the samples that have been consumed since the head, which is what the scheduler uses to decide which
/// curve is furthest behind. `position` is whatever the source uses to locate the next sample.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SampleCursor {
    pub position:   usize,
    pub index:      u64,
}

///
/// The range of values in one storage chunk of a sample source
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleRange {
    /// The range has not been computed, so the chunk can't be culled
    Unknown,

    /// The chunk contains no finite values
    NotFinite,

    /// Minimum and maximum of the finite values in the chunk
    Span(f64, f64),
}

///
/// The ranges of the x and y values in a storage chunk
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkRange {
    pub x: SampleRange,
    pub y: SampleRange,
}

impl ChunkRange {
    /// A range that can't be used for culling
    pub const UNKNOWN: ChunkRange = ChunkRange { x: SampleRange::Unknown, y: SampleRange::Unknown };
}

///
/// A source of (x, y) samples for a curve
///
/// Samples are stored in chunks, which have a cached range that lets the scheduler skip over whole chunks that can't be
/// visible. Cursors only ever move forwards.
///
pub trait SampleSource {
    /// A cursor positioned at the first sample
    fn head(&self) -> SampleCursor;

    /// The number of samples in each storage chunk
    fn chunk_len(&self) -> usize;

    /// The storage chunk containing the sample the cursor will fetch next
    fn chunk_index(&self, cursor: &SampleCursor) -> usize;

    /// Reads the sample at the cursor and moves it forward, or returns None at the tail
    fn fetch(&self, cursor: &mut SampleCursor) -> Option<(f64, f64)>;

    /// Moves the cursor to the last sample of the specified chunk (or leaves it alone if it's already past that point)
    fn skip_to_chunk_end(&self, cursor: &mut SampleCursor, chunk: usize);

    /// The range of the values in a storage chunk
    fn chunk_range(&self, chunk: usize) -> ChunkRange;
}

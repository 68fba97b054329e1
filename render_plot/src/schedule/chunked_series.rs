use super::sample_source::*;

///
/// Accumulates the range of the values in a chunk
///
#[derive(Clone, Copy, Debug, PartialEq)]
struct RangeAccumulator {
    min: f64,
    max: f64,
}

impl RangeAccumulator {
    fn empty() -> RangeAccumulator {
        RangeAccumulator { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    #[inline]
    fn add(&mut self, val: f64) {
        if val.is_finite() {
            self.min = self.min.min(val);
            self.max = self.max.max(val);
        }
    }

    fn range(&self) -> SampleRange {
        if self.min <= self.max {
            SampleRange::Span(self.min, self.max)
        } else {
            SampleRange::NotFinite
        }
    }
}

///
/// An in-memory sample source, which caches the range of the values in each of its chunks
///
#[derive(Clone, Debug)]
pub struct ChunkedSeries {
    chunk_len:      usize,
    samples:        Vec<(f64, f64)>,
    ranges:         Vec<(RangeAccumulator, RangeAccumulator)>,
    range_cache:    bool,
}

impl ChunkedSeries {
    ///
    /// Creates an empty series with the specified number of samples in each chunk
    ///
    pub fn new(chunk_len: usize) -> ChunkedSeries {
        ChunkedSeries {
            chunk_len:      chunk_len.max(1),
            samples:        vec![],
            ranges:         vec![],
            range_cache:    true,
        }
    }

    ///
    /// Creates a series from a list of samples
    ///
    pub fn from_samples(chunk_len: usize, samples: impl IntoIterator<Item=(f64, f64)>) -> ChunkedSeries {
        let mut series = ChunkedSeries::new(chunk_len);
        samples.into_iter().for_each(|sample| series.push(sample));

        series
    }

    ///
    /// Stops this series from reporting the ranges of its chunks, so that none of them can be culled
    ///
    pub fn without_range_cache(mut self) -> Self {
        self.range_cache = false;
        self
    }

    ///
    /// Adds a sample to the end of the series
    ///
    pub fn push(&mut self, sample: (f64, f64)) {
        let chunk = self.samples.len() / self.chunk_len;

        if chunk >= self.ranges.len() {
            self.ranges.push((RangeAccumulator::empty(), RangeAccumulator::empty()));
        }

        self.ranges[chunk].0.add(sample.0);
        self.ranges[chunk].1.add(sample.1);
        self.samples.push(sample);
    }

    /// The number of samples in this series
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// True if there are no samples in this series
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// The samples in this series
    #[inline]
    pub fn samples(&self) -> &[(f64, f64)] { &self.samples }
}

impl SampleSource for ChunkedSeries {
    fn head(&self) -> SampleCursor {
        SampleCursor { position: 0, index: 0 }
    }

    fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    fn chunk_index(&self, cursor: &SampleCursor) -> usize {
        cursor.position / self.chunk_len
    }

    fn fetch(&self, cursor: &mut SampleCursor) -> Option<(f64, f64)> {
        let sample = self.samples.get(cursor.position).copied()?;

        cursor.position += 1;
        cursor.index    += 1;

        Some(sample)
    }

    fn skip_to_chunk_end(&self, cursor: &mut SampleCursor, chunk: usize) {
        if self.samples.is_empty() { return; }

        let last = ((chunk + 1) * self.chunk_len).min(self.samples.len()) - 1;

        if last > cursor.position {
            cursor.index    += (last - cursor.position) as u64;
            cursor.position = last;
        }
    }

    fn chunk_range(&self, chunk: usize) -> ChunkRange {
        if !self.range_cache {
            return ChunkRange::UNKNOWN;
        }

        match self.ranges.get(chunk) {
            Some((x, y))    => ChunkRange { x: x.range(), y: y.range() },
            None            => ChunkRange::UNKNOWN,
        }
    }
}

use super::curve_id::*;
use super::sketch_chunk::*;

use crate::error::*;

use std::iter;

///
/// A singly-linked list of chunks, threaded through the `next` field of each chunk
///
#[derive(Clone, Copy, Debug, Default)]
struct ChunkList {
    head:   Option<usize>,
    tail:   Option<usize>,
    len:    usize,
}

impl ChunkList {
    ///
    /// Moves all of the chunks in `list` to the front of this list
    ///
    fn splice_front(&mut self, chunks: &mut [SketchChunk], list: ChunkList) {
        let (head, tail) = match (list.head, list.tail) {
            (Some(head), Some(tail))    => (head, tail),
            _                           => { return; }
        };

        chunks[tail].next = self.head;

        if self.tail.is_none() {
            self.tail = Some(tail);
        }

        self.head   = Some(head);
        self.len    += list.len;
    }

    ///
    /// Removes the first chunk from this list
    ///
    fn pop_front(&mut self, chunks: &mut [SketchChunk]) -> Option<usize> {
        let head = self.head?;

        self.head           = chunks[head].next.take();
        self.len            -= 1;

        if self.head.is_none() {
            self.tail = None;
        }

        Some(head)
    }

    ///
    /// Adds a chunk to the start of this list
    ///
    fn push_front(&mut self, chunks: &mut [SketchChunk], idx: usize) {
        chunks[idx].next = self.head;

        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.head   = Some(idx);
        self.len    += 1;
    }

    ///
    /// Adds a chunk to the end of this list
    ///
    fn push_back(&mut self, chunks: &mut [SketchChunk], idx: usize) {
        chunks[idx].next = None;

        match self.tail {
            Some(tail)  => chunks[tail].next = Some(idx),
            None        => self.head = Some(idx),
        }

        self.tail   = Some(idx);
        self.len    += 1;
    }

    ///
    /// Adds a chunk to this list straight after another chunk that's already in it
    ///
    fn insert_after(&mut self, chunks: &mut [SketchChunk], after: usize, idx: usize) {
        chunks[idx].next    = chunks[after].next;
        chunks[after].next  = Some(idx);

        if self.tail == Some(after) {
            self.tail = Some(idx);
        }

        self.len += 1;
    }
}

///
/// A fixed-size pool of sketch chunks
///
/// Chunks are in one of three lists: the free list, the list being filled by the current pass, and the 'to draw' list
/// from the last pass that ran to completion. The lists are linked through the chunks themselves, so taking a chunk and
/// swapping the generations over never has to look through a list.
///
pub struct SketchPool {
    /// Every chunk in the pool (the storage for each chunk is only allocated when it's first used)
    chunks:         Vec<SketchChunk>,

    /// The number of points that can be stored in each chunk
    point_capacity: usize,

    /// Chunks that are not in use
    free:           ChunkList,

    /// Chunks that are being written by the current pass, in drawing order
    current:        ChunkList,

    /// Chunks from the last complete pass, in drawing order
    todraw:         ChunkList,

    /// Chunks taken from the free list since the current pass started are tagged with this value
    generation:     u64,
}

impl SketchPool {
    ///
    /// Creates a pool of `pool_size` chunks, each of which can store `chunk_capacity` coordinate values
    ///
    /// The capacity is rounded down to a multiple of 4 values (2 points), so that the two ends of a line are always in the
    /// same chunk.
    ///
    pub fn new(pool_size: usize, chunk_capacity: usize) -> SketchPool {
        let point_capacity  = ((chunk_capacity / 4) * 2).max(2);
        let mut chunks      = (0..pool_size).map(|_| SketchChunk {
                curve:      CurveId::new(),
                style:      DrawingStyle::Line,
                width:      0,
                points:     vec![],
                next:       None,
                generation: 0,
            }).collect::<Vec<_>>();

        let mut free = ChunkList::default();
        (0..pool_size).for_each(|idx| free.push_back(&mut chunks, idx));

        SketchPool {
            chunks:         chunks,
            point_capacity: point_capacity,
            free:           free,
            current:        ChunkList::default(),
            todraw:         ChunkList::default(),
            generation:     1,
        }
    }

    /// The number of points that each chunk can hold
    #[inline]
    pub fn point_capacity(&self) -> usize { self.point_capacity }

    /// The number of chunks that are not being used
    #[inline]
    pub fn free_count(&self) -> usize { self.free.len }

    /// True if a chunk is in the list being written by the current pass
    #[inline]
    fn is_current(&self, idx: usize) -> bool {
        self.chunks.get(idx).map(|chunk| chunk.generation == self.generation).unwrap_or(false)
    }

    ///
    /// Returns a chunk that points for a curve can be appended to
    ///
    /// The `current` chunk is returned if it belongs to the same curve, has the same style and width and has space for
    /// more points. Otherwise a chunk is taken from the free list and placed after the `current` chunk, so the chunks for
    /// a curve stay together in drawing order.
    ///
    pub fn begin_chunk(&mut self, current: Option<SketchHandle>, curve: CurveId, style: DrawingStyle, width: u32) -> Result<SketchHandle, RenderError> {
        let after = current.map(|SketchHandle(idx)| idx).filter(|idx| self.is_current(*idx));

        if let Some(idx) = after {
            let chunk = &self.chunks[idx];

            if chunk.curve == curve && chunk.style == style && chunk.width == width && chunk.points.len() < self.point_capacity {
                return Ok(SketchHandle(idx));
            }
        }

        let idx             = self.free.pop_front(&mut self.chunks).ok_or(RenderError::SketchPoolExhausted)?;
        let point_capacity  = self.point_capacity;
        let points          = &mut self.chunks[idx].points;

        points.clear();
        if points.capacity() < point_capacity && points.try_reserve_exact(point_capacity).is_err() {
            self.free.push_front(&mut self.chunks, idx);
            return Err(RenderError::SketchAllocation);
        }

        let chunk = &mut self.chunks[idx];

        chunk.curve         = curve;
        chunk.style         = style;
        chunk.width         = width;
        chunk.generation    = self.generation;

        match after {
            Some(after) => self.current.insert_after(&mut self.chunks, after, idx),
            None        => self.current.push_back(&mut self.chunks, idx),
        }

        Ok(SketchHandle(idx))
    }

    ///
    /// True if a chunk can't store any more points
    ///
    #[inline]
    pub fn is_full(&self, handle: SketchHandle) -> bool {
        self.chunks.get(handle.0)
            .map(|chunk| chunk.points.len() >= self.point_capacity)
            .unwrap_or(true)
    }

    ///
    /// Adds a point to a chunk, returning true if the chunk is now full
    ///
    pub fn append_point(&mut self, handle: SketchHandle, point: (f64, f64)) -> bool {
        let point_capacity = self.point_capacity;

        match self.chunks.get_mut(handle.0) {
            Some(chunk) => {
                if chunk.points.len() < point_capacity {
                    chunk.points.push(point);
                }

                chunk.points.len() >= point_capacity
            }

            None => true
        }
    }

    ///
    /// Frees the chunks from the last complete pass and replaces them with the chunks from the current pass
    ///
    pub fn recycle_generation(&mut self) {
        let todraw = self.todraw;
        self.free.splice_front(&mut self.chunks, todraw);

        self.todraw     = self.current;
        self.current    = ChunkList::default();
        self.generation += 1;
    }

    ///
    /// Frees every chunk in the pool
    ///
    pub fn clean(&mut self) {
        let todraw  = self.todraw;
        let current = self.current;

        self.free.splice_front(&mut self.chunks, todraw);
        self.free.splice_front(&mut self.chunks, current);

        self.todraw     = ChunkList::default();
        self.current    = ChunkList::default();
        self.generation += 1;
    }

    ///
    /// Frees the chunks written by an unfinished pass, leaving the chunks that are replayed alone
    ///
    pub fn discard_current(&mut self) {
        let current = self.current;
        self.free.splice_front(&mut self.chunks, current);

        self.current    = ChunkList::default();
        self.generation += 1;
    }

    fn iter_list<'a>(&'a self, list: ChunkList) -> impl 'a + Iterator<Item=&'a SketchChunk> {
        let chunks = &self.chunks;

        iter::successors(list.head.and_then(|idx| chunks.get(idx)), move |chunk| chunk.next.and_then(|idx| chunks.get(idx)))
            .take(list.len)
    }

    ///
    /// The chunks from the last complete pass, in the order they should be drawn
    ///
    pub fn iter_todraw<'a>(&'a self) -> impl 'a + Iterator<Item=&'a SketchChunk> {
        self.iter_list(self.todraw)
    }

    ///
    /// The chunks that have been written so far by the current pass
    ///
    pub fn iter_current<'a>(&'a self) -> impl 'a + Iterator<Item=&'a SketchChunk> {
        self.iter_list(self.current)
    }

    ///
    /// The number of coordinate values stored in the chunks that are replayed each frame
    ///
    pub fn todraw_length(&self) -> usize {
        self.iter_todraw().map(|chunk| chunk.points.len() * 2).sum()
    }

    /// Retrieves a chunk by handle
    pub fn chunk(&self, handle: SketchHandle) -> Option<&SketchChunk> {
        self.chunks.get(handle.0)
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

///
/// Identifies the curve that owns a sketch chunk
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveId(u64);

impl CurveId {
    ///
    /// Creates a new curve ID (unique within this process)
    ///
    pub fn new() -> CurveId {
        static NEXT_VALUE: AtomicU64 = AtomicU64::new(0);

        let next_value = NEXT_VALUE.fetch_add(1, Ordering::Relaxed);
        CurveId(next_value)
    }
}

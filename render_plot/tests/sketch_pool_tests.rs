use flo_render_plot::*;
use flo_render_plot::sketch::*;

#[test]
pub fn capacity_is_rounded_to_pairs() {
    assert!(SketchPool::new(1, 8).point_capacity() == 4);
    assert!(SketchPool::new(1, 10).point_capacity() == 4);
    assert!(SketchPool::new(1, 3).point_capacity() == 2);
    assert!(SketchPool::new(1, 32768).point_capacity() == 16384);
}

#[test]
pub fn fill_chunk() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let handle = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();

    assert!(!pool.append_point(handle, (1.0, 2.0)));
    assert!(!pool.append_point(handle, (3.0, 4.0)));
    assert!(!pool.is_full(handle));
    assert!(!pool.append_point(handle, (5.0, 6.0)));
    assert!(pool.append_point(handle, (7.0, 8.0)));
    assert!(pool.is_full(handle));

    let chunk = pool.chunk(handle).unwrap();
    assert!(chunk.points() == &[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)]);
    assert!(chunk.curve() == curve);
    assert!(chunk.style() == DrawingStyle::Line);
    assert!(chunk.width() == 1);
}

#[test]
pub fn reuse_chunk_with_room() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let first   = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(first, (1.0, 2.0));
    let second  = pool.begin_chunk(Some(first), curve, DrawingStyle::Line, 1).unwrap();

    assert!(first == second);
    assert!(pool.free_count() == 3);
}

#[test]
pub fn new_chunk_when_style_changes() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let first   = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    let dashed  = pool.begin_chunk(Some(first), curve, DrawingStyle::Dash, 1).unwrap();
    let thicker = pool.begin_chunk(Some(dashed), curve, DrawingStyle::Dash, 2).unwrap();
    let other   = pool.begin_chunk(Some(thicker), CurveId::new(), DrawingStyle::Dash, 2).unwrap();

    assert!(first != dashed && dashed != thicker && thicker != other);
    assert!(pool.free_count() == 0);
}

#[test]
pub fn new_chunk_when_full() {
    let mut pool    = SketchPool::new(4, 4);
    let curve       = CurveId::new();

    let first = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(first, (1.0, 2.0));
    pool.append_point(first, (3.0, 4.0));

    let second = pool.begin_chunk(Some(first), curve, DrawingStyle::Line, 1).unwrap();
    assert!(first != second);
}

#[test]
pub fn chunks_for_a_curve_stay_together() {
    let mut pool    = SketchPool::new(4, 4);
    let curve_a     = CurveId::new();
    let curve_b     = CurveId::new();

    let a1 = pool.begin_chunk(None, curve_a, DrawingStyle::Line, 1).unwrap();
    let _  = pool.begin_chunk(None, curve_b, DrawingStyle::Line, 1).unwrap();

    pool.append_point(a1, (1.0, 2.0));
    pool.append_point(a1, (3.0, 4.0));

    // a1 is full, so the new chunk for curve A is linked in straight after it
    let _  = pool.begin_chunk(Some(a1), curve_a, DrawingStyle::Line, 1).unwrap();

    let order = pool.iter_current().map(|chunk| chunk.curve()).collect::<Vec<_>>();
    assert!(order == vec![curve_a, curve_a, curve_b], "{:?}", order);
}

#[test]
pub fn chunk_linked_after_the_last_chunk_becomes_the_end_of_the_list() {
    let mut pool    = SketchPool::new(4, 4);
    let curve_a     = CurveId::new();
    let curve_b     = CurveId::new();

    let a1 = pool.begin_chunk(None, curve_a, DrawingStyle::Line, 1).unwrap();
    pool.append_point(a1, (1.0, 2.0));
    pool.append_point(a1, (3.0, 4.0));

    let a2 = pool.begin_chunk(Some(a1), curve_a, DrawingStyle::Line, 1).unwrap();
    pool.append_point(a2, (5.0, 6.0));

    // Appended after a2, which was linked in after the old end of the list
    let b1 = pool.begin_chunk(None, curve_b, DrawingStyle::Line, 1).unwrap();
    pool.append_point(b1, (7.0, 8.0));

    let points = pool.iter_current().flat_map(|chunk| chunk.points().iter().cloned()).collect::<Vec<_>>();
    assert!(points == vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)], "{:?}", points);
    assert!(pool.free_count() == 1);
}

#[test]
pub fn handle_from_replayed_sketch_is_not_reused() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let old = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(old, (1.0, 2.0));
    pool.append_point(old, (3.0, 4.0));
    pool.recycle_generation();

    let new = pool.begin_chunk(Some(old), curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(new, (5.0, 6.0));
    pool.append_point(new, (7.0, 8.0));

    assert!(new != old);
    assert!(pool.iter_current().count() == 1);
    assert!(pool.todraw_length() == 4, "{:?}", pool.todraw_length());

    let replayed = pool.iter_todraw().flat_map(|chunk| chunk.points().iter().cloned()).collect::<Vec<_>>();
    assert!(replayed == vec![(1.0, 2.0), (3.0, 4.0)], "{:?}", replayed);
}

#[test]
pub fn chunks_survive_many_generations() {
    let mut pool    = SketchPool::new(10, 4);
    let curve_a     = CurveId::new();
    let curve_b     = CurveId::new();

    for generation in 0..20 {
        let mut a = None;
        let mut b = None;

        // Interleave the two curves so that chunks are linked into the middle of the list
        for idx in 0..3 {
            let point = (generation as f64, idx as f64);

            let handle_a = pool.begin_chunk(a, curve_a, DrawingStyle::Line, 1).unwrap();
            pool.append_point(handle_a, point);
            pool.append_point(handle_a, point);
            a = Some(handle_a);

            if idx < 2 {
                let handle_b = pool.begin_chunk(b, curve_b, DrawingStyle::Line, 1).unwrap();
                pool.append_point(handle_b, point);
                pool.append_point(handle_b, point);
                b = Some(handle_b);
            }
        }

        pool.recycle_generation();

        let order = pool.iter_todraw().map(|chunk| chunk.curve()).collect::<Vec<_>>();
        assert!(order == vec![curve_a, curve_a, curve_a, curve_b, curve_b], "{:?}", order);
        assert!(pool.free_count() == 5, "{:?}", pool.free_count());
        assert!(pool.todraw_length() == 20, "{:?}", pool.todraw_length());
    }
}

#[test]
pub fn pool_exhaustion() {
    let mut pool    = SketchPool::new(1, 4);
    let curve       = CurveId::new();

    let _       = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    let second  = pool.begin_chunk(None, curve, DrawingStyle::Line, 1);

    assert!(second == Err(RenderError::SketchPoolExhausted), "{:?}", second);

    let mut empty = SketchPool::new(0, 4);
    assert!(empty.begin_chunk(None, curve, DrawingStyle::Dot, 1) == Err(RenderError::SketchPoolExhausted));
}

#[test]
pub fn generation_swap() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    // First generation
    let first = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(first, (1.0, 2.0));
    pool.append_point(first, (3.0, 4.0));

    assert!(pool.todraw_length() == 0);
    pool.recycle_generation();

    assert!(pool.todraw_length() == 4, "{:?}", pool.todraw_length());
    assert!(pool.iter_current().count() == 0);
    assert!(pool.free_count() == 3);

    // Second generation replaces the first one
    let second = pool.begin_chunk(None, curve, DrawingStyle::Dot, 1).unwrap();
    pool.append_point(second, (5.0, 6.0));

    assert!(pool.todraw_length() == 4);
    pool.recycle_generation();

    assert!(pool.todraw_length() == 2, "{:?}", pool.todraw_length());
    assert!(pool.free_count() == 3);

    let points = pool.iter_todraw().flat_map(|chunk| chunk.points().iter().cloned()).collect::<Vec<_>>();
    assert!(points == vec![(5.0, 6.0)], "{:?}", points);
}

#[test]
pub fn clean_frees_everything() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let first = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(first, (1.0, 2.0));
    pool.recycle_generation();
    pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();

    pool.clean();

    assert!(pool.free_count() == 4);
    assert!(pool.todraw_length() == 0);
    assert!(pool.iter_current().count() == 0);
}

#[test]
pub fn discarding_current_keeps_todraw() {
    let mut pool    = SketchPool::new(4, 8);
    let curve       = CurveId::new();

    let first = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(first, (1.0, 2.0));
    pool.append_point(first, (3.0, 4.0));
    pool.recycle_generation();

    let second = pool.begin_chunk(None, curve, DrawingStyle::Line, 1).unwrap();
    pool.append_point(second, (5.0, 6.0));
    pool.discard_current();

    assert!(pool.todraw_length() == 4);
    assert!(pool.free_count() == 3);
}

#[test]
pub fn curve_ids_are_unique() {
    let first   = CurveId::new();
    let second  = CurveId::new();

    assert!(first != second);
}

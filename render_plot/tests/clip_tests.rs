use flo_render_plot::geometry::*;

#[test]
pub fn line_inside_is_unmodified() {
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((10.0, 10.0), (90.0, 50.0));
    assert!(clipped == ClippedLine::Unmodified((10.0, 10.0), (90.0, 50.0)), "{:?}", clipped);
}

#[test]
pub fn clip_left_edge() {
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((-50.0, 50.0), (50.0, 50.0));
    assert!(clipped == ClippedLine::Clipped((0.0, 50.0), (50.0, 50.0)), "{:?}", clipped);
}

#[test]
pub fn clip_both_ends() {
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((50.0, -100.0), (50.0, 200.0));
    assert!(clipped == ClippedLine::Clipped((50.0, 0.0), (50.0, 99.0)), "{:?}", clipped);
}

#[test]
pub fn clip_keeps_direction() {
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((200.0, 20.0), (50.0, 20.0));
    assert!(clipped == ClippedLine::Clipped((99.0, 20.0), (50.0, 20.0)), "{:?}", clipped);
}

#[test]
pub fn line_above_is_outside() {
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((10.0, -10.0), (90.0, -5.0));
    assert!(clipped.is_outside(), "{:?}", clipped);
    assert!(clipped.points().is_none());
}

#[test]
pub fn line_past_corner_is_outside() {
    // Crosses the left and top half-planes but never enters the box
    let clip = ClipBox::new(0, 0, 99, 99);

    let clipped = clip.clip_line((-10.0, 5.0), (5.0, -10.0));
    assert!(clipped.is_outside(), "{:?}", clipped);
}

#[test]
pub fn clip_box_normalizes_corners() {
    let clip = ClipBox::new(10, 20, 0, 5);

    assert!(clip == ClipBox::new(0, 5, 10, 20), "{:?}", clip);
    assert!(clip.width() == 11, "{:?}", clip.width());
    assert!(clip.height() == 16, "{:?}", clip.height());
}

#[test]
pub fn expand_and_intersect() {
    let clip        = ClipBox::new(0, 0, 99, 99);
    let expanded    = clip.expanded(16);

    assert!(expanded == ClipBox::new(-16, -16, 115, 115), "{:?}", expanded);
    assert!(expanded.intersect(&clip) == Some(clip));
    assert!(clip.intersect(&ClipBox::new(200, 200, 300, 300)).is_none());
}

#[test]
pub fn clip_codes() {
    let clip = ClipBox::new(0, 0, 99, 99);

    assert!(clip.clip_code(50.0, 50.0) == 0);
    assert!(clip.clip_code(-1.0, 50.0) == CLIP_LEFT);
    assert!(clip.clip_code(100.0, 50.0) == CLIP_RIGHT);
    assert!(clip.clip_code(-1.0, -1.0) == CLIP_LEFT | CLIP_ABOVE);
    assert!(clip.clip_code(100.0, 100.0) == CLIP_RIGHT | CLIP_BELOW);
}

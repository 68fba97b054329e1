use super::rgb_frame::*;

use crate::geometry::*;

///
/// Steps along a line one pixel at a time (Bresenham's algorithm), calling `plot` for every pixel including both ends
///
fn walk_line<TPlot>(start: (i32, i32), end: (i32, i32), mut plot: TPlot)
where
    TPlot: FnMut(i32, i32),
{
    let (mut x, mut y)  = start;
    let (xe, ye)        = end;

    let dx = (xe - x).abs();
    let dy = (ye - y).abs();
    let vx = if x < xe { 1 } else { -1 };
    let vy = if y < ye { 1 } else { -1 };

    let mut error = 0;

    if dx < dy {
        while y != ye {
            plot(x, y);

            y       += vy;
            error   += dx;

            if error >= dy {
                error   -= dy;
                x       += vx;
            }
        }
    } else if dx > dy {
        while x != xe {
            plot(x, y);

            x       += vx;
            error   += dy;

            if error >= dx {
                error   -= dx;
                y       += vy;
            }
        }
    } else {
        while y != ye {
            plot(x, y);

            x += vx;
            y += vy;
        }
    }

    plot(x, y);
}

///
/// Draws an aliased one pixel line directly into a frame
///
pub fn rough_line(frame: &mut RgbFrame, start: (i32, i32), end: (i32, i32), rgb: u32) {
    walk_line(start, end, |x, y| frame.set_pixel(x, y, rgb));
}

///
/// Draws an aliased one pixel dashed line directly into a frame
///
/// `phase` is the position in the pattern in pixels, which is updated so that the next segment of the same polyline
/// continues the pattern.
///
pub fn rough_dash(frame: &mut RgbFrame, start: (i32, i32), end: (i32, i32), rgb: u32, dash: u32, space: u32, phase: &mut u32) {
    let period      = (dash + space).max(1);
    let mut pos     = *phase % period;
    let mut last    = pos;

    walk_line(start, end, |x, y| {
        if pos < dash {
            frame.set_pixel(x, y, rgb);
        }

        last    = pos;
        pos     = (pos + 1) % period;
    });

    // The last pixel is shared with the start of the next segment
    *phase = last;
}

///
/// Fills a rectangle (inclusive coordinates), clamped to the frame
///
pub fn fill_rect(frame: &mut RgbFrame, min: (i32, i32), max: (i32, i32), rgb: u32) {
    let rect = ClipBox::new(min.0, min.1, max.0, max.1);

    if let Some(rect) = rect.intersect(&frame.clip_box()) {
        fill_box(frame, &rect, rgb);
    }
}

///
/// Fills a rectangle (inclusive coordinates), clamped to a clip box
///
pub fn clip_rect(frame: &mut RgbFrame, clip: &ClipBox, min: (i32, i32), max: (i32, i32), rgb: u32) {
    let rect = ClipBox::new(min.0, min.1, max.0, max.1);

    let rect = rect.intersect(clip)
        .and_then(|rect| rect.intersect(&frame.clip_box()));

    if let Some(rect) = rect {
        fill_box(frame, &rect, rgb);
    }
}

fn fill_box(frame: &mut RgbFrame, rect: &ClipBox, rgb: u32) {
    for y in rect.y_range() {
        let row = frame.row_mut(y as usize);
        row[(rect.min_x as usize)..=(rect.max_x as usize)].iter_mut().for_each(|pixel| *pixel = rgb);
    }
}

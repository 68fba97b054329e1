use super::gamma_lut::*;
use super::palette::*;
use super::pixmap::*;
use super::sample_buffer::*;

use crate::geometry::*;
use crate::render::*;

///
/// Composites the canvas onto a frame
///
/// Pixels where nothing has been drawn are left alone. In the solid tier, drawn pixels are set to their palette colour.
/// In the multi-sample tiers the samples are converted to linear colour (an untouched sample takes the colour that's
/// already in the frame), averaged, and converted back to gamma-encoded colour.
///
pub fn flush_canvas(samples: &PixmapSamples, palette: &Palette, gamma: &GammaLut, frame: &mut RgbFrame, clip: &ClipBox) {
    match samples {
        PixmapSamples::Solid(pair) => flush_solid(&pair.canvas, palette, frame, clip),
        PixmapSamples::Msaa4(pair) => flush_samples(&pair.canvas, palette, gamma, frame, clip),
        PixmapSamples::Msaa8(pair) => flush_samples(&pair.canvas, palette, gamma, frame, clip),
    }
}

///
/// Works out the region that can be flushed from a buffer to a frame
///
fn flush_region<const N: usize>(buffer: &SampleBuffer<N>, frame: &RgbFrame, clip: &ClipBox) -> Option<ClipBox> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return None;
    }

    let buffer_box = ClipBox::with_size(buffer.width(), buffer.height());

    clip.intersect(&frame.clip_box())?
        .intersect(&buffer_box)
}

fn flush_solid(buffer: &SampleBuffer<1>, palette: &Palette, frame: &mut RgbFrame, clip: &ClipBox) {
    let region = match flush_region(buffer, frame, clip) {
        Some(region)    => region,
        None            => { return; }
    };

    for y in region.y_range() {
        let samples = buffer.row(y as usize);
        let pixels  = frame.row_mut(y as usize);

        for x in region.x_range() {
            let [index] = samples[x as usize];

            if index != 0 {
                pixels[x as usize] = palette.color(index);
            }
        }
    }
}

fn flush_samples<const N: usize>(buffer: &SampleBuffer<N>, palette: &Palette, gamma: &GammaLut, frame: &mut RgbFrame, clip: &ClipBox) {
    let region = match flush_region(buffer, frame, clip) {
        Some(region)    => region,
        None            => { return; }
    };

    // Palette colours converted to linear
    let mut linear_palette = [(0u32, 0u32, 0u32); PALETTE_SIZE];
    for (index, linear) in linear_palette.iter_mut().enumerate() {
        *linear = to_linear(gamma, palette.color(index as u8));
    }

    for y in region.y_range() {
        let samples = buffer.row(y as usize);
        let pixels  = frame.row_mut(y as usize);

        for x in region.x_range() {
            let pixel = &samples[x as usize];

            if pixel.iter().all(|sample| *sample == 0) {
                continue;
            }

            // Sample 0 means the background shows through
            let background = to_linear(gamma, pixels[x as usize]);

            let (r, g, b) = pixel.iter()
                .map(|sample| if *sample == 0 { background } else { linear_palette[(*sample as usize) % PALETTE_SIZE] })
                .fold((0, 0, 0), |(r, g, b), (sr, sg, sb)| (r + sr, g + sg, b + sb));

            let n = N as u32;
            let r = gamma.to_gamma((r / n) as u8) as u32;
            let g = gamma.to_gamma((g / n) as u8) as u32;
            let b = gamma.to_gamma((b / n) as u8) as u32;

            pixels[x as usize] = (r << 16) | (g << 8) | b;
        }
    }
}

#[inline]
fn to_linear(gamma: &GammaLut, rgb: u32) -> (u32, u32, u32) {
    let r = ((rgb >> 16) & 0xff) as u8;
    let g = ((rgb >> 8) & 0xff) as u8;
    let b = (rgb & 0xff) as u8;

    (gamma.to_linear(r) as u32, gamma.to_linear(g) as u32, gamma.to_linear(b) as u32)
}

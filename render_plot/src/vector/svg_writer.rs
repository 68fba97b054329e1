use super::vector_sink::*;

use std::io;
use std::io::{Write};

///
/// The stroke of the path that's currently being written
///
#[derive(Clone, Copy, PartialEq)]
struct OpenPath {
    rgb:    u32,
    width:  u32,
    dash:   u32,
    space:  u32,
    last:   (f64, f64),
}

///
/// A vector sink that writes an SVG document
///
/// Consecutive line segments with the same stroke that share an endpoint are joined into a single path. Write errors are
/// kept until `finish()` is called, after which nothing more is written.
///
pub struct SvgWriter<TStream>
where
    TStream: Write,
{
    target:         TStream,
    font_family:    String,
    font_size:      u32,
    open_path:      Option<OpenPath>,
    error:          Option<io::Error>,
}

impl<TStream> SvgWriter<TStream>
where
    TStream: Write,
{
    ///
    /// Starts writing an SVG document of the specified size to a stream
    ///
    pub fn new(target: TStream, width: usize, height: usize) -> SvgWriter<TStream> {
        let mut writer = SvgWriter {
            target:         target,
            font_family:    "sans-serif".to_string(),
            font_size:      12,
            open_path:      None,
            error:          None,
        };

        writer.write(format_args!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}px\" height=\"{}px\"><g>\n", width, height));

        writer
    }

    ///
    /// Sets the font used for text
    ///
    pub fn with_font(mut self, family: &str, size: u32) -> Self {
        self.font_family    = family.to_string();
        self.font_size      = size;

        self
    }

    ///
    /// Closes the document and returns the stream (or the first error that occurred while writing)
    ///
    pub fn finish(mut self) -> Result<TStream, io::Error> {
        self.close_path();
        self.write(format_args!("</g></svg>\n"));

        if self.error.is_none() {
            if let Err(err) = self.target.flush() {
                self.error = Some(err);
            }
        }

        match self.error {
            Some(err)   => Err(err),
            None        => Ok(self.target),
        }
    }

    fn write(&mut self, args: std::fmt::Arguments) {
        if self.error.is_none() {
            if let Err(err) = self.target.write_fmt(args) {
                self.error = Some(err);
            }
        }
    }

    fn close_path(&mut self) {
        if self.open_path.take().is_some() {
            self.write(format_args!("\"/>\n"));
        }
    }
}

impl<TStream> VectorSink for SvgWriter<TStream>
where
    TStream: Write,
{
    fn line(&mut self, start: (f64, f64), end: (f64, f64), rgb: u32, width: u32, dash: u32, space: u32) {
        // Continue the current path if this segment joins on to it
        if let Some(path) = self.open_path {
            let same_stroke = path.rgb == rgb && path.width == width && path.dash == dash && path.space == space;

            if same_stroke && path.last == start {
                self.write(format_args!(" {:.1},{:.1}", end.0, end.1));
                self.open_path = Some(OpenPath { last: end, ..path });
                return;
            } else if same_stroke && path.last == end {
                self.write(format_args!(" {:.1},{:.1}", start.0, start.1));
                self.open_path = Some(OpenPath { last: start, ..path });
                return;
            }

            self.close_path();
        }

        let stroke_width = if width != 0 { width as f64 } else { 0.5 };

        if dash == 0 {
            self.write(format_args!("<path style=\"fill:none;stroke:#{:06x};stroke-width:{:.1};stroke-linejoin:round;stroke-linecap:round\" d=\"M {:.1},{:.1} {:.1},{:.1}",
                rgb & 0xffffff, stroke_width, start.0, start.1, end.0, end.1));
        } else {
            self.write(format_args!("<path style=\"fill:none;stroke:#{:06x};stroke-width:{:.1};stroke-linejoin:round;stroke-linecap:butt;stroke-dasharray:{},{}\" d=\"M {:.1},{:.1} {:.1},{:.1}",
                rgb & 0xffffff, stroke_width, dash, space, start.0, start.1, end.0, end.1));
        }

        self.open_path = Some(OpenPath { rgb, width, dash, space, last: end });
    }

    fn rect(&mut self, min: (f64, f64), max: (f64, f64), rgb: u32) {
        self.close_path();
        self.write(format_args!("<path style=\"fill:#{:06x};stroke:none\" d=\"M {:.1},{:.1} {:.1},{:.1} {:.1},{:.1} {:.1},{:.1} Z\"/>\n",
            rgb & 0xffffff, min.0, min.1, max.0, min.1, max.0, max.1, min.0, max.1));
    }

    fn circle(&mut self, centre: (f64, f64), radius: f64, rgb: u32) {
        self.close_path();
        self.write(format_args!("<circle style=\"fill:#{:06x};stroke:none\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"/>\n",
            rgb & 0xffffff, centre.0, centre.1, radius));
    }

    fn text(&mut self, position: (f64, f64), text: &str, rgb: u32) {
        self.close_path();

        let text = escape_text(text);
        let font_family = self.font_family.clone();
        let font_size   = self.font_size;

        self.write(format_args!("<text style=\"font-family:{};font-size:{}px;fill:#{:06x};stroke:none;dominant-baseline:text-before-edge;text-anchor:start\" x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
            font_family, font_size, rgb & 0xffffff, position.0, position.1, text));
    }
}

///
/// Escapes the characters that have a special meaning in XML text
///
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c   => escaped.push(c),
        }
    }

    escaped
}

#[cfg(feature="render_png")]
mod render_png {
    use super::super::rgb_frame::*;

    use std::io;
    use std::io::{Write, BufWriter};

    ///
    /// Writes frames as PNG images to a stream
    ///
    pub struct PngFrameWriter<TStream>
    where
        TStream: Write,
    {
        writer: png::Writer<BufWriter<TStream>>,
        width:  usize,
        height: usize,
    }

    impl<TStream> PngFrameWriter<TStream>
    where
        TStream: Write,
    {
        ///
        /// Creates a PNG writer that will write to a stream
        ///
        pub fn from_stream(target: TStream, width: usize, height: usize, gamma: f64) -> Result<Self, png::EncodingError> {
            Self::from_bufwriter(BufWriter::new(target), width, height, gamma)
        }

        ///
        /// Creates a PNG writer that will write to a bufwriter
        ///
        pub fn from_bufwriter(target: BufWriter<TStream>, width: usize, height: usize, gamma: f64) -> Result<Self, png::EncodingError> {
            let mut target = png::Encoder::new(target, width as u32, height as u32);

            target.set_color(png::ColorType::Rgba);
            target.set_depth(png::BitDepth::Eight);
            target.set_source_gamma(png::ScaledFloat::new((1.0/gamma) as _));

            Ok(PngFrameWriter {
                writer: target.write_header()?,
                width:  width,
                height: height,
            })
        }

        ///
        /// Writes the contents of a frame as the image data (the frame must be the same size as this writer)
        ///
        pub fn write_frame(&mut self, frame: &RgbFrame) -> Result<(), png::EncodingError> {
            if frame.width != self.width || frame.height != self.height {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, "frame size does not match the PNG size").into());
            }

            let pixel_data = frame.to_rgba_bytes();
            self.writer.write_image_data(&pixel_data)
        }
    }

    ///
    /// Encodes a frame as a PNG file in memory
    ///
    pub fn frame_to_png(frame: &RgbFrame, gamma: f64) -> Result<Vec<u8>, png::EncodingError> {
        let mut png_data: Vec<u8> = vec![];

        {
            let mut png_writer = PngFrameWriter::from_stream(&mut png_data, frame.width, frame.height, gamma)?;
            png_writer.write_frame(frame)?;
        }

        Ok(png_data)
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;

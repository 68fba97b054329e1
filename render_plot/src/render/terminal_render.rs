#[cfg(feature="render_term")]
mod term_render {
    use super::super::png_render::*;
    use super::super::rgb_frame::*;

    use std::io::{Write};

    ///
    /// Writes the escape sequence that displays a frame inline in a terminal
    ///
    /// (This only supports the iTerm escape sequence)
    ///
    pub fn write_frame_to_terminal<TStream>(target: &mut TStream, frame: &RgbFrame) -> Result<(), png::EncodingError>
    where
        TStream: Write,
    {
        use base64::engine::{Engine};
        use base64::engine::general_purpose;

        // Render as PNG data
        let png_data = frame_to_png(frame, 2.2)?;

        // Convert to base64 and write out the iterm escape sequence
        let base64 = general_purpose::STANDARD_NO_PAD.encode(&png_data);
        write!(target, "\x1b]1337;File=inline=1:{}\x07", base64)?;

        Ok(())
    }

    ///
    /// Displays a frame inline on stdout
    ///
    pub fn show_frame_in_terminal(frame: &RgbFrame) -> Result<(), png::EncodingError> {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();

        write_frame_to_terminal(&mut stdout, frame)?;
        stdout.flush()?;

        Ok(())
    }
}

#[cfg(feature="render_term")]
pub use term_render::*;

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, DynamicImage, ImageError,
};

use crate::progress;
use crate::render::{self, Frame, SequenceBounds};

#[derive(Debug)]
pub enum AnimationError {
    Io(std::io::Error),
    Image(ImageError),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::Io(e) => write!(f, "IO error: {}", e),
            AnimationError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for AnimationError {}

impl From<std::io::Error> for AnimationError {
    fn from(e: std::io::Error) -> Self {
        AnimationError::Io(e)
    }
}

impl From<ImageError> for AnimationError {
    fn from(e: ImageError) -> Self {
        AnimationError::Image(e)
    }
}

/// Milliseconds each layout frame stays on screen.
const FRAME_DELAY_MS: u32 = 100;

/// Encodes the frame sequence as a looping animated GIF at `path`. All
/// frames are rasterized against shared bounds so the animation does not
/// jitter.
pub fn write_gif<P: AsRef<Path>>(
    frames: &[Frame],
    path: P,
    img_width: u32,
    img_height: u32,
) -> Result<(), AnimationError> {
    let bounds = SequenceBounds::of(frames);
    let pb = progress::count_progress_bar("[animate]", "frames", frames.len() as u64);

    let mut gif_data = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut gif_data);
        encoder.set_repeat(Repeat::Infinite)?;

        for frame in frames {
            let img = render::rasterize(frame, bounds, img_width, img_height);
            let rgba = DynamicImage::ImageRgb8(img).to_rgba8();
            let gif_frame =
                image::Frame::from_parts(rgba, 0, 0, Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1));
            encoder.encode_frame(gif_frame)?;
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    let mut file = File::create(path)?;
    file.write_all(&gif_data)?;

    Ok(())
}

/// Writes a single frame as a still image; the format is inferred from the
/// file extension.
pub fn write_image<P: AsRef<Path>>(
    frame: &Frame,
    path: P,
    img_width: u32,
    img_height: u32,
) -> Result<(), AnimationError> {
    let bounds = SequenceBounds::of(std::slice::from_ref(frame));
    let img = render::rasterize(frame, bounds, img_width, img_height);
    img.save(path)?;
    Ok(())
}

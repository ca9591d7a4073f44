//! Conversions between [`Frame`] and the `image` crate, plus file helpers.
//!
//! The `image` dependency stays at this facade boundary; the inner crates
//! only ever see the lightweight [`Frame`] type.

use std::path::Path;

use image::{ImageReader, RgbImage};

use marker_follow_core::{Frame, FrameError};

/// Errors from frame file I/O and buffer conversion.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("frame dimensions exceed the image crate's limits (width={width}, height={height})")]
    Oversized { width: usize, height: usize },
}

/// Copy an `image::RgbImage` into a [`Frame`].
pub fn frame_from_image(img: &RgbImage) -> Result<Frame, IoError> {
    Ok(Frame::from_raw(
        img.width() as usize,
        img.height() as usize,
        img.as_raw().clone(),
    )?)
}

/// Copy a [`Frame`] into an `image::RgbImage`.
pub fn frame_to_image(frame: &Frame) -> Result<RgbImage, IoError> {
    let width = u32::try_from(frame.width());
    let height = u32::try_from(frame.height());
    let Some((width, height)) = width.ok().zip(height.ok()) else {
        return Err(IoError::Oversized {
            width: frame.width(),
            height: frame.height(),
        });
    };
    RgbImage::from_raw(width, height, frame.as_raw().to_vec()).ok_or(IoError::Oversized {
        width: frame.width(),
        height: frame.height(),
    })
}

/// Load a raster image from disk as an RGB frame.
pub fn load_frame(path: impl AsRef<Path>) -> Result<Frame, IoError> {
    let img = ImageReader::open(path)?.decode()?.to_rgb8();
    frame_from_image(&img)
}

/// Write a frame to disk; the format follows the file extension.
pub fn save_frame(path: impl AsRef<Path>, frame: &Frame) -> Result<(), IoError> {
    let img = frame_to_image(frame)?;
    Ok(img.save(path)?)
}

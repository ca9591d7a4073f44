use thiserror::Error;

/// One RGB pixel, 8 bits per channel.
pub type Rgb = [u8; 3];

const CHANNELS: usize = 3;

/// Errors produced when constructing a [`Frame`] from raw data.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("invalid RGB buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },

    #[error("invalid frame dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// Borrowed read-only view of a frame.
///
/// Detectors consume views so the type system guarantees they never mutate
/// the frame the overlay is about to draw on.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major RGB, len = 3*w*h
}

/// Owned RGB raster frame.
///
/// Frames are ephemeral: the overlay loop copies, annotates and presents
/// them one at a time, and nothing downstream holds on to a frame beyond
/// the next acquisition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame filled with a single color.
    ///
    /// Panics if the byte size overflows `usize`; [`Frame::from_raw`]
    /// reports the same condition as [`FrameError::InvalidDimensions`].
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS));
        let Some(bytes) = bytes else {
            panic!("frame dimensions overflow (width={width}, height={height})");
        };
        let mut data = Vec::with_capacity(bytes);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a frame from a raw row-major RGB buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        let Some(expected) = width.checked_mul(height).and_then(|n| n.checked_mul(CHANNELS))
        else {
            return Err(FrameError::InvalidDimensions { width, height });
        };
        if data.len() != expected {
            return Err(FrameError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read-only view for detectors and samplers.
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        let idx = self.index(x, y)?;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Write a pixel, ignoring coordinates outside the frame.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + CHANNELS].copy_from_slice(&color);
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width + x as usize) * CHANNELS)
    }
}

//! Camera frame acquisition.
//!
//! The capture loop owns its frame source exclusively between `start()` and
//! `stop()`. The [`FrameSource`] trait is the seam between the loop and the
//! actual device: real backends implement it over whatever capture API the
//! platform provides, and [`TestPatternSource`] is the built-in synthetic
//! source used by the demo binary and tests.

mod frame;
mod pattern;

pub use frame::{encode_jpeg_data_uri, Frame, DEFAULT_JPEG_QUALITY};
pub use pattern::TestPatternSource;

use thiserror::Error;

/// Errors from frame acquisition and encoding.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Device missing, busy, or the user denied access.
    #[error("camera unavailable: {0}")]
    Unavailable(String),

    /// `grab()` called on a source that is not open.
    #[error("frame source is not open")]
    NotOpen,

    #[error("frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for camera operations.
pub type CameraResult<T> = Result<T, CameraError>;

/// A source of video frames, exclusively owned by its capture session.
pub trait FrameSource: Send {
    /// Acquire the device. Failure here is the user-correctable
    /// permission/device error; the session stays idle and does not retry.
    fn open(&mut self) -> CameraResult<()>;

    /// Grab the current frame.
    ///
    /// A source that is warming up returns a zero-width [`Frame`]; the
    /// capture loop skips that tick entirely.
    fn grab(&mut self) -> CameraResult<Frame>;

    /// Release the device. Must be idempotent.
    fn close(&mut self);

    fn is_open(&self) -> bool;
}

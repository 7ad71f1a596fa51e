//! Frame buffer and JPEG data-URI encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use super::CameraResult;

/// JPEG quality used for frame submission (the backend contract's 0.7).
pub const DEFAULT_JPEG_QUALITY: u8 = 70;

/// One captured video frame, RGB8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Packed RGB pixel data, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The "not yet producing frames" sentinel: zero-width, no pixels.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// True while the source is warming up and has no pixels to offer.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }
}

/// Compress a frame to JPEG and wrap it as a `data:image/jpeg;base64,` URI,
/// the shape the inference backend expects in its `frame` field.
pub fn encode_jpeg_data_uri(frame: &Frame, quality: u8) -> CameraResult<String> {
    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, quality);
    encoder.encode(
        &frame.pixels,
        frame.width,
        frame.height,
        ExtendedColorType::Rgb8,
    )?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32) -> Frame {
        Frame::new(width, height, vec![128; (width * height * 3) as usize])
    }

    #[test]
    fn empty_frame_is_empty() {
        assert!(Frame::empty().is_empty());
        assert!(!solid_frame(4, 4).is_empty());
    }

    #[test]
    fn encodes_to_data_uri() {
        let uri = encode_jpeg_data_uri(&solid_frame(8, 8), DEFAULT_JPEG_QUALITY).unwrap();

        assert!(uri.starts_with("data:image/jpeg;base64,"));
        // JPEG magic bytes survive the round trip.
        let body = uri.trim_start_matches("data:image/jpeg;base64,");
        let bytes = STANDARD.decode(body).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}

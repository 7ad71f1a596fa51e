//! Synthetic frame source.

use super::{CameraError, CameraResult, Frame, FrameSource};

/// A frame source that renders a moving gradient.
///
/// Used by the demo binary when no real capture backend is wired up, and as
/// the test double for the capture loop. The first `warmup_grabs` grabs
/// return zero-width frames, mimicking a device that has been opened but is
/// not yet delivering pixels.
#[derive(Debug)]
pub struct TestPatternSource {
    width: u32,
    height: u32,
    warmup_grabs: u32,
    grabs: u64,
    open: bool,
}

impl TestPatternSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            warmup_grabs: 0,
            grabs: 0,
            open: false,
        }
    }

    /// Number of initial grabs that return an empty frame.
    pub fn with_warmup(mut self, warmup_grabs: u32) -> Self {
        self.warmup_grabs = warmup_grabs;
        self
    }
}

impl FrameSource for TestPatternSource {
    fn open(&mut self) -> CameraResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::Unavailable(
                "pattern source needs a non-zero resolution".to_string(),
            ));
        }
        self.open = true;
        Ok(())
    }

    fn grab(&mut self) -> CameraResult<Frame> {
        if !self.open {
            return Err(CameraError::NotOpen);
        }

        let grab = self.grabs;
        self.grabs += 1;

        if grab < u64::from(self.warmup_grabs) {
            return Ok(Frame::empty());
        }

        let mut pixels = Vec::with_capacity((self.width * self.height * 3) as usize);
        let shift = (grab % 256) as u32;
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(((x + shift) % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((x + y + shift) % 256) as u8);
            }
        }

        Ok(Frame::new(self.width, self.height, pixels))
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_requires_open() {
        let mut source = TestPatternSource::new(4, 4);
        assert!(matches!(source.grab(), Err(CameraError::NotOpen)));
    }

    #[test]
    fn warmup_grabs_are_empty() {
        let mut source = TestPatternSource::new(4, 4).with_warmup(2);
        source.open().unwrap();

        assert!(source.grab().unwrap().is_empty());
        assert!(source.grab().unwrap().is_empty());
        let frame = source.grab().unwrap();
        assert!(!frame.is_empty());
        assert_eq!(frame.pixels.len(), 4 * 4 * 3);
    }

    #[test]
    fn close_is_idempotent() {
        let mut source = TestPatternSource::new(4, 4);
        source.open().unwrap();
        source.close();
        source.close();
        assert!(!source.is_open());
    }

    #[test]
    fn zero_resolution_fails_open() {
        let mut source = TestPatternSource::new(0, 480);
        assert!(source.open().is_err());
        assert!(!source.is_open());
    }
}

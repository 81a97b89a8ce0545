//! Video frame type

use crate::DetectorError;

/// Decoded grayscale video frame handed to a [`crate::FaceDetector`].
///
/// One byte per pixel; capture hardware and pixel-format conversion live
/// outside this workspace.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Grayscale pixel data (width * height)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
    /// Capture timestamp (nanoseconds)
    pub timestamp_ns: u64,
    /// Frame sequence number
    pub sequence: u32,
}

impl VideoFrame {
    /// Create a frame, checking that the buffer matches the dimensions.
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        timestamp_ns: u64,
        sequence: u32,
    ) -> Result<Self, DetectorError> {
        if data.len() != (width as usize) * (height as usize) {
            return Err(DetectorError::MalformedFrame {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            timestamp_ns,
            sequence,
        })
    }

    /// Solid-gray frame, used by the scripted source.
    pub fn blank(width: u32, height: u32, sequence: u32) -> Self {
        Self {
            data: vec![0x80; (width as usize) * (height as usize)],
            width,
            height,
            timestamp_ns: 0,
            sequence,
        }
    }

    /// Get pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = VideoFrame::new(vec![0; 10], 4, 4, 0, 0).unwrap_err();
        assert!(matches!(err, DetectorError::MalformedFrame { len: 10, .. }));
    }

    #[test]
    fn pixel_access_is_bounds_checked() {
        let frame = VideoFrame::blank(4, 2, 0);
        assert!(frame.pixel(3, 1).is_some());
        assert!(frame.pixel(4, 0).is_none());
        assert!(frame.pixel(0, 2).is_none());
    }
}

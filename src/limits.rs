use crate::error::BlitError;

/// Resource limits applied to an image header before blitting.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum payload length in bytes, header excluded.
    pub max_payload_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BlitError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(BlitError::LimitExceeded {
                    what: "width",
                    value: u64::from(width),
                    limit: max_w,
                });
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(BlitError::LimitExceeded {
                    what: "height",
                    value: u64::from(height),
                    limit: max_h,
                });
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(BlitError::LimitExceeded {
                    what: "pixel count",
                    value: pixels,
                    limit: max_px,
                });
            }
        }
        Ok(())
    }

    /// Check a declared payload size against the payload limit.
    pub(crate) fn check_payload(&self, bytes: usize) -> Result<(), BlitError> {
        if let Some(max_bytes) = self.max_payload_bytes {
            if bytes as u64 > max_bytes {
                return Err(BlitError::LimitExceeded {
                    what: "payload bytes",
                    value: bytes as u64,
                    limit: max_bytes,
                });
            }
        }
        Ok(())
    }
}

use crate::error::BlitError;

/// Length of the fixed container header, in bytes.
pub const HEADER_LEN: usize = 22;

/// Container format, discriminated by the header magic.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// 1 bit per pixel, row-major, MSB-first rows.
    Mono1,
    /// 2 bits per pixel as two column-major bitplanes.
    Gray2,
}

impl ImageFormat {
    /// Header magic for this format (ASCII tag read as little-endian u32).
    pub const fn magic(self) -> u32 {
        match self {
            Self::Mono1 => u32::from_le_bytes(*b"EBM1"),
            Self::Gray2 => u32::from_le_bytes(*b"EBG2"),
        }
    }

    /// Detect format from a magic value.
    pub fn from_magic(magic: u32) -> Option<Self> {
        [Self::Mono1, Self::Gray2]
            .into_iter()
            .find(|f| f.magic() == magic)
    }

    /// Bits per pixel, which is also the display depth the format requires.
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Mono1 => 1,
            Self::Gray2 => 2,
        }
    }

    /// Payload length for an image of the given size, or `None` on overflow.
    pub fn payload_size(self, width: u32, height: u32) -> Option<usize> {
        let (w, h) = (width as usize, height as usize);
        match self {
            Self::Mono1 => w.div_ceil(8).checked_mul(h),
            Self::Gray2 => h
                .div_ceil(8)
                .checked_mul(w)
                .and_then(|plane| plane.checked_mul(2)),
        }
    }
}

/// Parsed container header.
///
/// Identical field layout for both formats; only the magic differs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    pub format: ImageFormat,
    pub width: u16,
    pub height: u16,
    pub color_mode: u8,
    pub compression: u8,
    /// Declared payload length, header excluded.
    pub data_size: u32,
    /// Leading bytes of the producer's checksum. Carried, never verified.
    pub checksum_prefix: [u8; 8],
}

impl ImageHeader {
    /// Parse the header of `data`, requiring the magic of `format`.
    ///
    /// Returns the header and everything after it. Color mode and
    /// compression are not checked here; see [`ImageHeader::check_supported`].
    pub fn parse(data: &[u8], format: ImageFormat) -> Result<(Self, &[u8]), BlitError> {
        let (header, payload) = Self::parse_any(data)?;
        if header.format != format {
            return Err(BlitError::MalformedHeader("magic does not match format"));
        }
        Ok((header, payload))
    }

    /// Parse the header of `data`, accepting either format's magic.
    pub fn parse_any(data: &[u8]) -> Result<(Self, &[u8]), BlitError> {
        let Some((head, payload)) = data.split_first_chunk::<HEADER_LEN>() else {
            return Err(BlitError::MalformedHeader("shorter than header"));
        };
        let magic = u32::from_le_bytes([head[0], head[1], head[2], head[3]]);
        let format = ImageFormat::from_magic(magic)
            .ok_or(BlitError::MalformedHeader("unrecognized magic"))?;
        let mut checksum_prefix = [0u8; 8];
        checksum_prefix.copy_from_slice(&head[14..22]);
        let header = Self {
            format,
            width: u16::from_le_bytes([head[4], head[5]]),
            height: u16::from_le_bytes([head[6], head[7]]),
            color_mode: head[8],
            compression: head[9],
            data_size: u32::from_le_bytes([head[10], head[11], head[12], head[13]]),
            checksum_prefix,
        };
        Ok((header, payload))
    }

    /// Reject color modes and compression schemes other than 0.
    pub fn check_supported(&self) -> Result<(), BlitError> {
        if self.color_mode != 0 || self.compression != 0 {
            return Err(BlitError::UnsupportedFormat {
                color_mode: self.color_mode,
                compression: self.compression,
            });
        }
        Ok(())
    }

    /// Serialize back to the 22-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&self.format.magic().to_le_bytes());
        out[4..6].copy_from_slice(&self.width.to_le_bytes());
        out[6..8].copy_from_slice(&self.height.to_le_bytes());
        out[8] = self.color_mode;
        out[9] = self.compression;
        out[10..14].copy_from_slice(&self.data_size.to_le_bytes());
        out[14..22].copy_from_slice(&self.checksum_prefix);
        out
    }
}

/// Image metadata obtained by probing the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub data_size: u32,
    pub checksum_prefix: [u8; 8],
}

impl ImageInfo {
    /// Probe image dimensions and format without touching the payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BlitError> {
        let (header, _) = ImageHeader::parse_any(data)?;
        Ok(Self {
            width: u32::from(header.width),
            height: u32::from(header.height),
            format: header.format,
            data_size: header.data_size,
            checksum_prefix: header.checksum_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(magic: &[u8; 4], w: u16, h: u16, size: u32) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(magic);
        out[4..6].copy_from_slice(&w.to_le_bytes());
        out[6..8].copy_from_slice(&h.to_le_bytes());
        out[10..14].copy_from_slice(&size.to_le_bytes());
        out[14..22].copy_from_slice(b"abcdefgh");
        out
    }

    #[test]
    fn parse_mono_header() {
        let bytes = header_bytes(b"EBM1", 10, 3, 6);
        let (header, payload) = ImageHeader::parse(&bytes, ImageFormat::Mono1).unwrap();
        assert_eq!(header.width, 10);
        assert_eq!(header.height, 3);
        assert_eq!(header.data_size, 6);
        assert_eq!(&header.checksum_prefix, b"abcdefgh");
        assert!(payload.is_empty());
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn wrong_magic_is_malformed() {
        let bytes = header_bytes(b"EBG2", 4, 4, 8);
        assert!(matches!(
            ImageHeader::parse(&bytes, ImageFormat::Mono1),
            Err(BlitError::MalformedHeader(_))
        ));
        let bytes = header_bytes(b"NOPE", 4, 4, 8);
        assert!(matches!(
            ImageInfo::from_bytes(&bytes),
            Err(BlitError::MalformedHeader(_))
        ));
    }

    #[test]
    fn short_buffer_is_malformed() {
        let bytes = header_bytes(b"EBM1", 4, 4, 4);
        assert!(matches!(
            ImageHeader::parse(&bytes[..HEADER_LEN - 1], ImageFormat::Mono1),
            Err(BlitError::MalformedHeader(_))
        ));
    }

    #[test]
    fn unsupported_modes() {
        let mut bytes = header_bytes(b"EBM1", 4, 4, 4);
        bytes[9] = 1;
        let (header, _) = ImageHeader::parse_any(&bytes).unwrap();
        assert_eq!(
            header.check_supported(),
            Err(BlitError::UnsupportedFormat {
                color_mode: 0,
                compression: 1
            })
        );
    }

    #[test]
    fn payload_sizes() {
        assert_eq!(ImageFormat::Mono1.payload_size(10, 3), Some(6));
        assert_eq!(ImageFormat::Mono1.payload_size(8, 8), Some(8));
        assert_eq!(ImageFormat::Gray2.payload_size(3, 10), Some(12));
        assert_eq!(ImageFormat::Gray2.payload_size(4, 8), Some(8));
    }
}

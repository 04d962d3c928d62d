//! Container writer for fixtures and tooling.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BlitError;
use crate::info::{HEADER_LEN, ImageFormat, ImageHeader};

fn check_input(pixels: &[u8], width: u32, height: u32) -> Result<(u16, u16, usize), BlitError> {
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(BlitError::InvalidDimensions {
            width,
            height,
            reason: "dimensions exceed 65535",
        });
    };
    if w == 0 || h == 0 {
        return Err(BlitError::InvalidDimensions {
            width,
            height,
            reason: "image has zero width or height",
        });
    }
    let count = usize::from(w) * usize::from(h);
    if pixels.len() < count {
        return Err(BlitError::TruncatedBuffer {
            needed: count,
            actual: pixels.len(),
        });
    }
    Ok((w, h, count))
}

fn container(format: ImageFormat, w: u16, h: u16) -> Result<(Vec<u8>, usize), BlitError> {
    let size = format
        .payload_size(u32::from(w), u32::from(h))
        .ok_or(BlitError::InvalidDimensions {
            width: u32::from(w),
            height: u32::from(h),
            reason: "payload size overflows",
        })?;
    let data_size = u32::try_from(size).map_err(|_| BlitError::InvalidDimensions {
        width: u32::from(w),
        height: u32::from(h),
        reason: "payload larger than 4 GiB",
    })?;
    let header = ImageHeader {
        format,
        width: w,
        height: h,
        color_mode: 0,
        compression: 0,
        data_size,
        checksum_prefix: [0; 8],
    };
    let mut out = vec![0u8; HEADER_LEN + size];
    out[..HEADER_LEN].copy_from_slice(&header.to_bytes());
    Ok((out, size))
}

/// Encode a 1bpp container from one byte per pixel, row-major.
///
/// Non-zero input bytes become set bits.
pub fn encode_1bpp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BlitError> {
    let (w, h, count) = check_input(pixels, width, height)?;
    let (mut out, _) = container(ImageFormat::Mono1, w, h)?;
    let w = usize::from(w);
    let pitch = w.div_ceil(8);
    let payload = &mut out[HEADER_LEN..];
    for (y, row) in pixels[..count].chunks_exact(w).enumerate() {
        let dst = &mut payload[y * pitch..(y + 1) * pitch];
        for (x, &p) in row.iter().enumerate() {
            if p != 0 {
                dst[x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    Ok(out)
}

/// Encode a 2bpp container from one source level (0 = white ..= 3 = black)
/// per pixel, row-major.
pub fn encode_2bpp(levels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BlitError> {
    let (w, h, count) = check_input(levels, width, height)?;
    if levels[..count].iter().any(|&v| v > 3) {
        return Err(BlitError::InvalidArgument("gray level above 3"));
    }
    let (mut out, size) = container(ImageFormat::Gray2, w, h)?;
    let w = usize::from(w);
    let pitch = usize::from(h).div_ceil(8);
    let (plane1, plane2) = out[HEADER_LEN..].split_at_mut(size / 2);
    for (y, row) in levels[..count].chunks_exact(w).enumerate() {
        let bit = 0x80u8 >> (y % 8);
        for (x, &v) in row.iter().enumerate() {
            let at = x * pitch + y / 8;
            if v & 2 != 0 {
                plane1[at] |= bit;
            }
            if v & 1 != 0 {
                plane2[at] |= bit;
            }
        }
    }
    Ok(out)
}

//! 2bpp container payload: two column-major bitplanes.
//!
//! Each plane stores, per column, `ceil(height / 8)` bytes of eight
//! vertically consecutive pixels (MSB = topmost). Plane 1 carries the high
//! bit of each source level, plane 2 the low bit.

pub(crate) mod lut;
mod rotate;

use crate::display::{NativeBuffer, Rotation};

/// Borrowed pair of bitplanes.
pub(crate) struct GrayImage<'a> {
    pub plane1: &'a [u8],
    pub plane2: &'a [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> GrayImage<'a> {
    /// `payload` must be exactly two planes long.
    pub(crate) fn new(payload: &'a [u8], width: usize, height: usize) -> Self {
        let (plane1, plane2) = payload.split_at(payload.len() / 2);
        Self {
            plane1,
            plane2,
            width,
            height,
        }
    }

    /// Bytes per column of one plane.
    pub(crate) fn pitch(&self) -> usize {
        self.height.div_ceil(8)
    }
}

/// Blit the `copy_w` × `copy_h` top-left region of `img` into `dst`.
pub(crate) fn blit(
    img: &GrayImage<'_>,
    dst: &mut NativeBuffer<'_>,
    rotation: Rotation,
    copy_w: usize,
    copy_h: usize,
) {
    debug_assert!(copy_w <= img.width && copy_h <= img.height);
    match rotation {
        Rotation::Deg0 => rotate::rotate0(img, dst, copy_w, copy_h),
        Rotation::Deg90 => rotate::rotate90(img, dst, copy_w, copy_h),
        Rotation::Deg180 => rotate::rotate180(img, dst, copy_w, copy_h),
        Rotation::Deg270 => rotate::rotate270(img, dst, copy_w, copy_h),
    }
}

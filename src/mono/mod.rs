//! 1bpp container payload: packed rows, MSB-first, pitch `ceil(width / 8)`.

mod rotate;

use crate::display::{NativeBuffer, Rotation};

/// Borrowed 1bpp bitmap.
pub(crate) struct MonoImage<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> MonoImage<'a> {
    /// `data` must be exactly `pitch * height` bytes.
    pub(crate) fn new(data: &'a [u8], width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    pub(crate) fn pitch(&self) -> usize {
        self.width.div_ceil(8)
    }
}

/// Blit the `copy_w` × `copy_h` top-left region of `img` into `dst`.
pub(crate) fn blit(
    img: &MonoImage<'_>,
    dst: &mut NativeBuffer<'_>,
    rotation: Rotation,
    copy_w: usize,
    copy_h: usize,
) {
    debug_assert!(copy_w <= img.width && copy_h <= img.height);
    let pitch = img.pitch();
    match rotation {
        Rotation::Deg0 if img.width == dst.native_w && img.height == dst.native_h => {
            rotate::fullscreen(img.data, dst)
        }
        Rotation::Deg0 => rotate::rotate0(img.data, pitch, dst, copy_w, copy_h),
        Rotation::Deg90 => rotate::rotate90(img.data, pitch, dst, copy_w, copy_h),
        Rotation::Deg180 => rotate::rotate180(img.data, pitch, dst, copy_w, copy_h),
        Rotation::Deg270 => rotate::rotate270(img.data, pitch, dst, copy_w, copy_h),
    }
}

//! Display-driver collaborator and framebuffer geometry.
//!
//! The driver owns the native framebuffer and the refresh hardware; the
//! blitter only borrows the buffer for the duration of one call.

use crate::error::BlitError;

/// Display driver the blitter draws into.
///
/// `width`/`height` are logical (after rotation). The framebuffer is the
/// native, unrotated buffer read by the panel controller.
pub trait Display {
    /// Current native pixel depth in bits (1 or 2).
    fn depth(&self) -> u8;
    /// Current rotation in degrees.
    fn rotation(&self) -> u16;
    /// Logical width in pixels.
    fn width(&self) -> u32;
    /// Logical height in pixels.
    fn height(&self) -> u32;
    /// Native framebuffer.
    fn framebuffer_mut(&mut self) -> &mut [u8];
    /// Full-quality refresh.
    fn full_update(&mut self);
    /// Fast (partial) refresh.
    fn fast_update(&mut self);
}

/// Display rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(degrees: u16) -> Result<Self, BlitError> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(BlitError::UnsupportedRotation(other)),
        }
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether logical width/height are swapped relative to the native buffer.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Map logical `(x, y)` to native `(px, py)` for a native buffer of
    /// `native_w` × `native_h` pixels.
    #[inline]
    pub const fn to_native(self, x: u32, y: u32, native_w: u32, native_h: u32) -> (u32, u32) {
        match self {
            Self::Deg0 => (x, y),
            Self::Deg90 => (native_w - 1 - y, x),
            Self::Deg180 => (native_w - 1 - x, native_h - 1 - y),
            Self::Deg270 => (y, native_h - 1 - x),
        }
    }
}

/// Native pixel depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depth {
    /// 1 bit per pixel, set bit = white.
    Mono,
    /// 2 bits per pixel, 0 = black .. 3 = white.
    Gray4,
}

impl Depth {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(Self::Mono),
            2 => Some(Self::Gray4),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Mono => 1,
            Self::Gray4 => 2,
        }
    }

    /// Bytes per native row of `native_w` pixels.
    pub const fn pitch(self, native_w: u32) -> usize {
        match self {
            Self::Mono => (native_w as usize).div_ceil(8),
            Self::Gray4 => native_w as usize / 4,
        }
    }
}

/// Framebuffer geometry for one (depth, rotation, logical size) state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub depth: Depth,
    pub rotation: Rotation,
    /// Logical width.
    pub width: u32,
    /// Logical height.
    pub height: u32,
}

impl Geometry {
    pub const fn new(depth: Depth, rotation: Rotation, width: u32, height: u32) -> Self {
        Self {
            depth,
            rotation,
            width,
            height,
        }
    }

    pub const fn native_width(&self) -> u32 {
        if self.rotation.swaps_axes() {
            self.height
        } else {
            self.width
        }
    }

    pub const fn native_height(&self) -> u32 {
        if self.rotation.swaps_axes() {
            self.width
        } else {
            self.height
        }
    }

    /// Bytes per native row.
    pub const fn pitch(&self) -> usize {
        self.depth.pitch(self.native_width())
    }

    /// Minimum framebuffer length in bytes, or `None` if it does not fit in
    /// `usize`.
    pub const fn buffer_len(&self) -> Option<usize> {
        checked_len(self.pitch(), self.native_height() as usize)
    }
}

#[inline]
const fn checked_len(pitch: usize, rows: usize) -> Option<usize> {
    pitch.checked_mul(rows)
}

/// Borrowed view of a native framebuffer, sized exactly to its geometry.
pub(crate) struct NativeBuffer<'a> {
    buf: &'a mut [u8],
    pub pitch: usize,
    pub native_w: usize,
    pub native_h: usize,
}

impl<'a> NativeBuffer<'a> {
    /// `None` if `buf` is shorter than `geo.buffer_len()` or the length
    /// overflows.
    pub(crate) fn new(buf: &'a mut [u8], geo: &Geometry) -> Option<Self> {
        let len = geo.buffer_len()?;
        Some(Self {
            buf: buf.get_mut(..len)?,
            pitch: geo.pitch(),
            native_w: geo.native_width() as usize,
            native_h: geo.native_height() as usize,
        })
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.pitch;
        &mut self.buf[start..start + self.pitch]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.buf
    }

    /// White is all-ones at both depths.
    pub(crate) fn fill_white(&mut self) {
        self.buf.fill(0xFF);
    }
}

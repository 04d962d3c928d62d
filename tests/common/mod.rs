//! Shared fixtures: an in-memory display, pattern generators and a
//! per-pixel reference blitter.

#![allow(dead_code)]

use inkblit::{Display, Rotation};

/// Display double that records refresh requests.
pub struct MemDisplay {
    pub depth: u8,
    pub rotation: u16,
    pub width: u32,
    pub height: u32,
    pub fb: Vec<u8>,
    pub full_updates: usize,
    pub fast_updates: usize,
}

impl MemDisplay {
    /// Framebuffer sized for the native layout, filled with `fill`.
    pub fn new(depth: u8, rotation: u16, width: u32, height: u32, fill: u8) -> Self {
        let (nw, nh) = native_size(rotation, width, height);
        let pitch = native_pitch(depth, nw);
        Self {
            depth,
            rotation,
            width,
            height,
            fb: vec![fill; pitch * nh as usize],
            full_updates: 0,
            fast_updates: 0,
        }
    }

    pub fn updates(&self) -> usize {
        self.full_updates + self.fast_updates
    }

    /// Native pixel value at native coordinates.
    pub fn native_pixel(&self, px: u32, py: u32) -> u8 {
        let (nw, _) = native_size(self.rotation, self.width, self.height);
        read_native(&self.fb, self.depth, nw, px, py)
    }

    /// Native pixel value at logical coordinates.
    pub fn logical_pixel(&self, x: u32, y: u32) -> u8 {
        let (nw, nh) = native_size(self.rotation, self.width, self.height);
        let rotation = Rotation::from_degrees(self.rotation).unwrap();
        let (px, py) = rotation.to_native(x, y, nw, nh);
        self.native_pixel(px, py)
    }
}

impl Display for MemDisplay {
    fn depth(&self) -> u8 {
        self.depth
    }
    fn rotation(&self) -> u16 {
        self.rotation
    }
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn framebuffer_mut(&mut self) -> &mut [u8] {
        &mut self.fb
    }
    fn full_update(&mut self) {
        self.full_updates += 1;
    }
    fn fast_update(&mut self) {
        self.fast_updates += 1;
    }
}

pub fn native_size(rotation: u16, width: u32, height: u32) -> (u32, u32) {
    if rotation == 90 || rotation == 270 {
        (height, width)
    } else {
        (width, height)
    }
}

pub fn native_pitch(depth: u8, native_w: u32) -> usize {
    if depth == 2 {
        (native_w as usize).div_ceil(4)
    } else {
        (native_w as usize).div_ceil(8)
    }
}

pub fn read_native(fb: &[u8], depth: u8, native_w: u32, px: u32, py: u32) -> u8 {
    let pitch = native_pitch(depth, native_w);
    let (px, py) = (px as usize, py as usize);
    if depth == 2 {
        (fb[py * pitch + px / 4] >> (6 - 2 * (px % 4))) & 3
    } else {
        (fb[py * pitch + px / 8] >> (7 - px % 8)) & 1
    }
}

pub fn write_native(fb: &mut [u8], depth: u8, native_w: u32, px: u32, py: u32, value: u8) {
    let pitch = native_pitch(depth, native_w);
    let (px, py) = (px as usize, py as usize);
    if depth == 2 {
        let shift = 6 - 2 * (px % 4);
        let byte = &mut fb[py * pitch + px / 4];
        *byte = (*byte & !(3 << shift)) | ((value & 3) << shift);
    } else {
        let shift = 7 - px % 8;
        let byte = &mut fb[py * pitch + px / 8];
        *byte = (*byte & !(1 << shift)) | ((value & 1) << shift);
    }
}

/// Per-pixel model of a blit with a caller-chosen clear decision.
///
/// `pixels` holds one byte per source pixel: the bit value for 1bpp,
/// the source level for 2bpp.
pub fn reference_blit(display: &MemDisplay, pixels: &[u8], w: u32, h: u32, clear: bool) -> Vec<u8> {
    let mut fb = display.fb.clone();
    if clear {
        fb.fill(0xFF);
    }
    let (nw, nh) = native_size(display.rotation, display.width, display.height);
    let rotation = Rotation::from_degrees(display.rotation).unwrap();
    let copy_w = w.min(display.width);
    let copy_h = h.min(display.height);
    for y in 0..copy_h {
        for x in 0..copy_w {
            let v = pixels[(y * w + x) as usize];
            let native = if display.depth == 2 { 3 - v } else { v };
            let (px, py) = rotation.to_native(x, y, nw, nh);
            write_native(&mut fb, display.depth, nw, px, py, native);
        }
    }
    // Fullscreen 1bpp at 0° forces row padding to white.
    let fullscreen = display.depth == 1
        && display.rotation == 0
        && w == display.width
        && h == display.height;
    if fullscreen && nw % 8 != 0 {
        let pitch = native_pitch(1, nw);
        for row in fb.chunks_exact_mut(pitch) {
            row[pitch - 1] |= 0xFF >> (nw % 8);
        }
    }
    fb
}

/// Xorshift byte stream.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as u8
        })
        .collect()
}

/// One bit value per pixel.
pub fn mono_pixels(w: u32, h: u32, seed: u32) -> Vec<u8> {
    noise((w * h) as usize, seed).into_iter().map(|b| b & 1).collect()
}

/// One source level (0..=3) per pixel.
pub fn gray_levels(w: u32, h: u32, seed: u32) -> Vec<u8> {
    noise((w * h) as usize, seed).into_iter().map(|b| b & 3).collect()
}

pub fn checkerboard(w: u32, h: u32, levels: u8) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.push(((x + y) % u32::from(levels)) as u8);
        }
    }
    pixels
}

//! 1bpp converters, one per rotation.
//!
//! Source is row-major MSB-first with `src_pitch` bytes per row. Each
//! converter writes only the `copy_w` × `copy_h` logical region; every
//! other destination bit keeps its previous value.

use crate::bits::{merge, mono_mask, put_mono, transpose_block};
use crate::display::NativeBuffer;

/// Source matches the display exactly at 0°: bulk copy, then force the
/// padding bits past the last pixel of every row to white.
pub(super) fn fullscreen(src: &[u8], dst: &mut NativeBuffer<'_>) {
    let pitch = dst.pitch;
    let tail = (dst.native_w % 8) as u32;
    let bytes = dst.bytes_mut();
    let len = bytes.len();
    bytes.copy_from_slice(&src[..len]);
    if tail != 0 {
        let pad = !mono_mask(tail);
        for row in bytes.chunks_exact_mut(pitch) {
            row[pitch - 1] |= pad;
        }
    }
}

/// 0°: rows map straight across.
pub(super) fn rotate0(
    src: &[u8],
    src_pitch: usize,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let full = copy_w / 8;
    let tail = (copy_w % 8) as u32;
    for y in 0..copy_h {
        let s = &src[y * src_pitch..(y + 1) * src_pitch];
        let d = dst.row_mut(y);
        d[..full].copy_from_slice(&s[..full]);
        if tail != 0 {
            merge(&mut d[full], s[full], mono_mask(tail));
        }
    }
}

/// 180°: row `y` lands on native row `h-1-y`, pixel order reversed.
pub(super) fn rotate180(
    src: &[u8],
    src_pitch: usize,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let (nw, nh) = (dst.native_w, dst.native_h);
    let blocks = copy_w.div_ceil(8);
    for y in 0..copy_h {
        let s = &src[y * src_pitch..][..blocks];
        let d = dst.row_mut(nh - 1 - y);
        for (bx, &byte) in s.iter().enumerate() {
            let x0 = bx * 8;
            let n = (copy_w - x0).min(8);
            // Pixel x0+n-1 goes first, at native column nw-x0-n.
            let bits = byte.reverse_bits() << (8 - n);
            put_mono(d, nw - x0 - n, bits, n as u32);
        }
    }
}

/// Gather up to eight source rows of one byte column, zero-filling rows
/// past `rows`, and transpose so that entry `j` holds pixel column `j`
/// with the first row in the MSB.
#[inline]
fn gather_columns(src: &[u8], src_pitch: usize, y0: usize, rows: usize, bx: usize) -> [u8; 8] {
    let mut block = [0u8; 8];
    for (r, slot) in block.iter_mut().enumerate().take(rows) {
        *slot = src[(y0 + r) * src_pitch + bx];
    }
    transpose_block(block)
}

/// 90°: logical column `x` becomes native row `x`; logical row `y` lands
/// at native column `nw-1-y`.
pub(super) fn rotate90(
    src: &[u8],
    src_pitch: usize,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let nw = dst.native_w;
    for y0 in (0..copy_h).step_by(8) {
        let ny = (copy_h - y0).min(8);
        let px = nw - y0 - ny;
        for bx in 0..copy_w.div_ceil(8) {
            let nx = (copy_w - bx * 8).min(8);
            let cols = gather_columns(src, src_pitch, y0, ny, bx);
            for (j, &col) in cols.iter().enumerate().take(nx) {
                let bits = col.reverse_bits() << (8 - ny);
                put_mono(dst.row_mut(bx * 8 + j), px, bits, ny as u32);
            }
        }
    }
}

/// 270°: logical column `x` becomes native row `nh-1-x`; logical row `y`
/// lands at native column `y`.
pub(super) fn rotate270(
    src: &[u8],
    src_pitch: usize,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let nh = dst.native_h;
    for y0 in (0..copy_h).step_by(8) {
        let ny = (copy_h - y0).min(8);
        for bx in 0..copy_w.div_ceil(8) {
            let nx = (copy_w - bx * 8).min(8);
            let cols = gather_columns(src, src_pitch, y0, ny, bx);
            for (j, &col) in cols.iter().enumerate().take(nx) {
                put_mono(dst.row_mut(nh - 1 - (bx * 8 + j)), y0, col, ny as u32);
            }
        }
    }
}

//! 2bpp converters, one per rotation.
//!
//! The source planes are column-major, so 0° and 180° need an 8×8
//! transpose per block to reach native rows, while 90° and 270° feed plane
//! bytes straight through the merge table.

use super::GrayImage;
use super::lut::merge_planes;
use crate::bits::{gray_mask, merge, put_gray, transpose_block};
use crate::display::NativeBuffer;

/// Write `n` (1..=8) merged pixels at a byte-aligned position.
#[inline]
fn put_aligned(row: &mut [u8], idx: usize, word: u16, n: u32) {
    let [hi, lo] = word.to_be_bytes();
    merge(&mut row[idx], hi, gray_mask(n.min(4)));
    if n > 4 {
        merge(&mut row[idx + 1], lo, gray_mask(n - 4));
    }
}

/// Load byte-row `k` of columns `x0..x0+cols` from both planes and
/// transpose, so entry `r` of each result is pixel row `8k+r` with column
/// `x0` in the MSB.
#[inline]
fn gather_rows(img: &GrayImage<'_>, x0: usize, cols: usize, k: usize) -> ([u8; 8], [u8; 8]) {
    let pitch = img.pitch();
    let mut c1 = [0u8; 8];
    let mut c2 = [0u8; 8];
    for i in 0..cols {
        let at = (x0 + i) * pitch + k;
        c1[i] = img.plane1[at];
        c2[i] = img.plane2[at];
    }
    (transpose_block(c1), transpose_block(c2))
}

pub(super) fn rotate0(
    img: &GrayImage<'_>,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    for k in 0..copy_h.div_ceil(8) {
        let y0 = k * 8;
        let ny = (copy_h - y0).min(8);
        for x0 in (0..copy_w).step_by(8) {
            let nx = (copy_w - x0).min(8);
            let (r1, r2) = gather_rows(img, x0, nx, k);
            for r in 0..ny {
                let word = merge_planes(r1[r], r2[r]);
                put_aligned(dst.row_mut(y0 + r), x0 / 4, word, nx as u32);
            }
        }
    }
}

pub(super) fn rotate180(
    img: &GrayImage<'_>,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let (nw, nh) = (dst.native_w, dst.native_h);
    for k in 0..copy_h.div_ceil(8) {
        let y0 = k * 8;
        let ny = (copy_h - y0).min(8);
        for x0 in (0..copy_w).step_by(8) {
            let nx = (copy_w - x0).min(8);
            let (r1, r2) = gather_rows(img, x0, nx, k);
            // Column x0+nx-1 goes first, at native column nw-x0-nx.
            let shift = 8 - nx;
            for r in 0..ny {
                let a = r1[r].reverse_bits() << shift;
                let b = r2[r].reverse_bits() << shift;
                let row = dst.row_mut(nh - 1 - (y0 + r));
                put_gray(row, nw - x0 - nx, merge_planes(a, b), nx as u32);
            }
        }
    }
}

pub(super) fn rotate90(
    img: &GrayImage<'_>,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let nw = dst.native_w;
    let pitch = img.pitch();
    let groups = copy_h.div_ceil(8);
    for x in 0..copy_w {
        let c1 = &img.plane1[x * pitch..][..groups];
        let c2 = &img.plane2[x * pitch..][..groups];
        let row = dst.row_mut(x);
        for (k, (&a, &b)) in c1.iter().zip(c2).enumerate() {
            let ny = (copy_h - k * 8).min(8);
            let shift = 8 - ny;
            let a = a.reverse_bits() << shift;
            let b = b.reverse_bits() << shift;
            put_gray(row, nw - k * 8 - ny, merge_planes(a, b), ny as u32);
        }
    }
}

pub(super) fn rotate270(
    img: &GrayImage<'_>,
    dst: &mut NativeBuffer<'_>,
    copy_w: usize,
    copy_h: usize,
) {
    let nh = dst.native_h;
    let pitch = img.pitch();
    let groups = copy_h.div_ceil(8);
    for x in 0..copy_w {
        let c1 = &img.plane1[x * pitch..][..groups];
        let c2 = &img.plane2[x * pitch..][..groups];
        let row = dst.row_mut(nh - 1 - x);
        for (k, (&a, &b)) in c1.iter().zip(c2).enumerate() {
            let ny = (copy_h - k * 8).min(8);
            put_aligned(row, k * 2, merge_planes(a, b), ny as u32);
        }
    }
}

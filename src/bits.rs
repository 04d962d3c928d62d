//! Bit-level primitives shared by the 1bpp and 2bpp converters.
//!
//! Conventions: pixel runs are always MSB-first. A 1bpp run of `n` pixels
//! lives in the top `n` bits of a `u8`; a 2bpp run of `n` pixels lives in
//! the top `2n` bits of a `u16`. Byte bit reversal uses `u8::reverse_bits`.

/// Transpose an 8×8 bit matrix held in a `u64`.
///
/// Element `(r, c)` lives at bit `8 * r + c`; on return it lives at bit
/// `8 * c + r`. The operation is symmetric under byte and bit order, so it
/// works the same whether rows were packed LSB-first or MSB-first.
#[inline]
pub(crate) const fn transpose8(mut x: u64) -> u64 {
    let mut t = (x ^ (x >> 7)) & 0x00AA_00AA_00AA_00AA;
    x = x ^ t ^ (t << 7);
    t = (x ^ (x >> 14)) & 0x0000_CCCC_0000_CCCC;
    x = x ^ t ^ (t << 14);
    t = (x ^ (x >> 28)) & 0x0000_0000_F0F0_F0F0;
    x ^ t ^ (t << 28)
}

/// Transpose eight MSB-first bytes.
///
/// Bit `7 - j` of `rows[r]` becomes bit `7 - r` of the returned `[j]`: rows
/// of pixels become columns, and the first input byte ends up in the most
/// significant bit of every output byte.
#[inline]
pub(crate) const fn transpose_block(rows: [u8; 8]) -> [u8; 8] {
    transpose8(u64::from_be_bytes(rows)).to_be_bytes()
}

/// Mask selecting the first `n` (0..=8) 1bpp pixels of a byte.
#[inline]
pub(crate) const fn mono_mask(n: u32) -> u8 {
    (0xFF00u16 >> n) as u8
}

/// Mask selecting the first `n` (0..=4) 2bpp pixels of a byte.
#[inline]
pub(crate) const fn gray_mask(n: u32) -> u8 {
    (0xFF00u16 >> (2 * n)) as u8
}

/// Mask selecting the first `n` (0..=8) 2bpp pixels of a `u16`.
#[inline]
const fn gray_word_mask(n: u32) -> u16 {
    (0xFFFF_0000u32 >> (2 * n)) as u16
}

/// Replace the bits of `dst` selected by `mask` with the same bits of `src`.
#[inline]
pub(crate) fn merge(dst: &mut u8, src: u8, mask: u8) {
    *dst = (*dst & !mask) | (src & mask);
}

/// Write `n` (1..=8) 1bpp pixels into `row` starting at pixel `px`.
///
/// The run may straddle a byte boundary. Bits outside the run keep their
/// previous value. The caller guarantees `px + n` is inside the row.
#[inline]
pub(crate) fn put_mono(row: &mut [u8], px: usize, bits: u8, n: u32) {
    let idx = px / 8;
    let off = px % 8;
    let [w0, w1] = ((u16::from(bits) << 8) >> off).to_be_bytes();
    let [m0, m1] = ((u16::from(mono_mask(n)) << 8) >> off).to_be_bytes();
    merge(&mut row[idx], w0, m0);
    if m1 != 0 {
        merge(&mut row[idx + 1], w1, m1);
    }
}

/// Write `n` (1..=8) 2bpp pixels into `row` starting at pixel `px`.
///
/// Same contract as [`put_mono`]; the run covers up to three bytes.
#[inline]
pub(crate) fn put_gray(row: &mut [u8], px: usize, word: u16, n: u32) {
    let idx = px / 4;
    let off = 2 * (px % 4);
    let [w0, w1, w2, _] = ((u32::from(word) << 16) >> off).to_be_bytes();
    let [m0, m1, m2, _] = ((u32::from(gray_word_mask(n)) << 16) >> off).to_be_bytes();
    merge(&mut row[idx], w0, m0);
    if m1 != 0 {
        merge(&mut row[idx + 1], w1, m1);
    }
    if m2 != 0 {
        merge(&mut row[idx + 2], w2, m2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_transpose(rows: [u8; 8]) -> [u8; 8] {
        let mut out = [0u8; 8];
        for (r, &row) in rows.iter().enumerate() {
            for j in 0..8 {
                if row & (0x80 >> j) != 0 {
                    out[j] |= 0x80 >> r;
                }
            }
        }
        out
    }

    #[test]
    fn transpose_identity_matrix() {
        let diag = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];
        assert_eq!(transpose_block(diag), diag);
    }

    #[test]
    fn transpose_single_row() {
        // Top row all set -> every column has its top pixel set.
        let rows = [0xFF, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(transpose_block(rows), [0x80; 8]);
        // Left column all set -> first output row full.
        let rows = [0x80; 8];
        assert_eq!(transpose_block(rows), [0xFF, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn transpose_matches_naive() {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        for _ in 0..256 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let rows = state.to_le_bytes();
            assert_eq!(transpose_block(rows), naive_transpose(rows));
            assert_eq!(transpose8(transpose8(state)), state);
        }
    }

    #[test]
    fn partial_masks() {
        assert_eq!(mono_mask(0), 0x00);
        assert_eq!(mono_mask(1), 0x80);
        assert_eq!(mono_mask(3), 0xE0);
        assert_eq!(mono_mask(8), 0xFF);
        assert_eq!(gray_mask(0), 0x00);
        assert_eq!(gray_mask(1), 0xC0);
        assert_eq!(gray_mask(3), 0xFC);
        assert_eq!(gray_mask(4), 0xFF);
        assert_eq!(gray_word_mask(1), 0xC000);
        assert_eq!(gray_word_mask(8), 0xFFFF);
    }

    #[test]
    fn put_mono_straddles_and_preserves() {
        let mut row = [0x00u8, 0x00, 0x00];
        put_mono(&mut row, 5, 0xFF, 6);
        assert_eq!(row, [0x07, 0xE0, 0x00]);

        let mut row = [0xFFu8, 0xFF];
        put_mono(&mut row, 3, 0x00, 2);
        assert_eq!(row, [0xE7, 0xFF]);

        // Aligned full byte never touches the next one.
        let mut row = [0x00u8, 0x5A];
        put_mono(&mut row, 0, 0xA5, 8);
        assert_eq!(row, [0xA5, 0x5A]);
    }

    #[test]
    fn put_gray_straddles_three_bytes() {
        let mut row = [0x00u8; 4];
        put_gray(&mut row, 3, 0xFFFF, 8);
        assert_eq!(row, [0x03, 0xFF, 0xFC, 0x00]);

        let mut row = [0xFFu8; 3];
        put_gray(&mut row, 2, 0x5500, 3);
        assert_eq!(row, [0xF5, 0x7F, 0xFF]);
    }
}

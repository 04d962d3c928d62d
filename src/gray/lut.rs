//! Bitplane merge table.
//!
//! Index `(plane1_nibble << 4) | plane2_nibble`, four pixels per nibble with
//! the first pixel in bit 3. Output is one native byte of four 2-bit pixels,
//! first pixel in bits 7..6. Source level `(b1 << 1) | b2` runs 0 = white to
//! 3 = black; native level is `3 - source`, so 0 = black and 3 = white.

pub(crate) static MERGE_LUT: [u8; 256] = build();

const fn build() -> [u8; 256] {
    let mut lut = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let p1 = (i >> 4) as u8;
        let p2 = (i & 0x0F) as u8;
        let mut out = 0u8;
        let mut px: u32 = 0;
        while px < 4 {
            let b1 = (p1 >> (3 - px)) & 1;
            let b2 = (p2 >> (3 - px)) & 1;
            let level = (b1 << 1) | b2;
            out |= (3 - level) << (6 - 2 * px);
            px += 1;
        }
        lut[i] = out;
        i += 1;
    }
    lut
}

/// Merge eight MSB-first pixels from each plane into eight native pixels,
/// first pixel in the top two bits of the result.
#[inline]
pub(crate) fn merge_planes(p1: u8, p2: u8) -> u16 {
    let hi = MERGE_LUT[usize::from((p1 & 0xF0) | (p2 >> 4))];
    let lo = MERGE_LUT[usize::from((p1 << 4) | (p2 & 0x0F))];
    u16::from_be_bytes([hi, lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_anchors() {
        assert_eq!(MERGE_LUT[0x00], 0xFF);
        assert_eq!(MERGE_LUT[0xFF], 0x00);
        assert_eq!(MERGE_LUT[0xF0], 0x55);
        assert_eq!(MERGE_LUT[0x0F], 0xAA);
    }

    #[test]
    fn per_pixel_order() {
        // Only the first pixel of plane1 set: first native pixel is level 1.
        assert_eq!(MERGE_LUT[0x80], 0x7F);
        // Only the last pixel of plane2 set: last native pixel is level 2.
        assert_eq!(MERGE_LUT[0x01], 0xFE);
    }

    #[test]
    fn merge_eight_pixels() {
        assert_eq!(merge_planes(0xFF, 0x00), 0x5555);
        assert_eq!(merge_planes(0x00, 0x00), 0xFFFF);
        assert_eq!(merge_planes(0xF0, 0x0F), 0x55AA);
    }
}

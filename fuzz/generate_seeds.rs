#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(magic: &[u8; 4], w: u16, h: u16, data_size: u32) -> Vec<u8> {
    let mut out = magic.to_vec();
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.extend_from_slice(&[0, 0]); // color mode, compression
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 8]); // checksum prefix
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_blit";
    fs::create_dir_all(dir).unwrap();

    // Display selector prefix: depth, rotation index, width, height.

    // 1bpp 8x8 checkerboard on an 8x8 mono display at 0 deg
    let mut mono = vec![0, 0, 8, 8];
    mono.extend(header(b"EBM1", 8, 8, 8));
    mono.extend([0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55]);
    fs::write(format!("{dir}/mono_8x8.bin"), mono).unwrap();

    // 1bpp 10x3 on a 16x12 mono display at 90 deg
    let mut mono_rot = vec![0, 1, 16, 12];
    mono_rot.extend(header(b"EBM1", 10, 3, 6));
    mono_rot.extend([0xFF, 0xC0, 0x80, 0x40, 0x01, 0x00]);
    fs::write(format!("{dir}/mono_10x3_rot90.bin"), mono_rot).unwrap();

    // 2bpp 4x8 on an 8x8 gray display at 180 deg
    let mut gray = vec![1, 2, 8, 8];
    gray.extend(header(b"EBG2", 4, 8, 8));
    gray.extend([0xFF, 0x0F, 0xF0, 0x00, 0x00, 0xFF, 0x0F, 0xF0]);
    fs::write(format!("{dir}/gray_4x8_rot180.bin"), gray).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/prefix_only.bin"), [0u8, 0, 8, 8]).unwrap();
    let mut short = vec![0, 0, 8, 8];
    short.extend(header(b"EBM1", 8, 8, 8));
    fs::write(format!("{dir}/no_payload.bin"), short).unwrap();
    let mut bad_size = vec![1, 3, 4, 4];
    bad_size.extend(header(b"EBG2", 4, 4, 7));
    bad_size.extend([0u8; 7]);
    fs::write(format!("{dir}/bad_size.bin"), bad_size).unwrap();

    println!("Generated seed corpus in {dir}/");
}

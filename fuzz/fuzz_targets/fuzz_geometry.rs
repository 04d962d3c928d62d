#![no_main]
use inkblit::{ImageInfo, encode_1bpp, encode_2bpp};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probing arbitrary bytes must never panic.
    let _ = ImageInfo::from_bytes(data);

    // Encoded containers must probe back to the dimensions they were built with.
    let Some((&[w, h], pixels)) = data.split_first_chunk::<2>() else {
        return;
    };
    let (w, h) = (u32::from(w % 40) + 1, u32::from(h % 40) + 1);
    if pixels.len() < (w * h) as usize {
        return;
    }
    let mono = encode_1bpp(pixels, w, h).expect("valid 1bpp input");
    let info = ImageInfo::from_bytes(&mono).expect("encoded 1bpp probes");
    assert_eq!((info.width, info.height), (w, h));

    let levels: Vec<u8> = pixels.iter().map(|&p| p & 3).collect();
    let gray = encode_2bpp(&levels, w, h).expect("valid 2bpp input");
    let info = ImageInfo::from_bytes(&gray).expect("encoded 2bpp probes");
    assert_eq!((info.width, info.height), (w, h));
    assert_eq!(info.data_size as usize, gray.len() - inkblit::HEADER_LEN);
});

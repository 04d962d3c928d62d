#![no_main]
use inkblit::{BlitRequest, ClearMode, Display};
use libfuzzer_sys::fuzz_target;

struct FuzzDisplay {
    depth: u8,
    rotation: u16,
    width: u32,
    height: u32,
    fb: Vec<u8>,
    updates: usize,
}

impl Display for FuzzDisplay {
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
        self.updates += 1;
    }
    fn fast_update(&mut self) {
        self.updates += 1;
    }
}

fuzz_target!(|data: &[u8]| {
    // First 4 bytes pick the display, the rest is the container.
    let Some((&[depth, rot, w, h], image)) = data.split_first_chunk::<4>() else {
        return;
    };
    let depth = 1 + (depth & 1);
    let rotation = [0, 90, 180, 270, 45][usize::from(rot) % 5];
    let (width, height) = (u32::from(w % 64), u32::from(h % 64));
    let swap = rotation == 90 || rotation == 270;
    let (nw, nh) = if swap { (height, width) } else { (width, height) };
    let pitch = if depth == 2 {
        (nw as usize).div_ceil(4)
    } else {
        (nw as usize).div_ceil(8)
    };

    let mut display = FuzzDisplay {
        depth,
        rotation,
        width,
        height,
        fb: vec![0xA5; pitch * nh as usize],
        updates: 0,
    };
    let before = display.fb.clone();

    // Must never panic; failures must leave the framebuffer alone.
    match BlitRequest::new(image)
        .with_clear(ClearMode::Never)
        .blit(&mut display)
    {
        Ok(_) => assert_eq!(display.updates, 1),
        Err(_) => {
            assert_eq!(display.fb, before, "framebuffer modified on error");
            assert_eq!(display.updates, 0);
        }
    }
});

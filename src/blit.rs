//! Blit orchestration: validation, clearing, dispatch and the refresh call.

use crate::display::{Depth, Display, Geometry, NativeBuffer, Rotation};
use crate::error::BlitError;
use crate::gray::{self, GrayImage};
use crate::info::{HEADER_LEN, ImageFormat, ImageHeader};
use crate::limits::Limits;
use crate::mono::{self, MonoImage};

/// When to clear the native buffer to white before blitting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear the whole buffer unless the image covers the logical display.
    #[default]
    Auto,
    /// Always clear the whole buffer.
    Always,
    /// Never clear; uncovered pixels keep their previous content.
    Never,
}

/// Which refresh the display is asked for after a successful blit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    #[default]
    Full,
    Fast,
}

/// What a successful blit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlitSummary {
    pub format: ImageFormat,
    pub rotation: Rotation,
    /// Width of the copied region (`min(image, display)`).
    pub copy_width: u32,
    /// Height of the copied region (`min(image, display)`).
    pub copy_height: u32,
    /// Whether the buffer was cleared to white first.
    pub cleared: bool,
    pub update: UpdateMode,
}

/// Blit request builder.
///
/// ```no_run
/// # fn run(display: &mut impl inkblit::Display, data: &[u8]) -> Result<(), inkblit::BlitError> {
/// use inkblit::{BlitRequest, ClearMode, Limits};
///
/// let limits = Limits { max_pixels: Some(800 * 480), ..Default::default() };
/// let summary = BlitRequest::new(data)
///     .with_limits(&limits)
///     .with_clear(ClearMode::Auto)
///     .fast(true)
///     .blit(display)?;
/// println!("copied {}x{}", summary.copy_width, summary.copy_height);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BlitRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    clear: ClearMode,
    update: UpdateMode,
}

impl<'a> BlitRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            clear: ClearMode::Auto,
            update: UpdateMode::Full,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_clear(mut self, clear: ClearMode) -> Self {
        self.clear = clear;
        self
    }

    /// Request a fast refresh instead of a full one.
    pub fn fast(mut self, fast: bool) -> Self {
        self.update = if fast {
            UpdateMode::Fast
        } else {
            UpdateMode::Full
        };
        self
    }

    /// Blit a 1bpp container. The display must be at depth 1.
    pub fn blit_1bpp<D: Display + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<BlitSummary, BlitError> {
        self.run(display, Some(ImageFormat::Mono1))
    }

    /// Blit a 2bpp container. The display must be at depth 2.
    pub fn blit_2bpp<D: Display + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<BlitSummary, BlitError> {
        self.run(display, Some(ImageFormat::Gray2))
    }

    /// Blit either container, picking the format from the header magic.
    pub fn blit<D: Display + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<BlitSummary, BlitError> {
        self.run(display, None)
    }

    fn run<D: Display + ?Sized>(
        &self,
        display: &mut D,
        format: Option<ImageFormat>,
    ) -> Result<BlitSummary, BlitError> {
        let result = self
            .validate(display, format)
            .and_then(|plan| plan.execute(display.framebuffer_mut()));
        match &result {
            Ok(summary) => match summary.update {
                UpdateMode::Full => display.full_update(),
                UpdateMode::Fast => display.fast_update(),
            },
            Err(err) => log::debug!("blit rejected: {err}"),
        }
        result
    }

    /// Every check except the framebuffer length, which `Plan::execute`
    /// makes on the slice it writes.
    fn validate<D: Display + ?Sized>(
        &self,
        display: &D,
        format: Option<ImageFormat>,
    ) -> Result<Plan<'a>, BlitError> {
        let data = self.data;
        if data.is_empty() {
            return Err(BlitError::InvalidArgument("image buffer is empty"));
        }
        let (header, payload) = match format {
            Some(format) => ImageHeader::parse(data, format)?,
            None => ImageHeader::parse_any(data)?,
        };
        header.check_supported()?;
        let format = header.format;

        let required = format.bits_per_pixel();
        let actual = display.depth();
        let depth = Depth::from_bits(actual)
            .filter(|d| d.bits() == required)
            .ok_or(BlitError::DepthMismatch { required, actual })?;
        let rotation = Rotation::from_degrees(display.rotation())?;

        let (src_w, src_h) = (u32::from(header.width), u32::from(header.height));
        let (dst_w, dst_h) = (display.width(), display.height());
        if src_w == 0 || src_h == 0 {
            return Err(BlitError::InvalidDimensions {
                width: src_w,
                height: src_h,
                reason: "image has zero width or height",
            });
        }
        if dst_w == 0 || dst_h == 0 {
            return Err(BlitError::InvalidDimensions {
                width: dst_w,
                height: dst_h,
                reason: "display has zero width or height",
            });
        }
        if let Some(limits) = self.limits {
            limits.check(src_w, src_h)?;
        }

        let expected = format
            .payload_size(src_w, src_h)
            .ok_or(BlitError::InvalidDimensions {
                width: src_w,
                height: src_h,
                reason: "payload size overflows",
            })?;
        if header.data_size as usize != expected {
            return Err(BlitError::SizeMismatch {
                declared: header.data_size,
                expected,
            });
        }
        if let Some(limits) = self.limits {
            limits.check_payload(expected)?;
        }
        if payload.len() < expected {
            return Err(BlitError::TruncatedBuffer {
                needed: HEADER_LEN + expected,
                actual: data.len(),
            });
        }

        let geometry = Geometry::new(depth, rotation, dst_w, dst_h);
        if depth == Depth::Gray4 && geometry.native_width() % 4 != 0 {
            return Err(BlitError::InvalidDimensions {
                width: geometry.native_width(),
                height: geometry.native_height(),
                reason: "2bpp native width must be a multiple of 4",
            });
        }
        if geometry.buffer_len().is_none() {
            return Err(BlitError::InvalidDimensions {
                width: dst_w,
                height: dst_h,
                reason: "framebuffer size overflows",
            });
        }

        let copy_w = src_w.min(dst_w);
        let copy_h = src_h.min(dst_h);
        let clear = match self.clear {
            ClearMode::Auto => copy_w < dst_w || copy_h < dst_h,
            ClearMode::Always => true,
            ClearMode::Never => false,
        };

        Ok(Plan {
            pixels: &payload[..expected],
            format,
            geometry,
            src_w,
            src_h,
            copy_w,
            copy_h,
            clear,
            update: self.update,
        })
    }
}

/// A validated blit. Only the framebuffer length is left to check.
struct Plan<'a> {
    pixels: &'a [u8],
    format: ImageFormat,
    geometry: Geometry,
    src_w: u32,
    src_h: u32,
    copy_w: u32,
    copy_h: u32,
    clear: bool,
    update: UpdateMode,
}

impl Plan<'_> {
    fn execute(&self, framebuffer: &mut [u8]) -> Result<BlitSummary, BlitError> {
        let mut dst = NativeBuffer::new(framebuffer, &self.geometry).ok_or(
            BlitError::InvalidArgument("framebuffer is smaller than the display geometry"),
        )?;
        let rotation = self.geometry.rotation;
        log::trace!(
            "blit {:?} {}x{} -> {}x{} at {}deg, copy {}x{}, clear {}",
            self.format,
            self.src_w,
            self.src_h,
            self.geometry.width,
            self.geometry.height,
            rotation.degrees(),
            self.copy_w,
            self.copy_h,
            self.clear,
        );

        if self.clear {
            dst.fill_white();
        }
        let (w, h) = (self.src_w as usize, self.src_h as usize);
        let (copy_w, copy_h) = (self.copy_w as usize, self.copy_h as usize);
        match self.format {
            ImageFormat::Mono1 => {
                let img = MonoImage::new(self.pixels, w, h);
                mono::blit(&img, &mut dst, rotation, copy_w, copy_h);
            }
            ImageFormat::Gray2 => {
                let img = GrayImage::new(self.pixels, w, h);
                gray::blit(&img, &mut dst, rotation, copy_w, copy_h);
            }
        }

        Ok(BlitSummary {
            format: self.format,
            rotation,
            copy_width: self.copy_w,
            copy_height: self.copy_h,
            cleared: self.clear,
            update: self.update,
        })
    }
}

/// Blit a 1bpp container into `display`, then trigger a fast or full refresh.
pub fn blit_1bpp<D: Display + ?Sized>(
    display: &mut D,
    data: &[u8],
    fast: bool,
) -> Result<BlitSummary, BlitError> {
    BlitRequest::new(data).fast(fast).blit_1bpp(display)
}

/// Blit a 2bpp container into `display`, then trigger a fast or full refresh.
pub fn blit_2bpp<D: Display + ?Sized>(
    display: &mut D,
    data: &[u8],
    fast: bool,
) -> Result<BlitSummary, BlitError> {
    BlitRequest::new(data).fast(fast).blit_2bpp(display)
}

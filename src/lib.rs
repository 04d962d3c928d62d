//! # inkblit
//!
//! Decodes two compact bitmap containers and blits them, pixel-exact, into
//! the native framebuffer of an e-paper controller at any of the four
//! right-angle rotations.
//!
//! ## Supported Formats
//!
//! Both containers share a 22-byte little-endian header (magic, width,
//! height, color mode, compression, payload size, checksum prefix).
//!
//! - **1bpp** (`EBM1`): packed rows, MSB-first, `ceil(width / 8)` bytes per row.
//! - **2bpp** (`EBG2`): two column-major bitplanes of `ceil(height / 8)`
//!   bytes per column; level `(plane1 << 1) | plane2`, 0 = white .. 3 = black.
//!
//! ## Native Layouts
//!
//! - 1bpp: `ceil(native_width / 8)` bytes per row, set bit = white.
//! - 2bpp: `native_width / 4` bytes per row, 0 = black .. 3 = white. The
//!   native width must be a multiple of 4.
//!
//! Native width/height equal the logical display size at 0°/180° and are
//! swapped at 90°/270°.
//!
//! ## Guarantees
//!
//! - Every input is validated before the first framebuffer write; a
//!   rejected blit leaves the buffer untouched and requests no refresh.
//! - Only the region `min(image, display)` is written. Bits of partially
//!   covered bytes outside it keep their previous value.
//! - The blit paths never allocate.
//!
//! ## Non-Goals
//!
//! - Compressed or checksum-verified payloads
//! - Rotations other than multiples of 90°
//! - Depths other than 1 and 2 bits per pixel
//!
//! ## Usage
//!
//! ```no_run
//! use inkblit::{Display, ImageInfo, blit_2bpp};
//!
//! # fn run(display: &mut impl Display) -> Result<(), inkblit::BlitError> {
//! let data: &[u8] = &[]; // your container bytes
//!
//! // Probe without blitting
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.format);
//!
//! // Blit and request a fast refresh
//! blit_2bpp(display, data, true)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bits;
mod blit;
mod display;
mod encode;
mod error;
mod gray;
mod info;
mod limits;
mod mono;

// Re-exports
pub use blit::{BlitRequest, BlitSummary, ClearMode, UpdateMode, blit_1bpp, blit_2bpp};
pub use display::{Depth, Display, Geometry, Rotation};
pub use encode::{encode_1bpp, encode_2bpp};
pub use error::BlitError;
pub use info::{HEADER_LEN, ImageFormat, ImageHeader, ImageInfo};
pub use limits::Limits;

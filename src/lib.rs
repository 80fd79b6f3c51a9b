//! `framebuf` is an in-memory software framebuffer for small displays.
//!
//! A [`Surface`] wraps a byte buffer laid out in one of seven packed
//! [`PixelFormat`]s (1, 2, 4, 8 and 16 bits per pixel) and draws into it:
//! pixels, lines, rectangles, ellipses, polygons, 8x8 text, scrolling and
//! blitting between surfaces of any format.
//!
//! # Layers
//!
//! 1. **Formats**: per-format addressing and bulk writes behind one codec trait,
//!    resolved once when a surface is built.
//! 2. **Surface**: geometry validation, clipping, fills, scroll and blit.
//! 3. **Draw**: shapes and text expressed through the surface primitives.
//! 4. **Export**: conversion to RGBA8 and PNG for inspection.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Clip, don't fail**: drawing off the surface is silently clipped. Only
//!   configuration (dimensions, buffer size, palettes, descriptors) returns errors.
//! - **Bit-exact layouts**: buffers match the MicroPython `framebuf` byte layout
//!   for every format, so they can be shipped to a display controller as-is.
//!
//! ```
//! use framebuf::{PixelFormat, Surface};
//!
//! let mut fb = Surface::alloc(128, 64, PixelFormat::MonoVlsb)?;
//! fb.fill(0);
//! fb.text("hello", 0, 0, 1);
//! fb.rect(0, 10, 128, 20, 1, false);
//! assert_eq!(fb.get_pixel(0, 10), 1);
//! # Ok::<(), framebuf::FramebufError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod draw;
mod export;
mod format;
mod foundation;
mod surface;

pub use draw::Quadrants;
pub use export::FrameRGBA;
pub use format::{PixelFormat, rgb565};
pub use foundation::error::{FramebufError, FramebufResult};
pub use surface::{BlitOptions, BlitSource, Surface, SurfaceDesc, SurfaceView};

//! Pixel formats and their codecs.
//!
//! Every format is described twice: [`PixelFormat`] is the public tag, and a
//! zero-sized [`PixelCodec`] implementation holds the addressing and bulk-write
//! logic. A surface resolves its codec once at construction.

mod gs2_hmsb;
mod gs4_hmsb;
mod gs8;
mod mono_horiz;
mod mono_vlsb;
mod rgb565;

use std::fmt;
use std::str::FromStr;

use crate::foundation::clip::round_up;
use crate::foundation::error::{FramebufError, FramebufResult};

pub use rgb565::rgb565;

/// Packed pixel layouts. Discriminants match the reference module's constants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PixelFormat {
    /// 1 bpp, vertical bytes (8 rows per byte), bit 0 = top.
    MonoVlsb = 0,
    /// 16 bpp, little-endian RGB565.
    Rgb565 = 1,
    /// 4 bpp, two pixels per byte, even x in the high nibble.
    Gs4Hmsb = 2,
    /// 1 bpp, horizontal bytes, bit 7 = leftmost pixel.
    MonoHlsb = 3,
    /// 1 bpp, horizontal bytes, bit 0 = leftmost pixel.
    MonoHmsb = 4,
    /// 2 bpp, four pixels per byte, leftmost pixel in the low bits.
    Gs2Hmsb = 5,
    /// 8 bpp, one byte per pixel.
    Gs8 = 6,
}

impl PixelFormat {
    /// All formats in code order.
    pub const ALL: [PixelFormat; 7] = [
        PixelFormat::MonoVlsb,
        PixelFormat::Rgb565,
        PixelFormat::Gs4Hmsb,
        PixelFormat::MonoHlsb,
        PixelFormat::MonoHmsb,
        PixelFormat::Gs2Hmsb,
        PixelFormat::Gs8,
    ];

    /// Numeric code used by the reference module.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Bits per pixel: 1, 2, 4, 8 or 16.
    pub fn bits_per_pixel(self) -> usize {
        match self {
            PixelFormat::MonoVlsb | PixelFormat::MonoHlsb | PixelFormat::MonoHmsb => 1,
            PixelFormat::Gs2Hmsb => 2,
            PixelFormat::Gs4Hmsb => 4,
            PixelFormat::Gs8 => 8,
            PixelFormat::Rgb565 => 16,
        }
    }

    /// Largest value a pixel of this format can hold.
    pub fn value_mask(self) -> u32 {
        (1u32 << self.bits_per_pixel()) - 1
    }

    /// Granularity (in pixels) the stride is padded to.
    ///
    /// Only horizontally packed sub-byte formats pad; MONO_VLSB packs along y.
    pub fn stride_align(self) -> usize {
        match self {
            PixelFormat::MonoHlsb | PixelFormat::MonoHmsb => 8,
            PixelFormat::Gs2Hmsb => 4,
            PixelFormat::Gs4Hmsb => 2,
            PixelFormat::MonoVlsb | PixelFormat::Gs8 | PixelFormat::Rgb565 => 1,
        }
    }

    /// Minimum buffer length for a surface of this format.
    ///
    /// `stride` must already be padded with [`PixelFormat::stride_align`].
    pub fn required_len(self, width: usize, height: usize, stride: usize) -> usize {
        match self {
            PixelFormat::MonoVlsb => (height.div_ceil(8) - 1) * stride + width,
            _ => {
                let width = round_up(width, self.stride_align());
                ((height - 1) * stride + width) * self.bits_per_pixel() / 8
            }
        }
    }

    /// Lowercase name, as used in JSON descriptors.
    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::MonoVlsb => "mono_vlsb",
            PixelFormat::Rgb565 => "rgb565",
            PixelFormat::Gs4Hmsb => "gs4_hmsb",
            PixelFormat::MonoHlsb => "mono_hlsb",
            PixelFormat::MonoHmsb => "mono_hmsb",
            PixelFormat::Gs2Hmsb => "gs2_hmsb",
            PixelFormat::Gs8 => "gs8",
        }
    }

    pub(crate) fn codec(self) -> &'static dyn PixelCodec {
        match self {
            PixelFormat::MonoVlsb => &mono_vlsb::MonoVlsb,
            PixelFormat::Rgb565 => &rgb565::Rgb565,
            PixelFormat::Gs4Hmsb => &gs4_hmsb::Gs4Hmsb,
            PixelFormat::MonoHlsb => &mono_horiz::MonoHlsb,
            PixelFormat::MonoHmsb => &mono_horiz::MonoHmsb,
            PixelFormat::Gs2Hmsb => &gs2_hmsb::Gs2Hmsb,
            PixelFormat::Gs8 => &gs8::Gs8,
        }
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = FramebufError;

    fn try_from(code: u8) -> FramebufResult<Self> {
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| FramebufError::validation(format!("unknown pixel format code {code}")))
    }
}

impl FromStr for PixelFormat {
    type Err = FramebufError;

    fn from_str(s: &str) -> FramebufResult<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let lower = match lower.as_str() {
            "mvlsb" => "mono_vlsb",
            other => other,
        };
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| FramebufError::validation(format!("unknown pixel format '{s}'")))
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved geometry handed to codecs. `stride` is already padded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

/// Per-format addressing and bulk writes.
///
/// Coordinates passed in are always inside the surface and runs are already
/// clipped; the codecs never bounds-check against width/height themselves.
pub(crate) trait PixelCodec: Sync {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32;

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32);

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        for xx in x..x + w {
            self.set(buf, layout, xx, y, color);
        }
    }

    fn vline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, h: usize, color: u32) {
        for yy in y..y + h {
            self.set(buf, layout, x, yy, color);
        }
    }

    /// Fills every pixel of the surface. Must leave the buffer byte-identical
    /// to one `hline` per row.
    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        for y in 0..layout.height {
            self.hline(buf, layout, 0, y, layout.width, color);
        }
    }
}

/// Merges `value` into `byte` on the bits selected by `mask`.
#[inline]
pub(crate) fn merge(byte: &mut u8, mask: u8, value: u8) {
    *byte = (*byte & !mask) | (value & mask);
}

#[cfg(test)]
#[path = "../../tests/unit/format/mod.rs"]
mod tests;

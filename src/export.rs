//! Conversion of packed surfaces to straight RGBA8 for inspection and PNG output.

use std::path::Path;

use anyhow::Context;

use crate::foundation::error::FramebufResult;
use crate::format::PixelFormat;
use crate::surface::Surface;

/// A CPU-side RGBA8 image (straight alpha, always opaque).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }

    /// Encodes the frame as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FramebufResult<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .context("frame data does not match its dimensions")?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png to {}", path.display()))?;
        Ok(())
    }
}

/// Expands one stored pixel value to opaque RGBA.
pub(crate) fn to_rgba8(format: PixelFormat, value: u32) -> [u8; 4] {
    let gray = |v: u8| [v, v, v, 0xFF];
    match format {
        PixelFormat::MonoVlsb | PixelFormat::MonoHlsb | PixelFormat::MonoHmsb => {
            gray(if value != 0 { 0xFF } else { 0 })
        }
        PixelFormat::Gs2Hmsb => gray((value & 0x3) as u8 * 85),
        PixelFormat::Gs4Hmsb => gray((value & 0xF) as u8 * 17),
        PixelFormat::Gs8 => gray(value as u8),
        PixelFormat::Rgb565 => {
            let r = ((value >> 11) & 0x1F) as u8;
            let g = ((value >> 5) & 0x3F) as u8;
            let b = (value & 0x1F) as u8;
            [
                (r << 3) | (r >> 2),
                (g << 2) | (g >> 4),
                (b << 3) | (b >> 2),
                0xFF,
            ]
        }
    }
}

impl<B: AsRef<[u8]>> Surface<B> {
    /// Renders the surface to straight RGBA8.
    pub fn to_rgba(&self) -> FrameRGBA {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        let mut data = Vec::with_capacity(usize::from(self.width()) * usize::from(self.height()) * 4);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&to_rgba8(self.format(), self.get_pixel(x, y)));
            }
        }
        FrameRGBA {
            width: u32::from(self.width()),
            height: u32::from(self.height()),
            data,
        }
    }

    /// Shorthand for `to_rgba().save_png(path)`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FramebufResult<()> {
        self.to_rgba().save_png(path)
    }
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;

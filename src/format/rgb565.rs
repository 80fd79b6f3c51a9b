use super::{Layout, PixelCodec};

/// Packs 8-bit channels into an RGB565 value (5 red, 6 green, 5 blue bits).
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xF8) << 8) | ((u16::from(g) & 0xFC) << 3) | (u16::from(b) >> 3)
}

/// 16 bpp, stored little-endian.
pub(crate) struct Rgb565;

#[inline]
fn offset(layout: &Layout, x: usize, y: usize) -> usize {
    (y * layout.stride + x) * 2
}

#[inline]
fn fill_words(bytes: &mut [u8], color: u32) {
    let word = ((color & 0xFFFF) as u16).to_le_bytes();
    for px in bytes.chunks_exact_mut(2) {
        px.copy_from_slice(&word);
    }
}

impl PixelCodec for Rgb565 {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        let i = offset(layout, x, y);
        u32::from(u16::from_le_bytes([buf[i], buf[i + 1]]))
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        let i = offset(layout, x, y);
        buf[i..i + 2].copy_from_slice(&((color & 0xFFFF) as u16).to_le_bytes());
    }

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        let start = offset(layout, x, y);
        fill_words(&mut buf[start..start + w * 2], color);
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        if layout.stride == layout.width {
            fill_words(&mut buf[..layout.height * layout.width * 2], color);
            return;
        }
        for y in 0..layout.height {
            let row = offset(layout, 0, y);
            fill_words(&mut buf[row..row + layout.width * 2], color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/rgb565.rs"]
mod tests;

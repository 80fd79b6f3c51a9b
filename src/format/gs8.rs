use super::{Layout, PixelCodec};

pub(crate) struct Gs8;

impl PixelCodec for Gs8 {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        u32::from(buf[y * layout.stride + x])
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        buf[y * layout.stride + x] = (color & 0xFF) as u8;
    }

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        let start = y * layout.stride + x;
        buf[start..start + w].fill((color & 0xFF) as u8);
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        let value = (color & 0xFF) as u8;
        if layout.stride == layout.width {
            buf[..layout.height * layout.width].fill(value);
            return;
        }
        for y in 0..layout.height {
            let row = y * layout.stride;
            buf[row..row + layout.width].fill(value);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/gs8.rs"]
mod tests;

use super::{Layout, PixelCodec, merge};

/// 2 bpp, four pixels per byte; pixel `x & 3` occupies bits `2*(x&3)..2*(x&3)+2`.
pub(crate) struct Gs2Hmsb;

impl Gs2Hmsb {
    #[inline]
    fn locate(layout: &Layout, x: usize, y: usize) -> (usize, u32) {
        ((y * layout.stride + x) >> 2, ((x & 3) << 1) as u32)
    }
}

impl PixelCodec for Gs2Hmsb {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        let (index, shift) = Self::locate(layout, x, y);
        (u32::from(buf[index]) >> shift) & 0x3
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        let (index, shift) = Self::locate(layout, x, y);
        let mask = (0x3u32 << shift) as u8;
        let value = ((color & 0x3) << shift) as u8;
        merge(&mut buf[index], mask, value);
    }

    // hline/vline use the per-pixel fallback.

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        let value = ((color & 0x3) * 0x55) as u8;
        let row_bytes = layout.stride >> 2;
        let full = layout.width >> 2;
        let rem = layout.width & 3;

        if rem == 0 && row_bytes == full {
            buf[..layout.height * row_bytes].fill(value);
            return;
        }

        let tail_mask = ((1u32 << (rem * 2)) - 1) as u8;
        for y in 0..layout.height {
            let row = y * row_bytes;
            buf[row..row + full].fill(value);
            if rem != 0 {
                merge(&mut buf[row + full], tail_mask, value);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/gs2_hmsb.rs"]
mod tests;

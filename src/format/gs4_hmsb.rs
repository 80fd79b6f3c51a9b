use super::{Layout, PixelCodec, merge};

/// 4 bpp, two pixels per byte; even x in the high nibble, odd x in the low one.
pub(crate) struct Gs4Hmsb;

#[inline]
fn nibble_mask(x: usize) -> u8 {
    if x & 1 == 1 { 0x0F } else { 0xF0 }
}

impl PixelCodec for Gs4Hmsb {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        let b = buf[(y * layout.stride + x) >> 1];
        if x & 1 == 1 {
            u32::from(b & 0x0F)
        } else {
            u32::from(b >> 4)
        }
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        let c = (color & 0x0F) as u8;
        merge(
            &mut buf[(y * layout.stride + x) >> 1],
            nibble_mask(x),
            (c << 4) | c,
        );
    }

    /// Odd leading pixel, whole-byte pairs, trailing even pixel.
    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        let row = (y * layout.stride) >> 1;
        let c = (color & 0x0F) as u8;
        let both = (c << 4) | c;
        let end = x + w;
        let mut xx = x;

        if xx & 1 == 1 {
            merge(&mut buf[row + (xx >> 1)], 0x0F, both);
            xx += 1;
        }

        let pairs_end = xx + ((end - xx) & !1);
        buf[row + (xx >> 1)..row + (pairs_end >> 1)].fill(both);

        if pairs_end < end {
            merge(&mut buf[row + (pairs_end >> 1)], 0xF0, both);
        }
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        let c = (color & 0x0F) as u8;
        let both = (c << 4) | c;
        let row_bytes = layout.stride >> 1;
        let full = layout.width >> 1;
        let odd = layout.width & 1 == 1;

        if !odd && row_bytes == full {
            buf[..layout.height * row_bytes].fill(both);
            return;
        }

        for y in 0..layout.height {
            let row = y * row_bytes;
            buf[row..row + full].fill(both);
            if odd {
                merge(&mut buf[row + full], 0xF0, both);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/gs4_hmsb.rs"]
mod tests;

use super::{Layout, PixelCodec, merge};

/// 1 bpp, each byte holds a column of 8 vertically stacked pixels ("page").
pub(crate) struct MonoVlsb;

impl MonoVlsb {
    #[inline]
    fn locate(layout: &Layout, x: usize, y: usize) -> (usize, u8) {
        ((y >> 3) * layout.stride + x, 1 << (y & 7))
    }
}

impl PixelCodec for MonoVlsb {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        let (index, mask) = Self::locate(layout, x, y);
        u32::from(buf[index] & mask != 0)
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        let (index, mask) = Self::locate(layout, x, y);
        if color != 0 {
            buf[index] |= mask;
        } else {
            buf[index] &= !mask;
        }
    }

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        let (start, mask) = Self::locate(layout, x, y);
        let run = &mut buf[start..start + w];
        if color != 0 {
            run.iter_mut().for_each(|b| *b |= mask);
        } else {
            run.iter_mut().for_each(|b| *b &= !mask);
        }
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        let pattern = if color != 0 { 0xFF } else { 0x00 };
        let Layout {
            width,
            height,
            stride,
        } = *layout;
        let full_pages = height / 8;

        if stride == width {
            buf[..full_pages * width].fill(pattern);
        } else {
            for page in 0..full_pages {
                let start = page * stride;
                buf[start..start + width].fill(pattern);
            }
        }

        // Last page only partially belongs to the surface; keep the unused high bits.
        let rem = height & 7;
        if rem != 0 {
            let mask = (1u8 << rem) - 1;
            let start = full_pages * stride;
            for b in &mut buf[start..start + width] {
                merge(b, mask, pattern);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/mono_vlsb.rs"]
mod tests;

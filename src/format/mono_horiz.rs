//! MONO_HLSB and MONO_HMSB: 1 bpp, 8 horizontally adjacent pixels per byte.
//!
//! The two formats differ only in which end of the byte holds the leftmost
//! pixel, so both codecs share the helpers below.

use super::{Layout, PixelCodec, merge};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BitOrder {
    /// Leftmost pixel in bit 7 (MONO_HLSB).
    MsbLeft,
    /// Leftmost pixel in bit 0 (MONO_HMSB).
    LsbLeft,
}

impl BitOrder {
    /// Mask covering in-byte pixel offsets `first..=last`.
    #[inline]
    fn span(self, first: usize, last: usize) -> u8 {
        match self {
            BitOrder::MsbLeft => (0xFFu8 >> first) & (0xFFu8 << (7 - last)),
            BitOrder::LsbLeft => (0xFFu8 << first) & (0xFFu8 >> (7 - last)),
        }
    }
}

#[inline]
fn row_start(layout: &Layout, y: usize) -> usize {
    y * (layout.stride >> 3)
}

#[inline]
fn pattern(color: u32) -> u8 {
    if color != 0 { 0xFF } else { 0x00 }
}

fn get(order: BitOrder, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
    let index = row_start(layout, y) + (x >> 3);
    let off = x & 7;
    u32::from(buf[index] & order.span(off, off) != 0)
}

fn set(order: BitOrder, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
    let index = row_start(layout, y) + (x >> 3);
    let off = x & 7;
    merge(&mut buf[index], order.span(off, off), pattern(color));
}

/// Partial first byte, whole middle bytes, partial last byte.
fn hline(order: BitOrder, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
    let row = row_start(layout, y);
    let value = pattern(color);
    let last = x + w - 1;
    let (first_byte, last_byte) = (row + (x >> 3), row + (last >> 3));

    if first_byte == last_byte {
        merge(&mut buf[first_byte], order.span(x & 7, last & 7), value);
        return;
    }

    merge(&mut buf[first_byte], order.span(x & 7, 7), value);
    buf[first_byte + 1..last_byte].fill(value);
    merge(&mut buf[last_byte], order.span(0, last & 7), value);
}

fn fill_all(order: BitOrder, buf: &mut [u8], layout: &Layout, color: u32) {
    let value = pattern(color);
    let row_bytes = layout.stride >> 3;
    let full = layout.width >> 3;
    let rem = layout.width & 7;

    if rem == 0 && row_bytes == full {
        buf[..layout.height * row_bytes].fill(value);
        return;
    }

    for y in 0..layout.height {
        let row = y * row_bytes;
        buf[row..row + full].fill(value);
        if rem != 0 {
            merge(&mut buf[row + full], order.span(0, rem - 1), value);
        }
    }
}

pub(crate) struct MonoHlsb;

impl PixelCodec for MonoHlsb {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        get(BitOrder::MsbLeft, buf, layout, x, y)
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        set(BitOrder::MsbLeft, buf, layout, x, y, color)
    }

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        hline(BitOrder::MsbLeft, buf, layout, x, y, w, color)
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        fill_all(BitOrder::MsbLeft, buf, layout, color)
    }
}

pub(crate) struct MonoHmsb;

impl PixelCodec for MonoHmsb {
    fn get(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> u32 {
        get(BitOrder::LsbLeft, buf, layout, x, y)
    }

    fn set(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, color: u32) {
        set(BitOrder::LsbLeft, buf, layout, x, y, color)
    }

    fn hline(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, w: usize, color: u32) {
        hline(BitOrder::LsbLeft, buf, layout, x, y, w, color)
    }

    fn fill_all(&self, buf: &mut [u8], layout: &Layout, color: u32) {
        fill_all(BitOrder::LsbLeft, buf, layout, color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/mono_horiz.rs"]
mod tests;

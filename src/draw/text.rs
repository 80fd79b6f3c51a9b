use crate::draw::font::glyph;
use crate::surface::Surface;

/// Horizontal advance per glyph.
const ADVANCE: i64 = 8;

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Draws `s` with the built-in 8x8 font, top-left corner at `(x, y)`.
    ///
    /// One glyph per byte, so multi-byte UTF-8 sequences draw one fallback
    /// glyph per byte. Drawing stops at the first NUL byte. Only set bits are
    /// written; the background is untouched.
    pub fn text(&mut self, s: &str, x: i32, y: i32, color: u32) {
        let width = i64::from(self.width());
        let (y, mut x0) = (i64::from(y), i64::from(x));
        for byte in s.bytes().take_while(|&b| b != 0) {
            if x0 >= width {
                break;
            }
            for (col, &bits) in glyph(byte).iter().enumerate() {
                let px = x0 + col as i64;
                if px < 0 || px >= width {
                    continue;
                }
                let mut line = bits;
                let mut py = y;
                while line != 0 {
                    if line & 1 != 0 {
                        self.plot(px, py, color);
                    }
                    line >>= 1;
                    py += 1;
                }
            }
            x0 += ADVANCE;
        }
    }
}

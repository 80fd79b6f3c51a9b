use crate::surface::Surface;

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Shifts the contents by `(xstep, ystep)` pixels in place.
    ///
    /// Pixels uncovered at the trailing edges keep their previous values.
    /// A step at least as large as the surface in either axis is a no-op.
    pub fn scroll(&mut self, xstep: i32, ystep: i32) {
        let width = self.layout.width as i64;
        let height = self.layout.height as i64;
        let (xstep, ystep) = (i64::from(xstep), i64::from(ystep));
        if xstep.abs() >= width || ystep.abs() >= height {
            return;
        }

        // Walk away from the direction of travel so every source pixel is
        // read before it is overwritten.
        let (sx, xend, dx) = if xstep < 0 {
            (0, width + xstep, 1)
        } else {
            (width - 1, xstep - 1, -1)
        };
        let (mut y, yend, dy) = if ystep < 0 {
            (0, height + ystep, 1)
        } else {
            (height - 1, ystep - 1, -1)
        };

        let codec = self.codec;
        let layout = self.layout;
        let buf = self.buf.as_mut();
        while y != yend {
            let mut x = sx;
            while x != xend {
                let c = codec.get(buf, &layout, (x - xstep) as usize, (y - ystep) as usize);
                codec.set(buf, &layout, x as usize, y as usize, c);
                x += dx;
            }
            y += dy;
        }
    }
}

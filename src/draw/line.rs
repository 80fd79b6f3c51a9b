use crate::surface::Surface;

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Bresenham line from `(x1, y1)` to `(x2, y2)` inclusive.
    ///
    /// Each point is clipped individually; the end point is always plotted
    /// when it lies on the surface.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let (x2, y2) = (i64::from(x2), i64::from(y2));

        let (mut dx, mut sx) = (x2 - x1, 1i64);
        if dx <= 0 {
            dx = -dx;
            sx = -1;
        }
        let (mut dy, mut sy) = (y2 - y1, 1i64);
        if dy <= 0 {
            dy = -dy;
            sy = -1;
        }

        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut dx, &mut dy);
            std::mem::swap(&mut sx, &mut sy);
        }

        let mut e = 2 * dy - dx;
        for _ in 0..dx {
            let (px, py) = if steep { (y1, x1) } else { (x1, y1) };
            self.plot(px, py, color);
            while e >= 0 {
                y1 += sy;
                e -= 2 * dx;
            }
            x1 += sx;
            e += 2 * dy;
        }
        self.plot(x2, y2, color);
    }

    pub(super) fn plot(&mut self, x: i64, y: i64, color: u32) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }
}

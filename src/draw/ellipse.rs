use std::ops::BitOr;

use crate::surface::Surface;

/// Quadrant selection for [`Surface::ellipse`].
///
/// Screen coordinates: y grows downward, so `Q1` is the upper-right quarter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quadrants(u8);

impl Quadrants {
    /// Upper right (+x, -y).
    pub const Q1: Self = Self(0x1);
    /// Upper left (-x, -y).
    pub const Q2: Self = Self(0x2);
    /// Lower left (-x, +y).
    pub const Q3: Self = Self(0x4);
    /// Lower right (+x, +y).
    pub const Q4: Self = Self(0x8);
    /// The whole ellipse.
    pub const ALL: Self = Self(0xF);

    /// Builds a mask from the low four bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// The raw mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// True when every quadrant in `other` is selected.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for Quadrants {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for Quadrants {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Midpoint ellipse centred on `(cx, cy)` with radii `rx`, `ry`.
    ///
    /// `fill` draws horizontal spans from the centre column outward in each
    /// selected quadrant; otherwise only the boundary points are plotted.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: u32,
        fill: bool,
        quadrants: Quadrants,
    ) {
        // Error terms grow with the cube of the radius; i128 holds them for any i32 radius.
        let (a, b) = (i128::from(rx), i128::from(ry));
        let two_a2 = 2 * a * a;
        let two_b2 = 2 * b * b;

        // Region where the slope magnitude is below 1: step y every time.
        let mut x = i64::from(rx);
        let mut y = 0i64;
        let mut xchange = b * b * (1 - 2 * a);
        let mut ychange = a * a;
        let mut err = 0i128;
        let mut stoppingx = two_b2 * a;
        let mut stoppingy = 0i128;
        while stoppingx >= stoppingy {
            self.ellipse_points(cx, cy, x, y, color, fill, quadrants);
            y += 1;
            stoppingy += two_a2;
            err += ychange;
            ychange += two_a2;
            if 2 * err + xchange > 0 {
                x -= 1;
                stoppingx -= two_b2;
                err += xchange;
                xchange += two_b2;
            }
        }

        // Remaining region: step x every time.
        x = 0;
        y = i64::from(ry);
        xchange = b * b;
        ychange = a * a * (1 - 2 * b);
        err = 0;
        stoppingx = 0;
        stoppingy = two_a2 * b;
        while stoppingx <= stoppingy {
            self.ellipse_points(cx, cy, x, y, color, fill, quadrants);
            x += 1;
            stoppingx += two_b2;
            err += xchange;
            xchange += two_b2;
            if 2 * err + ychange > 0 {
                y -= 1;
                stoppingy -= two_a2;
                err += ychange;
                ychange += two_a2;
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn ellipse_points(
        &mut self,
        cx: i32,
        cy: i32,
        x: i64,
        y: i64,
        color: u32,
        fill: bool,
        quadrants: Quadrants,
    ) {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let span = |v: i64| i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX });
        if fill {
            let w = span(x + 1);
            if quadrants.contains(Quadrants::Q1) {
                self.fill_rect(span(cx), span(cy - y), w, 1, color);
            }
            if quadrants.contains(Quadrants::Q2) {
                self.fill_rect(span(cx - x), span(cy - y), w, 1, color);
            }
            if quadrants.contains(Quadrants::Q3) {
                self.fill_rect(span(cx - x), span(cy + y), w, 1, color);
            }
            if quadrants.contains(Quadrants::Q4) {
                self.fill_rect(span(cx), span(cy + y), w, 1, color);
            }
        } else {
            if quadrants.contains(Quadrants::Q1) {
                self.plot(cx + x, cy - y, color);
            }
            if quadrants.contains(Quadrants::Q2) {
                self.plot(cx - x, cy - y, color);
            }
            if quadrants.contains(Quadrants::Q3) {
                self.plot(cx - x, cy + y, color);
            }
            if quadrants.contains(Quadrants::Q4) {
                self.plot(cx + x, cy + y, color);
            }
        }
    }
}

use crate::surface::Surface;

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Closed polygon with vertices `coords` offset by `(x, y)`.
    ///
    /// The outline walks the vertices backwards from the first one, closing the
    /// path. The filled form is an integer scanline fill: edge crossings are
    /// rounded to the nearest column and spanned pairwise, and vertices that
    /// are local minima or maxima are patched with a single pixel (or the flat
    /// edge itself) on the row they sit on.
    pub fn poly(&mut self, x: i32, y: i32, coords: &[(i32, i32)], color: u32, fill: bool) {
        if coords.is_empty() {
            return;
        }
        if fill {
            self.fill_poly(x, y, coords, color);
        } else {
            let (x, y) = (i64::from(x), i64::from(y));
            for ((x1, y1), (x2, y2)) in edges(coords) {
                self.line_i64(x + x1, y + y1, x + x2, y + y2, color);
            }
        }
    }

    fn fill_poly(&mut self, x: i32, y: i32, coords: &[(i32, i32)], color: u32) {
        let (x, y) = (i64::from(x), i64::from(y));
        let (mut y_min, mut y_max) = (i64::MAX, i64::MIN);
        for &(_, py) in coords {
            y_min = y_min.min(i64::from(py));
            y_max = y_max.max(i64::from(py));
        }
        // Rows that land off the surface draw nothing.
        let y_min = y_min.max(-y);
        let y_max = y_max.min(i64::from(self.height()) - 1 - y);

        let mut nodes: Vec<i64> = Vec::with_capacity(coords.len());
        for row in y_min..=y_max {
            nodes.clear();
            for ((px1, py1), (px2, py2)) in edges(coords) {
                if py1 != py2 && ((py1 > row && py2 <= row) || (py1 <= row && py2 > row)) {
                    nodes.push(crossing(px1, py1, px2, py2, row));
                } else if row == py1.max(py2) {
                    if py1 < py2 {
                        self.plot(x + px2, y + py2, color);
                    } else if py2 < py1 {
                        self.plot(x + px1, y + py1, color);
                    } else {
                        self.line_i64(x + px1, y + py1, x + px2, y + py2, color);
                    }
                }
            }
            nodes.sort_unstable();
            for pair in nodes.chunks_exact(2) {
                self.fill_span(x + pair[0], y + row, pair[1] - pair[0] + 1, color);
            }
        }
    }

    fn line_i64(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: u32) {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.line(clamp(x1), clamp(y1), clamp(x2), clamp(y2), color);
    }

    fn fill_span(&mut self, x: i64, y: i64, w: i64, color: u32) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            let w = i32::try_from(w).unwrap_or(i32::MAX);
            self.fill_rect(x, y, w, 1, color);
        }
    }
}

/// Column where the edge crosses `row`, in 1/32 pixel fixed point rounded to
/// the nearest column. Division truncates toward zero.
fn crossing(px1: i64, py1: i64, px2: i64, py2: i64, row: i64) -> i64 {
    let step = 32 * i128::from(px2 - px1) * i128::from(row - py1) / i128::from(py2 - py1);
    ((32 * i128::from(px1) + step + 16) / 32) as i64
}

/// Edges in drawing order: first vertex to last, then back down to the first.
fn edges(coords: &[(i32, i32)]) -> impl Iterator<Item = ((i64, i64), (i64, i64))> + '_ {
    let widen = |&(px, py): &(i32, i32)| (i64::from(px), i64::from(py));
    let first = coords.first().map(widen);
    let rest = coords.iter().rev().map(widen);
    first
        .into_iter()
        .chain(rest.clone())
        .zip(rest)
}

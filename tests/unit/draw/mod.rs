use super::*;
use crate::format::PixelFormat;
use crate::surface::Surface;

fn canvas(w: u16, h: u16) -> Surface<Vec<u8>> {
    Surface::alloc(w, h, PixelFormat::Gs8).unwrap()
}

fn ascii(s: &Surface<Vec<u8>>) -> Vec<String> {
    (0..i32::from(s.height()))
        .map(|y| {
            (0..i32::from(s.width()))
                .map(|x| if s.get_pixel(x, y) != 0 { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn line_shallow_steps_once() {
    let mut s = canvas(5, 2);
    s.line(0, 0, 4, 1, 1);
    assert_eq!(ascii(&s), ["##...", "..###"]);
}

#[test]
fn line_steep_swaps_axes() {
    let mut s = canvas(2, 5);
    s.line(0, 0, 1, 4, 1);
    assert_eq!(ascii(&s), ["#.", "#.", ".#", ".#", ".#"]);
}

#[test]
fn line_single_point_and_clipping() {
    let mut s = canvas(4, 4);
    s.line(2, 2, 2, 2, 1);
    assert_eq!(ascii(&s), ["....", "....", "..#.", "...."]);

    let mut s = canvas(4, 4);
    s.line(-2, -2, 5, 5, 1);
    assert_eq!(ascii(&s), ["#...", ".#..", "..#.", "...#"]);
}

#[test]
fn ellipse_outline_radius_two() {
    let mut s = canvas(7, 7);
    s.ellipse(3, 3, 2, 2, 1, false, Quadrants::ALL);
    assert_eq!(
        ascii(&s),
        [
            ".......", //
            "..###..", //
            ".#...#.", //
            ".#...#.", //
            ".#...#.", //
            "..###..", //
            ".......",
        ]
    );
}

#[test]
fn ellipse_with_huge_radius_draws_its_flat_top() {
    let mut s = canvas(16, 16);
    s.ellipse(8, 8, 3_000_000, 3_000_000, 1, false, Quadrants::ALL);
    assert!(s.as_bytes().iter().all(|&b| b == 0));

    // Centre far below the surface: only the top arc crosses row 8.
    s.ellipse(8, 3_000_008, 3_000_000, 3_000_000, 1, false, Quadrants::ALL);
    let rows = ascii(&s);
    assert_eq!(rows[8], "################");
    assert!(rows.iter().enumerate().all(|(y, row)| y == 8 || !row.contains('#')));
}

#[test]
fn ellipse_filled_single_quadrant() {
    let mut s = canvas(7, 7);
    s.ellipse(3, 3, 2, 2, 1, true, Quadrants::Q1);
    assert_eq!(
        ascii(&s),
        [
            ".......", //
            "...##..", //
            "...###.", //
            "...###.", //
            ".......", //
            ".......", //
            ".......",
        ]
    );
}

#[test]
fn quadrant_masks_combine() {
    let q = Quadrants::Q1 | Quadrants::Q3;
    assert_eq!(q.bits(), 0b0101);
    assert!(q.contains(Quadrants::Q3));
    assert!(!q.contains(Quadrants::Q2));
    assert_eq!(Quadrants::from_bits(0xFF), Quadrants::ALL);
    assert_eq!(Quadrants::default(), Quadrants::ALL);
}

const TRIANGLE: [(i32, i32); 3] = [(0, 0), (4, 0), (4, 4)];

#[test]
fn poly_outline_closes_path() {
    let mut s = canvas(5, 5);
    s.poly(0, 0, &TRIANGLE, 1, false);
    assert_eq!(ascii(&s), ["#####", ".#..#", "..#.#", "...##", "....#"]);
}

#[test]
fn poly_fill_patches_bottom_vertex() {
    let mut s = canvas(5, 5);
    s.poly(0, 0, &TRIANGLE, 1, true);
    assert_eq!(ascii(&s), ["#####", ".####", "..###", "...##", "....#"]);
}

#[test]
fn poly_fill_offset_and_clipped() {
    let mut s = canvas(5, 5);
    s.poly(-2, 2, &TRIANGLE, 1, true);
    assert_eq!(ascii(&s), [".....", ".....", "###..", "###..", "###.."]);

    let mut s = canvas(5, 5);
    s.poly(0, 0, &[], 1, true);
    s.poly(0, 0, &[], 1, false);
    assert!(s.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn glyph_lookup_falls_back_to_del() {
    assert_eq!(font::glyph(b' '), &[0; 8]);
    assert_eq!(font::glyph(0x1F), font::glyph(127));
    assert_eq!(font::glyph(0xC3), font::glyph(127));
    assert_eq!(font::FONT_8X8.len(), 96);
}

#[test]
fn text_draws_column_glyphs() {
    let mut s = canvas(8, 8);
    s.text("A", 0, 0, 1);
    assert_eq!(
        ascii(&s),
        [
            "...##...", //
            "..####..", //
            ".##..##.", //
            ".######.", //
            ".##..##.", //
            ".##..##.", //
            ".##..##.", //
            "........",
        ]
    );
}

#[test]
fn text_clips_and_advances_per_byte() {
    let mut a = canvas(8, 8);
    a.text("AB", -8, 0, 1);
    let mut b = canvas(8, 8);
    b.text("B", 0, 0, 1);
    assert_eq!(a.as_bytes(), b.as_bytes());

    // Two UTF-8 bytes draw two fallback glyphs.
    let mut s = canvas(16, 8);
    s.text("é", 0, 0, 1);
    assert_eq!(s.get_pixel(0, 1), 1);
    assert_eq!(s.get_pixel(8, 1), 1);
    assert_eq!(s.get_pixel(0, 0), 0);
}

#[test]
fn text_stops_at_nul() {
    let mut a = canvas(24, 8);
    a.text("A\0B", 0, 0, 1);
    let mut b = canvas(24, 8);
    b.text("A", 0, 0, 1);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

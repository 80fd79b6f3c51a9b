use super::*;

fn row24() -> Layout {
    Layout {
        width: 24,
        height: 2,
        stride: 24,
    }
}

#[test]
fn span_masks_follow_bit_order() {
    assert_eq!(BitOrder::MsbLeft.span(0, 0), 0x80);
    assert_eq!(BitOrder::MsbLeft.span(7, 7), 0x01);
    assert_eq!(BitOrder::MsbLeft.span(5, 7), 0x07);
    assert_eq!(BitOrder::MsbLeft.span(0, 2), 0xE0);
    assert_eq!(BitOrder::LsbLeft.span(0, 0), 0x01);
    assert_eq!(BitOrder::LsbLeft.span(7, 7), 0x80);
    assert_eq!(BitOrder::LsbLeft.span(5, 7), 0xE0);
    assert_eq!(BitOrder::LsbLeft.span(0, 2), 0x07);
    assert_eq!(BitOrder::LsbLeft.span(0, 7), 0xFF);
}

#[test]
fn hlsb_hline_spanning_three_bytes() {
    let mut buf = vec![0u8; 6];
    MonoHlsb.hline(&mut buf, &row24(), 5, 0, 14, 1);
    // Pixels 5..=18: bits 2..0 of byte 0, all of byte 1, bits 7..5 of byte 2.
    assert_eq!(buf, vec![0x07, 0xFF, 0xE0, 0, 0, 0]);
}

#[test]
fn hmsb_hline_spanning_three_bytes() {
    let mut buf = vec![0u8; 6];
    MonoHmsb.hline(&mut buf, &row24(), 5, 0, 14, 1);
    assert_eq!(buf, vec![0xE0, 0xFF, 0x07, 0, 0, 0]);
}

#[test]
fn hline_clear_preserves_outside_bits() {
    let mut buf = vec![0xFFu8; 6];
    MonoHlsb.hline(&mut buf, &row24(), 5, 1, 14, 0);
    assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0xF8, 0x00, 0x1F]);

    let mut buf = vec![0xFFu8; 6];
    MonoHmsb.hline(&mut buf, &row24(), 5, 1, 14, 0);
    assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0x1F, 0x00, 0xF8]);
}

#[test]
fn hline_within_single_byte() {
    let mut buf = vec![0u8; 6];
    MonoHlsb.hline(&mut buf, &row24(), 9, 0, 3, 1);
    assert_eq!(buf[1], 0x70);
    let mut buf = vec![0u8; 6];
    MonoHmsb.hline(&mut buf, &row24(), 9, 0, 3, 1);
    assert_eq!(buf[1], 0x0E);
}

#[test]
fn hline_two_adjacent_partial_bytes() {
    let mut buf = vec![0u8; 6];
    MonoHmsb.hline(&mut buf, &row24(), 6, 0, 4, 1);
    assert_eq!(&buf[..3], &[0xC0, 0x03, 0x00]);
}

#[test]
fn hline_matches_per_pixel_set_for_every_window() {
    let l = Layout {
        width: 21,
        height: 1,
        stride: 24,
    };
    for x in 0..21 {
        for w in 1..=(21 - x) {
            let mut fast = vec![0x5Au8; 3];
            let mut slow = fast.clone();
            MonoHlsb.hline(&mut fast, &l, x, 0, w, 1);
            for xx in x..x + w {
                MonoHlsb.set(&mut slow, &l, xx, 0, 1);
            }
            assert_eq!(fast, slow, "hlsb x={x} w={w}");

            let mut fast = vec![0xA5u8; 3];
            let mut slow = fast.clone();
            MonoHmsb.hline(&mut fast, &l, x, 0, w, 0);
            for xx in x..x + w {
                MonoHmsb.set(&mut slow, &l, xx, 0, 0);
            }
            assert_eq!(fast, slow, "hmsb x={x} w={w}");
        }
    }
}

#[test]
fn fill_all_masks_partial_trailing_byte() {
    let l = Layout {
        width: 10,
        height: 2,
        stride: 16,
    };
    let mut buf = vec![0u8; 4];
    MonoHlsb.fill_all(&mut buf, &l, 1);
    assert_eq!(buf, vec![0xFF, 0xC0, 0xFF, 0xC0]);

    let mut buf = vec![0u8; 4];
    MonoHmsb.fill_all(&mut buf, &l, 1);
    assert_eq!(buf, vec![0xFF, 0x03, 0xFF, 0x03]);
}

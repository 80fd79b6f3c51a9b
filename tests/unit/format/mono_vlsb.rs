use super::*;

fn layout(width: usize, height: usize, stride: usize) -> Layout {
    Layout {
        width,
        height,
        stride,
    }
}

#[test]
fn first_column_bits_stack_top_to_bottom() {
    let l = layout(20, 32, 20);
    let mut buf = vec![0u8; 80];
    MonoVlsb.set(&mut buf, &l, 0, 0, 1);
    MonoVlsb.set(&mut buf, &l, 0, 1, 1);
    MonoVlsb.set(&mut buf, &l, 0, 7, 1);
    assert_eq!(buf[0], 0x83);

    MonoVlsb.set(&mut buf, &l, 0, 8, 1);
    assert_eq!(buf[20], 0x01);
    MonoVlsb.set(&mut buf, &l, 0, 1, 0);
    assert_eq!(buf[0], 0x81);
}

#[test]
fn hline_sets_one_bit_across_bytes() {
    let l = layout(10, 16, 12);
    let mut buf = vec![0u8; 22];
    MonoVlsb.hline(&mut buf, &l, 2, 11, 5, 1);
    for (i, b) in buf.iter().enumerate() {
        let expected = if (14..19).contains(&i) { 0x08 } else { 0 };
        assert_eq!(*b, expected, "byte {i}");
    }
    MonoVlsb.hline(&mut buf, &l, 3, 11, 2, 0);
    assert_eq!(&buf[14..19], &[0x08, 0, 0, 0x08, 0x08]);
}

#[test]
fn fill_all_keeps_unused_bits_of_last_page() {
    let l = layout(4, 10, 4);
    let mut buf = vec![0xF0u8; 8];
    MonoVlsb.fill_all(&mut buf, &l, 1);
    assert_eq!(&buf[..4], &[0xFF; 4]);
    // Rows 8 and 9 live in bits 0..2 of the second page.
    assert_eq!(&buf[4..], &[0xF3; 4]);

    MonoVlsb.fill_all(&mut buf, &l, 0);
    assert_eq!(&buf[..4], &[0x00; 4]);
    assert_eq!(&buf[4..], &[0xF0; 4]);
}

#[test]
fn fill_all_respects_stride_padding() {
    let l = layout(3, 8, 5);
    let mut buf = vec![0u8; 5];
    MonoVlsb.fill_all(&mut buf, &l, 1);
    assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0x00, 0x00]);
}

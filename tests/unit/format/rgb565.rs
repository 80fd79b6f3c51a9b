use super::*;

#[test]
fn pixels_are_little_endian_words() {
    let l = Layout {
        width: 10,
        height: 10,
        stride: 10,
    };
    let mut buf = vec![0u8; 200];
    Rgb565.set(&mut buf, &l, 3, 2, 0xF800);
    let i = (2 * 10 + 3) * 2;
    assert_eq!(&buf[i..i + 2], &[0x00, 0xF8]);
    assert_eq!(Rgb565.get(&buf, &l, 3, 2), 0xF800);
}

#[test]
fn hline_and_fill_write_whole_words() {
    let l = Layout {
        width: 3,
        height: 2,
        stride: 4,
    };
    let mut buf = vec![0u8; 14];
    Rgb565.hline(&mut buf, &l, 1, 1, 2, 0x1234);
    assert_eq!(&buf[8..14], &[0x00, 0x00, 0x34, 0x12, 0x34, 0x12]);

    Rgb565.fill_all(&mut buf, &l, 0xABCD);
    assert_eq!(
        buf,
        vec![
            0xCD, 0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0x00, 0x00, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD, 0xAB
        ]
    );
}

#[test]
fn rgb565_packs_channels() {
    assert_eq!(rgb565(0xFF, 0, 0), 0xF800);
    assert_eq!(rgb565(0, 0xFF, 0), 0x07E0);
    assert_eq!(rgb565(0, 0, 0xFF), 0x001F);
    assert_eq!(rgb565(0xFF, 0xFF, 0xFF), 0xFFFF);
}

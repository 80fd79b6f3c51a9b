use super::*;
use crate::surface::SurfaceDesc;

#[test]
fn clip_inside_and_partially_outside() {
    let c = BlitClip::new((10, 8), (4, 4), 2, 3).unwrap();
    assert_eq!(
        c,
        BlitClip {
            dst_x0: 2,
            dst_y0: 3,
            src_x0: 0,
            src_y0: 0,
            cols: 4,
            rows: 4
        }
    );

    let c = BlitClip::new((10, 8), (4, 4), -1, 6).unwrap();
    assert_eq!((c.dst_x0, c.src_x0, c.cols), (0, 1, 3));
    assert_eq!((c.dst_y0, c.src_y0, c.rows), (6, 0, 2));
}

#[test]
fn clip_rejects_off_surface_placements() {
    assert_eq!(BlitClip::new((10, 8), (4, 4), 10, 0), None);
    assert_eq!(BlitClip::new((10, 8), (4, 4), 0, 8), None);
    assert_eq!(BlitClip::new((10, 8), (4, 4), -4, 0), None);
    assert_eq!(BlitClip::new((10, 8), (4, 4), 0, -4), None);
    assert!(BlitClip::new((10, 8), (4, 4), -3, -3).is_some());
    assert_eq!(BlitClip::new((10, 8), (4, 4), i32::MIN, 0), None);
}

fn patterned(format: PixelFormat, w: u16, h: u16, stride: u16) -> Surface<Vec<u8>> {
    let mut s = SurfaceDesc::new(w, h, format)
        .with_stride(stride)
        .alloc()
        .unwrap();
    for y in 0..i32::from(h) {
        for x in 0..i32::from(w) {
            s.set_pixel(x, y, (x * 7 + y * 13) as u32 * 0x0101);
        }
    }
    s
}

#[test]
fn byte_copy_matches_per_pixel_path() {
    for format in [PixelFormat::Gs8, PixelFormat::Rgb565] {
        let src = patterned(format, 5, 4, 7);
        for key in [None, Some(src.get_pixel(1, 1)), Some(0xDEAD)] {
            for (x, y) in [(0, 0), (-2, 1), (4, -1), (6, 3)] {
                let mut fast = patterned(format, 9, 6, 9);
                let mut slow = patterned(format, 9, 6, 9);
                let clip = BlitClip::new((9, 6), (5, 4), x, y).unwrap();
                fast.blit_bytes(&src.view(), &clip, key);
                slow.blit_pixels(&src.view(), None, &clip, key);
                assert_eq!(
                    fast.as_bytes(),
                    slow.as_bytes(),
                    "{format} at ({x},{y}) key={key:?}"
                );
            }
        }
    }
}

#[test]
fn palette_index_past_width_reads_zero() {
    let pal = Surface::new(vec![0x11u8, 0x22], 2, 1, PixelFormat::Gs8).unwrap();
    let src = Surface::new(vec![0u8, 1, 5], 3, 1, PixelFormat::Gs8).unwrap();
    let mut dst = Surface::new(vec![0xFFu8; 3], 3, 1, PixelFormat::Gs8).unwrap();
    dst.blit_with(&src, 0, 0, BlitOptions::default().with_palette(&pal))
        .unwrap();
    assert_eq!(dst.as_bytes(), &[0x11, 0x22, 0x00]);
}

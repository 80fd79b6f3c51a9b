use std::path::PathBuf;

use framebuf::{BlitOptions, PixelFormat, Quadrants, Surface, SurfaceDesc, rgb565};

fn parse_args() -> anyhow::Result<(PixelFormat, PathBuf)> {
    let mut args = std::env::args().skip(1);
    let format = match args.next() {
        Some(name) => name.parse::<PixelFormat>()?,
        None => PixelFormat::Rgb565,
    };
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("target/framebuf_{format}.png")));
    Ok((format, out))
}

fn white(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::Rgb565 => u32::from(rgb565(0xFF, 0xFF, 0xFF)),
        other => other.value_mask(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let (format, out) = parse_args()?;
    let desc = SurfaceDesc::new(128, 64, format);
    let mut fb = desc.alloc()?;
    let fg = white(format);

    fb.fill(0);
    fb.rect(0, 0, 128, 64, fg, false);
    fb.text("framebuf", 4, 4, fg);
    fb.text(format.name(), 4, 14, fg);
    fb.line(0, 63, 127, 24, fg);
    fb.ellipse(96, 40, 24, 14, fg, false, Quadrants::ALL);
    fb.ellipse(96, 40, 10, 6, fg, true, Quadrants::Q1 | Quadrants::Q3);
    fb.poly(8, 30, &[(0, 0), (30, 4), (18, 26), (4, 18)], fg, true);

    // Stamp a 1-bit checkerboard through a two-entry palette.
    let mut tile = Surface::alloc(8, 8, PixelFormat::MonoHlsb)?;
    for y in 0..8 {
        for x in 0..8 {
            tile.set_pixel(x, y, ((x + y) & 1) as u32);
        }
    }
    let mut palette = SurfaceDesc::new(2, 1, format).alloc()?;
    palette.set_pixel(1, 0, fg);
    fb.blit_with(
        &tile,
        56,
        46,
        BlitOptions::default().with_palette(&palette).with_key(0),
    )?;

    if let Some(dir) = out.parent() {
        std::fs::create_dir_all(dir)?;
    }
    fb.save_png(&out)?;
    println!("wrote {} ({} bytes of {format})", out.display(), fb.as_bytes().len());
    Ok(())
}

//! Surface-to-surface copies with clipping, an optional transparency key and
//! an optional palette.

use crate::foundation::error::{FramebufError, FramebufResult};
use crate::format::PixelFormat;
use crate::surface::{Surface, SurfaceView};

/// Pixels to blit from.
#[derive(Debug)]
pub enum BlitSource<'a> {
    /// An existing surface, borrowed read-only.
    View(SurfaceView<'a>),
    /// Packed bytes described in place; validated like a surface.
    Raw {
        /// Pixel data.
        buf: &'a [u8],
        /// Width in pixels.
        width: u16,
        /// Height in pixels.
        height: u16,
        /// Pixel format of `buf`.
        format: PixelFormat,
        /// Row pitch in pixels; `None` means `width`.
        stride: Option<u16>,
    },
}

impl<'a> BlitSource<'a> {
    /// Raw source with stride == width.
    pub fn raw(buf: &'a [u8], width: u16, height: u16, format: PixelFormat) -> Self {
        BlitSource::Raw {
            buf,
            width,
            height,
            format,
            stride: None,
        }
    }

    fn resolve(self) -> FramebufResult<SurfaceView<'a>> {
        match self {
            BlitSource::View(view) => Ok(view),
            BlitSource::Raw {
                buf,
                width,
                height,
                format,
                stride,
            } => Surface::with_stride(buf, width, height, format, stride.unwrap_or(width)),
        }
    }
}

impl<'a, B: AsRef<[u8]>> From<&'a Surface<B>> for BlitSource<'a> {
    fn from(surface: &'a Surface<B>) -> Self {
        BlitSource::View(surface.view())
    }
}

/// Optional blit behaviour.
#[derive(Debug, Default)]
pub struct BlitOptions<'p> {
    /// Final color (after palette translation) that is not written.
    pub key: Option<u32>,
    /// One-row surface mapping source values to destination colors.
    pub palette: Option<BlitSource<'p>>,
}

impl<'p> BlitOptions<'p> {
    /// Skips pixels whose final color equals `key`.
    pub fn with_key(mut self, key: u32) -> Self {
        self.key = Some(key);
        self
    }

    /// Translates source values through `palette` (height must be 1).
    pub fn with_palette(mut self, palette: impl Into<BlitSource<'p>>) -> Self {
        self.palette = Some(palette.into());
        self
    }
}

/// Overlap of a source placed at `(x, y)` with the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BlitClip {
    pub dst_x0: usize,
    pub dst_y0: usize,
    pub src_x0: usize,
    pub src_y0: usize,
    pub cols: usize,
    pub rows: usize,
}

impl BlitClip {
    pub(crate) fn new(
        dst: (usize, usize),
        src: (usize, usize),
        x: i32,
        y: i32,
    ) -> Option<Self> {
        let (dw, dh) = (dst.0 as i64, dst.1 as i64);
        let (sw, sh) = (src.0 as i64, src.1 as i64);
        let (x, y) = (i64::from(x), i64::from(y));
        if x >= dw || y >= dh || -x >= sw || -y >= sh {
            return None;
        }
        let dst_x0 = x.max(0);
        let dst_y0 = y.max(0);
        let dst_x1 = dw.min(x + sw);
        let dst_y1 = dh.min(y + sh);
        Some(Self {
            dst_x0: dst_x0 as usize,
            dst_y0: dst_y0 as usize,
            src_x0: (-x).max(0) as usize,
            src_y0: (-y).max(0) as usize,
            cols: (dst_x1 - dst_x0) as usize,
            rows: (dst_y1 - dst_y0) as usize,
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Copies `source` with its top-left corner at `(x, y)`, clipped.
    pub fn blit<'s>(
        &mut self,
        source: impl Into<BlitSource<'s>>,
        x: i32,
        y: i32,
    ) -> FramebufResult<()> {
        self.blit_with(source, x, y, BlitOptions::default())
    }

    /// Blit with a transparency key and/or palette.
    ///
    /// Each source value is read, translated through the palette when one is
    /// given, and skipped if it equals the key. A palette taller than one row
    /// is rejected before any geometry is considered.
    #[tracing::instrument(level = "debug", skip(self, source, opts))]
    pub fn blit_with<'s>(
        &mut self,
        source: impl Into<BlitSource<'s>>,
        x: i32,
        y: i32,
        opts: BlitOptions<'_>,
    ) -> FramebufResult<()> {
        let src = source.into().resolve()?;
        let palette = opts.palette.map(BlitSource::resolve).transpose()?;
        if let Some(pal) = &palette
            && pal.layout.height != 1
        {
            tracing::debug!(height = pal.layout.height, "palette must be one row tall");
            return Err(FramebufError::palette(format!(
                "palette height must be 1, got {}",
                pal.layout.height
            )));
        }

        let Some(clip) = BlitClip::new(
            (self.layout.width, self.layout.height),
            (src.layout.width, src.layout.height),
            x,
            y,
        ) else {
            tracing::debug!("blit source lies outside the surface");
            return Ok(());
        };
        tracing::trace!(?clip, "clipped blit");

        if palette.is_none() && src.format == self.format && self.format.bits_per_pixel() >= 8 {
            self.blit_bytes(&src, &clip, opts.key);
        } else {
            self.blit_pixels(&src, palette.as_ref(), &clip, opts.key);
        }
        Ok(())
    }

    fn blit_pixels(
        &mut self,
        src: &SurfaceView<'_>,
        palette: Option<&SurfaceView<'_>>,
        clip: &BlitClip,
        key: Option<u32>,
    ) {
        let codec = self.codec;
        let layout = self.layout;
        let buf = self.buf.as_mut();
        for row in 0..clip.rows {
            for col in 0..clip.cols {
                let mut c = src
                    .codec
                    .get(src.buf, &src.layout, clip.src_x0 + col, clip.src_y0 + row);
                if let Some(pal) = palette {
                    c = match usize::try_from(c) {
                        Ok(i) if i < pal.layout.width => pal.codec.get(pal.buf, &pal.layout, i, 0),
                        _ => 0,
                    };
                }
                if key == Some(c) {
                    continue;
                }
                codec.set(buf, &layout, clip.dst_x0 + col, clip.dst_y0 + row, c);
            }
        }
    }

    /// Same-format copy for whole-byte pixels: rows are copied as byte ranges,
    /// keyed pixels compared as little-endian words.
    fn blit_bytes(&mut self, src: &SurfaceView<'_>, clip: &BlitClip, key: Option<u32>) {
        let bpp = self.format.bits_per_pixel() / 8;
        let n = clip.cols * bpp;
        let dst_pitch = self.layout.stride * bpp;
        let src_pitch = src.layout.stride * bpp;
        let dst = self.buf.as_mut();
        for row in 0..clip.rows {
            let d = (clip.dst_y0 + row) * dst_pitch + clip.dst_x0 * bpp;
            let s = (clip.src_y0 + row) * src_pitch + clip.src_x0 * bpp;
            let dst_row = &mut dst[d..d + n];
            let src_row = &src.buf[s..s + n];
            match key {
                None => dst_row.copy_from_slice(src_row),
                Some(key) => {
                    for (dp, sp) in dst_row.chunks_exact_mut(bpp).zip(src_row.chunks_exact(bpp)) {
                        let c = sp.iter().rev().fold(0u32, |acc, &b| acc << 8 | u32::from(b));
                        if c != key {
                            dp.copy_from_slice(sp);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/blit.rs"]
mod tests;

//! The framebuffer surface: a buffer plus geometry, dispatching every
//! operation to the codec of its pixel format.
//!
//! A `Surface` is generic over its buffer: `Vec<u8>` for an owned surface,
//! `&mut [u8]` to draw into caller memory, `&[u8]` for a read-only view
//! ([`SurfaceView`]) such as a blit source or palette.
//!
//! Drawing takes `&mut self`; a surface is never shared between concurrent
//! writers. Blitting borrows the source immutably and the destination mutably,
//! so a surface cannot be blitted onto itself without copying the source first.

pub(crate) mod blit;
pub(crate) mod desc;
mod scroll;

use std::fmt;

use crate::foundation::clip::{clip_run, in_range, round_up};
use crate::foundation::error::{FramebufError, FramebufResult};
use crate::format::{Layout, PixelCodec, PixelFormat};

pub use blit::{BlitOptions, BlitSource};
pub use desc::SurfaceDesc;

/// A read-only surface borrowing its pixels.
pub type SurfaceView<'a> = Surface<&'a [u8]>;

/// An in-memory pixel surface in one of the packed [`PixelFormat`]s.
pub struct Surface<B> {
    buf: B,
    format: PixelFormat,
    layout: Layout,
    codec: &'static dyn PixelCodec,
}

impl<B> fmt::Debug for Surface<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.layout.width)
            .field("height", &self.layout.height)
            .field("stride", &self.layout.stride)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Checks dimensions and pads the stride to the format's packing granularity.
pub(crate) fn resolve_layout(
    width: u16,
    height: u16,
    stride: u16,
    format: PixelFormat,
) -> FramebufResult<Layout> {
    if width == 0 || height == 0 {
        return Err(FramebufError::validation(format!(
            "invalid framebuffer dimensions {width}x{height}"
        )));
    }
    if stride < width {
        return Err(FramebufError::validation(format!(
            "stride {stride} is smaller than width {width}"
        )));
    }
    Ok(Layout {
        width: usize::from(width),
        height: usize::from(height),
        stride: round_up(usize::from(stride), format.stride_align()),
    })
}

impl<B: AsRef<[u8]>> Surface<B> {
    /// Wraps `buf` as a `width` x `height` surface with stride == width.
    pub fn new(buf: B, width: u16, height: u16, format: PixelFormat) -> FramebufResult<Self> {
        Self::with_stride(buf, width, height, format, width)
    }

    /// Wraps `buf` with an explicit row pitch (in pixels).
    ///
    /// Fails on zero dimensions, `stride < width`, or a buffer shorter than
    /// [`PixelFormat::required_len`].
    #[tracing::instrument(level = "debug", skip(buf))]
    pub fn with_stride(
        buf: B,
        width: u16,
        height: u16,
        format: PixelFormat,
        stride: u16,
    ) -> FramebufResult<Self> {
        let layout = resolve_layout(width, height, stride, format).inspect_err(|e| {
            tracing::debug!(error = %e, "rejecting surface geometry");
        })?;
        let required = format.required_len(layout.width, layout.height, layout.stride);
        let actual = buf.as_ref().len();
        if actual < required {
            tracing::debug!(required, actual, "buffer too small for surface");
            return Err(FramebufError::BufferTooSmall { required, actual });
        }
        Ok(Self {
            buf,
            format,
            layout,
            codec: format.codec(),
        })
    }

    /// Wraps `buf` using the geometry of `desc`.
    pub fn from_desc(buf: B, desc: &SurfaceDesc) -> FramebufResult<Self> {
        Self::with_stride(
            buf,
            desc.width,
            desc.height,
            desc.format,
            desc.stride.unwrap_or(desc.width),
        )
    }

    /// Width in pixels.
    pub fn width(&self) -> u16 {
        self.layout.width as u16
    }

    /// Height in pixels.
    pub fn height(&self) -> u16 {
        self.layout.height as u16
    }

    /// Row pitch in pixels, padded to the format's packing granularity.
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    /// Pixel format of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Geometry of this surface as a descriptor.
    ///
    /// A padded stride of 65536 is recorded as 65535, which pads back to it.
    pub fn desc(&self) -> SurfaceDesc {
        let stride = u16::try_from(self.layout.stride).unwrap_or(u16::MAX);
        SurfaceDesc {
            width: self.width(),
            height: self.height(),
            format: self.format,
            stride: (self.layout.stride != self.layout.width).then_some(stride),
        }
    }

    /// Raw buffer, including stride padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Gives the buffer back.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Borrows this surface as a read-only view.
    pub fn view(&self) -> SurfaceView<'_> {
        Surface {
            buf: self.buf.as_ref(),
            format: self.format,
            layout: self.layout,
            codec: self.codec,
        }
    }

    /// Reads the pixel at `(x, y)`; out-of-bounds reads return 0.
    pub fn get_pixel(&self, x: i32, y: i32) -> u32 {
        match (in_range(x, self.layout.width), in_range(y, self.layout.height)) {
            (Some(x), Some(y)) => self.codec.get(self.buf.as_ref(), &self.layout, x, y),
            _ => 0,
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Surface<B> {
    /// Mutable raw buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    /// Writes the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let (Some(x), Some(y)) = (in_range(x, self.layout.width), in_range(y, self.layout.height))
        {
            self.codec.set(self.buf.as_mut(), &self.layout, x, y, color);
        }
    }

    /// Combined get/set in the style of the reference `pixel(x, y[, c])`:
    /// `None` reads and returns the pixel, `Some(c)` writes it and returns 0.
    pub fn pixel(&mut self, x: i32, y: i32, color: Option<u32>) -> u32 {
        match color {
            None => self.get_pixel(x, y),
            Some(c) => {
                self.set_pixel(x, y, c);
                0
            }
        }
    }

    /// Horizontal run of `w` pixels starting at `(x, y)`, clipped.
    pub fn hline(&mut self, x: i32, y: i32, w: i32, color: u32) {
        let Some(y) = in_range(y, self.layout.height) else {
            return;
        };
        if let Some((x, w)) = clip_run(x, w, self.layout.width) {
            self.codec.hline(self.buf.as_mut(), &self.layout, x, y, w, color);
        }
    }

    /// Vertical run of `h` pixels starting at `(x, y)`, clipped.
    pub fn vline(&mut self, x: i32, y: i32, h: i32, color: u32) {
        let Some(x) = in_range(x, self.layout.width) else {
            return;
        };
        if let Some((y, h)) = clip_run(y, h, self.layout.height) {
            self.codec.vline(self.buf.as_mut(), &self.layout, x, y, h, color);
        }
    }

    /// Fills the whole surface.
    pub fn fill(&mut self, color: u32) {
        self.fill_rect(0, 0, i32::from(self.width()), i32::from(self.height()), color);
    }

    /// Fills the clipped rectangle. An exact full-surface extent takes the
    /// whole-buffer path; anything else is drawn row by row.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        if w < 1 || h < 1 {
            return;
        }
        let (Some((x, w)), Some((y, h))) = (
            clip_run(x, w, self.layout.width),
            clip_run(y, h, self.layout.height),
        ) else {
            return;
        };

        let buf = self.buf.as_mut();
        if x == 0 && y == 0 && w == self.layout.width && h == self.layout.height {
            self.codec.fill_all(buf, &self.layout, color);
            return;
        }
        for row in y..y + h {
            self.codec.hline(buf, &self.layout, x, row, w, color);
        }
    }

    /// Rectangle outline of thickness 1, or a filled rectangle when `fill`.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32, fill: bool) {
        if fill {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y.saturating_add(h).saturating_sub(1), w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x.saturating_add(w).saturating_sub(1), y, 1, h, color);
    }
}

impl Surface<Vec<u8>> {
    /// Allocates a zeroed, exactly sized buffer for the given geometry.
    pub fn alloc(width: u16, height: u16, format: PixelFormat) -> FramebufResult<Self> {
        SurfaceDesc::new(width, height, format).alloc()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/mod.rs"]
mod tests;

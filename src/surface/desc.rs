use crate::foundation::error::{FramebufError, FramebufResult};
use crate::format::PixelFormat;
use crate::surface::{Surface, resolve_layout};

/// Serializable surface geometry.
///
/// `stride` is in pixels and defaults to `width`. JSON form:
/// `{"width": 128, "height": 64, "format": "mono_vlsb"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceDesc {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Pixel format.
    pub format: PixelFormat,
    /// Row pitch in pixels; `None` means `width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stride: Option<u16>,
}

impl SurfaceDesc {
    /// Descriptor with stride == width.
    pub fn new(width: u16, height: u16, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            stride: None,
        }
    }

    /// Sets an explicit stride.
    pub fn with_stride(mut self, stride: u16) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Checks dimensions and stride without touching any buffer.
    pub fn validate(&self) -> FramebufResult<()> {
        self.required_len().map(|_| ())
    }

    /// Bytes a buffer needs to back this geometry.
    pub fn required_len(&self) -> FramebufResult<usize> {
        let layout = resolve_layout(
            self.width,
            self.height,
            self.stride.unwrap_or(self.width),
            self.format,
        )?;
        Ok(self
            .format
            .required_len(layout.width, layout.height, layout.stride))
    }

    /// Allocates a zeroed owned surface of exactly [`SurfaceDesc::required_len`] bytes.
    pub fn alloc(&self) -> FramebufResult<Surface<Vec<u8>>> {
        let len = self.required_len()?;
        Surface::from_desc(vec![0u8; len], self)
    }

    /// Parses a descriptor from JSON and validates it.
    pub fn from_json(s: &str) -> FramebufResult<Self> {
        let desc: Self = serde_json::from_str(s).map_err(|e| {
            tracing::debug!(error = %e, "invalid surface descriptor json");
            FramebufError::serde(e.to_string())
        })?;
        desc.validate()?;
        Ok(desc)
    }

    /// Serializes the descriptor as compact JSON.
    pub fn to_json(&self) -> FramebufResult<String> {
        serde_json::to_string(self).map_err(|e| FramebufError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/desc.rs"]
mod tests;

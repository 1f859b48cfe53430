use std::fmt;

use crate::foundation::error::{SpriteError, SpriteResult};

/// Width and height of an image or frame, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Construct a size, rejecting zero-area dimensions.
    pub fn non_empty(width: u32, height: u32) -> SpriteResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteError::validation(format!(
                "size must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel layout of a decoded image.
///
/// Names follow the conventional short mode labels (`P`, `L`, `LA`, `RGB`, `RGBA`), with
/// a `;16` / `;F32` suffix for wide channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ColorMode {
    /// Indexed palette.
    #[serde(rename = "P")]
    P,
    /// 8-bit greyscale.
    #[serde(rename = "L")]
    L,
    /// 8-bit greyscale with alpha.
    #[serde(rename = "LA")]
    La,
    /// 8-bit RGB.
    #[serde(rename = "RGB")]
    Rgb,
    /// 8-bit RGB with alpha.
    #[serde(rename = "RGBA")]
    Rgba,
    /// 16-bit greyscale.
    #[serde(rename = "L;16")]
    L16,
    /// 16-bit greyscale with alpha.
    #[serde(rename = "LA;16")]
    La16,
    /// 16-bit RGB.
    #[serde(rename = "RGB;16")]
    Rgb16,
    /// 16-bit RGB with alpha.
    #[serde(rename = "RGBA;16")]
    Rgba16,
    /// 32-bit float RGB.
    #[serde(rename = "RGB;F32")]
    Rgb32F,
    /// 32-bit float RGB with alpha.
    #[serde(rename = "RGBA;F32")]
    Rgba32F,
    /// Any layout not listed above.
    #[serde(rename = "unknown")]
    Unknown,
}

impl ColorMode {
    /// `true` when the mode carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::La | Self::Rgba | Self::La16 | Self::Rgba16 | Self::Rgba32F
        )
    }

    /// Short textual label, e.g. `RGBA`.
    pub fn label(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::L => "L",
            Self::La => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::L16 => "L;16",
            Self::La16 => "LA;16",
            Self::Rgb16 => "RGB;16",
            Self::Rgba16 => "RGBA;16",
            Self::Rgb32F => "RGB;F32",
            Self::Rgba32F => "RGBA;F32",
            Self::Unknown => "unknown",
        }
    }
}

impl From<image::ColorType> for ColorMode {
    fn from(ct: image::ColorType) -> Self {
        match ct {
            image::ColorType::L8 => Self::L,
            image::ColorType::La8 => Self::La,
            image::ColorType::Rgb8 => Self::Rgb,
            image::ColorType::Rgba8 => Self::Rgba,
            image::ColorType::L16 => Self::L16,
            image::ColorType::La16 => Self::La16,
            image::ColorType::Rgb16 => Self::Rgb16,
            image::ColorType::Rgba16 => Self::Rgba16,
            image::ColorType::Rgb32F => Self::Rgb32F,
            image::ColorType::Rgba32F => Self::Rgba32F,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

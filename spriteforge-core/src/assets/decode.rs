use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use image::{ImageDecoder, ImageFormat, ImageReader, RgbaImage};

use crate::foundation::core::{ColorMode, PixelSize};
use crate::foundation::error::{SpriteError, SpriteResult};

/// What the checker learns about an image file on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ImageInfo {
    /// Decoded dimensions.
    pub size: PixelSize,
    /// Color layout as stored in the file.
    pub mode: ColorMode,
    /// Whether the image has an alpha channel or declares a transparent key.
    pub transparency: bool,
}

fn open_reader(path: &Path) -> SpriteResult<ImageReader<BufReader<File>>> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff image format '{}'", path.display()))?;
    Ok(reader)
}

fn decode_err(path: &Path, err: impl std::fmt::Display) -> SpriteError {
    SpriteError::decode(format!("'{}': {err}", path.display()))
}

fn open_buffered(path: &Path) -> SpriteResult<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(BufReader::new(file))
}

/// Stored layout of a PNG. `tRNS` counts as transparency for every color type.
fn png_layout(path: &Path) -> SpriteResult<(ColorMode, bool)> {
    let reader = png::Decoder::new(open_buffered(path)?)
        .read_info()
        .map_err(|e| decode_err(path, e))?;
    let info = reader.info();
    let wide = info.bit_depth == png::BitDepth::Sixteen;
    let mode = match info.color_type {
        png::ColorType::Indexed => ColorMode::P,
        png::ColorType::Grayscale if wide => ColorMode::L16,
        png::ColorType::Grayscale => ColorMode::L,
        png::ColorType::GrayscaleAlpha if wide => ColorMode::La16,
        png::ColorType::GrayscaleAlpha => ColorMode::La,
        png::ColorType::Rgb if wide => ColorMode::Rgb16,
        png::ColorType::Rgb => ColorMode::Rgb,
        png::ColorType::Rgba if wide => ColorMode::Rgba16,
        png::ColorType::Rgba => ColorMode::Rgba,
    };
    Ok((mode, mode.has_alpha() || info.trns.is_some()))
}

/// GIFs are always palette images; transparency is the first frame's transparent index.
fn gif_layout(path: &Path) -> SpriteResult<(ColorMode, bool)> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options
        .read_info(open_buffered(path)?)
        .map_err(|e| decode_err(path, e))?;
    let keyed = decoder
        .read_next_frame()
        .map_err(|e| decode_err(path, e))?
        .and_then(|frame| frame.transparent)
        .is_some();
    Ok((ColorMode::P, keyed))
}

/// Decode an image file fully and report its size, stored mode and transparency.
///
/// The `image` decoders expand palettes and transparency keys into RGBA, so PNG and GIF
/// headers are read again to report what the file itself declares.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn probe_image(path: &Path) -> SpriteResult<ImageInfo> {
    let reader = open_reader(path)?;
    let format = reader.format();
    let decoder = reader.into_decoder().map_err(|e| decode_err(path, e))?;
    let size = PixelSize::from(decoder.dimensions());
    let decoded = ColorMode::from(decoder.color_type());

    // A readable header is not enough; truncated pixel data must fail here too.
    image::DynamicImage::from_decoder(decoder).map_err(|e| decode_err(path, e))?;

    let (mode, transparency) = match format {
        Some(ImageFormat::Png) => png_layout(path)?,
        Some(ImageFormat::Gif) => gif_layout(path)?,
        _ => (decoded, decoded.has_alpha()),
    };
    tracing::debug!(%size, %mode, transparency, "probed image");

    Ok(ImageInfo {
        size,
        mode,
        transparency,
    })
}

/// Decode an image file and convert it to straight-alpha RGBA8.
pub fn load_rgba(path: &Path) -> SpriteResult<RgbaImage> {
    let img = open_reader(path)?
        .decode()
        .map_err(|e| decode_err(path, e))?;
    Ok(img.into_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode an RGBA8 image as PNG bytes, alpha channel included.
pub fn encode_png(img: &RgbaImage) -> SpriteResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| SpriteError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode `img` fully in memory, then write it to `path`.
pub fn write_png(img: &RgbaImage, path: &Path) -> SpriteResult<()> {
    let bytes = encode_png(img)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes)
        .map_err(|e| SpriteError::encode(format!("write '{}': {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;

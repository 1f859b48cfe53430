use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::PixelSize;
use crate::foundation::error::{SpriteError, SpriteResult};

/// One expected asset file and how strictly its absence is treated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetDescriptor {
    /// Path relative to the asset root, `/`-separated.
    pub path: Cow<'static, str>,
    /// Other file names accepted for the same asset, tried in order after `path`.
    #[serde(default)]
    pub alternates: Cow<'static, [Cow<'static, str>]>,
    /// Human-readable description.
    pub description: Cow<'static, str>,
    /// Missing required assets fail the check; optional ones only warn.
    pub required: bool,
    /// Dimensions the asset should have, if fixed.
    #[serde(default)]
    pub expected_size: Option<PixelSize>,
}

impl AssetDescriptor {
    /// Every accepted path, `path` first.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&*self.path).chain(self.alternates.iter().map(|a| &**a))
    }

    /// First candidate that exists under `root`.
    pub fn resolve(&self, root: &Path) -> Option<PathBuf> {
        self.candidates()
            .map(|rel| root.join(rel))
            .find(|p| p.exists())
    }

    fn validate(&self) -> SpriteResult<()> {
        if self.candidates().any(|p| p.trim().is_empty()) {
            return Err(SpriteError::validation("asset path must be non-empty"));
        }
        if let Some(size) = self.expected_size {
            PixelSize::non_empty(size.width, size.height)?;
        }
        Ok(())
    }
}

const fn asset(
    path: &'static str,
    alternates: &'static [Cow<'static, str>],
    description: &'static str,
    required: bool,
    expected_size: Option<PixelSize>,
) -> AssetDescriptor {
    AssetDescriptor {
        path: Cow::Borrowed(path),
        alternates: Cow::Borrowed(alternates),
        description: Cow::Borrowed(description),
        required,
        expected_size,
    }
}

const NONE: &[Cow<'static, str>] = &[];
const SCENE_ALTERNATES: &[Cow<'static, str>] = &[Cow::Borrowed("assets/cena01.gif")];

/// Built-in asset table for the Juliette game.
///
/// The main scene ships as either a JPEG or a GIF; both names map to one entry.
pub static DEFAULT_ASSETS: [AssetDescriptor; 6] = [
    asset(
        "assets/sprites 2.png",
        NONE,
        "Original character image 1",
        false,
        None,
    ),
    asset(
        "assets/sprites 3.png",
        NONE,
        "Original character image 2",
        false,
        None,
    ),
    asset(
        "assets/juliette_animated_spritesheet.png",
        NONE,
        "Final spritesheet (6 walk + 6 attack frames)",
        true,
        Some(PixelSize::new(288, 128)),
    ),
    asset(
        "assets/juliette_transparent_spritesheet.png",
        NONE,
        "Legacy spritesheet (4 frames)",
        false,
        Some(PixelSize::new(192, 128)),
    ),
    asset(
        "assets/fundo 2d.png",
        NONE,
        "Secondary background",
        true,
        None,
    ),
    asset(
        "assets/cena01.jpg",
        SCENE_ALTERNATES,
        "Main scene",
        true,
        None,
    ),
];

/// Load a JSON array of descriptors to use instead of [`DEFAULT_ASSETS`].
pub fn load_manifest(path: &Path) -> SpriteResult<Vec<AssetDescriptor>> {
    let f = std::fs::File::open(path)
        .with_context(|| format!("open manifest '{}'", path.display()))?;
    let descriptors: Vec<AssetDescriptor> = serde_json::from_reader(std::io::BufReader::new(f))
        .map_err(|e| SpriteError::validation(format!("manifest '{}': {e}", path.display())))?;
    parse_checked(descriptors)
}

fn parse_checked(descriptors: Vec<AssetDescriptor>) -> SpriteResult<Vec<AssetDescriptor>> {
    if descriptors.is_empty() {
        return Err(SpriteError::validation("manifest lists no assets"));
    }
    for d in &descriptors {
        d.validate()?;
    }
    Ok(descriptors)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/descriptor.rs"]
mod tests;

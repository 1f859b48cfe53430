use std::fmt;
use std::path::{Path, PathBuf};

use crate::assets::decode::{ImageInfo, probe_image};
use crate::assets::descriptor::AssetDescriptor;
use crate::foundation::core::PixelSize;

/// Outcome for a single asset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    /// Found and decoded.
    Ok {
        /// File that was probed (may be an alternate name).
        found: PathBuf,
        /// Decoded properties.
        info: ImageInfo,
        /// Expected size when it differs from the actual one.
        size_mismatch: Option<PixelSize>,
    },
    /// Required and not found.
    Missing,
    /// Optional and not found.
    OptionalMissing,
    /// Found but could not be decoded.
    LoadError {
        /// File that failed.
        found: PathBuf,
        /// Decoder message.
        message: String,
    },
}

impl AssetStatus {
    /// `true` for outcomes that fail the whole check.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Missing | Self::LoadError { .. })
    }
}

/// A descriptor together with what was found on disk.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssetEntry {
    /// What was expected.
    pub descriptor: AssetDescriptor,
    /// What was found.
    pub status: AssetStatus,
}

/// Per-asset results in declaration order plus the overall verdict.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CheckReport {
    entries: Vec<AssetEntry>,
    passed: bool,
}

impl CheckReport {
    /// Build a report; the verdict is derived from the entries.
    pub fn from_entries(entries: Vec<AssetEntry>) -> Self {
        let passed = !entries.iter().any(|e| e.status.is_failure());
        Self { entries, passed }
    }

    /// `false` if any required asset is missing or any asset failed to decode.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    /// Number of non-fatal size mismatches.
    pub fn size_warnings(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e.status,
                    AssetStatus::Ok {
                        size_mismatch: Some(_),
                        ..
                    }
                )
            })
            .count()
    }
}

fn check_one(root: &Path, descriptor: &AssetDescriptor) -> AssetStatus {
    let Some(found) = descriptor.resolve(root) else {
        if descriptor.required {
            tracing::warn!(path = %descriptor.path, "required asset missing");
            return AssetStatus::Missing;
        }
        tracing::debug!(path = %descriptor.path, "optional asset missing");
        return AssetStatus::OptionalMissing;
    };

    match probe_image(&found) {
        Ok(info) => {
            let size_mismatch = descriptor.expected_size.filter(|want| *want != info.size);
            if let Some(want) = size_mismatch {
                tracing::warn!(
                    path = %found.display(),
                    expected = %want,
                    actual = %info.size,
                    "asset size mismatch"
                );
            }
            AssetStatus::Ok {
                found,
                info,
                size_mismatch,
            }
        }
        Err(err) => {
            tracing::warn!(path = %found.display(), error = %err, "asset failed to load");
            AssetStatus::LoadError {
                found,
                message: err.to_string(),
            }
        }
    }
}

/// Check every descriptor under `root`, in order, without stopping at the first failure.
#[tracing::instrument(skip_all, fields(root = %root.display(), assets = descriptors.len()))]
pub fn check_assets(root: &Path, descriptors: &[AssetDescriptor]) -> CheckReport {
    let entries = descriptors
        .iter()
        .map(|d| AssetEntry {
            descriptor: d.clone(),
            status: check_one(root, d),
        })
        .collect();
    CheckReport::from_entries(entries)
}

impl fmt::Display for AssetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.descriptor;
        writeln!(f, "Checking: {}", d.path)?;
        match &self.status {
            AssetStatus::Missing => writeln!(f, "  Status: MISSING")?,
            AssetStatus::OptionalMissing => writeln!(f, "  Status: optional (not found)")?,
            AssetStatus::LoadError { found, message } => {
                if !found.ends_with(&*d.path) {
                    writeln!(f, "  Found: {}", found.display())?;
                }
                writeln!(f, "  Status: ERROR loading: {message}")?;
            }
            AssetStatus::Ok {
                found,
                info,
                size_mismatch,
            } => {
                if !found.ends_with(&*d.path) {
                    writeln!(f, "  Found: {}", found.display())?;
                }
                writeln!(f, "  Status: OK")?;
                writeln!(f, "  Size: {}px", info.size)?;
                writeln!(f, "  Mode: {}", info.mode)?;
                if info.transparency {
                    writeln!(f, "  Transparency: supported")?;
                } else {
                    writeln!(f, "  Transparency: not detected")?;
                }
                if let Some(want) = size_mismatch {
                    writeln!(f, "  Warning: expected size {want}px")?;
                }
            }
        }
        writeln!(f, "  Description: {}", d.description)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f, "{}", "=".repeat(50))?;
        if self.passed {
            writeln!(f, "All required assets are OK.")?;
            write!(f, "The game should run correctly.")
        } else {
            writeln!(f, "Some assets are missing or broken.")?;
            write!(f, "Run `spriteforge build` to create the spritesheet.")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/check/checker.rs"]
mod tests;

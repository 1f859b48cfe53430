//! spriteforge checks a 2D game's image assets and assembles its character spritesheet.
//!
//! Two independent operations:
//!
//! 1. **Check**: [`check_assets`] walks a table of [`AssetDescriptor`]s and reports, per
//!    file, whether it exists, its size, color mode and transparency.
//! 2. **Build**: [`build_spritesheet`] loads two source poses, resizes them to the cell
//!    size with nearest-neighbour sampling, applies one [`FrameTransform`] per cell and
//!    writes a 6x2 PNG sheet.
//!
//! Both are synchronous, pure apart from file IO, and deterministic for a given input.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod check;
mod encode;
mod foundation;
mod sheet;

pub mod transform;

pub use assets::decode::{ImageInfo, load_rgba, probe_image};
pub use assets::descriptor::{AssetDescriptor, DEFAULT_ASSETS, load_manifest};
pub use check::checker::{AssetEntry, AssetStatus, CheckReport, check_assets};
pub use encode::png::{encode_png, ensure_parent_dir, write_png};
pub use foundation::core::{ColorMode, PixelSize};
pub use foundation::error::{SpriteError, SpriteResult};
pub use sheet::builder::{
    SheetPaths, SheetSummary, SourceFrames, build_spritesheet, compose_sheet, resize_nearest,
};
pub use sheet::layout::{
    ANIMATION_ROWS, ATTACK_FRAMES, AnimationRow, FrameSpec, SheetLayout, SourceSlot, WALK_FRAMES,
};
pub use transform::affine::{FrameTransform, TRANSPARENT};

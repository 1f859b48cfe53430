use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};

use crate::assets::decode::load_rgba;
use crate::encode::png::write_png;
use crate::foundation::core::PixelSize;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::sheet::layout::{ANIMATION_ROWS, AnimationRow, SheetLayout, SourceSlot};

/// Input and output files of a sheet build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetPaths {
    /// Base pose image.
    pub primary: PathBuf,
    /// Alternate stride image.
    pub secondary: PathBuf,
    /// Where the finished sheet is written.
    pub output: PathBuf,
}

impl SheetPaths {
    /// Default base pose, relative to the asset root.
    pub const PRIMARY: &'static str = "assets/sprites 2.png";
    /// Default stride pose, relative to the asset root.
    pub const SECONDARY: &'static str = "assets/sprites 3.png";
    /// Default output, relative to the asset root.
    pub const OUTPUT: &'static str = "assets/juliette_animated_spritesheet.png";

    /// The default file names resolved under `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            primary: root.join(Self::PRIMARY),
            secondary: root.join(Self::SECONDARY),
            output: root.join(Self::OUTPUT),
        }
    }
}

/// What a successful build produced.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SheetSummary {
    /// Written file.
    pub output: PathBuf,
    /// Canvas size.
    pub size: PixelSize,
    /// Frame count per row, top to bottom.
    pub row_frames: Vec<(String, usize)>,
}

impl SheetSummary {
    /// Total number of frames pasted.
    pub fn frame_count(&self) -> usize {
        self.row_frames.iter().map(|(_, n)| n).sum()
    }
}

/// Resized source images, one per [`SourceSlot`].
#[derive(Clone, Debug)]
pub struct SourceFrames {
    /// Base pose at cell size.
    pub primary: RgbaImage,
    /// Stride pose at cell size.
    pub secondary: RgbaImage,
}

impl SourceFrames {
    fn get(&self, slot: SourceSlot) -> &RgbaImage {
        match slot {
            SourceSlot::Primary => &self.primary,
            SourceSlot::Secondary => &self.secondary,
        }
    }
}

/// Resize with nearest-neighbour sampling so pixel-art edges stay hard.
///
/// An image already at `size` is returned unchanged.
pub fn resize_nearest(src: &RgbaImage, size: PixelSize) -> RgbaImage {
    if src.dimensions() == (size.width, size.height) {
        return src.clone();
    }
    imageops::resize(
        src,
        size.width,
        size.height,
        imageops::FilterType::Nearest,
    )
}

/// Paste every row's transformed frames into a transparent canvas.
pub fn compose_sheet(
    sources: &SourceFrames,
    layout: SheetLayout,
    rows: &[AnimationRow],
) -> SpriteResult<RgbaImage> {
    layout.validate(rows)?;
    let cell = (layout.frame.width, layout.frame.height);
    for (slot, img) in [
        (SourceSlot::Primary, &sources.primary),
        (SourceSlot::Secondary, &sources.secondary),
    ] {
        if img.dimensions() != cell {
            return Err(SpriteError::validation(format!(
                "{slot:?} source is {}x{}, expected {}",
                img.width(),
                img.height(),
                layout.frame
            )));
        }
    }

    let size = layout.sheet_size();
    let mut sheet = RgbaImage::new(size.width, size.height);

    for (row_idx, row) in rows.iter().enumerate() {
        tracing::info!(row = row.name, frames = row.frames.len(), "composing row");
        for (col_idx, entry) in row.frames.iter().enumerate() {
            let frame = entry.transform.apply(sources.get(entry.source));
            let (x, y) = layout.cell_origin(col_idx as u32, row_idx as u32);
            imageops::replace(&mut sheet, &frame, i64::from(x), i64::from(y));
            tracing::debug!(
                row = row.name,
                column = col_idx,
                source = ?entry.source,
                dx = entry.transform.dx,
                dy = entry.transform.dy,
                rotation = entry.transform.rotation_deg,
                x,
                y,
                "pasted frame"
            );
        }
    }

    Ok(sheet)
}

/// Build the Juliette spritesheet from two source images and write it as PNG.
///
/// Fails without touching `paths.output` if either input is missing or undecodable.
#[tracing::instrument(skip_all, fields(output = %paths.output.display()))]
pub fn build_spritesheet(paths: &SheetPaths, layout: SheetLayout) -> SpriteResult<SheetSummary> {
    for p in [&paths.primary, &paths.secondary] {
        if !p.exists() {
            return Err(SpriteError::missing_input(format!(
                "'{}' not found",
                p.display()
            )));
        }
    }

    let primary = load_rgba(&paths.primary)?;
    let secondary = load_rgba(&paths.secondary)?;
    tracing::info!(
        primary = %PixelSize::from(primary.dimensions()),
        secondary = %PixelSize::from(secondary.dimensions()),
        "loaded sources"
    );

    let sources = SourceFrames {
        primary: resize_nearest(&primary, layout.frame),
        secondary: resize_nearest(&secondary, layout.frame),
    };
    tracing::info!(frame = %layout.frame, sheet = %layout.sheet_size(), "resized sources");

    let sheet = compose_sheet(&sources, layout, &ANIMATION_ROWS)?;
    write_png(&sheet, &paths.output)?;
    tracing::info!("saved spritesheet");

    Ok(SheetSummary {
        output: paths.output.clone(),
        size: layout.sheet_size(),
        row_frames: ANIMATION_ROWS
            .iter()
            .map(|r| (r.name.to_string(), r.frames.len()))
            .collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/builder.rs"]
mod tests;

use crate::foundation::core::PixelSize;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::transform::affine::FrameTransform;

/// Which resized source image a frame is cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SourceSlot {
    /// `sprites 2`, the base pose.
    Primary,
    /// `sprites 3`, the alternate stride pose.
    Secondary,
}

/// One cell of an animation row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpec {
    /// Source image for this frame.
    pub source: SourceSlot,
    /// Pose offset applied to the source.
    pub transform: FrameTransform,
}

impl FrameSpec {
    const fn new(source: SourceSlot, dx: i32, dy: i32, rotation_deg: f64) -> Self {
        Self {
            source,
            transform: FrameTransform::new(dx, dy, rotation_deg),
        }
    }
}

/// A named row of frames, laid out left to right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRow {
    /// Row name used in logs.
    pub name: &'static str,
    /// Frames in column order.
    pub frames: &'static [FrameSpec],
}

/// Grid geometry of the spritesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SheetLayout {
    /// Size of one cell.
    pub frame: PixelSize,
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

impl SheetLayout {
    /// 6 columns by 2 rows of 48x64 cells.
    pub const DEFAULT: Self = Self {
        frame: PixelSize::new(48, 64),
        columns: 6,
        rows: 2,
    };

    /// Full canvas size.
    pub fn sheet_size(&self) -> PixelSize {
        PixelSize::new(
            self.frame.width * self.columns,
            self.frame.height * self.rows,
        )
    }

    /// Top-left pixel of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: u32, row: u32) -> (u32, u32) {
        (column * self.frame.width, row * self.frame.height)
    }

    /// Check that `rows` fit in the grid.
    pub fn validate(&self, rows: &[AnimationRow]) -> SpriteResult<()> {
        PixelSize::non_empty(self.frame.width, self.frame.height)?;
        if self.columns == 0 || self.rows == 0 {
            return Err(SpriteError::validation("sheet layout must have cells"));
        }
        if rows.len() > self.rows as usize {
            return Err(SpriteError::validation(format!(
                "{} animation rows do not fit in {} sheet rows",
                rows.len(),
                self.rows
            )));
        }
        if let Some(row) = rows.iter().find(|r| r.frames.len() > self.columns as usize) {
            return Err(SpriteError::validation(format!(
                "row '{}' has {} frames but the sheet has {} columns",
                row.name,
                row.frames.len(),
                self.columns
            )));
        }
        Ok(())
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

use SourceSlot::{Primary, Secondary};

/// Walk cycle: alternating poses with a slight sway.
pub const WALK_FRAMES: [FrameSpec; 6] = [
    FrameSpec::new(Primary, 0, 0, 0.0),
    FrameSpec::new(Secondary, 1, 0, 0.0),
    FrameSpec::new(Primary, -1, 0, 1.0),
    FrameSpec::new(Secondary, 0, 0, -2.0),
    FrameSpec::new(Primary, 1, 0, 1.0),
    FrameSpec::new(Secondary, 0, 0, 0.0),
];

/// Attack: windup, strike, follow-through, recovery and two spare poses.
pub const ATTACK_FRAMES: [FrameSpec; 6] = [
    FrameSpec::new(Primary, 0, 0, 5.0),
    FrameSpec::new(Primary, 2, 0, 10.0),
    FrameSpec::new(Primary, -3, 0, -15.0),
    FrameSpec::new(Primary, 1, 0, 3.0),
    FrameSpec::new(Primary, 0, 0, 0.0),
    FrameSpec::new(Primary, 1, 0, 8.0),
];

/// Rows of the Juliette spritesheet, top to bottom.
pub const ANIMATION_ROWS: [AnimationRow; 2] = [
    AnimationRow {
        name: "walk",
        frames: &WALK_FRAMES,
    },
    AnimationRow {
        name: "attack",
        frames: &ATTACK_FRAMES,
    },
];

#[cfg(test)]
#[path = "../../tests/unit/sheet/layout.rs"]
mod tests;

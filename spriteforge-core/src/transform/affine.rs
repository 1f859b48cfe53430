//! Affine frame transforms that keep the frame's bounding box.
//!
//! Both operations resample by inverse mapping: every output pixel centre is mapped back
//! into the source through an [`Affine`] and takes the nearest (floored) source pixel.
//! Anything that maps outside the source is filled with [`TRANSPARENT`].
//!
//! Rotations walk each output row in 16.16 fixed point steps.

use image::{Rgba, RgbaImage, imageops};
use kurbo::{Affine, Point, Vec2};

/// Fill color for pixels exposed by a transform.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Per-frame pose offset: rotate about the centre, then shift.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTransform {
    /// Horizontal sampling offset; output `x` reads source `x + dx`.
    pub dx: i32,
    /// Vertical sampling offset; output `y` reads source `y + dy`.
    pub dy: i32,
    /// Rotation in degrees, counter-clockwise on screen.
    pub rotation_deg: f64,
}

impl FrameTransform {
    /// No rotation and no shift.
    pub const IDENTITY: Self = Self::new(0, 0, 0.0);

    /// Construct a transform from offsets and a rotation.
    pub const fn new(dx: i32, dy: i32, rotation_deg: f64) -> Self {
        Self {
            dx,
            dy,
            rotation_deg,
        }
    }

    /// `true` when applying the transform returns the frame unchanged.
    pub fn is_identity(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.rotation_deg.rem_euclid(360.0) == 0.0
    }

    /// Produce a transformed copy of `frame` with the same dimensions.
    ///
    /// Rotation and translation are two separate resampling passes, so content rotated
    /// out of the box is gone before the shift happens.
    pub fn apply(&self, frame: &RgbaImage) -> RgbaImage {
        if self.is_identity() {
            return frame.clone();
        }
        let rotated = rotate_about_center(frame, self.rotation_deg);
        translate(&rotated, self.dx, self.dy)
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotate `src` about its centre without growing the canvas.
pub fn rotate_about_center(src: &RgbaImage, degrees: f64) -> RgbaImage {
    let (w, h) = src.dimensions();
    let angle = degrees.rem_euclid(360.0);

    if angle == 0.0 {
        return src.clone();
    }
    if angle == 180.0 {
        return imageops::rotate180(src);
    }
    if w == h {
        // imageops turns clockwise.
        if angle == 90.0 {
            return imageops::rotate270(src);
        }
        if angle == 270.0 {
            return imageops::rotate90(src);
        }
    }

    resample_stepped(src, inverse_rotation(w, h, angle))
}

/// Shift the content of `src` by whole pixels without growing the canvas.
pub fn translate(src: &RgbaImage, dx: i32, dy: i32) -> RgbaImage {
    if dx == 0 && dy == 0 {
        return src.clone();
    }
    resample(src, Affine::translate(Vec2::new(f64::from(dx), f64::from(dy))))
}

/// Output-to-source map for a rotation of `degrees` about the centre of a `w`x`h` box.
pub(crate) fn inverse_rotation(w: u32, h: u32, degrees: f64) -> Affine {
    let rad = degrees.to_radians();
    let (sin, cos) = (snap(rad.sin()), snap(rad.cos()));
    let (cx, cy) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
    // T(c) * R * T(-c), expanded term by term.
    let tx = cos * -cx + -sin * -cy + cx;
    let ty = sin * -cx + cos * -cy + cy;
    Affine::new([cos, sin, -sin, cos, tx, ty])
}

/// Nearest-neighbour resampling through an output-to-source map, same size as `src`.
pub(crate) fn resample(src: &RgbaImage, inverse: Affine) -> RgbaImage {
    let (w, h) = src.dimensions();
    RgbaImage::from_fn(w, h, |x, y| {
        let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        source_texel(src, coord(p.x), coord(p.y)).unwrap_or(TRANSPARENT)
    })
}

/// Nearest-neighbour resampling that starts each row at its first pixel centre and
/// advances by the map's per-pixel step.
///
/// Steps are 16.16 fixed point while every corner of the box maps inside `±32768`;
/// larger maps step in `f64`.
pub(crate) fn resample_stepped(src: &RgbaImage, inverse: Affine) -> RgbaImage {
    let (w, h) = src.dimensions();
    // source = (ax * x + bx * y + cx, ay * x + by * y + cy)
    let [ax, ay, bx, by, cx, cy] = inverse.as_coeffs();
    let mut out = RgbaImage::from_pixel(w, h, TRANSPARENT);

    let (fw, fh) = (f64::from(w), f64::from(h));
    let fits = [(0.0, 0.0), (fw, fh), (0.0, fh), (fw, 0.0)]
        .into_iter()
        .all(|(x, y)| {
            (x * ax + y * bx + cx).abs() < 32768.0 && (x * ay + y * by + cy).abs() < 32768.0
        });

    if fits {
        let (step_xx, step_xy) = (fixed(ax), fixed(ay));
        let (step_yx, step_yy) = (fixed(bx), fixed(by));
        let mut row_x = fixed(cx + ax * 0.5 + bx * 0.5);
        let mut row_y = fixed(cy + ay * 0.5 + by * 0.5);
        for y in 0..h {
            let (mut sx, mut sy) = (row_x, row_y);
            for x in 0..w {
                if let Some(px) = source_texel(src, sx >> 16, sy >> 16) {
                    out.put_pixel(x, y, px);
                }
                sx += step_xx;
                sy += step_xy;
            }
            row_x += step_yx;
            row_y += step_yy;
        }
    } else {
        let mut row_x = cx + bx * 0.5 + ax * 0.5;
        let mut row_y = cy + by * 0.5 + ay * 0.5;
        for y in 0..h {
            let (mut sx, mut sy) = (row_x, row_y);
            for x in 0..w {
                if let Some(px) = source_texel(src, coord(sx), coord(sy)) {
                    out.put_pixel(x, y, px);
                }
                sx += ax;
                sy += ay;
            }
            row_x += bx;
            row_y += by;
        }
    }
    out
}

/// 16.16 fixed point, rounded half up.
fn fixed(v: f64) -> i64 {
    (v * 65536.0 + 0.5).floor() as i64
}

/// Truncate a source coordinate; anything negative is outside even when it truncates to 0.
fn coord(v: f64) -> i64 {
    if v >= 0.0 { v as i64 } else { -1 }
}

fn source_texel(src: &RgbaImage, sx: i64, sy: i64) -> Option<Rgba<u8>> {
    let x = u32::try_from(sx).ok().filter(|x| *x < src.width())?;
    let y = u32::try_from(sy).ok().filter(|y| *y < src.height())?;
    Some(*src.get_pixel(x, y))
}

/// Round to 15 decimal places, so quarter turns produce exact 0/1 coefficients.
fn snap(v: f64) -> f64 {
    format!("{v:.15}").parse().unwrap_or(v)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;

use super::*;

/// Every pixel gets a distinct opaque color so moves are traceable.
fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 100, 255]))
}

#[test]
fn identity_is_pixel_identical() {
    let src = gradient(48, 64);
    assert!(FrameTransform::IDENTITY.is_identity());
    assert_eq!(FrameTransform::IDENTITY.apply(&src), src);
    assert_eq!(FrameTransform::new(0, 0, 360.0).apply(&src), src);
    assert_eq!(FrameTransform::default(), FrameTransform::IDENTITY);
}

#[test]
fn translate_reads_source_at_offset() {
    let src = gradient(5, 4);

    let left = translate(&src, 1, 0);
    assert_eq!(left.dimensions(), (5, 4));
    assert_eq!(*left.get_pixel(0, 0), *src.get_pixel(1, 0));
    assert_eq!(*left.get_pixel(3, 2), *src.get_pixel(4, 2));
    for y in 0..4 {
        assert_eq!(*left.get_pixel(4, y), TRANSPARENT);
    }

    let right_down = translate(&src, -3, -1);
    assert_eq!(*right_down.get_pixel(3, 1), *src.get_pixel(0, 0));
    assert_eq!(*right_down.get_pixel(4, 3), *src.get_pixel(1, 2));
    for x in 0..5 {
        assert_eq!(*right_down.get_pixel(x, 0), TRANSPARENT);
    }
    for y in 0..4 {
        assert_eq!(*right_down.get_pixel(2, y), TRANSPARENT);
    }
}

#[test]
fn translate_past_the_edge_is_fully_transparent() {
    let src = gradient(4, 4);
    let gone = translate(&src, 4, 0);
    assert!(gone.pixels().all(|p| *p == TRANSPARENT));
}

#[test]
fn half_turn_is_an_exact_transpose() {
    let src = gradient(3, 5);
    let out = rotate_about_center(&src, 180.0);
    for y in 0..5 {
        for x in 0..3 {
            assert_eq!(*out.get_pixel(x, y), *src.get_pixel(2 - x, 4 - y));
        }
    }
    assert_eq!(rotate_about_center(&src, -180.0), out);
}

#[test]
fn quarter_turn_on_square_is_counter_clockwise() {
    let src = gradient(3, 3);
    let out = rotate_about_center(&src, 90.0);
    // Right column moves to the top row.
    assert_eq!(*out.get_pixel(0, 0), *src.get_pixel(2, 0));
    assert_eq!(*out.get_pixel(2, 0), *src.get_pixel(2, 2));
    assert_eq!(*out.get_pixel(0, 2), *src.get_pixel(0, 0));

    // The transpose shortcut agrees with both resamplers.
    for size in [3, 4] {
        let sq = gradient(size, size);
        for angle in [90.0, 270.0] {
            let map = inverse_rotation(size, size, angle);
            let turned = rotate_about_center(&sq, angle);
            assert_eq!(turned, resample(&sq, map));
            assert_eq!(turned, resample_stepped(&sq, map));
        }
    }
}

#[test]
fn small_rotation_keeps_box_and_clears_corners() {
    let src = RgbaImage::from_pixel(48, 64, Rgba([200, 10, 10, 255]));
    let out = rotate_about_center(&src, 10.0);
    assert_eq!(out.dimensions(), (48, 64));
    assert_eq!(*out.get_pixel(0, 0), TRANSPARENT);
    assert_eq!(*out.get_pixel(47, 63), TRANSPARENT);
    assert_eq!(*out.get_pixel(24, 32), Rgba([200, 10, 10, 255]));
}

#[test]
fn negative_angles_wrap() {
    let src = gradient(48, 64);
    assert_eq!(
        rotate_about_center(&src, -15.0),
        rotate_about_center(&src, 345.0)
    );
}

#[test]
fn rotate_then_translate_runs_as_two_passes() {
    let src = gradient(48, 64);
    let t = FrameTransform::new(2, 0, 10.0);
    let expected = translate(&rotate_about_center(&src, 10.0), 2, 0);
    assert_eq!(t.apply(&src), expected);
    assert!(!t.is_identity());
}

/// Output pixel -> source pixel (read back from the gradient), `None` when transparent.
type Samples = &'static [((u32, u32), Option<(u8, u8)>)];

#[test]
fn frame_rotations_match_fixed_point_reference() {
    // Every walk and attack angle on a 48x64 frame: opaque pixel count, then sampled
    // pixels including the ones where per-pixel f64 sampling lands one pixel off.
    #[rustfmt::skip]
    let golden: [(f64, usize, Samples); 7] = [
        (1.0, 3066, &[((40, 60), Some((39, 60))), ((10, 50), Some((10, 50))), ((40, 5), Some((40, 5))), ((0, 0), Some((1, 0)))]),
        (-2.0, 3020, &[((10, 50), Some((11, 50))), ((40, 5), Some((39, 4))), ((0, 0), None)]),
        (5.0, 2946, &[((30, 49), Some((28, 50))), ((41, 25), Some((42, 27))), ((10, 50), Some((8, 49))), ((40, 5), Some((42, 7))), ((0, 0), None)]),
        (10.0, 2838, &[((43, 24), Some((44, 27))), ((10, 50), Some((7, 47))), ((40, 5), Some((44, 8))), ((0, 0), None)]),
        (-15.0, 2744, &[((10, 50), Some((15, 53))), ((40, 5), Some((33, 2))), ((0, 0), None)]),
        (3.0, 2994, &[((10, 50), Some((9, 49))), ((40, 5), Some((41, 6))), ((0, 0), None)]),
        (8.0, 2876, &[((10, 50), Some((8, 48))), ((40, 5), Some((44, 8))), ((0, 0), None)]),
    ];

    let src = gradient(48, 64);
    for (angle, opaque, samples) in golden {
        let out = rotate_about_center(&src, angle);
        let count = out.pixels().filter(|p| **p != TRANSPARENT).count();
        assert_eq!(count, opaque, "opaque pixels at {angle} degrees");
        for &((x, y), from) in samples {
            let got = *out.get_pixel(x, y);
            let want = from.map_or(TRANSPARENT, |(sx, sy)| Rgba([sx, sy, 100, 255]));
            assert_eq!(got, want, "pixel ({x}, {y}) at {angle} degrees");
        }
    }
}

#[test]
fn stepped_and_per_pixel_sampling_agree_on_translations() {
    let src = gradient(48, 64);
    for (dx, dy) in [(1, 0), (-3, 0), (0, -1), (2, 5)] {
        let map = Affine::translate(Vec2::new(f64::from(dx), f64::from(dy)));
        assert_eq!(resample_stepped(&src, map), translate(&src, dx, dy));
    }
}

#[test]
fn large_maps_fall_back_to_float_steps() {
    let src = gradient(4, 4);
    // Row 0 reads source row 0; the bottom corners land beyond the fixed-point range.
    let tall = Affine::new([1.0, 0.0, 0.0, 10000.0, 0.0, -4999.5]);
    let out = resample_stepped(&src, tall);
    for x in 0..4 {
        assert_eq!(*out.get_pixel(x, 0), *src.get_pixel(x, 0));
        for y in 1..4 {
            assert_eq!(*out.get_pixel(x, y), TRANSPARENT);
        }
    }
}

use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "spriteforge_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn encode_png_keeps_alpha() {
    let img = RgbaImage::from_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
    let bytes = encode_png(&img).unwrap();
    let back = image::load_from_memory(&bytes).unwrap();
    assert_eq!(back.color(), image::ColorType::Rgba8);
    assert_eq!(back.to_rgba8(), img);
}

#[test]
fn write_png_creates_missing_directories() {
    let tmp = temp_dir("write_png_dirs");
    let out = tmp.join("nested").join("sheet.png");
    let img = RgbaImage::new(3, 3);

    write_png(&img, &out).unwrap();
    assert!(out.is_file());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn write_png_into_a_file_path_fails() {
    let tmp = temp_dir("write_png_blocked");
    std::fs::create_dir_all(&tmp).unwrap();
    let blocker = tmp.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let err = write_png(&RgbaImage::new(1, 1), &blocker.join("sheet.png")).unwrap_err();
    assert!(matches!(err, SpriteError::Other(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

//! Validates grid slicing: tile counts, ordering, naming, progress, and rounding

use gridsplit::SplitError;
use gridsplit::io::image::{SourceImage, TileFormat};
use gridsplit::slice::{GridSpec, slice_image};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

// Deterministic gradient so neighboring cells hold distinct pixel data
fn source(name: &str, width: u32, height: u32) -> SourceImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    SourceImage::from_decoded(name.to_string(), DynamicImage::ImageRgba8(pixels))
}

#[test]
fn test_two_by_two_square_yields_four_even_tiles() {
    let image = source("square.png", 100, 100);
    let spec = GridSpec::new(2, 2).unwrap();

    let tiles = slice_image(&image, spec, |_| {}).unwrap();

    assert_eq!(tiles.len(), 4);
    for tile in &tiles {
        let decoded = image::load_from_memory(&tile.bytes).unwrap();
        assert_eq!(decoded.width(), 50);
        assert_eq!(decoded.height(), 50);
    }

    let names = tiles.file_names();
    assert_eq!(
        names,
        vec![
            "square_part_1.png",
            "square_part_2.png",
            "square_part_3.png",
            "square_part_4.png",
        ]
    );
}

#[test]
fn test_tile_indices_are_row_major_and_contiguous() {
    let image = source("grid.png", 60, 60);
    let spec = GridSpec::new(3, 5).unwrap();

    let tiles = slice_image(&image, spec, |_| {}).unwrap();

    assert_eq!(tiles.len(), 15);

    let mut seen = vec![false; 15];
    for (position, tile) in tiles.iter().enumerate() {
        let index = (tile.row * 5 + tile.col) as usize;
        assert_eq!(index, position, "tiles must arrive in row-major order");
        assert!(!seen.get(index).copied().unwrap_or(true));
        if let Some(slot) = seen.get_mut(index) {
            *slot = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_last_column_and_row_absorb_remainder() {
    let image = source("uneven.png", 100, 70);
    let spec = GridSpec::new(3, 3).unwrap();

    let tiles = slice_image(&image, spec, |_| {}).unwrap();

    // Base cell is 33x23; the last column is 34 wide, the last row 24 tall
    let widths: Vec<u32> = (0..3)
        .map(|c| {
            let tile = tiles.get(0, c).unwrap();
            image::load_from_memory(&tile.bytes).unwrap().width()
        })
        .collect();
    assert_eq!(widths, vec![33, 33, 34]);

    let heights: Vec<u32> = (0..3)
        .map(|r| {
            let tile = tiles.get(r, 0).unwrap();
            image::load_from_memory(&tile.bytes).unwrap().height()
        })
        .collect();
    assert_eq!(heights, vec![23, 23, 24]);
}

#[test]
fn test_progress_is_monotone_and_ends_at_hundred() {
    let image = source("progress.png", 90, 90);
    let spec = GridSpec::new(3, 3).unwrap();

    let mut reports = Vec::new();
    slice_image(&image, spec, |p| reports.push(p)).unwrap();

    assert_eq!(reports.len(), 9);
    assert!(
        reports
            .iter()
            .zip(reports.iter().skip(1))
            .all(|(a, b)| a <= b)
    );
    assert_eq!(reports.last().copied(), Some(100));
}

#[test]
fn test_jpeg_extension_stays_jpeg() {
    let image = source("photo.jpg", 40, 40);
    let spec = GridSpec::new(1, 2).unwrap();

    let tiles = slice_image(&image, spec, |_| {}).unwrap();

    for tile in &tiles {
        assert_eq!(tile.format, TileFormat::Jpeg);
        assert_eq!(tile.format.mime_type(), "image/jpeg");
        assert!(tile.file_name.ends_with(".jpg"));
        assert_eq!(
            image::guess_format(&tile.bytes).unwrap(),
            ImageFormat::Jpeg
        );
    }
}

#[test]
fn test_unknown_extension_encodes_png_but_keeps_name() {
    let image = source("pic.webp", 40, 40);
    let spec = GridSpec::new(1, 1).unwrap();

    let tiles = slice_image(&image, spec, |_| {}).unwrap();

    let tile = tiles.get(0, 0).unwrap();
    assert_eq!(tile.format, TileFormat::Png);
    assert_eq!(tile.format.mime_type(), "image/png");
    assert_eq!(tile.file_name, "pic_part_1.webp");
    assert_eq!(image::guess_format(&tile.bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn test_reslicing_same_spec_yields_same_filenames() {
    let image = source("repeat.png", 64, 64);
    let spec = GridSpec::new(2, 4).unwrap();

    let first = slice_image(&image, spec, |_| {}).unwrap();
    let second = slice_image(&image, spec, |_| {}).unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(first.file_names(), second.file_names());
}

#[test]
fn test_grid_larger_than_image_is_rejected() {
    let image = source("tiny.png", 4, 4);
    let spec = GridSpec::new(10, 10).unwrap();

    let result = slice_image(&image, spec, |_| {});

    assert!(matches!(result, Err(SplitError::InvalidGrid { .. })));
}

#[test]
fn test_corrupt_bytes_surface_decode_error() {
    let result = SourceImage::from_bytes("broken.png", &[0, 1, 2, 3]);

    assert!(matches!(result, Err(SplitError::Decode { .. })));
}

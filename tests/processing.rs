//! End-to-end batch processing through the CLI front end

use gridsplit::io::cli::{Cli, FileProcessor};
use image::{Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let pixels = RgbaImage::from_pixel(width, height, Rgba([90, 120, 200, 255]));
    pixels.save(&path).unwrap();
    path
}

fn cli_for(target: PathBuf) -> Cli {
    Cli {
        target,
        rows: 2,
        cols: 2,
        batch: false,
        output: None,
        quiet: true,
        no_skip: false,
    }
}

fn entry_count(path: &Path) -> usize {
    let bytes = fs::read(path).unwrap();
    ZipArchive::new(Cursor::new(bytes)).unwrap().len()
}

#[test]
fn test_single_file_produces_split_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path(), "photo.png", 64, 64);

    let mut processor = FileProcessor::new(cli_for(input));
    processor.process().unwrap();

    let archive = dir.path().join("photo_split.zip");
    assert!(archive.exists());
    assert_eq!(entry_count(&archive), 4);
}

#[test]
fn test_directory_produces_one_archive_per_image() {
    let dir = tempfile::tempdir().unwrap();
    write_test_image(dir.path(), "a.png", 32, 32);
    write_test_image(dir.path(), "b.png", 32, 32);

    let mut processor = FileProcessor::new(cli_for(dir.path().to_path_buf()));
    processor.process().unwrap();

    assert_eq!(entry_count(&dir.path().join("a_split.zip")), 4);
    assert_eq!(entry_count(&dir.path().join("b_split.zip")), 4);
}

#[test]
fn test_batch_mode_produces_combined_foldered_archive() {
    let dir = tempfile::tempdir().unwrap();
    write_test_image(dir.path(), "a.png", 32, 32);
    write_test_image(dir.path(), "b.png", 32, 32);

    let mut cli = cli_for(dir.path().to_path_buf());
    cli.batch = true;
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    let archive_path = dir.path().join("split_images_batch.zip");
    let bytes = fs::read(&archive_path).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(archive.len(), 8);
    assert!(archive.file_names().all(|n| n.starts_with("a/") || n.starts_with("b/")));
}

#[test]
fn test_output_directory_redirects_archives() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path(), "photo.png", 48, 48);

    let mut cli = cli_for(input);
    cli.output = Some(out.path().to_path_buf());
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    assert!(out.path().join("photo_split.zip").exists());
    assert!(!dir.path().join("photo_split.zip").exists());
}

#[test]
fn test_corrupt_input_is_flagged_without_aborting_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_test_image(dir.path(), "good.png", 32, 32);
    fs::write(dir.path().join("bad.png"), b"not an image").unwrap();

    let mut processor = FileProcessor::new(cli_for(dir.path().to_path_buf()));
    processor.process().unwrap();

    assert!(dir.path().join("good_split.zip").exists());
    assert!(!dir.path().join("bad_split.zip").exists());
}

#[test]
fn test_existing_archive_is_skipped_unless_forced() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path(), "photo.png", 32, 32);
    let archive = dir.path().join("photo_split.zip");
    fs::write(&archive, b"sentinel").unwrap();

    let mut processor = FileProcessor::new(cli_for(input.clone()));
    processor.process().unwrap();
    assert_eq!(fs::read(&archive).unwrap(), b"sentinel");

    let mut cli = cli_for(input);
    cli.no_skip = true;
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();
    assert_eq!(entry_count(&archive), 4);
}

#[test]
fn test_unsupported_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"plain text").unwrap();

    let mut processor = FileProcessor::new(cli_for(path));
    assert!(processor.process().is_err());
}

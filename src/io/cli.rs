//! Command-line interface for batch splitting raster images

use crate::archive::{ArchiveEntry, archive_file_name, bundle_tile_sets};
use crate::io::configuration::{
    BATCH_ARCHIVE_NAME, DEFAULT_COLS, DEFAULT_ROWS, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, path_error};
use crate::io::image::SourceImage;
use crate::io::progress::ProgressManager;
use crate::io::transfer::save_blob;
use crate::slice::{GridSpec, TileSet, slice_image};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridsplit")]
#[command(
    author,
    version,
    about = "Split raster images into grid tiles and package them as zip archives"
)]
/// Command-line arguments for the image splitting tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of grid rows per image
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Number of grid columns per image
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Bundle every image's tiles into one combined archive
    #[arg(short, long)]
    pub batch: bool,

    /// Directory for produced archives (defaults to each input's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if their archive already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing archives should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of one processed input, kept for batch assembly and reporting
struct ItemResult {
    file_name: String,
    tiles: Option<TileSet>,
    error: Option<String>,
}

/// Orchestrates batch splitting of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Per-item failures are flagged and reported without aborting the run;
    /// archive assembly or write failures abort with an error.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, grid validation, archive
    /// assembly, or archive writing fails.
    pub fn process(&mut self) -> Result<()> {
        let spec = GridSpec::new(self.cli.rows, self.cli.cols)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut results = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let result = self.process_file(file, index, spec);
            results.push(result);
        }

        if self.cli.batch {
            self.write_batch_archive(&files, &results)?;
        } else {
            self.write_item_archives(&files, &results)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        self.report_failures(&results);

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_supported_extension(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(path_error("Target file must be a supported raster image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && has_supported_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error("Target must be an image file or directory"))
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, spec: GridSpec) -> ItemResult {
        let file_name = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        if !self.cli.batch && self.cli.skip_existing() {
            let destination = self.item_archive_path(input_path, &file_name);
            if destination.exists() {
                // Allow print for user feedback for skip messages
                #[allow(clippy::print_stderr)]
                if !self.cli.quiet {
                    eprintln!("Skipping: {} (archive exists)", input_path.display());
                }
                return ItemResult {
                    file_name,
                    tiles: None,
                    error: None,
                };
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let outcome = SourceImage::from_path(input_path).and_then(|source| {
            let pm = &mut self.progress_manager;
            slice_image(&source, spec, |percent| {
                if let Some(pm) = pm.as_mut() {
                    pm.update_percent(index, percent);
                }
            })
        });

        match outcome {
            Ok(tiles) => {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.complete_file(index);
                }
                ItemResult {
                    file_name,
                    tiles: Some(tiles),
                    error: None,
                }
            }
            Err(e) => {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_file(index);
                }
                ItemResult {
                    file_name,
                    tiles: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn write_item_archives(&self, files: &[PathBuf], results: &[ItemResult]) -> Result<()> {
        for (path, result) in files.iter().zip(results) {
            let Some(ref tiles) = result.tiles else {
                continue;
            };

            let entry = ArchiveEntry {
                source_name: &result.file_name,
                tiles: tiles.tiles(),
            };
            let blob = bundle_tile_sets(&[entry])?;
            let destination = self.item_archive_path(path, &result.file_name);
            save_blob(&blob, &destination)?;
        }

        Ok(())
    }

    fn write_batch_archive(&self, files: &[PathBuf], results: &[ItemResult]) -> Result<()> {
        let entries: Vec<ArchiveEntry<'_>> = results
            .iter()
            .map(|r| ArchiveEntry {
                source_name: &r.file_name,
                tiles: r.tiles.as_ref().map_or(&[], |t| t.tiles()),
            })
            .collect();

        if entries.iter().all(|e| e.tiles.is_empty()) {
            return Ok(());
        }

        let blob = bundle_tile_sets(&entries)?;
        let destination = self.batch_archive_path(files);
        save_blob(&blob, &destination)
    }

    fn item_archive_path(&self, input_path: &Path, file_name: &str) -> PathBuf {
        let archive_name = archive_file_name(file_name);
        self.cli.output.as_ref().map_or_else(
            || {
                input_path
                    .parent()
                    .map_or_else(|| PathBuf::from(&archive_name), |p| p.join(&archive_name))
            },
            |dir| dir.join(&archive_name),
        )
    }

    fn batch_archive_path(&self, files: &[PathBuf]) -> PathBuf {
        if let Some(dir) = &self.cli.output {
            return dir.join(BATCH_ARCHIVE_NAME);
        }
        if self.cli.target.is_dir() {
            return self.cli.target.join(BATCH_ARCHIVE_NAME);
        }
        files
            .first()
            .and_then(|f| f.parent())
            .map_or_else(|| PathBuf::from(BATCH_ARCHIVE_NAME), |p| p.join(BATCH_ARCHIVE_NAME))
    }

    // Allow print for user feedback for per-item failure flags
    #[allow(clippy::print_stderr)]
    fn report_failures(&self, results: &[ItemResult]) {
        if self.cli.quiet {
            return;
        }

        for result in results {
            if let Some(ref error) = result.error {
                eprintln!("✗ {}: {error}", result.file_name);
            }
        }
    }
}

/// Check whether a path carries a supported raster image extension
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

//! Splitting constants and runtime configuration defaults

// Default grid shape applied when no explicit rows/cols are given
/// Default number of grid rows
pub const DEFAULT_ROWS: u32 = 3;
/// Default number of grid columns
pub const DEFAULT_COLS: u32 = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rows or columns in a grid
pub const MAX_GRID_DIMENSION: u32 = 10_000;

/// Quality setting for JPEG tile encoding (0-100)
pub const JPEG_QUALITY: u8 = 95;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to per-image archive filenames
pub const ARCHIVE_SUFFIX: &str = "_split";
/// Filename of the combined batch archive
pub const BATCH_ARCHIVE_NAME: &str = "split_images_batch.zip";
/// Folder name fallback for sources whose name carries no stem
pub const FALLBACK_GROUP_NAME: &str = "image";

/// Input file extensions accepted as raster sources
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

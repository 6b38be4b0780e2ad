//! Grid-based image splitting and zip packaging
//!
//! The system partitions raster images into a rows by cols grid of tiles,
//! re-encodes each cell as JPEG or PNG, and bundles the resulting tiles into
//! zip archives, either one archive per image or one combined batch archive.

#![forbid(unsafe_code)]

/// Zip archive assembly for sliced tile sets
pub mod archive;
/// Input/output operations, CLI front end, and error handling
pub mod io;
/// Core slicing: grid geometry, tile extraction, encoding, and invocation tracking
pub mod slice;

pub use io::error::{Result, SplitError};

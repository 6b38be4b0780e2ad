//! Archive assembly
//!
//! Groups per-image tile sets into a single compressed zip container
//! following the layout rules in [`bundle`].

/// Zip container assembly for sliced tiles
pub mod bundle;

pub use bundle::{ArchiveEntry, archive_file_name, bundle_tile_sets};

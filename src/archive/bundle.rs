//! Zip container assembly for sliced tiles
//!
//! A single non-empty group places its tiles at the archive root; multiple
//! groups are namespaced into one subfolder per group, named by stripping
//! the extension from the group's source file name. Groups with no tiles
//! contribute nothing. The logical file listing is deterministic for a given
//! input order, though the container itself is not guaranteed bit-identical
//! across runs.

use crate::io::configuration::FALLBACK_GROUP_NAME;
use crate::io::error::Result;
use crate::io::image::base_name_of;
use crate::slice::tile::Tile;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// One source image's contribution to an archive
#[derive(Debug, Clone, Copy)]
pub struct ArchiveEntry<'a> {
    /// Original file name of the source image, used to derive the subfolder
    pub source_name: &'a str,
    /// The group's tiles in row-major order; empty groups are skipped
    pub tiles: &'a [Tile],
}

/// Bundle one or more tile groups into a deflate-compressed zip blob
///
/// # Errors
///
/// Returns [`crate::SplitError::Archive`] if the zip writer fails, or
/// [`crate::SplitError::FileSystem`] if writing tile bytes into the
/// in-memory container fails. No partial archive is returned on failure.
pub fn bundle_tile_sets(entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let populated: Vec<&ArchiveEntry<'_>> =
        entries.iter().filter(|e| !e.tiles.is_empty()).collect();
    let use_folders = populated.len() > 1;

    for entry in populated {
        let folder = group_folder_name(entry.source_name);

        for tile in entry.tiles {
            let path = if use_folders {
                format!("{folder}/{}", tile.file_name)
            } else {
                tile.file_name.clone()
            };

            writer.start_file(path, options)?;
            writer.write_all(&tile.bytes)?;
        }
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Download name for a single image's archive, `<base>_split.zip`
pub fn archive_file_name(source_name: &str) -> String {
    format!(
        "{}{}.zip",
        group_folder_name(source_name),
        crate::io::configuration::ARCHIVE_SUFFIX
    )
}

/// Subfolder name for a group, derived from its source file name
fn group_folder_name(source_name: &str) -> &str {
    let base = base_name_of(source_name);
    if base.is_empty() {
        FALLBACK_GROUP_NAME
    } else {
        base
    }
}

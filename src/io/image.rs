//! Source image loading and output format inference

use crate::io::error::{Result, SplitError};
use image::DynamicImage;
use std::path::Path;

/// Output encoding selected for a source image's tiles
///
/// Derived from the original file extension rather than the decoded pixel
/// data: `jpg`/`jpeg` sources stay JPEG, everything else becomes lossless
/// PNG. Suggested file names keep the original extension either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    /// Lossy JPEG output
    Jpeg,
    /// Lossless PNG output
    Png,
}

impl TileFormat {
    /// Infer the output format from a file extension
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg") {
            Self::Jpeg
        } else {
            Self::Png
        }
    }

    /// MIME type string for the encoded tile bytes
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A decoded source image paired with its original file name
///
/// Ephemeral by design: decoded on demand, held only for the duration of a
/// slicing invocation, and read-only once constructed.
pub struct SourceImage {
    file_name: String,
    pixels: DynamicImage,
}

impl SourceImage {
    /// Wrap an already-decoded image with its display name
    pub const fn from_decoded(file_name: String, pixels: DynamicImage) -> Self {
        Self { file_name, pixels }
    }

    /// Load and decode an image from the filesystem
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::Decode`] if the file cannot be opened or its
    /// contents are not a supported raster format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::open(path).map_err(|e| SplitError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        Ok(Self { file_name, pixels })
    }

    /// Decode an image from an in-memory byte buffer
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::Decode`] if the bytes are not a supported
    /// raster format.
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<Self> {
        let pixels = image::load_from_memory(bytes).map_err(|e| SplitError::Decode {
            path: file_name.into(),
            source: e,
        })?;

        Ok(Self {
            file_name: file_name.to_string(),
            pixels,
        })
    }

    /// Original file name of the source, including extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name with the last `.extension` stripped
    ///
    /// Falls back to the full name when no dot is present, matching the
    /// naming used for archive subfolders.
    pub fn base_name(&self) -> &str {
        base_name_of(&self.file_name)
    }

    /// Extension of the original file name, defaulting to `png`
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map_or("png", |(_, ext)| ext)
    }

    /// Output format for this source's tiles
    pub fn format(&self) -> TileFormat {
        TileFormat::from_extension(self.extension())
    }

    /// Width of the decoded bitmap in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height of the decoded bitmap in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the decoded bitmap
    pub const fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }
}

/// Strip the last `.extension` from a file name
///
/// Returns the full name unchanged when it contains no dot or only a
/// leading dot.
pub fn base_name_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

//! Image partitioning and per-cell encoding
//!
//! Walks the grid in row-major order, crops each cell out of the decoded
//! source, and encodes it to the source's output format. Progress is
//! reported as a rounded percentage after every cell and always ends at
//! exactly 100. Production is all-or-nothing: any cell failure aborts the
//! invocation and no partial [`TileSet`] escapes.

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{Result, SplitError};
use crate::io::image::{SourceImage, TileFormat};
use crate::slice::grid::GridSpec;
use crate::slice::tile::{Tile, TileSet};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

/// Partition a source image into a grid of encoded tiles
///
/// `on_progress` receives a percentage in `[0, 100]` after each encoded
/// cell; the sequence is monotonically non-decreasing and the final call
/// reports exactly 100.
///
/// # Errors
///
/// Returns [`SplitError::InvalidGrid`] when the grid does not fit the image,
/// or [`SplitError::Encode`] when a cell cannot be encoded. No tiles are
/// returned on failure.
pub fn slice_image<F>(source: &SourceImage, spec: GridSpec, mut on_progress: F) -> Result<TileSet>
where
    F: FnMut(u8),
{
    let (width, height) = (source.width(), source.height());
    spec.check_fits(width, height)?;

    let format = source.format();
    let base_name = source.base_name().to_string();
    let extension = source.extension().to_string();

    let total = spec.cell_count();
    let mut tiles = Vec::with_capacity(total as usize);

    for row in 0..spec.rows() {
        for col in 0..spec.cols() {
            let rect = spec.cell_rect(width, height, row, col);
            let cell = source.pixels().crop_imm(rect.x, rect.y, rect.width, rect.height);

            let bytes = encode_cell(&cell, format).map_err(|e| SplitError::Encode {
                row,
                col,
                source: e,
            })?;

            // 1-based row-major part number doubles as the completed count
            let part_number = spec.cell_index(row, col) + 1;
            tiles.push(Tile {
                row,
                col,
                bytes,
                format,
                file_name: format!("{base_name}_part_{part_number}.{extension}"),
            });

            on_progress(percent(part_number, total));
        }
    }

    Ok(TileSet::new(spec, tiles))
}

/// Encode one cropped cell to its target format
fn encode_cell(cell: &DynamicImage, format: TileFormat) -> image::ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();

    match format {
        TileFormat::Jpeg => {
            // JPEG carries no alpha channel
            let rgb = cell.to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        TileFormat::Png => {
            let rgba = cell.to_rgba8();
            PngEncoder::new(&mut bytes).write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                ExtendedColorType::Rgba8,
            )?;
        }
    }

    Ok(bytes)
}

/// Rounded completion percentage in `[0, 100]`
fn percent(completed: u32, total: u32) -> u8 {
    ((f64::from(completed) / f64::from(total)) * 100.0).round() as u8
}

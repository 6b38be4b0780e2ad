//! Tile and tile set data structures
//!
//! A [`Tile`] is one encoded cell of the partition; a [`TileSet`] is the
//! complete row-major sequence for one source image. Both are immutable once
//! produced, so a caller only ever observes a complete set, never a
//! partially-populated one.

use crate::io::image::TileFormat;
use crate::slice::grid::GridSpec;

/// One encoded cell of a rows by cols partition
#[derive(Debug, Clone)]
pub struct Tile {
    /// Row index of the cell, in `[0, rows)`
    pub row: u32,
    /// Column index of the cell, in `[0, cols)`
    pub col: u32,
    /// Encoded image bytes for this cell
    pub bytes: Vec<u8>,
    /// Encoding used for `bytes`
    pub format: TileFormat,
    /// Suggested download name, `<base>_part_<n>.<ext>` with a 1-based
    /// row-major part number
    pub file_name: String,
}

/// The complete ordered tile collection for one source image
#[derive(Debug, Clone)]
pub struct TileSet {
    spec: GridSpec,
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Assemble a tile set from a full row-major tile sequence
    ///
    /// Callers (the slicing engine) guarantee `tiles.len()` equals the
    /// spec's cell count; the constructor is crate-private to keep that
    /// invariant inside the slicing module.
    pub(crate) fn new(spec: GridSpec, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), spec.cell_count() as usize);
        Self { spec, tiles }
    }

    /// Grid shape this set was produced under
    pub const fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Number of tiles, always `rows * cols`
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Borrow the tiles as a row-major slice
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at the given cell coordinates
    pub fn get(&self, row: u32, col: u32) -> Option<&Tile> {
        self.tiles.get(self.spec.cell_index(row, col) as usize)
    }

    /// Iterate tiles in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Suggested file names in row-major order
    pub fn file_names(&self) -> Vec<&str> {
        self.tiles.iter().map(|t| t.file_name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

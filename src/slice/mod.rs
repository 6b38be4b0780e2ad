//! Core slicing functionality
//!
//! This module contains everything between a decoded source image and a
//! finished tile set:
//! - Grid shape validation and cell geometry
//! - Row-major partitioning and per-cell encoding
//! - Tile data structures
//! - Generation-tagged invocation tracking for re-slices

/// Image partitioning and per-cell encoding
pub mod engine;
/// Grid shape validation and cell geometry
pub mod grid;
/// Invocation tracking for re-sliced items
pub mod session;
/// Tile and tile set data structures
pub mod tile;

pub use engine::slice_image;
pub use grid::GridSpec;
pub use session::{Generation, SliceSession};
pub use tile::{Tile, TileSet};

//! Invocation tracking for re-sliced items
//!
//! Grid settings can change while a previous slice of the same image is
//! still in flight. Each invocation is tagged with a [`Generation`] token
//! issued by the item's [`SliceSession`]; completions and progress callbacks
//! carrying a superseded token are discarded, so only the most recent
//! invocation's result ever becomes the committed tile set. A single cell
//! encode cannot be preempted, making token comparison the coarsest (and
//! only) cancellation granularity available.

use crate::io::error::Result;
use crate::slice::tile::TileSet;

/// Monotonic token identifying one slicing invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Per-item invocation state: the committed tile set and the current token
#[derive(Debug, Default)]
pub struct SliceSession {
    counter: u64,
    tiles: Option<TileSet>,
    last_error: Option<String>,
}

impl SliceSession {
    /// Create a session with no committed tiles
    pub const fn new() -> Self {
        Self {
            counter: 0,
            tiles: None,
            last_error: None,
        }
    }

    /// Start a new invocation, superseding any in-flight one
    pub const fn begin(&mut self) -> Generation {
        self.counter += 1;
        Generation(self.counter)
    }

    /// Whether callbacks for the given token should still be honored
    pub const fn accepts(&self, generation: Generation) -> bool {
        generation.0 == self.counter
    }

    /// Commit the outcome of an invocation
    ///
    /// Stale completions are discarded and leave the session untouched;
    /// returns whether the outcome was accepted. A successful result
    /// replaces the committed tile set and clears the error flag; a failure
    /// records the error flag but leaves the previously committed tile set
    /// in place until a later successful slice replaces it.
    pub fn complete(&mut self, generation: Generation, outcome: Result<TileSet>) -> bool {
        if !self.accepts(generation) {
            return false;
        }

        match outcome {
            Ok(tiles) => {
                self.tiles = Some(tiles);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }

        true
    }

    /// The most recently committed complete tile set, if any
    pub const fn tiles(&self) -> Option<&TileSet> {
        self.tiles.as_ref()
    }

    /// Error flag from the most recent completed invocation, if it failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drop committed tiles and the error flag, keeping the token counter
    ///
    /// Used when an item is removed or its source replaced, so stale
    /// completions from the old source can still be recognized and ignored.
    pub fn clear(&mut self) {
        self.tiles = None;
        self.last_error = None;
    }
}

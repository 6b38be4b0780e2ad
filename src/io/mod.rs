//! Input/output operations
//!
//! This module contains the boundary between the slicing core and the host
//! environment:
//! - Source image loading and format inference
//! - The CLI front end and batch orchestration
//! - Progress display
//! - Blob handoff to the filesystem
//! - Error types and configuration constants

/// Command-line interface and batch processing
pub mod cli;
/// Splitting constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Source image loading and format inference
pub mod image;
/// Progress bar management
pub mod progress;
/// Blob handoff to the host filesystem
pub mod transfer;

//! Utility functions and helpers.
//!
//! This module contains the filesystem measuring helpers used by the scanner.

pub mod size;

pub use size::{DirSize, FileOutcome, Skip, calculate_dir_size, size_on_disk};

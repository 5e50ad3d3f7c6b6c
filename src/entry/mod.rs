//! Measured entries and operations on collections of them.
//!
//! ## Main Parts
//!
//! - [`FileEntry`] - One measured input path (file or directory)
//! - [`Entries`] - The ordered collection of measured paths, with sorting and totals

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for entry management
pub mod entry;
pub mod entries;

pub use entries::Entries;
pub use entry::FileEntry;

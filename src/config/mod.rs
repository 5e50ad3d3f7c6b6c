//! Configuration for a single invocation.
//!
//! - [`file`] loads persistent defaults from `config.toml`
//! - [`run`] merges them with the command line into a [`RunConfig`]

pub mod file;
pub mod run;

pub use file::{ColorMode, FileConfig};
pub use run::{OutputOptions, RunConfig};

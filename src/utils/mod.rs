//! Utility modules shared across the build.

pub mod log;
pub mod minify;

//! Generated non-HTML site files.

pub mod sitemap;

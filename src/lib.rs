//! droidex - Android asset density exporter
//!
//! A library for exporting labeled layers and groups of an SVG document
//! as PNG drawables and launcher icons across the Android density buckets
//! (mdpi through xxxhdpi).

pub mod cli;
pub mod config;
pub mod density;
pub mod document;
pub mod error;
pub mod export;
pub mod output;
pub mod raster;
pub mod resolve;

pub use config::Manifest;
pub use density::Density;
pub use document::{Asset, Document, Layer};
pub use error::{DroidexError, Result};
pub use export::{export_assets, export_icon, fan_out_drawable, fan_out_icon};
pub use raster::{InkscapeRasterizer, Rasterizer};
pub use resolve::resolve_output_dir;

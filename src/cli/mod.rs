pub mod assets;
pub mod completions;
pub mod icon;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Manifest;
use crate::error::Result;
use crate::output::Printer;
use crate::resolve::resolve_output_dir;

/// droidex - Android asset density exporter
#[derive(Parser, Debug)]
#[command(name = "droidex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export labeled layer children as density-bucket drawables
    Assets(assets::AssetsArgs),

    /// Export one group as the launcher icon at fixed pixel sizes
    Icon(icon::IconArgs),

    /// List layers and exportable assets in a document
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Pick the export root: explicit flag, then manifest, then directory
/// resolution against the document's declared name.
pub(crate) fn resolve_root(
    output: Option<PathBuf>,
    search_root: Option<PathBuf>,
    manifest: &Manifest,
    docname: Option<&str>,
    printer: &Printer,
) -> Result<PathBuf> {
    if let Some(root) = output.or_else(|| manifest.output.clone()) {
        return Ok(root);
    }

    let search = search_root.or_else(|| manifest.search_root.clone());
    let root = resolve_output_dir(docname, search.as_deref())?;
    printer.info("Resolved", &format!("export root {}", root.display()));
    Ok(root)
}

/// Pick the rasterizer program: explicit flag, then manifest, then default.
pub(crate) fn rasterizer_program(flag: Option<String>, manifest: &Manifest) -> String {
    flag.or_else(|| manifest.rasterizer.clone())
        .unwrap_or_else(|| crate::raster::InkscapeRasterizer::DEFAULT_PROGRAM.to_string())
}

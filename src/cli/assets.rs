//! Assets command implementation.
//!
//! Enumerates labeled layer children and exports each as a drawable into
//! the five density-bucket directories.

use std::path::PathBuf;

use clap::Args;

use crate::config::Manifest;
use crate::document::Document;
use crate::error::Result;
use crate::export;
use crate::output::{plural, Printer};
use crate::raster::InkscapeRasterizer;

/// Export labeled layer children as density-bucket drawables
#[derive(Args, Debug)]
pub struct AssetsArgs {
    /// SVG document to export from
    pub file: PathBuf,

    /// Export root (skips directory resolution)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Rasterizer program to invoke
    #[arg(long)]
    pub rasterizer: Option<String>,

    /// Base directory searched for the document's on-disk copy
    #[arg(long)]
    pub search_root: Option<PathBuf>,
}

pub fn run(args: AssetsArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_default()?;
    let doc = Document::load(&args.file)?;

    let file_name = args.file.file_name().and_then(|n| n.to_str());
    let docname = doc.docname().or(file_name);
    let root = super::resolve_root(args.output, args.search_root, &manifest, docname, printer)?;

    let assets = doc.assets();
    if assets.is_empty() {
        printer.warning("Nothing", "no layer child carries both an id and a label");
        return Ok(());
    }
    printer.info(
        "Found",
        &format!(
            "{} across {}",
            plural(assets.len(), "asset", "assets"),
            plural(doc.layers().len(), "layer", "layers")
        ),
    );

    let raster = InkscapeRasterizer::new(super::rasterizer_program(args.rasterizer, &manifest));
    export::export_assets(&args.file, &assets, &root, &raster, printer)?;

    printer.status(
        "Finished",
        &format!(
            "{} into {}",
            plural(assets.len(), "asset", "assets"),
            root.display()
        ),
    );

    Ok(())
}

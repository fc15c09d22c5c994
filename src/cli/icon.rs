//! Icon command implementation.
//!
//! Exports one designated group as `ic_launcher.png` at the fixed
//! per-bucket pixel sizes. The group id stands in for the editor's
//! "current selection" and is validated before anything is exported.

use std::path::PathBuf;

use clap::Args;

use crate::config::Manifest;
use crate::document::Document;
use crate::error::{DroidexError, Result};
use crate::export;
use crate::output::Printer;
use crate::raster::InkscapeRasterizer;

/// Export one group as the launcher icon at fixed pixel sizes
#[derive(Args, Debug)]
pub struct IconArgs {
    /// SVG document to export from
    pub file: PathBuf,

    /// Id of the group to export as the launcher icon
    #[arg(long)]
    pub id: Option<String>,

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

pub fn run(args: IconArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_default()?;
    let doc = Document::load(&args.file)?;

    let id = args.id.ok_or_else(|| DroidexError::Selection {
        message: "no group selected".to_string(),
        help: Some("Pass --id with the id of the group to export".to_string()),
    })?;
    if !doc.is_group(&id) {
        return Err(DroidexError::Selection {
            message: format!("'{}' is not a group in this document", id),
            help: Some("Group the icon artwork and pass the group's id".to_string()),
        });
    }

    let file_name = args.file.file_name().and_then(|n| n.to_str());
    let docname = doc.docname().or(file_name);
    let root = super::resolve_root(args.output, args.search_root, &manifest, docname, printer)?;

    let raster = InkscapeRasterizer::new(super::rasterizer_program(args.rasterizer, &manifest));
    export::export_icon(&args.file, &id, &root, &raster, printer)?;

    printer.status(
        "Finished",
        &format!("launcher icon into {}", root.display()),
    );

    Ok(())
}

//! List command implementation.
//!
//! Prints the layers and exportable assets a document would produce,
//! without invoking the rasterizer.

use std::path::PathBuf;

use clap::Args;

use crate::document::Document;
use crate::error::{DroidexError, Result};
use crate::output::{plural, Printer};

/// List layers and exportable assets in a document
#[derive(Args, Debug)]
pub struct ListArgs {
    /// SVG document to inspect
    pub file: PathBuf,

    /// Emit the asset list as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let doc = Document::load(&args.file)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&doc.assets()).map_err(|e| DroidexError::Document {
                message: format!("Failed to serialize asset list: {}", e),
                help: None,
            })?;
        println!("{}", json);
        return Ok(());
    }

    for (index, layer) in doc.layers().iter().enumerate() {
        let name = layer.label.clone().unwrap_or_else(|| format!("#{}", index));
        let labels: Vec<&str> = layer
            .children
            .iter()
            .filter(|c| c.id.is_some())
            .filter_map(|c| c.label.as_deref())
            .filter(|l| !l.is_empty())
            .collect();

        if labels.is_empty() {
            printer.info(&name, &printer.dim("(no exportable children)"));
        } else {
            printer.info(&name, &labels.join(", "));
        }
    }

    let assets = doc.assets();
    printer.status(
        "Found",
        &format!(
            "{} in {}",
            plural(assets.len(), "asset", "assets"),
            plural(doc.layers().len(), "layer", "layers")
        ),
    );

    Ok(())
}

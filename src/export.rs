//! Baseline export and density fan-out.
//!
//! Every asset is rasterized once into a scratch `temp/` directory under
//! the export root, then that baseline is resized into each density
//! bucket's directory. Baselines are never produced by the fan-out stage
//! itself; an asset's rasterization always completes before its fan-out
//! begins. Existing output files are overwritten.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::density::Density;
use crate::document::Asset;
use crate::error::{DroidexError, Result};
use crate::output::Printer;
use crate::raster::Rasterizer;

/// Scratch directory for baseline PNGs, under the export root.
pub const TEMP_DIR: &str = "temp";

/// Output filename for the launcher icon in every bucket.
pub const ICON_FILENAME: &str = "ic_launcher.png";

/// Export every asset: one baseline each, fanned out across all tiers
/// into `drawable-*` directories.
pub fn export_assets(
    document: &Path,
    assets: &[Asset],
    root: &Path,
    rasterizer: &dyn Rasterizer,
    printer: &Printer,
) -> Result<()> {
    let temp = root.join(TEMP_DIR);
    ensure_dir(&temp)?;

    for asset in assets {
        printer.status("Exporting", &format!("{} ({})", asset.label, asset.id));
        let baseline = temp.join(format!("{}.png", asset.label));
        rasterizer.rasterize(document, &asset.id, &baseline)?;
        fan_out_drawable(&baseline, &asset.label, root)?;
    }

    Ok(())
}

/// Export the launcher icon: one baseline, fixed square sizes into
/// `mipmap-*` directories.
pub fn export_icon(
    document: &Path,
    icon_id: &str,
    root: &Path,
    rasterizer: &dyn Rasterizer,
    printer: &Printer,
) -> Result<()> {
    let temp = root.join(TEMP_DIR);
    ensure_dir(&temp)?;

    printer.status("Exporting", &format!("launcher icon ({})", icon_id));
    let baseline = temp.join(ICON_FILENAME);
    rasterizer.rasterize(document, icon_id, &baseline)?;
    fan_out_icon(&baseline, root, printer)
}

/// Resize one drawable baseline into every density bucket, proportionally.
pub fn fan_out_drawable(baseline: &Path, label: &str, root: &Path) -> Result<()> {
    let img = open_baseline(baseline)?;
    let (width, height) = (img.width(), img.height());

    for density in Density::ALL {
        let (w, h) = density.scaled_dimensions(width, height);
        let dir = root.join(density.drawable_dir());
        ensure_dir(&dir)?;
        let resized = image::imageops::resize(&img, w, h, FilterType::Lanczos3);
        save_png(&resized, &dir.join(format!("{}.png", label)))?;
    }

    Ok(())
}

/// Resize the icon baseline into every density bucket at its fixed square
/// size. A square baseline is assumed; a non-square one is warned about
/// and squashed rather than rejected.
pub fn fan_out_icon(baseline: &Path, root: &Path, printer: &Printer) -> Result<()> {
    let img = open_baseline(baseline)?;
    if img.width() != img.height() {
        printer.warning(
            "Nonsquare",
            &format!(
                "icon baseline is {}x{}; output will not preserve aspect ratio",
                img.width(),
                img.height()
            ),
        );
    }

    for density in Density::ALL {
        let size = density.icon_size();
        printer.status("Scaling", &format!("{} ({}x{})", density, size, size));
        let dir = root.join(density.mipmap_dir());
        ensure_dir(&dir)?;
        let resized = image::imageops::resize(&img, size, size, FilterType::Lanczos3);
        save_png(&resized, &dir.join(ICON_FILENAME))?;
    }

    Ok(())
}

fn open_baseline(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| DroidexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read baseline PNG: {}", e),
    })?;
    Ok(img.to_rgba8())
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| DroidexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DroidexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}

//! External rasterization of document elements.
//!
//! The export pipelines only need one narrow operation: given a document
//! path and an element id, produce a PNG at a given path. Keeping that
//! behind a trait lets tests run the pipelines with a fake instead of a
//! real editor installation.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DroidexError, Result};

/// Produces a baseline PNG for one document element.
pub trait Rasterizer {
    /// Rasterize the element `id` of `document` into a PNG at `output`.
    ///
    /// Must fail, not silently produce nothing, when the element cannot be
    /// exported.
    fn rasterize(&self, document: &Path, id: &str, output: &Path) -> Result<()>;
}

/// Rasterizer shelling out to the Inkscape command line.
///
/// Any program accepting Inkscape's `--export-id`/`--export-filename`
/// interface works here.
pub struct InkscapeRasterizer {
    program: PathBuf,
}

impl InkscapeRasterizer {
    pub const DEFAULT_PROGRAM: &'static str = "inkscape";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for InkscapeRasterizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl Rasterizer for InkscapeRasterizer {
    fn rasterize(&self, document: &Path, id: &str, output: &Path) -> Result<()> {
        let result = Command::new(&self.program)
            .arg(document)
            .arg("--export-type=png")
            .arg("--export-id-only")
            .arg(format!("--export-id={}", id))
            .arg(format!("--export-filename={}", output.display()))
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DroidexError::RasterizerMissing {
                    program: self.program.display().to_string(),
                })
            }
            Err(e) => {
                return Err(DroidexError::Rasterize {
                    id: id.to_string(),
                    message: format!("Failed to run {}: {}", self.program.display(), e),
                })
            }
        };

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(DroidexError::Rasterize {
                id: id.to_string(),
                message: format!(
                    "{} exited with {}: {}",
                    self.program.display(),
                    out.status,
                    stderr.trim()
                ),
            });
        }

        // Inkscape has been known to exit zero without writing anything
        // (unknown export id, unwritable target). Missing output is a failure.
        if !output.exists() {
            return Err(DroidexError::Rasterize {
                id: id.to_string(),
                message: format!("No output produced at {}", output.display()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_program_is_reported() {
        let dir = tempdir().unwrap();
        let raster = InkscapeRasterizer::new("droidex-no-such-rasterizer");

        let err = raster
            .rasterize(Path::new("doc.svg"), "rect1", &dir.path().join("out.png"))
            .unwrap_err();

        assert!(matches!(err, DroidexError::RasterizerMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported() {
        let dir = tempdir().unwrap();
        let raster = InkscapeRasterizer::new("false");

        let err = raster
            .rasterize(Path::new("doc.svg"), "rect1", &dir.path().join("out.png"))
            .unwrap_err();

        match err {
            DroidexError::Rasterize { id, .. } => assert_eq!(id, "rect1"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_success_without_output_is_reported() {
        let dir = tempdir().unwrap();
        let raster = InkscapeRasterizer::new("true");

        let err = raster
            .rasterize(Path::new("doc.svg"), "rect1", &dir.path().join("out.png"))
            .unwrap_err();

        match err {
            DroidexError::Rasterize { message, .. } => {
                assert!(message.contains("No output produced"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

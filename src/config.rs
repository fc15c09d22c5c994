//! Project manifest (droidex.yaml) parsing.
//!
//! The manifest carries per-project defaults so the common invocation is
//! just `droidex assets drawing.svg`. CLI flags always override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DroidexError, Result};

/// Default manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "droidex.yaml";

/// Project manifest loaded from droidex.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Rasterizer program to invoke (default: `inkscape`).
    pub rasterizer: Option<String>,

    /// Fixed export root, skipping directory resolution entirely.
    pub output: Option<PathBuf>,

    /// Base directory searched for the document's on-disk copy
    /// (default: the user's home directory).
    pub search_root: Option<PathBuf>,
}

impl Manifest {
    /// Load manifest from a droidex.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DroidexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DroidexError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load the manifest from the working directory when present,
    /// defaults otherwise.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert!(manifest.rasterizer.is_none());
        assert!(manifest.output.is_none());
        assert!(manifest.search_root.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
rasterizer: /opt/inkscape/bin/inkscape
output: res
search_root: ~/projects
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest.rasterizer.as_deref(),
            Some("/opt/inkscape/bin/inkscape")
        );
        assert_eq!(manifest.output, Some(PathBuf::from("res")));
        assert_eq!(manifest.search_root, Some(PathBuf::from("~/projects")));
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("output: [not, a, path").unwrap_err();
        assert!(matches!(err, DroidexError::Config { .. }));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = Manifest::load(Path::new("/nonexistent/droidex.yaml")).unwrap_err();
        assert!(matches!(err, DroidexError::Io { .. }));
    }
}

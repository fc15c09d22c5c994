//! Export root resolution.
//!
//! The export root defaults to the user's home directory and is refined by
//! looking for the most recently modified on-disk file whose name matches
//! the document's declared name: assets land next to the copy the user is
//! actually working on. Ties on modification time break by lexicographic
//! path order so repeated runs pick the same directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DroidexError, Result};

/// Resolve the export root for a run.
///
/// `search_root` overrides the home directory as the search base. With no
/// document name, or no match under the base, the base itself is the root.
pub fn resolve_output_dir(docname: Option<&str>, search_root: Option<&Path>) -> Result<PathBuf> {
    let base = match search_root {
        Some(root) => root.to_path_buf(),
        None => dirs::home_dir().ok_or(DroidexError::NoHome)?,
    };

    let Some(docname) = docname else {
        return Ok(base);
    };

    match newest_match(&base, docname) {
        Some(file) => Ok(file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(base)),
        None => Ok(base),
    }
}

/// Find the most recently modified file named `docname` under `base`.
///
/// Unreadable entries are skipped rather than failing the walk; a home
/// directory routinely contains paths the scan cannot enter.
fn newest_match(base: &Path, docname: &str) -> Option<PathBuf> {
    WalkDir::new(base)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() == Some(docname))
        .filter_map(|e| {
            let mtime = e.metadata().ok()?.modified().ok()?;
            Some((mtime, e.into_path()))
        })
        .max_by(|a, b| a.cmp(b))
        .map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[test]
    fn test_no_match_falls_back_to_base() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("other.svg"), "x").unwrap();

        let root = resolve_output_dir(Some("icons.svg"), Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_no_docname_falls_back_to_base() {
        let dir = tempdir().unwrap();
        let root = resolve_output_dir(None, Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_match_selects_containing_directory() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("projects/app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("icons.svg"), "<svg/>").unwrap();

        let root = resolve_output_dir(Some("icons.svg"), Some(dir.path())).unwrap();
        assert_eq!(root, project);
    }

    #[test]
    fn test_most_recent_match_wins() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("a");
        let new = dir.path().join("b");
        fs::create_dir_all(&old).unwrap();
        fs::create_dir_all(&new).unwrap();

        fs::write(old.join("icons.svg"), "old").unwrap();
        fs::write(new.join("icons.svg"), "new").unwrap();
        // Rewrite to guarantee the newer mtime regardless of create order.
        let later = SystemTime::now() + std::time::Duration::from_secs(5);
        let file = fs::File::open(new.join("icons.svg")).unwrap();
        file.set_modified(later).unwrap();

        let root = resolve_output_dir(Some("icons.svg"), Some(dir.path())).unwrap();
        assert_eq!(root, new);
    }

    #[test]
    fn test_directories_with_matching_name_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons.svg")).unwrap();

        let root = resolve_output_dir(Some("icons.svg"), Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }
}

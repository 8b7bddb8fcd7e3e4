use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

/// Recursively collect every regular file under `root`.
///
/// Directories themselves are excluded. Symlinks are followed, so a link to
/// a file counts as a file. Any I/O error during traversal (missing root,
/// permission denied, broken symlink) aborts the whole walk rather than
/// silently skipping entries. No ordering is guaranteed.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "Discovered file");
            files.push(entry.into_path());
        }
    }
    info!(root = %root.display(), count = files.len(), "Directory walk complete");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_nested_files_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();

        let mut files = walk_files(dir.path()).unwrap();
        files.sort();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
        assert!(files.iter().any(|p| p.ends_with("index.html")));
        assert!(files.iter().any(|p| p.ends_with("assets/app.js")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        assert!(walk_files(&missing).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn symlinked_files_are_collected_as_files() {
        use std::os::unix::fs::symlink;
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), "data").unwrap();
        symlink(dir.path().join("real.txt"), dir.path().join("link.txt")).unwrap();

        let files = walk_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("link.txt")));
    }

    #[test]
    #[cfg(unix)]
    fn broken_symlink_is_an_error() {
        use std::os::unix::fs::symlink;
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), "data").unwrap();
        symlink(dir.path().join("gone.txt"), dir.path().join("broken.txt")).unwrap();

        assert!(walk_files(dir.path()).is_err());
    }

    #[test]
    fn empty_root_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = walk_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }
}

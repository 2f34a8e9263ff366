// crates/find_snippet_files/src/lib.rs

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The filename extension identifying snippet files.
const SNIPPET_EXTENSION: &str = "koi";

/// Returns the snippet files directly inside `search_dir`, sorted by path.
///
/// Only regular files with the `koi` extension are returned; the scan does
/// not recurse into subdirectories. If `verbose` is true, logs extra
/// details.
pub fn find_snippet_files_in_dir(search_dir: &Path, verbose: bool) -> io::Result<Vec<PathBuf>> {
    if !search_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("'{}' is not a valid directory", search_dir.display()),
        ));
    }

    let mut snippet_files: Vec<PathBuf> = WalkDir::new(search_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext == SNIPPET_EXTENSION)
                .unwrap_or(false)
        })
        .collect();

    snippet_files.sort();

    if verbose {
        log::debug!(
            "[VERBOSE] {} snippet file(s) found in {}",
            snippet_files.len(),
            search_dir.display()
        );
        for file in &snippet_files {
            log::debug!("  - {}", file.display());
        }
    }

    Ok(snippet_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_only_snippet_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hello.koi"), "°1fn° main").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a snippet").unwrap();
        fs::write(dir.path().join("style.css"), ".kw {}").unwrap();

        let files = find_snippet_files_in_dir(dir.path(), false).unwrap();
        assert_eq!(files, vec![dir.path().join("hello.koi")]);
    }

    #[test]
    fn test_results_are_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.koi"), "b").unwrap();
        fs::write(dir.path().join("a.koi"), "a").unwrap();
        fs::write(dir.path().join("c.koi"), "c").unwrap();

        let files = find_snippet_files_in_dir(dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.koi", "b.koi", "c.koi"]);
    }

    #[test]
    fn test_does_not_recurse_into_subdirectories() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("deep.koi"), "deep").unwrap();
        fs::write(dir.path().join("top.koi"), "top").unwrap();

        let files = find_snippet_files_in_dir(dir.path(), false).unwrap();
        assert_eq!(files, vec![dir.path().join("top.koi")]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let files = find_snippet_files_in_dir(dir.path(), false).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_directory() {
        let result = find_snippet_files_in_dir(Path::new("no_such_directory"), false);
        assert!(result.is_err(), "Expected error for non-existent directory");
    }

    #[test]
    fn test_directory_named_like_snippet_is_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fake.koi")).unwrap();
        fs::write(dir.path().join("real.koi"), "real").unwrap();

        let files = find_snippet_files_in_dir(dir.path(), false).unwrap();
        assert_eq!(files, vec![dir.path().join("real.koi")]);
    }
}

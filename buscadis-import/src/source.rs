//! Access to input files.

use std::io;
use std::path::{Path, PathBuf};

/// Where the importer finds its JSON input.
pub trait FileSource {
    /// Whether `path` exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// JSON files to import from `path`, sorted by name.
    ///
    /// A directory yields the `.json` files directly inside it; a path to a
    /// single `.json` file yields just that file.
    fn list_json_files(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSource`] backed by the local file system.
pub struct FsSource;

impl FileSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_json_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if path.is_file() {
            return Ok(if is_json(path) {
                vec![path.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_json(p))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

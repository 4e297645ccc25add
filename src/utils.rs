use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions of containers that can carry EXIF, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "tif", "tiff", "png", "webp", "heic", "heif", "avif",
];

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Recursively lists image files below `dir`, sorted by path.
/// I/O errors encountered during traversal are propagated.
pub fn list_image_files(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        // The root itself is never filtered, even when it is hidden.
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) if entry.file_type().is_file() && has_image_extension(entry.path()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// Expands command line arguments: files are kept as given (whatever their extension),
/// directories are replaced by the image files they contain.
pub fn expand_paths(paths: &[PathBuf], include_hidden: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_image_files(path, include_hidden)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

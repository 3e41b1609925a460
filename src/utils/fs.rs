use std::borrow::Cow;
use std::path::Path;

/// Get file size in bytes, `None` when the file cannot be stat'ed
pub fn file_size(path: impl AsRef<Path>) -> Option<u64> {
    std::fs::metadata(path.as_ref()).map(|m| m.len()).ok()
}

/// Final path component for log messages, falling back to the whole path
pub fn file_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

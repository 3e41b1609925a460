//! Output naming: `{dir}/{stem}-{quality}{ext}` next to the source.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use crate::core::Quality;
use crate::processing::validation::is_jpeg_path;

/// Computes where the recompressed copy of `source` is written.
///
/// Pure and deterministic. The extension keeps its original spelling and case.
/// A stem that already ends in `-{quality}` is not special-cased, so a second
/// pass over an output lands on `{stem}-{quality}-{quality}{ext}`.
///
/// A file named only `.jpg` (or `.jpeg`) has an empty stem and keeps the whole
/// name as its extension, so it still ends in a JPEG suffix.
pub fn destination(source: &Path, quality: Quality) -> PathBuf {
    let mut name = OsString::new();

    if let Some(file_name) = bare_jpeg_extension(source) {
        name.push(format!("-{quality}"));
        name.push(file_name);
        return source.with_file_name(name);
    }

    if let Some(stem) = source.file_stem() {
        name.push(stem);
    }
    name.push(format!("-{quality}"));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }

    source.with_file_name(name)
}

/// File name of `source` when it is nothing but a JPEG extension.
fn bare_jpeg_extension(source: &Path) -> Option<&OsStr> {
    if source.extension().is_some() {
        return None;
    }
    let file_name = source.file_name()?;
    let starts_with_dot = file_name.as_encoded_bytes().first() == Some(&b'.');
    (starts_with_dot && is_jpeg_path(file_name)).then_some(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(value: i64) -> Quality {
        Quality::new(value).unwrap()
    }

    #[test]
    fn appends_quality_before_extension() {
        assert_eq!(
            destination(Path::new("/photos/cat.jpg"), q(60)),
            PathBuf::from("/photos/cat-60.jpg")
        );
    }

    #[test]
    fn preserves_extension_case() {
        assert_eq!(
            destination(Path::new("/photos/DOG.JPEG"), q(5)),
            PathBuf::from("/photos/DOG-5.JPEG")
        );
    }

    #[test]
    fn only_last_extension_moves() {
        assert_eq!(
            destination(Path::new("/a/holiday.2019.jpg"), q(80)),
            PathBuf::from("/a/holiday.2019-80.jpg")
        );
    }

    #[test]
    fn relative_and_extensionless_sources() {
        assert_eq!(destination(Path::new("cat.jpg"), q(0)), PathBuf::from("cat-0.jpg"));
        assert_eq!(destination(Path::new("/a/README"), q(100)), PathBuf::from("/a/README-100"));
    }

    #[test]
    fn bare_extension_name_keeps_jpeg_suffix() {
        let out = destination(Path::new("/a/.jpg"), q(60));
        assert_eq!(out, PathBuf::from("/a/-60.jpg"));
        assert!(is_jpeg_path(&out));

        assert_eq!(destination(Path::new(".JPEG"), q(5)), PathBuf::from("-5.JPEG"));
        assert_eq!(destination(Path::new("/a/.profile"), q(5)), PathBuf::from("/a/.profile-5"));
    }

    #[test]
    fn existing_suffix_is_not_special_cased() {
        assert_eq!(
            destination(Path::new("/a/cat-60.jpg"), q(60)),
            PathBuf::from("/a/cat-60-60.jpg")
        );
    }

    #[test]
    fn recomputation_never_panics() {
        let sources = ["/a/b.jpg", "b.JPG", "/", "..", ".jpg", "/x/y.tar.jpeg", ""];
        for value in 0..=100 {
            for source in sources {
                let once = destination(Path::new(source), q(value));
                let twice = destination(&once, q(value));
                assert_eq!(destination(&once, q(value)), twice);
            }
        }
    }
}

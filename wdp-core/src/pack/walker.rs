use std::path::Path;

use walkdir::WalkDir;

use crate::domain::ImageSource;
use crate::error::{Result, WdpError};

/// File name suffixes picked up when scanning a directory (case-insensitive).
pub const IMAGE_SUFFIXES: [&str; 3] = [".jpg", ".jpeg", ".png"];

pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Resolve the packer input: a directory, or a comma-separated list of
/// file paths.
///
/// Directories are scanned one level deep and sorted by file name, so the
/// entry index of each image is stable across runs. Explicit lists keep
/// the caller's order and are not filtered by extension.
pub fn collect_sources(input: &str) -> Result<Vec<ImageSource>> {
    let path = Path::new(input);
    if path.is_dir() {
        scan_dir(path)
    } else {
        from_list(input)
    }
}

fn scan_dir(dir: &Path) -> Result<Vec<ImageSource>> {
    let mut sources = Vec::new();
    for e in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let e = e.map_err(std::io::Error::from)?;
        if e.file_type().is_file() && is_image_name(&e.file_name().to_string_lossy()) {
            sources.push(ImageSource::from_path(e.path()));
        }
    }
    Ok(sources)
}

fn from_list(input: &str) -> Result<Vec<ImageSource>> {
    let paths: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if paths.is_empty() {
        return Err(WdpError::InvalidArgument(format!(
            "input {input:?} is neither a directory nor a list of image paths"
        )));
    }
    paths
        .into_iter()
        .map(|p| {
            let path = Path::new(p);
            if path.is_file() {
                Ok(ImageSource::from_path(path))
            } else {
                Err(WdpError::InvalidArgument(format!(
                    "{p} is not a directory or a readable file"
                )))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(sources: &[ImageSource]) -> Vec<&str> {
        sources.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_image_name_filter() {
        assert!(is_image_name("a.jpg"));
        assert!(is_image_name("a.JPEG"));
        assert!(is_image_name("a.Png"));
        assert!(!is_image_name("a.gif"));
        assert!(!is_image_name("a.jpg.txt"));
        assert!(!is_image_name("png"));
    }

    #[test]
    fn test_directory_is_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "b.jpeg", "notes.txt", "d.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();
        fs::write(dir.path().join("nested.jpg").join("e.jpg"), b"x").unwrap();

        let sources = collect_sources(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(names(&sources), ["a.JPG", "b.jpeg", "c.png"]);
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        let sources = collect_sources(dir.path().to_str().unwrap()).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_list_keeps_order_and_skips_filter() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.png");
        let a = dir.path().join("a.bin");
        fs::write(&b, b"x").unwrap();
        fs::write(&a, b"x").unwrap();

        let input = format!("{}, {},", b.display(), a.display());
        let sources = collect_sources(&input).unwrap();
        assert_eq!(names(&sources), ["b.png", "a.bin"]);
    }

    #[test]
    fn test_list_with_missing_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.png");
        fs::write(&ok, b"x").unwrap();
        let input = format!("{},{}", ok.display(), dir.path().join("gone.png").display());
        assert!(matches!(
            collect_sources(&input),
            Err(WdpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_blank_input_is_invalid() {
        assert!(matches!(collect_sources(""), Err(WdpError::InvalidArgument(_))));
        assert!(matches!(collect_sources(" , ,"), Err(WdpError::InvalidArgument(_))));
    }
}

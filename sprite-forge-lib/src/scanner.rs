//! Directory scanner for the sprite asset tree.
//!
//! The asset root contains one folder per sprite type. Each type folder
//! holds either flat image files or one level of subfolders whose files
//! form a fractal (tiled/animated) sprite group. Sprite folders only ever
//! go two levels deep; anything below that is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use sprite_forge_core::types::ImageFile;
use sprite_forge_core::SpriteType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read image header for {}: {source}", path.display())]
    ImageHeader {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Walk the five type folders and produce one [`ImageFile`] per supported
/// file, with width/height read from the PNG header.
///
/// Any directory-read or header-read failure aborts the scan immediately;
/// there is no partial result.
pub fn scan_image_files(root: &Path) -> Result<Vec<ImageFile>, ScanError> {
    let mut all_files = Vec::new();

    for &sprite_type in SpriteType::all() {
        let type_dir = root.join(sprite_type.folder_name());

        for entry in read_dir_sorted(&type_dir)? {
            if entry.is_dir() {
                // Fractal group: one more level, never deeper.
                for sub_entry in read_dir_sorted(&entry)? {
                    if sub_entry.is_dir() {
                        continue;
                    }
                    let Some(name) = supported_file_name(&sub_entry) else {
                        continue;
                    };
                    let parent = entry
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or_default()
                        .to_string();
                    let (width, height) = read_dimensions(&sub_entry)?;
                    all_files.push(ImageFile::new(
                        name, parent, sprite_type, width, height, true,
                    ));
                }
            } else {
                let Some(name) = supported_file_name(&entry) else {
                    continue;
                };
                let (width, height) = read_dimensions(&entry)?;
                all_files.push(ImageFile::new(
                    name,
                    sprite_type.folder_name().to_string(),
                    sprite_type,
                    width,
                    height,
                    false,
                ));
            }
        }
    }

    Ok(all_files)
}

/// Read a directory's entries, sorted by path for deterministic output.
fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();
    Ok(paths)
}

/// The filename, if this path carries a supported extension.
/// The `.png` check is case-sensitive on purpose.
fn supported_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".png") {
        Some(name.to_string())
    } else {
        None
    }
}

/// Width and height from the image header. Pixel data is never decoded.
fn read_dimensions(path: &Path) -> Result<(u32, u32), ScanError> {
    image::image_dimensions(path).map_err(|source| ScanError::ImageHeader {
        path: path.to_path_buf(),
        source,
    })
}

//! # Source Archive Access
//!
//! This module detects the container format of a comic archive and enumerates
//! its entries. Page order is imposed here: entry names are compared with
//! plain ordinal string comparison, so `page10.jpg` sorts before `page2.jpg`.
//! The internal storage order of the container is irrelevant.

use std::fs::File;
use std::path::Path;

use unrar::Archive as RarArchive;
use zip::ZipArchive;

use crate::error::TrimError;

/// The two recognized comic archive container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A `.cbz` file, backed by a ZIP container.
    Zip,
    /// A `.cbr` file, backed by a RAR container.
    Rar,
}

impl SourceFormat {
    /// Detects the container format from the file extension alone.
    ///
    /// The extension check is case-insensitive and deliberately ignores file
    /// existence and content: a `.txt` path is rejected as unsupported even
    /// if no such file exists.
    pub fn from_path(path: &Path) -> Result<Self, TrimError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("cbz") => Ok(Self::Zip),
            Some("cbr") => Ok(Self::Rar),
            _ => Err(TrimError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Lists the pages of the archive at `path` in page order.
///
/// An empty archive yields an empty list; listing nothing is not an error.
pub fn list_pages(path: &Path) -> Result<Vec<String>, TrimError> {
    let format = SourceFormat::from_path(path)?;
    if !path.is_file() {
        return Err(TrimError::NotFound(path.to_path_buf()));
    }
    let mut names = entry_names(path, format)?;
    names.sort_unstable();
    Ok(names)
}

/// Enumerates entry names in the container's storage order.
///
/// For RAR sources only file entries are reported; the RAR processing model
/// has nothing to extract for a bare directory header.
pub(crate) fn entry_names(
    path: &Path,
    format: SourceFormat,
) -> Result<Vec<String>, TrimError> {
    match format {
        SourceFormat::Zip => {
            let file = File::open(path)?;
            let archive =
                ZipArchive::new(file).map_err(|e| TrimError::archive_read(path, e))?;
            Ok(archive.file_names().map(str::to_owned).collect())
        }
        SourceFormat::Rar => {
            let archive = RarArchive::new(path)
                .open_for_listing()
                .map_err(|e| TrimError::archive_read(path, e))?;
            let mut names = Vec::new();
            for entry in archive {
                let entry = entry.map_err(|e| TrimError::archive_read(path, e))?;
                if entry.is_file() {
                    names.push(entry.filename.to_string_lossy().into_owned());
                }
            }
            Ok(names)
        }
    }
}

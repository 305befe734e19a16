use std::path::{Path, PathBuf};

use thiserror::Error;

/// The primary error type for all operations in the `cbtrim` crate.
///
/// The first three variants cover the user-facing precondition failures;
/// `ArchiveRead` wraps whatever the underlying format library reports for a
/// corrupt or unreadable source, so callers must expect error chains beyond
/// the named kinds.
#[derive(Debug, Error)]
pub enum TrimError {
    /// The source path does not resolve to an existing file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source extension is not one of the recognized comic formats.
    #[error("unsupported file format: {} (expected .cbz or .cbr)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The source archive contains zero entries, so there is no page to drop.
    #[error("archive contains no pages: {}", .0.display())]
    EmptyArchive(PathBuf),

    /// The underlying archive library failed while reading the source.
    #[error("could not read archive {}: {source}", .path.display())]
    ArchiveRead {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing an entry into the output archive failed.
    #[error("could not write archive {}: {source}", .path.display())]
    ArchiveWrite {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// An I/O error outside of the archive libraries, typically while
    /// creating the output file or staging RAR contents on disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrimError {
    /// Wraps a format-library error as a read failure on `path`.
    pub(crate) fn archive_read(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ArchiveRead {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    /// Wraps a `zip` error as a write failure on the output `path`.
    pub(crate) fn archive_write(path: &Path, source: zip::result::ZipError) -> Self {
        Self::ArchiveWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}

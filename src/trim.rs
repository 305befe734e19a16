//! # Trim Operation
//!
//! This module implements the core transformation: a source comic archive
//! is rebuilt as a fresh `.cbz` next to it, minus the page whose name sorts
//! last. The source is never modified, and the output is always a ZIP
//! container regardless of the source format.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;
use unrar::Archive as RarArchive;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::archive::{self, SourceFormat};
use crate::error::TrimError;

/// Removes the last page from the comic archive at `path`.
///
/// "Last" means the entry whose name sorts last under ordinal string
/// comparison, independent of the container's internal storage order. The
/// kept entries are written, byte for byte, into a new ZIP container at
/// `<stem>_modified.cbz` beside the source, and that path is returned.
///
/// # Errors
/// * [`TrimError::UnsupportedFormat`] if the extension is not `.cbz`/`.cbr`
///   (checked before anything touches the filesystem).
/// * [`TrimError::NotFound`] if the path is not an existing file.
/// * [`TrimError::EmptyArchive`] if the source has no entries; no output
///   file is created in this case.
/// * [`TrimError::ArchiveRead`] if the source is corrupt or unreadable.
///
/// A partially written output file is left behind if writing fails midway.
pub fn remove_last_page(path: &Path) -> Result<PathBuf, TrimError> {
    let format = SourceFormat::from_path(path)?;
    if !path.is_file() {
        return Err(TrimError::NotFound(path.to_path_buf()));
    }

    let mut names = archive::entry_names(path, format)?;
    names.sort_unstable();
    let dropped = match names.pop() {
        Some(name) => name,
        None => return Err(TrimError::EmptyArchive(path.to_path_buf())),
    };
    debug!("dropping last page {:?} from {}", dropped, path.display());

    let output_path = output_path_for(path);
    let writer = ZipWriter::new(File::create(&output_path)?);
    match format {
        SourceFormat::Zip => copy_zip_pages(path, &names, writer, &output_path)?,
        SourceFormat::Rar => copy_rar_pages(path, &names, writer, &output_path)?,
    }

    Ok(output_path)
}

/// `<dir>/<stem>_modified.cbz`, with the `.cbz` extension forced whatever
/// the source format was.
fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy();
    input.with_file_name(format!("{}_modified.cbz", stem))
}

/// Copies the kept entries of a ZIP source into the output writer, in order.
fn copy_zip_pages(
    source_path: &Path,
    kept: &[String],
    mut writer: ZipWriter<File>,
    output_path: &Path,
) -> Result<(), TrimError> {
    let mut source = ZipArchive::new(File::open(source_path)?)
        .map_err(|e| TrimError::archive_read(source_path, e))?;

    let options = FileOptions::default();
    let mut buf = Vec::new();
    for name in kept {
        let mut entry = source
            .by_name(name)
            .map_err(|e| TrimError::archive_read(source_path, e))?;
        buf.clear();
        entry.read_to_end(&mut buf)?;

        writer
            .start_file(name.as_str(), options)
            .map_err(|e| TrimError::archive_write(output_path, e))?;
        writer.write_all(&buf)?;
        debug!("copied page {} ({} bytes)", name, buf.len());
    }

    writer
        .finish()
        .map_err(|e| TrimError::archive_write(output_path, e))?;
    Ok(())
}

/// Copies the kept entries of a RAR source into the output writer, in order.
///
/// The RAR reader exposes no random-access byte accessor, so the kept
/// entries are first extracted into a scoped temporary directory and read
/// back from there. The directory is removed on drop, on every exit path.
fn copy_rar_pages(
    source_path: &Path,
    kept: &[String],
    mut writer: ZipWriter<File>,
    output_path: &Path,
) -> Result<(), TrimError> {
    let staging = TempDir::new()?;
    let kept_set: HashSet<&str> = kept.iter().map(String::as_str).collect();

    let mut rar = RarArchive::new(source_path)
        .open_for_processing()
        .map_err(|e| TrimError::archive_read(source_path, e))?;
    while let Some(header) = rar
        .read_header()
        .map_err(|e| TrimError::archive_read(source_path, e))?
    {
        let name = header.entry().filename.to_string_lossy().into_owned();
        rar = if header.entry().is_file() && kept_set.contains(name.as_str()) {
            let target = staging.path().join(&header.entry().filename);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            debug!("staging page {}", name);
            header
                .extract_to(&target)
                .map_err(|e| TrimError::archive_read(source_path, e))?
        } else {
            header
                .skip()
                .map_err(|e| TrimError::archive_read(source_path, e))?
        };
    }

    let options = FileOptions::default();
    for name in kept {
        let bytes = std::fs::read(staging.path().join(name))?;
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| TrimError::archive_write(output_path, e))?;
        writer.write_all(&bytes)?;
        debug!("copied page {} ({} bytes)", name, bytes.len());
    }

    writer
        .finish()
        .map_err(|e| TrimError::archive_write(output_path, e))?;
    Ok(())
}

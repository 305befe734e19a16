use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

fn write_cbz(
    path: &Path,
    entries: &[(&str, &[u8])],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = ZipWriter::new(File::create(path)?);
    for (name, data) in entries {
        writer.start_file(*name, FileOptions::default())?;
        writer.write_all(data)?;
    }
    writer.finish()?;
    Ok(())
}

#[test]
fn test_cli_remove_list_cycle() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup: Create a temporary directory with a three-page archive
    let source_dir = tempdir()?;
    let cbz_path = source_dir.path().join("issue.cbz");
    write_cbz(
        &cbz_path,
        &[
            ("page1.jpg", b"first page"),
            ("page2.jpg", b"second page"),
            ("page3.jpg", b"third page"),
        ],
    )?;

    // 2. Remove the last page
    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("remove").arg(&cbz_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("issue_modified.cbz"));

    let output_path = source_dir.path().join("issue_modified.cbz");
    assert!(output_path.exists());

    // 3. Verify the output archive's contents
    let mut archive = ZipArchive::new(File::open(&output_path)?)?;
    assert_eq!(archive.len(), 2);
    let mut first = String::new();
    archive.by_name("page1.jpg")?.read_to_string(&mut first)?;
    assert_eq!(first, "first page");

    // 4. List the output archive
    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("list").arg(&output_path);
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("Pages (2):")
                .and(predicate::str::contains("page1.jpg"))
                .and(predicate::str::contains("page2.jpg"))
                .and(predicate::str::contains("page3.jpg").not()),
        );

    Ok(())
}

#[test]
fn test_cli_remove_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.cbz");

    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("remove").arg(&missing);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));

    Ok(())
}

#[test]
fn test_cli_remove_unsupported_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let txt_path = dir.path().join("notes.txt");
    std::fs::write(&txt_path, "dummy data")?;

    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("remove").arg(&txt_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));

    Ok(())
}

#[test]
fn test_cli_remove_empty_archive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cbz_path = dir.path().join("empty.cbz");
    write_cbz(&cbz_path, &[])?;

    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("remove").arg(&cbz_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no pages"));

    assert!(!dir.path().join("empty_modified.cbz").exists());
    Ok(())
}

#[test]
fn test_cli_remove_garbage_cbr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cbr_path = dir.path().join("broken.cbr");
    std::fs::write(&cbr_path, b"dummy rar data")?;

    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("remove").arg(&cbr_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not read archive"));

    Ok(())
}

#[test]
fn test_cli_list_sorted_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cbz_path = dir.path().join("issue.cbz");
    // Stored out of order; listing must report ordinal page order.
    write_cbz(
        &cbz_path,
        &[("page2.jpg", b"b"), ("page1.jpg", b"a"), ("page10.jpg", b"c")],
    )?;

    let mut cmd = Command::cargo_bin("cbtrim")?;
    cmd.arg("list").arg(&cbz_path);
    cmd.assert().success().stdout(predicate::str::contains(
        "- page1.jpg\n- page10.jpg\n- page2.jpg",
    ));

    Ok(())
}

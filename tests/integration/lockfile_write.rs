//! Writing lockfiles: unconditional overwrite and the staleness gate.

use crate::common::TestProject;
use anyhow::Result;
use quire::core::LockfileError;
use quire::lockfile::{self, GenerateOutcome, LockDocument, LockfileWriter};
use quire::resolver::DependencyGraph;
use quire::test_utils::{GraphFixture, init_test_logging};
use quire::utils::calculate_checksum;
use std::cell::Cell;
use std::path::Path;

#[test]
fn test_overwrite_creates_lockfile() -> Result<()> {
    init_test_logging(None);
    let project = TestProject::new()?;

    lockfile::overwrite(project.project_path(), &GraphFixture::app())?;

    let content = project.read_lockfile()?;
    assert!(content.starts_with("# This file is automatically generated by quire."));
    assert!(content.contains("[[package]]\nname = \"app-core\""));
    assert!(!project.paths().lockfile_path().with_extension("tmp").exists());
    Ok(())
}

#[test]
fn test_overwrite_replaces_existing_content() -> Result<()> {
    let project = TestProject::new()?;
    project.write_lockfile(&"# stale\n".repeat(500))?;

    lockfile::overwrite(project.project_path(), &DependencyGraph::new())?;

    assert_eq!(
        LockDocument::from_toml_str(&project.read_lockfile()?)?,
        LockDocument::new()
    );
    assert!(!project.read_lockfile()?.contains("# stale"));
    Ok(())
}

#[test]
fn test_overwrite_ignores_staleness() -> Result<()> {
    let project = TestProject::new()?;
    let writer = LockfileWriter::with_oracle(project.paths(), |_: &Path| false);

    writer.overwrite(&GraphFixture::app())?;

    assert!(project.lockfile_exists());
    Ok(())
}

#[test]
fn test_overwrite_into_missing_directory_fails_with_io() {
    let writer = LockfileWriter::new(quire::core::ProjectPaths::new("/nonexistent/quire/project"));

    assert!(matches!(writer.overwrite(&GraphFixture::app()), Err(LockfileError::Io { .. })));
}

#[test]
fn test_generate_writes_when_outdated() -> Result<()> {
    let project = TestProject::new()?;
    let writer = LockfileWriter::with_oracle(project.paths(), |_: &Path| true);

    assert_eq!(writer.generate(&GraphFixture::app())?, GenerateOutcome::Written);
    assert!(project.lockfile_exists());
    Ok(())
}

#[test]
fn test_generate_skips_when_current() -> Result<()> {
    let project = TestProject::new()?;
    project.write_lockfile("# hand written, must survive\nversion = 1\n")?;
    let before = calculate_checksum(&project.paths().lockfile_path())?;

    let writer = LockfileWriter::with_oracle(project.paths(), |_: &Path| false);
    for _ in 0..3 {
        assert_eq!(writer.generate(&GraphFixture::app())?, GenerateOutcome::UpToDate);
    }

    assert_eq!(calculate_checksum(&project.paths().lockfile_path())?, before);
    Ok(())
}

#[test]
fn test_generate_skips_without_touching_disk() -> Result<()> {
    let project = TestProject::new()?;
    let asked = Cell::new(0);
    let writer = LockfileWriter::with_oracle(project.paths(), |root: &Path| {
        asked.set(asked.get() + 1);
        assert_eq!(root, project.project_path());
        false
    });

    writer.generate(&GraphFixture::app())?;

    assert_eq!(asked.get(), 1);
    assert!(!project.lockfile_exists());
    Ok(())
}

#[test]
fn test_generate_with_manifest_oracle_first_run() -> Result<()> {
    let project = TestProject::new()?;

    let outcome = lockfile::generate(project.project_path(), &GraphFixture::app())?;

    assert_eq!(outcome, GenerateOutcome::Written);
    assert!(project.lockfile_exists());
    Ok(())
}

#[test]
fn test_generate_with_manifest_oracle_is_idempotent() -> Result<()> {
    let project = TestProject::new()?;
    lockfile::overwrite(project.project_path(), &GraphFixture::app())?;
    project.make_lockfile_newer()?;
    let before = calculate_checksum(&project.paths().lockfile_path())?;

    let outcome = lockfile::generate(project.project_path(), &DependencyGraph::new())?;

    assert_eq!(outcome, GenerateOutcome::UpToDate);
    assert_eq!(calculate_checksum(&project.paths().lockfile_path())?, before);
    Ok(())
}

#[test]
fn test_generate_with_manifest_oracle_rewrites_after_manifest_change() -> Result<()> {
    let project = TestProject::new()?;
    lockfile::overwrite(project.project_path(), &GraphFixture::app())?;
    project.make_manifest_newer()?;

    let outcome = lockfile::generate(project.project_path(), &DependencyGraph::new())?;

    assert_eq!(outcome, GenerateOutcome::Written);
    let graph = lockfile::read(project.project_path())?.expect("lockfile should be present");
    assert!(graph.is_empty());
    Ok(())
}

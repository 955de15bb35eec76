//! Loading lockfiles from disk.

use crate::common::TestProject;
use anyhow::Result;
use quire::constants::LOCKFILE_VERSION;
use quire::core::LockfileError;
use quire::lockfile;
use quire::resolver::{InnerDeps, PackageId, ResolvedDependencyEdge};
use quire::test_utils::{LockfileFixture, init_test_logging};

#[test]
fn test_read_without_lockfile_is_absent() -> Result<()> {
    init_test_logging(None);
    let project = TestProject::new()?;

    assert!(lockfile::read(project.project_path())?.is_none());
    assert!(!project.lockfile_exists());
    Ok(())
}

#[test]
fn test_read_valid_lockfile() -> Result<()> {
    let project = TestProject::new()?;
    LockfileFixture::app().write_to(project.project_path())?;

    let graph = lockfile::read(project.project_path())?.expect("lockfile should be present");

    assert_eq!(graph.len(), 3);
    assert_eq!(
        graph.get(&PackageId::new("app-core", "1.0.0")),
        Some(&InnerDeps::Recorded(vec![
            ResolvedDependencyEdge::new("fmt", ""),
            ResolvedDependencyEdge::new("spdlog", ""),
        ]))
    );
    assert_eq!(graph.get(&PackageId::new("fmt", "10.1.0")), Some(&InnerDeps::Absent));
    Ok(())
}

#[test]
fn test_read_rejects_older_and_newer_versions() -> Result<()> {
    let project = TestProject::new()?;

    for version in [LOCKFILE_VERSION - 1, LOCKFILE_VERSION + 1, 42] {
        LockfileFixture::with_version(version).write_to(project.project_path())?;

        match lockfile::read(project.project_path()) {
            Err(LockfileError::InvalidLockfileVersion { found }) => assert_eq!(found, version),
            other => panic!("version {version}: expected InvalidLockfileVersion, got {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn test_read_malformed_lockfiles_fail() -> Result<()> {
    let project = TestProject::new()?;

    for fixture in [
        LockfileFixture::invalid_syntax(),
        LockfileFixture::missing_version(),
        LockfileFixture::wrong_type(),
    ] {
        fixture.write_to(project.project_path())?;

        match lockfile::read(project.project_path()) {
            Err(LockfileError::FailedToReadLockfile { message }) => {
                assert!(!message.is_empty(), "{}: empty diagnostic", fixture.name);
            }
            other => panic!("{}: expected FailedToReadLockfile, got {other:?}", fixture.name),
        }
    }
    Ok(())
}

#[test]
fn test_read_empty_lockfile_fails() -> Result<()> {
    let project = TestProject::new()?;
    project.write_lockfile("")?;

    assert!(matches!(
        lockfile::read(project.project_path()),
        Err(LockfileError::FailedToReadLockfile { .. })
    ));
    Ok(())
}

#[test]
fn test_read_syntax_error_is_not_a_version_error() -> Result<()> {
    // The version line is fine, the rest is not: parsing must fail first.
    let project = TestProject::new()?;
    project.write_lockfile("version = 2\n[[package]\n")?;

    assert!(matches!(
        lockfile::read(project.project_path()),
        Err(LockfileError::FailedToReadLockfile { .. })
    ));
    Ok(())
}

#[test]
fn test_read_lockfile_without_packages() -> Result<()> {
    let project = TestProject::new()?;
    project.write_lockfile("# only a comment\nversion = 1\n")?;

    let graph = lockfile::read(project.project_path())?.expect("lockfile should be present");
    assert!(graph.is_empty());
    Ok(())
}

#[test]
fn test_read_directory_in_place_of_lockfile_fails() -> Result<()> {
    let project = TestProject::new()?;
    std::fs::create_dir(project.paths().lockfile_path())?;

    assert!(matches!(
        lockfile::read(project.project_path()),
        Err(LockfileError::FailedToReadLockfile { .. })
    ));
    Ok(())
}

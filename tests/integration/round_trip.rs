//! Write-then-read behavior of the lockfile.

use crate::common::TestProject;
use anyhow::Result;
use quire::lockfile::{self, LockDocument, synthesize};
use quire::resolver::{DependencyGraph, InnerDeps, PackageId};
use quire::test_utils::{GraphFixture, LockfileFixture};

#[test]
fn test_round_trip_scenario() -> Result<()> {
    let project = TestProject::new()?;
    let graph = GraphFixture::new().package("A", "1.0.0", &[("B", "^2.0")]).build();

    lockfile::overwrite(project.project_path(), &graph)?;
    let document = LockDocument::from_toml_str(&project.read_lockfile()?)?;
    assert_eq!(document.packages.len(), 1);
    assert_eq!(document.packages[0].name, "A");
    assert_eq!(document.packages[0].version, "1.0.0");
    let names: Vec<_> = document.packages[0].dependencies.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["B"]);

    let restored = lockfile::read(project.project_path())?.expect("lockfile should be present");
    assert_eq!(restored, GraphFixture::new().package("A", "1.0.0", &[("B", "")]).build());
    Ok(())
}

#[test]
fn test_round_trip_empty_graph() -> Result<()> {
    let project = TestProject::new()?;

    lockfile::overwrite(project.project_path(), &DependencyGraph::new())?;

    let document = LockDocument::from_toml_str(&project.read_lockfile()?)?;
    assert!(document.packages.is_empty());
    let restored = lockfile::read(project.project_path())?.expect("lockfile should be present");
    assert!(restored.is_empty());
    Ok(())
}

#[test]
fn test_round_trip_keeps_package_set() -> Result<()> {
    let project = TestProject::new()?;
    let graph = GraphFixture::app();

    lockfile::overwrite(project.project_path(), &graph)?;
    let restored = lockfile::read(project.project_path())?.expect("lockfile should be present");

    let original_ids: Vec<_> = graph.iter().map(|(id, _)| id.clone()).collect();
    let restored_ids: Vec<_> = restored.iter().map(|(id, _)| id.clone()).collect();
    assert_eq!(original_ids, restored_ids);

    for (id, inner) in &restored {
        let original = graph.get(id).expect("same package set");
        let original_names: Vec<_> = original.edges().iter().map(|e| &e.name).collect();
        let restored_names: Vec<_> = inner.edges().iter().map(|e| &e.name).collect();
        assert_eq!(original_names, restored_names, "{id}");
        assert!(inner.edges().iter().all(|e| e.requirement.is_empty()), "{id}");
    }
    Ok(())
}

// Present-but-empty inner dependencies are written exactly like absent ones,
// so the distinction is lost on disk. Kept as observed behavior.
#[test]
fn test_round_trip_recorded_empty_becomes_absent() -> Result<()> {
    let project = TestProject::new()?;
    let graph = GraphFixture::new().package("header-only", "0.3.0", &[]).build();

    lockfile::overwrite(project.project_path(), &graph)?;
    let restored = lockfile::read(project.project_path())?.expect("lockfile should be present");

    assert_eq!(restored.get(&PackageId::new("header-only", "0.3.0")), Some(&InnerDeps::Absent));
    Ok(())
}

#[test]
fn test_written_lockfile_is_byte_identical_across_runs() -> Result<()> {
    let first = TestProject::new()?;
    let second = TestProject::new()?;

    // Same graph, built in a different insertion order.
    let forward = GraphFixture::app();
    let backward = GraphFixture::new()
        .leaf("fmt", "10.1.0")
        .package("spdlog", "1.12.0", &[("fmt", "^10.0")])
        .package("app-core", "1.0.0", &[("fmt", "^10.0"), ("spdlog", ">=1.11")])
        .build();

    lockfile::overwrite(first.project_path(), &forward)?;
    lockfile::overwrite(second.project_path(), &backward)?;

    assert_eq!(first.read_lockfile()?, second.read_lockfile()?);
    Ok(())
}

#[test]
fn test_rewriting_unchanged_graph_is_stable() -> Result<()> {
    let project = TestProject::new()?;
    let graph = GraphFixture::app();

    lockfile::overwrite(project.project_path(), &graph)?;
    let first = project.read_lockfile()?;
    lockfile::overwrite(project.project_path(), &graph)?;

    assert_eq!(project.read_lockfile()?, first);
    Ok(())
}

#[test]
fn test_reading_then_writing_fixture_reproduces_it() -> Result<()> {
    let project = TestProject::new()?;
    LockfileFixture::app().write_to(project.project_path())?;

    let graph = lockfile::read(project.project_path())?.expect("lockfile should be present");

    assert_eq!(synthesize(&graph), LockDocument::from_toml_str(&LockfileFixture::app().content)?);
    Ok(())
}

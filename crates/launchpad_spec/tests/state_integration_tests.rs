//! Integration tests for evaluated state loading.

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use launchpad_spec::{EvaluatedState, Flavor, ParentRef, ParentType, ProjectSpec, SpecError, StateReader};

const FULL_STATE: &str = r#"
output_directory: /tmp/launchpad-out
flavor: terraform
org_id: "987654321"
folders:
  eng:
    display_name: Engineering
    parent_ref:
      type: organization
      id: "987654321"
  platform:
    display_name: Platform
    parent_ref:
      type: folder
      id: eng
projects:
  billing-core:
    display_name: Billing Core
    parent_ref:
      type: folder
      id: platform
    billing_account: 0000-1111-2222
project_templates:
  - id: sandbox
    display_name: Sandbox
    parent_ref:
      type: folder
      id: eng
    billing_account: AAAA-BBBB-CCCC
  - id: analytics
    display_name: Analytics
    parent_ref:
      type: organization
      id: "987654321"
"#;

/// Test loading a complete state document from disk.
#[test]
fn test_read_full_state_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("launchpad.yaml");
    fs::write(&path, FULL_STATE).unwrap();

    let state = StateReader::read_file(&path).unwrap();

    assert_eq!(state.output_directory, PathBuf::from("/tmp/launchpad-out"));
    assert_eq!(state.flavor, Flavor::Terraform);
    assert_eq!(state.org_id, "987654321");
    assert_eq!(state.folders.len(), 2);
    assert_eq!(state.folders["platform"].parent_ref, ParentRef::folder("eng"));
    assert_eq!(
        state.projects["billing-core"].billing_account.as_deref(),
        Some("0000-1111-2222")
    );

    let templates: Vec<_> = state.project_templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(templates, vec!["sandbox", "analytics"]);
    assert_eq!(state.project_templates[1].parent_ref.parent_type, ParentType::Organization);
    assert_eq!(state.project_templates[1].billing_account, None);
}

/// Test that a missing file is reported with its path.
#[test]
fn test_read_missing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.yaml");

    match StateReader::read_file(&path) {
        Err(SpecError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Test that malformed YAML carries the offending path.
#[test]
fn test_read_malformed_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("broken.yaml");
    fs::write(&path, "output_directory: [unterminated").unwrap();

    match StateReader::read_file(&path) {
        Err(SpecError::InvalidFormat { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

/// Test that the builder produces the same state as the loader.
#[test]
fn test_builder_matches_loaded_state() {
    let built = EvaluatedState::new("out", "42").with_project(
        ProjectSpec::new("p1", "Project One", ParentRef::organization("42")).with_billing_account("B-1"),
    );

    let loaded = StateReader::from_yaml(
        r#"
output_directory: out
org_id: "42"
projects:
  p1:
    display_name: Project One
    parent_ref: { type: organization, id: "42" }
    billing_account: B-1
"#,
    )
    .unwrap();

    assert_eq!(built, loaded);
}

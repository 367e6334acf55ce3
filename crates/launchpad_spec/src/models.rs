//! Data models for the evaluated state.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Output flavor: the configuration dialect files are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    #[default]
    Terraform,
    DeploymentManager,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Terraform => "terraform",
            Flavor::DeploymentManager => "deployment-manager",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Flavor::Terraform, Flavor::DeploymentManager]
    }
}

impl FromStr for Flavor {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terraform" | "tf" => Ok(Flavor::Terraform),
            "deployment-manager" | "dm" => Ok(Flavor::DeploymentManager),
            other => Err(SpecError::UnknownFlavor(other.to_string())),
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of resource a parent reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentType {
    Organization,
    Folder,
}

/// Reference to the parent of a folder or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(rename = "type")]
    pub parent_type: ParentType,
    #[serde(rename = "id")]
    pub parent_id: String,
}

impl ParentRef {
    pub fn organization(id: impl Into<String>) -> Self {
        Self {
            parent_type: ParentType::Organization,
            parent_id: id.into(),
        }
    }

    pub fn folder(id: impl Into<String>) -> Self {
        Self {
            parent_type: ParentType::Folder,
            parent_id: id.into(),
        }
    }
}

/// A GCP folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSpec {
    /// Stable identifier, also used as the resource name.
    #[serde(default)]
    pub id: String,
    pub display_name: String,
    pub parent_ref: ParentRef,
}

impl FolderSpec {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, parent_ref: ParentRef) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            parent_ref,
        }
    }
}

/// A GCP project, or a project template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    #[serde(default)]
    pub id: String,
    pub display_name: String,
    pub parent_ref: ParentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_account: Option<String>,
}

impl ProjectSpec {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, parent_ref: ParentRef) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            parent_ref,
            billing_account: None,
        }
    }

    pub fn with_billing_account(mut self, account: impl Into<String>) -> Self {
        self.billing_account = Some(account.into());
        self
    }
}

/// Fully resolved input to generation.
///
/// Folder and project mappings are ordered by identifier, so every walk over
/// them yields the same sequence for the same state. Templates keep their
/// declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedState {
    pub output_directory: PathBuf,
    #[serde(default)]
    pub flavor: Flavor,
    pub org_id: String,
    #[serde(default)]
    pub folders: BTreeMap<String, FolderSpec>,
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectSpec>,
    #[serde(default)]
    pub project_templates: Vec<ProjectSpec>,
}

impl EvaluatedState {
    pub fn new(output_directory: impl Into<PathBuf>, org_id: impl Into<String>) -> Self {
        Self {
            output_directory: output_directory.into(),
            flavor: Flavor::default(),
            org_id: org_id.into(),
            folders: BTreeMap::new(),
            projects: BTreeMap::new(),
            project_templates: Vec::new(),
        }
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    pub fn with_folder(mut self, folder: FolderSpec) -> Self {
        self.folders.insert(folder.id.clone(), folder);
        self
    }

    pub fn with_project(mut self, project: ProjectSpec) -> Self {
        self.projects.insert(project.id.clone(), project);
        self
    }

    pub fn with_project_template(mut self, template: ProjectSpec) -> Self {
        self.project_templates.push(template);
        self
    }

    /// Total number of resources described by the state.
    pub fn resource_count(&self) -> usize {
        self.folders.len() + self.projects.len() + self.project_templates.len()
    }
}

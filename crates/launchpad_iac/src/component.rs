//! Units of generation.
//!
//! Each [`Component`] is one logical group of the output tree: the output
//! root itself, all folders, all projects, or a single project template. A
//! component may contribute a directory and a set of files; groups with
//! nothing to emit contribute neither.

use std::collections::BTreeMap;
use std::path::{self, Path, PathBuf};

use launchpad_spec::{EvaluatedState, Flavor, FolderSpec, ProjectSpec};

use crate::construct::{Construct, Expr};
use crate::directory::DirectoryDescriptor;
use crate::error::{IacError, IacResult};
use crate::file::{File, MAIN, OUTPUT, VARIABLES};

/// Directory name of the folder group.
pub const FOLDERS_DIR: &str = "folders";
/// Directory name of the project group; templates nest beneath it.
pub const PROJECTS_DIR: &str = "projects";
/// Directory under [`PROJECTS_DIR`] holding one directory per template.
pub const TEMPLATES_DIR: &str = "templates";
/// Default credentials path written into variables files.
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

/// What a component covers.
#[derive(Debug, Clone, Copy)]
pub enum ComponentKind<'a> {
    OutputRoot,
    FolderGroup(&'a BTreeMap<String, FolderSpec>),
    ProjectGroup(&'a BTreeMap<String, ProjectSpec>),
    ProjectTemplate(&'a ProjectSpec),
}

/// A logical group of generated output, bound to the state it reads.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a> {
    state: &'a EvaluatedState,
    kind: ComponentKind<'a>,
    backup: bool,
}

impl<'a> Component<'a> {
    pub fn output_root(state: &'a EvaluatedState) -> Self {
        Self::with_kind(state, ComponentKind::OutputRoot)
    }

    pub fn folders(state: &'a EvaluatedState) -> Self {
        Self::with_kind(state, ComponentKind::FolderGroup(&state.folders))
    }

    pub fn projects(state: &'a EvaluatedState) -> Self {
        Self::with_kind(state, ComponentKind::ProjectGroup(&state.projects))
    }

    pub fn project_template(state: &'a EvaluatedState, template: &'a ProjectSpec) -> Self {
        Self::with_kind(state, ComponentKind::ProjectTemplate(template))
    }

    fn with_kind(state: &'a EvaluatedState, kind: ComponentKind<'a>) -> Self {
        Self {
            state,
            kind,
            backup: false,
        }
    }

    /// Back up an existing group directory before regenerating it.
    ///
    /// Never applies to the output root, which may hold files we do not own.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup && !matches!(self.kind, ComponentKind::OutputRoot);
        self
    }

    /// Stable name; for groups it is also the root-relative directory.
    pub fn name(&self) -> String {
        match self.kind {
            ComponentKind::OutputRoot => "output-root".to_string(),
            ComponentKind::FolderGroup(_) => FOLDERS_DIR.to_string(),
            ComponentKind::ProjectGroup(_) => PROJECTS_DIR.to_string(),
            ComponentKind::ProjectTemplate(t) => template_dir(&t.id).display().to_string(),
        }
    }

    /// Directory to realize, or `None` when the component has nothing to emit.
    pub fn directory(&self) -> Option<DirectoryDescriptor> {
        let root = &self.state.output_directory;
        let desc = match self.kind {
            ComponentKind::OutputRoot => DirectoryDescriptor::new(root, PathBuf::new()),
            ComponentKind::FolderGroup(folders) if folders.is_empty() => return None,
            ComponentKind::FolderGroup(_) => DirectoryDescriptor::new(FOLDERS_DIR, root),
            ComponentKind::ProjectGroup(projects) if projects.is_empty() => return None,
            ComponentKind::ProjectGroup(_) => DirectoryDescriptor::new(PROJECTS_DIR, root),
            ComponentKind::ProjectTemplate(t) => DirectoryDescriptor::new(template_dir(&t.id), root),
        };
        Some(desc.with_backup(self.backup))
    }

    /// Files to write into [`Component::directory`], or `None` if there are none.
    pub fn files(&self) -> IacResult<Option<Vec<File>>> {
        let dir = match self.directory() {
            Some(desc) if !matches!(self.kind, ComponentKind::OutputRoot) => desc.path(),
            _ => return Ok(None),
        };

        match self.state.flavor {
            Flavor::Terraform => Ok(Some(self.terraform_files(&dir))),
            flavor @ Flavor::DeploymentManager => Err(IacError::UnsupportedFlavor(flavor)),
        }
    }

    fn terraform_files(&self, dir: &Path) -> Vec<File> {
        match self.kind {
            ComponentKind::OutputRoot => Vec::new(),
            ComponentKind::FolderGroup(folders) => {
                let mut main = vec![Construct::terraform(), Construct::google_provider()];
                let mut outputs = Vec::with_capacity(folders.len());
                for folder in folders.values() {
                    main.push(Construct::google_folder(
                        &folder.id,
                        &folder.display_name,
                        Some(&folder.parent_ref),
                    ));
                    outputs.push(Construct::output(
                        &folder.id,
                        Expr::reference(format!("google_folder.{}.name", folder.id)),
                    ));
                }
                self.group_files(dir, main, outputs)
            }
            ComponentKind::ProjectGroup(projects) => {
                let mut main = vec![Construct::terraform(), Construct::google_provider()];
                let mut outputs = Vec::with_capacity(projects.len());
                for project in projects.values() {
                    main.push(Construct::google_project(project));
                    outputs.push(Construct::output(
                        &project.id,
                        Expr::reference(format!("google_project.{}.project_id", project.id)),
                    ));
                }
                self.group_files(dir, main, outputs)
            }
            ComponentKind::ProjectTemplate(template) => {
                let main = vec![Construct::google_project(template)
                    .with_billing_account(Expr::reference("var.billing_account"))];
                let variables = vec![
                    self.organization_id_variable(),
                    Construct::variable(
                        "billing_account",
                        "GCP Billing Account",
                        template.billing_account.clone().unwrap_or_default(),
                    ),
                ];
                vec![File::new(MAIN, dir, main), File::new(VARIABLES, dir, variables)]
            }
        }
    }

    fn group_files(&self, dir: &Path, main: Vec<Construct>, outputs: Vec<Construct>) -> Vec<File> {
        let variables = vec![
            self.organization_id_variable(),
            Construct::variable(
                "credentials_file_path",
                "Service account key path",
                DEFAULT_CREDENTIALS_PATH,
            ),
        ];
        vec![
            File::new(MAIN, dir, main),
            File::new(OUTPUT, dir, outputs),
            File::new(VARIABLES, dir, variables),
        ]
    }

    fn organization_id_variable(&self) -> Construct {
        Construct::variable("organization_id", "GCP Organization ID", &self.state.org_id)
    }
}

/// Root-relative directory of a project template.
pub fn template_dir(id: &str) -> PathBuf {
    Path::new(PROJECTS_DIR).join(TEMPLATES_DIR).join(id)
}

/// Template ids become directory names, so each must be one normal path segment.
pub fn validate_template_id(id: &str) -> IacResult<()> {
    let mut components = Path::new(id).components();
    match (components.next(), components.next()) {
        (Some(path::Component::Normal(segment)), None) if segment == id => Ok(()),
        _ => Err(IacError::InvalidTemplateId(id.to_string())),
    }
}

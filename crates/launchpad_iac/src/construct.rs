//! Renderable file fragments.
//!
//! A [`Construct`] is one block of a generated file: the version block, the
//! provider block, a resource, an output or a variable. Rendering is pure and
//! is defined per flavor; a flavor without a rendering yields
//! [`IacError::UnsupportedFlavor`] instead of partial text.

use launchpad_spec::{Flavor, ParentRef, ParentType, ProjectSpec};

use crate::error::{IacError, IacResult};
use crate::flavor::TERRAFORM_REQUIRED_VERSION;

/// Right-hand side of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A string literal, quoted and escaped on render.
    Literal(String),
    /// A raw expression such as `var.organization_id`, rendered verbatim.
    Reference(String),
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn reference(expr: impl Into<String>) -> Self {
        Expr::Reference(expr.into())
    }

    fn to_hcl(&self) -> String {
        match self {
            Expr::Literal(s) => quote(s),
            Expr::Reference(r) => r.clone(),
        }
    }
}

/// A typed block of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    /// Version constraints.
    Terraform { required_version: String },
    /// Google provider configuration.
    GoogleProvider,
    /// A folder resource.
    GoogleFolder {
        id: String,
        display_name: String,
        parent: Option<ParentRef>,
    },
    /// A project resource.
    GoogleProject {
        id: String,
        display_name: String,
        parent: Option<ParentRef>,
        billing_account: Option<Expr>,
    },
    /// An output exposing `value` under `id`.
    Output { id: String, value: Expr },
    /// An input variable with a string default.
    Variable {
        name: String,
        description: String,
        default: String,
    },
}

impl Construct {
    pub fn terraform() -> Self {
        Construct::Terraform {
            required_version: TERRAFORM_REQUIRED_VERSION.to_string(),
        }
    }

    pub fn google_provider() -> Self {
        Construct::GoogleProvider
    }

    pub fn google_folder(
        id: impl Into<String>,
        display_name: impl Into<String>,
        parent: Option<&ParentRef>,
    ) -> Self {
        Construct::GoogleFolder {
            id: id.into(),
            display_name: display_name.into(),
            parent: parent.cloned(),
        }
    }

    /// Project resource with the billing account taken literally from the spec.
    pub fn google_project(spec: &ProjectSpec) -> Self {
        Construct::GoogleProject {
            id: spec.id.clone(),
            display_name: spec.display_name.clone(),
            parent: Some(spec.parent_ref.clone()),
            billing_account: spec.billing_account.as_ref().map(Expr::literal),
        }
    }

    /// Replace the billing account of a project resource.
    pub fn with_billing_account(mut self, expr: Expr) -> Self {
        if let Construct::GoogleProject { billing_account, .. } = &mut self {
            *billing_account = Some(expr);
        }
        self
    }

    pub fn output(id: impl Into<String>, value: Expr) -> Self {
        Construct::Output {
            id: id.into(),
            value,
        }
    }

    pub fn variable(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Construct::Variable {
            name: name.into(),
            description: description.into(),
            default: default.into(),
        }
    }

    /// Render this construct in the given flavor.
    pub fn render(&self, flavor: Flavor) -> IacResult<String> {
        match flavor {
            Flavor::Terraform => Ok(self.to_hcl()),
            Flavor::DeploymentManager => Err(IacError::UnsupportedFlavor(flavor)),
        }
    }

    fn to_hcl(&self) -> String {
        match self {
            Construct::Terraform { required_version } => block(
                "terraform",
                &[("required_version", quote(required_version))],
            ),
            Construct::GoogleProvider => block(
                r#"provider "google""#,
                &[("credentials", "file(var.credentials_file_path)".to_string())],
            ),
            Construct::GoogleFolder {
                id,
                display_name,
                parent,
            } => {
                let mut attrs = vec![("display_name", quote(display_name))];
                if let Some(parent) = parent {
                    let value = match parent.parent_type {
                        ParentType::Organization => {
                            quote(&format!("organizations/{}", parent.parent_id))
                        }
                        ParentType::Folder => format!("google_folder.{}.name", parent.parent_id),
                    };
                    attrs.push(("parent", value));
                }
                block(&format!(r#"resource "google_folder" "{}""#, id), &attrs)
            }
            Construct::GoogleProject {
                id,
                display_name,
                parent,
                billing_account,
            } => {
                let mut attrs = vec![("name", quote(display_name)), ("project_id", quote(id))];
                if let Some(parent) = parent {
                    let key = match parent.parent_type {
                        ParentType::Organization => "org_id",
                        ParentType::Folder => "folder_id",
                    };
                    attrs.push((key, quote(&parent.parent_id)));
                }
                if let Some(account) = billing_account {
                    attrs.push(("billing_account", account.to_hcl()));
                }
                block(&format!(r#"resource "google_project" "{}""#, id), &attrs)
            }
            Construct::Output { id, value } => {
                block(&format!(r#"output "{}""#, id), &[("value", value.to_hcl())])
            }
            Construct::Variable {
                name,
                description,
                default,
            } => block(
                &format!(r#"variable "{}""#, name),
                &[("description", quote(description)), ("default", quote(default))],
            ),
        }
    }
}

/// Render a block with `=` signs aligned the way `terraform fmt` aligns them.
fn block(header: &str, attrs: &[(&str, String)]) -> String {
    let width = attrs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = format!("{} {{\n", header);
    for (key, value) in attrs {
        out.push_str(&format!("  {:<width$} = {}\n", key, value, width = width));
    }
    out.push_str("}\n");
    out
}

/// Quote a string as an HCL literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                // Template sequences must not be interpolated.
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

//! File assembly from ordered constructs.

use std::fs;
use std::path::PathBuf;

use launchpad_spec::Flavor;
use tracing::debug;

use crate::construct::Construct;
use crate::error::IacResult;
use crate::flavor;

/// Base name of the file holding provider and resource blocks.
pub const MAIN: &str = "main";
/// Base name of the file holding outputs.
pub const OUTPUT: &str = "output";
/// Base name of the file holding variables.
pub const VARIABLES: &str = "variables";

/// A generated file: its constructs are rendered and concatenated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub dir: PathBuf,
    pub constructs: Vec<Construct>,
}

impl File {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, constructs: Vec<Construct>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            constructs,
        }
    }

    /// Base name plus the flavor's extension, e.g. `main.tf`.
    pub fn file_name(&self, flavor: Flavor) -> IacResult<String> {
        Ok(format!("{}.{}", self.name, flavor::extension(flavor)?))
    }

    pub fn path(&self, flavor: Flavor) -> IacResult<PathBuf> {
        Ok(self.dir.join(self.file_name(flavor)?))
    }

    /// Concatenate the rendered constructs, one blank line between blocks.
    pub fn render(&self, flavor: Flavor) -> IacResult<String> {
        let blocks = self
            .constructs
            .iter()
            .map(|c| c.render(flavor))
            .collect::<IacResult<Vec<_>>>()?;
        Ok(blocks.join("\n"))
    }

    /// Render and write the file. Nothing is written if rendering fails.
    pub fn write(&self, flavor: Flavor) -> IacResult<PathBuf> {
        let rendered = RenderedFile::from_file(self, flavor)?;
        rendered.write()?;
        Ok(rendered.path)
    }
}

/// A file whose content is fully rendered and ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn from_file(file: &File, flavor: Flavor) -> IacResult<Self> {
        Ok(Self {
            path: file.path(flavor)?,
            content: file.render(flavor)?,
        })
    }

    pub fn write(&self) -> IacResult<()> {
        fs::write(&self.path, &self.content)?;
        debug!("Wrote {:?} ({} bytes)", self.path, self.content.len());
        Ok(())
    }
}

//! Evaluated state loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::EvaluatedState;

/// Reader for evaluated state documents.
pub struct StateReader;

impl StateReader {
    /// Read an evaluated state from a YAML file.
    pub fn read_file(path: impl AsRef<Path>) -> SpecResult<EvaluatedState> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }
        debug!("Reading evaluated state from {:?}", path);

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            SpecError::Yaml(err) => SpecError::InvalidFormat {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            SpecError::InvalidFormat { message, .. } => SpecError::InvalidFormat {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse an evaluated state from YAML content.
    ///
    /// Map entries may omit their `id`; it is taken from the map key.
    pub fn from_yaml(content: &str) -> SpecResult<EvaluatedState> {
        let mut state: EvaluatedState = serde_yaml::from_str(content)?;

        for (key, folder) in state.folders.iter_mut() {
            Self::reconcile_id(key, &mut folder.id)?;
        }
        for (key, project) in state.projects.iter_mut() {
            Self::reconcile_id(key, &mut project.id)?;
        }

        debug!(
            "Loaded state: {} folders, {} projects, {} templates",
            state.folders.len(),
            state.projects.len(),
            state.project_templates.len()
        );
        Ok(state)
    }

    fn reconcile_id(key: &str, id: &mut String) -> SpecResult<()> {
        if id.is_empty() {
            *id = key.to_string();
            Ok(())
        } else if id != key {
            Err(SpecError::InvalidFormat {
                path: Default::default(),
                message: format!("entry '{}' declares mismatched id '{}'", key, id),
            })
        } else {
            Ok(())
        }
    }
}

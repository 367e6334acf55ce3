//! The ordered list of components for one generation run.

use launchpad_spec::EvaluatedState;
use tracing::debug;

use crate::component::{validate_template_id, Component};
use crate::error::IacResult;

/// Components in processing order: output root, folders, projects, then one
/// entry per project template in declared order.
#[derive(Debug)]
pub struct ComponentRegistry<'a> {
    components: Vec<Component<'a>>,
}

impl<'a> ComponentRegistry<'a> {
    /// Build the registry for a state. `backup` applies to group directories.
    ///
    /// Fails with `InvalidTemplateId` if a template id is not a single path segment.
    pub fn from_state(state: &'a EvaluatedState, backup: bool) -> IacResult<Self> {
        for template in &state.project_templates {
            validate_template_id(&template.id)?;
        }

        let mut components = vec![
            Component::output_root(state),
            Component::folders(state),
            Component::projects(state),
        ];
        components.extend(
            state
                .project_templates
                .iter()
                .map(|t| Component::project_template(state, t)),
        );

        let components: Vec<_> = components.into_iter().map(|c| c.with_backup(backup)).collect();
        debug!("Registered {} components", components.len());
        Ok(Self { components })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component<'a>> {
        self.components.iter()
    }

    /// Component names in processing order.
    pub fn names(&self) -> Vec<String> {
        self.components.iter().map(Component::name).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

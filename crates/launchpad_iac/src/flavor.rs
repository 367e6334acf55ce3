//! Per-flavor properties of generated output.

use launchpad_spec::Flavor;

use crate::error::{IacError, IacResult};

/// Terraform version constraint written into every `terraform` block.
pub const TERRAFORM_REQUIRED_VERSION: &str = "~> 0.12.0";

/// Whether the flavor has a rendering for every construct.
pub fn is_implemented(flavor: Flavor) -> bool {
    matches!(flavor, Flavor::Terraform)
}

/// Fail with `UnsupportedFlavor` unless the flavor can be rendered.
pub fn ensure_implemented(flavor: Flavor) -> IacResult<()> {
    if is_implemented(flavor) {
        Ok(())
    } else {
        Err(IacError::UnsupportedFlavor(flavor))
    }
}

/// File extension for generated files, without the dot.
pub fn extension(flavor: Flavor) -> IacResult<&'static str> {
    match flavor {
        Flavor::Terraform => Ok("tf"),
        other => Err(IacError::UnsupportedFlavor(other)),
    }
}

/// Whether output in this flavor should be passed through a formatter.
pub fn requires_formatting(flavor: Flavor) -> bool {
    matches!(flavor, Flavor::Terraform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terraform_is_implemented() {
        assert!(ensure_implemented(Flavor::Terraform).is_ok());
        assert_eq!(extension(Flavor::Terraform).unwrap(), "tf");
        assert!(requires_formatting(Flavor::Terraform));
    }

    #[test]
    fn test_deployment_manager_is_not_implemented() {
        assert!(matches!(
            ensure_implemented(Flavor::DeploymentManager),
            Err(IacError::UnsupportedFlavor(Flavor::DeploymentManager))
        ));
        assert!(extension(Flavor::DeploymentManager).is_err());
        assert!(!requires_formatting(Flavor::DeploymentManager));
    }
}

//! # launchpad_iac
//!
//! Generation of infrastructure-definition files from an evaluated state.
//!
//! Output is organized into components processed in a fixed order: the
//! output root, all folders, all projects, then one component per project
//! template. Each component places its directory and then writes its files,
//! which are assembled from typed constructs rendered in the state's flavor.
//!
//! ## Output layout
//!
//! ```text
//! <output_directory>/
//!   folders/                  main.tf output.tf variables.tf
//!   projects/                 main.tf output.tf variables.tf
//!   projects/templates/<id>/  main.tf variables.tf
//! ```
//!
//! Groups with no entries produce no directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use launchpad_iac::{GenerateOptions, Generator};
//! use launchpad_spec::StateReader;
//!
//! let state = StateReader::read_file("./launchpad.yaml").unwrap();
//! let report = Generator::new(GenerateOptions::default())
//!     .generate(&state)
//!     .unwrap();
//!
//! println!("wrote {} files", report.files.len());
//! ```

pub mod component;
pub mod config;
pub mod construct;
pub mod directory;
pub mod error;
pub mod file;
pub mod flavor;
pub mod formatter;
pub mod generator;
pub mod registry;

pub use component::{Component, ComponentKind};
pub use config::GenerateOptions;
pub use construct::{Construct, Expr};
pub use directory::{DirectoryDescriptor, PlacedDirectory};
pub use error::{IacError, IacResult};
pub use file::{File, RenderedFile};
pub use formatter::{OutputFormatter, TerraformFormatter};
pub use generator::{GenerationReport, Generator};
pub use registry::ComponentRegistry;

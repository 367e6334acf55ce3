//! # launchpad_spec
//!
//! The evaluated state consumed by the Launchpad generation engine.
//!
//! An [`EvaluatedState`] is the fully resolved description of an organization's
//! folders, projects and project templates, together with the output root and
//! the output [`Flavor`]. It is produced once before generation starts and is
//! only ever read afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use launchpad_spec::{EvaluatedState, FolderSpec, ParentRef, StateReader};
//!
//! // Build a state in memory
//! let state = EvaluatedState::new("./out", "123456789")
//!     .with_folder(FolderSpec::new("f1", "Team A", ParentRef::organization("123456789")));
//!
//! // Or load one from a YAML document
//! let loaded = StateReader::read_file("./launchpad.yaml").unwrap();
//! ```

pub mod error;
pub mod models;
pub mod reader;

pub use error::{SpecError, SpecResult};
pub use models::*;
pub use reader::StateReader;

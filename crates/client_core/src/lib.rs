//! Client side of the item list: fetch records, shape them for display and
//! publish loading state to whichever view is attached.

pub mod config;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod transport;
pub mod view_model;

pub use config::{load_settings, Settings};
pub use controller::{DisplayState, FailureKind, FailureReason, LoadController, LoadPhase};
pub use error::{FetchError, LoadError, MalformedNameError};
pub use pipeline::{transform, transform_grouped, NamePolicy};
pub use transport::{HttpRecordSource, RecordSource};
pub use view_model::{group_sections, ExpansionState, GroupSection};

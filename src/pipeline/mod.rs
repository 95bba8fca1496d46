//! Pipeline object model.
//!
//! This module contains the values flowing between the console primitives
//! and the host's execution pipeline: the tagged [`PipelineObject`] sum type
//! and the structured diagnostic records destined for the error stream.
//! These are pure domain models with no I/O dependencies.

pub mod object;
pub mod record;

pub use object::{PipelineObject, TextValue};
pub use record::{DiagnosticKind, DiagnosticRecord};

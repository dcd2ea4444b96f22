//! Error type for payloads outside the closed shape set.

use thiserror::Error;

use crate::value::Opaque;

/// Raised when discrimination or deep validation meets a payload that is not
/// one of the seven closed JSON shapes.
///
/// Carries the offending payload, its concrete runtime type name, and the
/// path at which the offender was found (empty for the root value).
#[derive(Debug, Clone, Error, PartialEq)]
#[error(
    "payload of type `{}` at `{}` is not a valid JSON shape",
    .payload.type_name(),
    format_pointer(.path)
)]
pub struct InvalidShapeError {
    payload: Opaque,
    path: Vec<String>,
}

impl InvalidShapeError {
    pub(crate) fn new(payload: Opaque, path: Vec<String>) -> Self {
        Self { payload, path }
    }

    /// The offending payload.
    pub fn payload(&self) -> &Opaque {
        &self.payload
    }

    /// Concrete runtime type name of the offending payload.
    pub fn type_name(&self) -> &'static str {
        self.payload.type_name()
    }

    /// Path steps from the root to the offending payload. Sequence indices
    /// are rendered in decimal; an empty slice means the root itself.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The path rendered as a JSON Pointer (RFC 6901); empty for the root.
    pub fn pointer(&self) -> String {
        format_pointer(&self.path)
    }
}

fn format_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&escape_step(step));
    }
    out
}

// Per RFC 6901, `~` must be escaped before `/`.
fn escape_step(step: &str) -> String {
    if !step.contains('/') && !step.contains('~') {
        return step.to_string();
    }
    step.replace('~', "~0").replace('/', "~1")
}

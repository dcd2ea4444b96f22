//! `untagged-json` — a validated JSON value with closed-shape
//! discrimination.
//!
//! The JSON data model is represented as a closed tagged-variant enum over
//! seven shapes: null, boolean, integer, float, string, sequence, and
//! mapping. One extra variant, [`Opaque`], admits an arbitrary payload
//! through the unchecked wrap path; the validators ([`JsonValue::is_valid`],
//! [`JsonValue::is_deep_valid`], [`JsonValue::check_deep`]) and the
//! discrimination protocols ([`JsonValue::split`], [`SplitNamed`]) are what
//! keep such payloads observable instead of silently flowing through.
//!
//! Values are immutable after construction; "mutation" means re-wrapping.
//!
//! # Example
//!
//! ```
//! use untagged_json::JsonValue;
//!
//! let value = JsonValue::from_text(r#"{"name": "box", "sides": [1, 2]}"#).unwrap();
//! assert!(value.is_deep_valid());
//!
//! let label = value
//!     .split(
//!         || "null".to_string(),
//!         |b| format!("bool {b}"),
//!         |n| format!("int {n}"),
//!         |x| format!("float {x}"),
//!         |s| format!("str {s}"),
//!         |items| format!("seq of {}", items.len()),
//!         |entries| format!("map of {}", entries.len()),
//!     )
//!     .unwrap();
//! assert_eq!(label, "map of 2");
//! ```

pub mod error;
pub mod split;
pub mod value;

mod text;
mod validate;

pub use error::InvalidShapeError;
pub use split::SplitNamed;
pub use value::{JsonMap, JsonValue, Opaque, OpaquePayload, Shape};

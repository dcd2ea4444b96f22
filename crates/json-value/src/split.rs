//! Discrimination protocols over the closed shape set.
//!
//! [`JsonValue::split`] is the exhaustive protocol: seven handlers, one per
//! shape, all required. [`SplitNamed`] is the partial protocol: any subset
//! of handlers plus the `on_other`/`on_invalid` fallbacks.

use crate::error::InvalidShapeError;
use crate::value::{JsonMap, JsonValue, Opaque};

impl JsonValue {
    /// Exhaustive discrimination: invokes exactly the handler matching this
    /// value's shape and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] carrying the offending payload when it
    /// is outside the closed shape set, which is possible only for values
    /// assembled through [`JsonValue::opaque`].
    ///
    /// # Example
    ///
    /// ```
    /// use untagged_json::JsonValue;
    ///
    /// let value = JsonValue::from("press");
    /// let label = value
    ///     .split(
    ///         || 0,
    ///         |_| 1,
    ///         |n| n,
    ///         |_| 3,
    ///         |s| s.len() as i64,
    ///         |items| items.len() as i64,
    ///         |entries| entries.len() as i64,
    ///     )
    ///     .unwrap();
    /// assert_eq!(label, 5);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn split<R>(
        &self,
        on_null: impl FnOnce() -> R,
        on_bool: impl FnOnce(bool) -> R,
        on_int: impl FnOnce(i64) -> R,
        on_float: impl FnOnce(f64) -> R,
        on_str: impl FnOnce(&str) -> R,
        on_seq: impl FnOnce(&[JsonValue]) -> R,
        on_map: impl FnOnce(&JsonMap) -> R,
    ) -> Result<R, InvalidShapeError> {
        // The one match that dispatches over every shape: a new variant
        // cannot compile without being handled here.
        match self {
            JsonValue::Null => Ok(on_null()),
            JsonValue::Bool(b) => Ok(on_bool(*b)),
            JsonValue::Int(n) => Ok(on_int(*n)),
            JsonValue::Float(x) => Ok(on_float(*x)),
            JsonValue::Str(s) => Ok(on_str(s)),
            JsonValue::Seq(items) => Ok(on_seq(items)),
            JsonValue::Map(entries) => Ok(on_map(entries)),
            JsonValue::Opaque(opaque) => {
                Err(InvalidShapeError::new(opaque.clone(), Vec::new()))
            }
        }
    }
}

/// Partial discrimination with named handlers.
///
/// Install any subset of the seven shape handlers, plus `on_other` (runs for
/// a matched shape without its own handler, receiving the raw value) and
/// `on_invalid` (runs for a payload outside the shape set, receiving the
/// opaque payload). [`run`](SplitNamed::run) returns `Ok(None)` when nothing
/// handled the value.
///
/// # Example
///
/// ```
/// use untagged_json::{JsonValue, SplitNamed};
///
/// let value = JsonValue::from(true);
/// let result = SplitNamed::new()
///     .on_bool(|b| if b { "yes" } else { "no" })
///     .on_other(|_| "something else")
///     .run(&value)
///     .unwrap();
/// assert_eq!(result, Some("yes"));
/// ```
pub struct SplitNamed<'h, R> {
    on_null: Option<Box<dyn FnOnce() -> R + 'h>>,
    on_bool: Option<Box<dyn FnOnce(bool) -> R + 'h>>,
    on_int: Option<Box<dyn FnOnce(i64) -> R + 'h>>,
    on_float: Option<Box<dyn FnOnce(f64) -> R + 'h>>,
    on_str: Option<Box<dyn FnOnce(&str) -> R + 'h>>,
    on_seq: Option<Box<dyn FnOnce(&[JsonValue]) -> R + 'h>>,
    on_map: Option<Box<dyn FnOnce(&JsonMap) -> R + 'h>>,
    on_other: Option<Box<dyn FnOnce(&JsonValue) -> R + 'h>>,
    on_invalid: Option<Box<dyn FnOnce(&Opaque) -> R + 'h>>,
}

impl<'h, R> SplitNamed<'h, R> {
    /// A discrimination with no handlers installed.
    pub fn new() -> Self {
        Self {
            on_null: None,
            on_bool: None,
            on_int: None,
            on_float: None,
            on_str: None,
            on_seq: None,
            on_map: None,
            on_other: None,
            on_invalid: None,
        }
    }

    /// Handler for the null shape.
    pub fn on_null(mut self, handler: impl FnOnce() -> R + 'h) -> Self {
        self.on_null = Some(Box::new(handler));
        self
    }

    /// Handler for the boolean shape.
    pub fn on_bool(mut self, handler: impl FnOnce(bool) -> R + 'h) -> Self {
        self.on_bool = Some(Box::new(handler));
        self
    }

    /// Handler for the integer shape.
    pub fn on_int(mut self, handler: impl FnOnce(i64) -> R + 'h) -> Self {
        self.on_int = Some(Box::new(handler));
        self
    }

    /// Handler for the float shape.
    pub fn on_float(mut self, handler: impl FnOnce(f64) -> R + 'h) -> Self {
        self.on_float = Some(Box::new(handler));
        self
    }

    /// Handler for the string shape.
    pub fn on_str(mut self, handler: impl FnOnce(&str) -> R + 'h) -> Self {
        self.on_str = Some(Box::new(handler));
        self
    }

    /// Handler for the sequence shape.
    pub fn on_seq(mut self, handler: impl FnOnce(&[JsonValue]) -> R + 'h) -> Self {
        self.on_seq = Some(Box::new(handler));
        self
    }

    /// Handler for the mapping shape.
    pub fn on_map(mut self, handler: impl FnOnce(&JsonMap) -> R + 'h) -> Self {
        self.on_map = Some(Box::new(handler));
        self
    }

    /// Fallback for any matched shape without its own handler. Receives the
    /// raw value, including a null, which is never silently skipped.
    pub fn on_other(mut self, handler: impl FnOnce(&JsonValue) -> R + 'h) -> Self {
        self.on_other = Some(Box::new(handler));
        self
    }

    /// Fallback for a payload outside the closed shape set.
    pub fn on_invalid(mut self, handler: impl FnOnce(&Opaque) -> R + 'h) -> Self {
        self.on_invalid = Some(Box::new(handler));
        self
    }

    /// Run the discrimination against `value`.
    ///
    /// Exactly one handler runs: the installed handler for the value's
    /// shape, else `on_other`, else nothing (`Ok(None)`). A payload outside
    /// the shape set goes to `on_invalid` when installed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] when the payload is outside the closed
    /// shape set and no `on_invalid` handler is installed.
    pub fn run(self, value: &JsonValue) -> Result<Option<R>, InvalidShapeError> {
        let Self {
            on_null,
            on_bool,
            on_int,
            on_float,
            on_str,
            on_seq,
            on_map,
            on_other,
            on_invalid,
        } = self;
        let handled = match value {
            JsonValue::Null => match on_null {
                Some(handler) => Some(handler()),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Bool(b) => match on_bool {
                Some(handler) => Some(handler(*b)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Int(n) => match on_int {
                Some(handler) => Some(handler(*n)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Float(x) => match on_float {
                Some(handler) => Some(handler(*x)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Str(s) => match on_str {
                Some(handler) => Some(handler(s)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Seq(items) => match on_seq {
                Some(handler) => Some(handler(items)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Map(entries) => match on_map {
                Some(handler) => Some(handler(entries)),
                None => on_other.map(|handler| handler(value)),
            },
            JsonValue::Opaque(opaque) => match on_invalid {
                Some(handler) => Some(handler(opaque)),
                None => {
                    return Err(InvalidShapeError::new(opaque.clone(), Vec::new()));
                }
            },
        };
        Ok(handled)
    }
}

impl<R> Default for SplitNamed<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_split_invokes_exactly_the_matching_handler() {
        let calls = Cell::new(0u32);
        let count = |result: &'static str| {
            calls.set(calls.get() + 1);
            result
        };
        let result = JsonValue::from("text")
            .split(
                || count("null"),
                |_| count("bool"),
                |_| count("int"),
                |_| count("float"),
                |_| count("str"),
                |_| count("seq"),
                |_| count("map"),
            )
            .unwrap();
        assert_eq!(result, "str");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_split_on_opaque_reports_offender() {
        let value = JsonValue::opaque(3.5f32);
        let err = value
            .split(
                || (),
                |_| (),
                |_| (),
                |_| (),
                |_| (),
                |_| (),
                |_| (),
            )
            .unwrap_err();
        assert_eq!(err.type_name(), "f32");
        assert_eq!(err.pointer(), "");
    }

    #[test]
    fn test_split_named_prefers_specific_handler() {
        let result = SplitNamed::new()
            .on_int(|n| n * 2)
            .on_other(|_| -1)
            .run(&JsonValue::from(21i64))
            .unwrap();
        assert_eq!(result, Some(42));
    }

    #[test]
    fn test_split_named_falls_through_to_on_other() {
        let result = SplitNamed::new()
            .on_other(|value| value.as_bool())
            .run(&JsonValue::from(true))
            .unwrap();
        assert_eq!(result, Some(Some(true)));
    }

    #[test]
    fn test_split_named_null_reaches_on_other() {
        // Null is matched as a shape of its own: without an `on_null`
        // handler it must still reach `on_other`, not be skipped.
        let result = SplitNamed::new()
            .on_other(JsonValue::is_null)
            .run(&JsonValue::Null)
            .unwrap();
        assert_eq!(result, Some(true));
    }

    #[test]
    fn test_split_named_unhandled_returns_none() {
        let result: Option<i64> = SplitNamed::new()
            .on_bool(|_| 1)
            .run(&JsonValue::from("s"))
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_split_named_invalid_without_fallback_errors() {
        let value = JsonValue::opaque(b"blob".to_vec());
        let err = SplitNamed::<i64>::new().run(&value).unwrap_err();
        assert_eq!(err.type_name(), "alloc::vec::Vec<u8>");
    }

    #[test]
    fn test_split_named_invalid_with_fallback() {
        let value = JsonValue::opaque(7u64);
        let result = SplitNamed::new()
            .on_invalid(|opaque| opaque.downcast_ref::<u64>().copied())
            .run(&value)
            .unwrap();
        assert_eq!(result, Some(Some(7)));
    }
}

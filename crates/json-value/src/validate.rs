//! Shallow and deep shape validation.
//!
//! Validation never raises; it reports. The raise decision belongs to the
//! call sites: the debug-checked constructor and the discrimination
//! protocols.

use crate::error::InvalidShapeError;
use crate::value::JsonValue;

impl JsonValue {
    /// Shallow validity: whether the immediate shape is one of the seven
    /// closed kinds. Contained elements are not inspected, so a sequence
    /// holding an invalid element is still shallow-valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, JsonValue::Opaque(_))
    }

    /// Deep validity: whether every node of the tree, at every depth, is one
    /// of the seven closed kinds.
    pub fn is_deep_valid(&self) -> bool {
        self.check_deep().is_ok()
    }

    /// Deep validity with diagnostics: reports an offending payload outside
    /// the closed shape set together with the path at which it sits.
    ///
    /// The traversal runs over an explicit heap-allocated work-list, so
    /// adversarial nesting depth cannot exhaust the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] for the traversal's first offender.
    ///
    /// # Example
    ///
    /// ```
    /// use untagged_json::JsonValue;
    ///
    /// let tree = JsonValue::Seq(vec![JsonValue::Null, JsonValue::opaque(0u8)]);
    /// let err = tree.check_deep().unwrap_err();
    /// assert_eq!(err.pointer(), "/1");
    /// ```
    pub fn check_deep(&self) -> Result<(), InvalidShapeError> {
        let mut work: Vec<(&JsonValue, Vec<String>)> = vec![(self, Vec::new())];
        while let Some((value, path)) = work.pop() {
            match value {
                JsonValue::Null
                | JsonValue::Bool(_)
                | JsonValue::Int(_)
                | JsonValue::Float(_)
                | JsonValue::Str(_) => {}
                JsonValue::Seq(items) => {
                    // Reverse keeps the traversal in document order.
                    for (index, item) in items.iter().enumerate().rev() {
                        let mut item_path = path.clone();
                        item_path.push(index.to_string());
                        work.push((item, item_path));
                    }
                }
                JsonValue::Map(entries) => {
                    for (key, item) in entries.iter().rev() {
                        let mut item_path = path.clone();
                        item_path.push(key.clone());
                        work.push((item, item_path));
                    }
                }
                JsonValue::Opaque(opaque) => {
                    return Err(InvalidShapeError::new(opaque.clone(), path));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonMap;

    fn poisoned_map() -> JsonValue {
        let mut entries = JsonMap::new();
        entries.insert("ok".to_string(), JsonValue::from(1i64));
        entries.insert("bad".to_string(), JsonValue::opaque([0u8; 4]));
        JsonValue::Map(entries)
    }

    #[test]
    fn test_primitives_are_deep_valid() {
        for value in [
            JsonValue::Null,
            JsonValue::from(true),
            JsonValue::from(-3i64),
            JsonValue::from(0.25),
            JsonValue::from("s"),
        ] {
            assert!(value.is_valid());
            assert!(value.is_deep_valid());
        }
    }

    #[test]
    fn test_nested_tree_is_deep_valid() {
        let tree = JsonValue::Seq(vec![
            JsonValue::Null,
            JsonValue::Seq(vec![JsonValue::from("leaf")]),
            poisoned_map_without_bad(),
        ]);
        assert!(tree.is_deep_valid());
    }

    fn poisoned_map_without_bad() -> JsonValue {
        let mut entries = JsonMap::new();
        entries.insert("ok".to_string(), JsonValue::from(1i64));
        JsonValue::Map(entries)
    }

    #[test]
    fn test_shallow_differs_from_deep() {
        let tree = JsonValue::Seq(vec![JsonValue::opaque("blob".to_string())]);
        assert!(tree.is_valid());
        assert!(!tree.is_deep_valid());
    }

    #[test]
    fn test_opaque_root_is_shallow_invalid() {
        let value = JsonValue::opaque(1u16);
        assert!(!value.is_valid());
        assert!(!value.is_deep_valid());
    }

    #[test]
    fn test_check_deep_reports_path() {
        let tree = JsonValue::Seq(vec![JsonValue::Null, poisoned_map()]);
        let err = tree.check_deep().unwrap_err();
        assert_eq!(err.pointer(), "/1/bad");
        assert_eq!(err.path(), ["1".to_string(), "bad".to_string()]);
    }

    #[test]
    fn test_check_deep_reports_document_order_offender() {
        let tree = JsonValue::Seq(vec![
            JsonValue::opaque("first".to_string()),
            JsonValue::opaque("second".to_string()),
        ]);
        let err = tree.check_deep().unwrap_err();
        assert_eq!(err.pointer(), "/0");
        assert_eq!(
            err.payload().downcast_ref::<String>().map(String::as_str),
            Some("first")
        );
    }

    #[test]
    fn test_adversarial_depth_does_not_overflow() {
        let mut tree = JsonValue::from(0i64);
        for _ in 0..10_000 {
            tree = JsonValue::Seq(vec![tree]);
        }
        assert!(tree.is_deep_valid());
    }
}

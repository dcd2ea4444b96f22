//! JSON text decoding and encoding through the external `serde_json`
//! decoder.
//!
//! Decoded trees are eagerly converted into the tagged form, so parsed
//! values are always deep-valid and can never raise
//! [`InvalidShapeError`](crate::InvalidShapeError). The signal is first
//! observable only for trees assembled through the unchecked
//! [`JsonValue::opaque`] path.

use std::collections::btree_map;
use std::iter::Enumerate;
use std::slice;

use serde_json::Value as Raw;

use crate::error::InvalidShapeError;
use crate::value::JsonValue;

impl JsonValue {
    /// Parse JSON text.
    ///
    /// # Errors
    ///
    /// Propagates the decoder's parse error on malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use untagged_json::JsonValue;
    ///
    /// let value = JsonValue::from_text(r#"{"answer": 42}"#).unwrap();
    /// assert_eq!(value.expect_map()["answer"].as_int(), Some(42));
    /// assert!(JsonValue::from_text("{oops").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_serde(serde_json::from_str(text)?))
    }

    /// Convert an already-decoded `serde_json` tree.
    ///
    /// Numbers that fit `i64` become [`JsonValue::Int`]; `u64` values above
    /// `i64::MAX` and all non-integral numbers become [`JsonValue::Float`].
    /// Conversion recursion depth equals the tree depth, which the decoder
    /// itself bounds for parsed input.
    pub fn from_serde(raw: Raw) -> Self {
        match raw {
            Raw::Null => JsonValue::Null,
            Raw::Bool(b) => JsonValue::Bool(b),
            Raw::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Int(i),
                None => JsonValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Raw::String(s) => JsonValue::Str(s),
            Raw::Array(items) => {
                JsonValue::Seq(items.into_iter().map(Self::from_serde).collect())
            }
            Raw::Object(entries) => JsonValue::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Self::from_serde(item)))
                    .collect(),
            ),
        }
    }

    /// Convert a deep-valid tree into the external `serde_json`
    /// representation.
    ///
    /// Runs over an explicit work-list, so nesting depth cannot exhaust the
    /// call stack. Non-finite floats have no JSON representation and render
    /// as `null`, matching the decoder's own serialization behavior.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] for the first payload outside the
    /// closed shape set, with the path at which it sits.
    pub fn to_serde(&self) -> Result<Raw, InvalidShapeError> {
        enum Frame<'a> {
            Seq {
                path: Vec<String>,
                iter: Enumerate<slice::Iter<'a, JsonValue>>,
                done: Vec<Raw>,
            },
            Map {
                path: Vec<String>,
                iter: btree_map::Iter<'a, String, JsonValue>,
                done: serde_json::Map<String, Raw>,
                slot: &'a str,
            },
        }

        let mut frames: Vec<Frame<'_>> = Vec::new();
        let mut current = self;
        let mut current_path: Vec<String> = Vec::new();

        'descend: loop {
            let mut finished = match current {
                JsonValue::Null => Raw::Null,
                JsonValue::Bool(b) => Raw::Bool(*b),
                JsonValue::Int(n) => Raw::from(*n),
                JsonValue::Float(x) => {
                    serde_json::Number::from_f64(*x).map_or(Raw::Null, Raw::Number)
                }
                JsonValue::Str(s) => Raw::String(s.clone()),
                JsonValue::Opaque(opaque) => {
                    return Err(InvalidShapeError::new(opaque.clone(), current_path));
                }
                JsonValue::Seq(items) => {
                    let mut iter = items.iter().enumerate();
                    match iter.next() {
                        None => Raw::Array(Vec::new()),
                        Some((index, child)) => {
                            let mut child_path = current_path.clone();
                            child_path.push(index.to_string());
                            frames.push(Frame::Seq {
                                path: current_path,
                                iter,
                                done: Vec::with_capacity(items.len()),
                            });
                            current = child;
                            current_path = child_path;
                            continue 'descend;
                        }
                    }
                }
                JsonValue::Map(entries) => {
                    let mut iter = entries.iter();
                    match iter.next() {
                        None => Raw::Object(serde_json::Map::new()),
                        Some((key, child)) => {
                            let mut child_path = current_path.clone();
                            child_path.push(key.clone());
                            frames.push(Frame::Map {
                                path: current_path,
                                iter,
                                done: serde_json::Map::new(),
                                slot: key,
                            });
                            current = child;
                            current_path = child_path;
                            continue 'descend;
                        }
                    }
                }
            };

            // Feed the finished value upward until a frame still has
            // children to visit.
            loop {
                match frames.pop() {
                    None => return Ok(finished),
                    Some(Frame::Seq {
                        path,
                        mut iter,
                        mut done,
                    }) => {
                        done.push(finished);
                        if let Some((index, child)) = iter.next() {
                            let mut child_path = path.clone();
                            child_path.push(index.to_string());
                            frames.push(Frame::Seq { path, iter, done });
                            current = child;
                            current_path = child_path;
                            continue 'descend;
                        }
                        finished = Raw::Array(done);
                    }
                    Some(Frame::Map {
                        path,
                        mut iter,
                        mut done,
                        slot,
                    }) => {
                        done.insert(slot.to_string(), finished);
                        if let Some((key, child)) = iter.next() {
                            let mut child_path = path.clone();
                            child_path.push(key.clone());
                            frames.push(Frame::Map {
                                path,
                                iter,
                                done,
                                slot: key,
                            });
                            current = child;
                            current_path = child_path;
                            continue 'descend;
                        }
                        finished = Raw::Object(done);
                    }
                }
            }
        }
    }

    /// Render a deep-valid tree as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShapeError`] for the first payload outside the
    /// closed shape set.
    ///
    /// # Example
    ///
    /// ```
    /// use untagged_json::JsonValue;
    ///
    /// let value = JsonValue::from_text(r#"[1, "two", null]"#).unwrap();
    /// assert_eq!(value.to_text().unwrap(), r#"[1,"two",null]"#);
    /// ```
    pub fn to_text(&self) -> Result<String, InvalidShapeError> {
        // Rendering a raw `serde_json` tree is infallible.
        Ok(self.to_serde()?.to_string())
    }
}

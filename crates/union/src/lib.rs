//! `untagged-union` — fixed-arity closed union (sum) types.
//!
//! Each `UnionN` is a small generic tagged-variant enum with one slot per
//! operand type. Membership is nominal and fixed at construction: the
//! variant is the constructor, so no invalid value is constructible, and no
//! runtime discriminant distinguishes "why" a value qualifies when operand
//! types overlap. No subtype or algebraic reasoning is provided:
//! `Union2<A, B>` and `Union2<B, A>` are unrelated types.
//!
//! # Example
//!
//! ```
//! use untagged_union::Union3;
//!
//! let value: Union3<i64, String, bool> = Union3::Second("hi".to_string());
//! assert!(value.is_second());
//! assert_eq!(value.second().map(String::as_str), Some("hi"));
//! assert_eq!(value.first(), None);
//!
//! let label = value.split(|_| "int", |_| "string", |_| "bool");
//! assert_eq!(label, "string");
//! ```

mod union;

pub use union::{Union2, Union3, Union4, Union5, Union6, Union7, Union8, Union9};

//! The `Union2`..`Union9` family.
//!
//! The family is mechanical repetition of one pattern across arities; the
//! macro below is the single statement of that pattern. Membership is
//! nominal: the occupied slot is fixed by the constructor variant, and no
//! runtime discriminant records "why" a value qualifies when operand types
//! overlap.

macro_rules! define_union {
    (
        $(#[$meta:meta])*
        $name:ident<$($param:ident),+> {
            $(($variant:ident, $get:ident, $into:ident, $is:ident, $handler:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name<$($param),+> {
            $(
                #[doc = concat!("A value occupying the `", stringify!($variant), "` slot.")]
                $variant($param),
            )+
        }

        impl<$($param),+> $name<$($param),+> {
            $(
                #[doc = concat!(
                    "Borrows the `", stringify!($variant), "` slot, or `None` when another slot is occupied."
                )]
                pub fn $get(&self) -> Option<&$param> {
                    match self {
                        Self::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                #[doc = concat!(
                    "Consumes the union, returning the `", stringify!($variant), "` slot when occupied."
                )]
                pub fn $into(self) -> Option<$param> {
                    match self {
                        Self::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                #[doc = concat!(
                    "Whether the `", stringify!($variant), "` slot is the occupied one."
                )]
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }
            )+

            /// Borrowing view of the union with every slot by reference.
            pub fn as_ref(&self) -> $name<$(&$param),+> {
                match self {
                    $(Self::$variant(value) => $name::$variant(value),)+
                }
            }

            /// Exhaustive discrimination: exactly the occupied slot's
            /// handler runs and its result is returned.
            #[allow(clippy::too_many_arguments)]
            pub fn split<R>(self, $($handler: impl FnOnce($param) -> R),+) -> R {
                match self {
                    $(Self::$variant(value) => $handler(value),)+
                }
            }
        }
    };
}

define_union! {
    /// Closed union of two types.
    ///
    /// # Example
    ///
    /// ```
    /// use untagged_union::Union2;
    ///
    /// let value: Union2<i64, String> = Union2::First(7);
    /// assert_eq!(value.first(), Some(&7));
    /// assert_eq!(value.second(), None);
    /// assert_eq!(value.split(|n| n, |s| s.len() as i64), 7);
    /// ```
    Union2<T1, T2> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
    }
}

define_union! {
    /// Closed union of three types.
    Union3<T1, T2, T3> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
    }
}

define_union! {
    /// Closed union of four types.
    Union4<T1, T2, T3, T4> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
    }
}

define_union! {
    /// Closed union of five types.
    Union5<T1, T2, T3, T4, T5> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
        (Fifth, fifth, into_fifth, is_fifth, on_fifth),
    }
}

define_union! {
    /// Closed union of six types.
    Union6<T1, T2, T3, T4, T5, T6> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
        (Fifth, fifth, into_fifth, is_fifth, on_fifth),
        (Sixth, sixth, into_sixth, is_sixth, on_sixth),
    }
}

define_union! {
    /// Closed union of seven types.
    Union7<T1, T2, T3, T4, T5, T6, T7> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
        (Fifth, fifth, into_fifth, is_fifth, on_fifth),
        (Sixth, sixth, into_sixth, is_sixth, on_sixth),
        (Seventh, seventh, into_seventh, is_seventh, on_seventh),
    }
}

define_union! {
    /// Closed union of eight types.
    Union8<T1, T2, T3, T4, T5, T6, T7, T8> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
        (Fifth, fifth, into_fifth, is_fifth, on_fifth),
        (Sixth, sixth, into_sixth, is_sixth, on_sixth),
        (Seventh, seventh, into_seventh, is_seventh, on_seventh),
        (Eighth, eighth, into_eighth, is_eighth, on_eighth),
    }
}

define_union! {
    /// Closed union of nine types.
    Union9<T1, T2, T3, T4, T5, T6, T7, T8, T9> {
        (First, first, into_first, is_first, on_first),
        (Second, second, into_second, is_second, on_second),
        (Third, third, into_third, is_third, on_third),
        (Fourth, fourth, into_fourth, is_fourth, on_fourth),
        (Fifth, fifth, into_fifth, is_fifth, on_fifth),
        (Sixth, sixth, into_sixth, is_sixth, on_sixth),
        (Seventh, seventh, into_seventh, is_seventh, on_seventh),
        (Eighth, eighth, into_eighth, is_eighth, on_eighth),
        (Ninth, ninth, into_ninth, is_ninth, on_ninth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_slot_answers_its_getters() {
        let value: Union2<i32, &str> = Union2::Second("s");
        assert!(value.is_second());
        assert!(!value.is_first());
        assert_eq!(value.second(), Some(&"s"));
        assert_eq!(value.first(), None);
        assert_eq!(value.into_second(), Some("s"));
    }

    #[test]
    fn test_overlapping_operand_types_stay_nominal() {
        // Same payload type in both slots: membership is decided by the
        // constructor, not by the payload.
        let first: Union2<u8, u8> = Union2::First(1);
        let second: Union2<u8, u8> = Union2::Second(1);
        assert!(first.is_first() && !first.is_second());
        assert!(second.is_second() && !second.is_first());
        assert_ne!(first, second);
    }

    #[test]
    fn test_split_runs_exactly_the_occupied_handler() {
        let value: Union3<i64, bool, String> = Union3::Third("t".to_string());
        let label = value.split(|_| "first", |_| "second", |_| "third");
        assert_eq!(label, "third");
    }

    #[test]
    fn test_as_ref_preserves_the_slot() {
        let value: Union4<u8, u16, u32, u64> = Union4::Fourth(9);
        assert_eq!(value.as_ref().fourth(), Some(&&9u64));
        assert_eq!(value.as_ref().first(), None);
    }

    #[test]
    fn test_ninth_slot() {
        let value: Union9<(), (), (), (), (), (), (), (), i8> = Union9::Ninth(-1);
        assert!(value.is_ninth());
        assert_eq!(value.ninth(), Some(&-1));
        assert_eq!(value.into_ninth(), Some(-1));
    }

    #[test]
    fn test_copy_and_hash_derives() {
        use std::collections::HashSet;

        let value: Union2<u8, u8> = Union2::First(3);
        let copy = value;
        let mut seen = HashSet::new();
        seen.insert(value);
        assert!(seen.contains(&copy));
    }
}

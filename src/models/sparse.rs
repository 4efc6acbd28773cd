//! Sparse field omission.
//!
//! Tagging tools treat a missing key and an empty key differently, so the
//! normalized records never carry empty values. A value is omitted when it is
//! an empty string, a numeric zero, or absent. Lists are kept even when empty:
//! an empty tracklist is still a tracklist.

/// A value that can be dropped from a sparse record.
pub trait Omittable {
    /// Whether the value should be left out of the output.
    fn is_omitted(&self) -> bool;
}

impl Omittable for str {
    fn is_omitted(&self) -> bool {
        self.is_empty()
    }
}

impl Omittable for String {
    fn is_omitted(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_omittable_number {
    ($($ty:ty),*) => {
        $(
            impl Omittable for $ty {
                fn is_omitted(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_omittable_number!(u8, u16, u32, u64, usize, i32, i64);

impl<T> Omittable for Vec<T> {
    fn is_omitted(&self) -> bool {
        false
    }
}

impl<T: Omittable> Omittable for Option<T> {
    fn is_omitted(&self) -> bool {
        match self {
            Some(value) => value.is_omitted(),
            None => true,
        }
    }
}

/// Serde `skip_serializing_if` predicate.
pub fn is_omitted<T: Omittable + ?Sized>(value: &T) -> bool {
    value.is_omitted()
}

/// Keep a value only if it survives the omission rule.
pub fn present<T: Omittable>(value: T) -> Option<T> {
    if value.is_omitted() {
        None
    } else {
        Some(value)
    }
}

/// Flatten an optional value through the omission rule.
pub fn present_opt<T: Omittable>(value: Option<T>) -> Option<T> {
    value.and_then(present)
}

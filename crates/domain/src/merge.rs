//! Deep-merge rule used to fold repeated blocks into one document.
//!
//! Scalars are replaced by the later occurrence, nested objects are merged
//! field by field, and lists are concatenated in file order.

/// Folds a later fragment into `self`.
pub trait Merge {
    /// Merges `later` into `self`, with `later` taking precedence for scalars.
    fn merge(&mut self, later: Self);
}

impl Merge for String {
    fn merge(&mut self, later: Self) {
        *self = later;
    }
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, later: Self) {
        self.extend(later);
    }
}

impl<T: Merge> Merge for Option<T> {
    fn merge(&mut self, later: Self) {
        let Some(later) = later else {
            return;
        };
        match self {
            Some(current) => current.merge(later),
            None => *self = Some(later),
        }
    }
}

/// Implements [`Merge`] for a struct by merging each listed field.
#[macro_export]
macro_rules! impl_merge {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::merge::Merge for $ty {
            fn merge(&mut self, later: Self) {
                $( $crate::merge::Merge::merge(&mut self.$field, later.$field); )+
            }
        }
    };
}

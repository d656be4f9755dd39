//! Structural emptiness checks
//!
//! Values that are handed to external consumers (responses, persisted
//! records) should not expose an absent value in a public field a client may
//! dereference. [`NowhereNil`] walks a value's public structure and reports
//! the first `None` it finds.
//!
//! Traversal rules:
//! - `Option<T>`: `None` is a hole, `Some(v)` recurses into `v`
//! - `Box`, `Rc`, `Arc` and references recurse into the pointee
//! - maps, sets and sequences are always accepted; their contents are not
//!   inspected
//! - scalars and strings (including the empty string) are always accepted
//! - structs declared through [`nowhere_nil_struct!`](crate::nowhere_nil_struct)
//!   recurse into their `pub` fields only

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use super::error::DomainError;

/// Types whose public structure can be checked for absent values
pub trait NowhereNil {
    /// Return the path of the first hole reachable from `self`, where `path`
    /// names `self`
    fn first_nil_hole(&self, path: &str) -> Option<String>;

    /// Check that no hole is reachable from `self`
    fn is_nowhere_nil(&self) -> bool {
        self.first_nil_hole("value").is_none()
    }
}

/// Check that `value` contains no reachable hole
pub fn is_nowhere_nil<T: NowhereNil + ?Sized>(value: &T) -> bool {
    value.is_nowhere_nil()
}

/// Like [`is_nowhere_nil`], but names the offending path in the error
pub fn ensure_nowhere_nil<T: NowhereNil + ?Sized>(name: &str, value: &T) -> Result<(), DomainError> {
    match value.first_nil_hole(name) {
        Some(path) => {
            debug!(path = %path, "Nil value found");
            Err(DomainError::nil_hole(path))
        }
        None => Ok(()),
    }
}

impl<T: NowhereNil> NowhereNil for Option<T> {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        match self {
            Some(value) => value.first_nil_hole(path),
            None => Some(path.to_string()),
        }
    }
}

impl<T: NowhereNil + ?Sized> NowhereNil for &T {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        (**self).first_nil_hole(path)
    }
}

impl<T: NowhereNil + ?Sized> NowhereNil for Box<T> {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        (**self).first_nil_hole(path)
    }
}

impl<T: NowhereNil + ?Sized> NowhereNil for Rc<T> {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        (**self).first_nil_hole(path)
    }
}

impl<T: NowhereNil + ?Sized> NowhereNil for Arc<T> {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        (**self).first_nil_hole(path)
    }
}

macro_rules! impl_always_nowhere_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NowhereNil for $ty {
                fn first_nil_hole(&self, _path: &str) -> Option<String> {
                    None
                }
            }
        )*
    };
}

impl_always_nowhere_nil!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

// Container contents are not part of the check.
impl<T> NowhereNil for Vec<T> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T> NowhereNil for [T] {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T, const N: usize> NowhereNil for [T; N] {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T> NowhereNil for VecDeque<T> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T, S> NowhereNil for HashSet<T, S> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T> NowhereNil for BTreeSet<T> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<K, V, S> NowhereNil for HashMap<K, V, S> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<K, V> NowhereNil for BTreeMap<K, V> {
    fn first_nil_hole(&self, _path: &str) -> Option<String> {
        None
    }
}

impl NowhereNil for serde_json::Value {
    fn first_nil_hole(&self, path: &str) -> Option<String> {
        match self {
            serde_json::Value::Null => Some(path.to_string()),
            _ => None,
        }
    }
}

/// Declare a struct and implement [`NowhereNil`] over its `pub` fields
///
/// Fields without a visibility modifier, and fields with a restricted one
/// such as `pub(crate)`, are not inspected.
///
/// ```
/// use textguard::nowhere_nil_struct;
/// use textguard::NowhereNil;
///
/// nowhere_nil_struct! {
///     #[derive(Debug, Default)]
///     pub struct Profile {
///         pub nickname: Option<String>,
///         avatar: Option<String>,
///     }
/// }
///
/// let profile = Profile { nickname: Some("pat".into()), avatar: None };
/// assert!(profile.is_nowhere_nil());
/// ```
#[macro_export]
macro_rules! nowhere_nil_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($body)*
        }

        impl $crate::domain::nowhere_nil::NowhereNil for $name {
            fn first_nil_hole(&self, path: &str) -> ::std::option::Option<::std::string::String> {
                $crate::__nowhere_nil_fields!(self, path; []; $($body)*)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nowhere_nil_fields {
    ($self:ident, $path:ident; [$($field:ident)*];) => {{
        $(
            let field_path = ::std::format!("{}.{}", $path, ::std::stringify!($field));
            if let ::std::option::Option::Some(hole) =
                $crate::domain::nowhere_nil::NowhereNil::first_nil_hole(&$self.$field, &field_path)
            {
                return ::std::option::Option::Some(hole);
            }
        )*
        let _ = $path;
        ::std::option::Option::None
    }};
    ($self:ident, $path:ident; [$($field:ident)*]; #[$attr:meta] $($rest:tt)*) => {
        $crate::__nowhere_nil_fields!($self, $path; [$($field)*]; $($rest)*)
    };
    ($self:ident, $path:ident; [$($field:ident)*]; pub $next:ident : $ty:ty $(, $($rest:tt)*)?) => {
        $crate::__nowhere_nil_fields!($self, $path; [$($field)* $next]; $($($rest)*)?)
    };
    ($self:ident, $path:ident; [$($field:ident)*]; pub ($($scope:tt)*) $next:ident : $ty:ty $(, $($rest:tt)*)?) => {
        $crate::__nowhere_nil_fields!($self, $path; [$($field)*]; $($($rest)*)?)
    };
    ($self:ident, $path:ident; [$($field:ident)*]; $next:ident : $ty:ty $(, $($rest:tt)*)?) => {
        $crate::__nowhere_nil_fields!($self, $path; [$($field)*]; $($($rest)*)?)
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    crate::nowhere_nil_struct! {
        #[derive(Debug, Clone)]
        struct Pair {
            pub x: Option<String>,
            pub y: Option<String>,
        }
    }

    crate::nowhere_nil_struct! {
        #[derive(Debug, Clone)]
        struct PrivatePair {
            pub x: Option<String>,
            y: Option<String>,
        }
    }

    crate::nowhere_nil_struct! {
        struct CrateVisible {
            pub(crate) hidden: Option<u32>,
            #[allow(dead_code)]
            pub shown: u32,
        }
    }

    crate::nowhere_nil_struct! {
        struct Empty {}
    }

    crate::nowhere_nil_struct! {
        struct Outer {
            pub inner: Option<Box<Pair>>,
            pub tags: Vec<Option<String>>,
        }
    }

    fn some() -> Option<String> {
        Some(String::new())
    }

    #[test]
    fn test_scalars() {
        assert!(is_nowhere_nil(""));
        assert!(is_nowhere_nil("not empty!"));
        assert!(is_nowhere_nil(&0));
        assert!(is_nowhere_nil(&1));
        assert!(is_nowhere_nil(&0i64));
        assert!(is_nowhere_nil(&1i64));
        assert!(is_nowhere_nil(&true));
        assert!(is_nowhere_nil(&false));
    }

    #[test]
    fn test_options() {
        let nil_string: Option<String> = None;
        assert!(!is_nowhere_nil(&nil_string));
        assert!(is_nowhere_nil(&some()));

        let nil_struct: Option<Empty> = None;
        assert!(!is_nowhere_nil(&nil_struct));
    }

    #[test]
    fn test_sequences_are_not_inspected() {
        let empty: Vec<String> = Vec::new();
        assert!(is_nowhere_nil(&empty));

        let nils: Vec<Option<String>> = vec![None, None];
        assert!(is_nowhere_nil(&nils));
        assert!(is_nowhere_nil(&[None::<u8>; 3]));
    }

    #[test]
    fn test_maps() {
        let nil_map: Option<HashMap<bool, bool>> = None;
        assert!(!is_nowhere_nil(&nil_map));

        assert!(is_nowhere_nil(&HashMap::<bool, bool>::new()));

        let mut with_nil: HashMap<bool, Option<String>> = HashMap::new();
        with_nil.insert(true, None);
        with_nil.insert(false, some());
        assert!(is_nowhere_nil(&with_nil));
    }

    #[test]
    fn test_structs() {
        assert!(is_nowhere_nil(&Empty {}));

        let nowhere = Pair { x: some(), y: some() };
        let somewhere = Pair { x: some(), y: None };
        assert!(is_nowhere_nil(&nowhere));
        assert!(!is_nowhere_nil(&somewhere));

        assert!(is_nowhere_nil(&Box::new(nowhere.clone())));
        assert!(!is_nowhere_nil(&Box::new(somewhere.clone())));
        assert!(is_nowhere_nil(&Some(&nowhere)));
        assert!(!is_nowhere_nil(&Arc::new(somewhere)));
    }

    #[test]
    fn test_private_fields_are_ignored() {
        let value = PrivatePair { x: some(), y: None };
        assert!(is_nowhere_nil(&value));
        assert!(is_nowhere_nil(&Rc::new(value.clone())));
        assert!(value.y.is_none());

        let restricted = CrateVisible { hidden: None, shown: 1 };
        assert!(is_nowhere_nil(&restricted));
        assert!(restricted.hidden.is_none());
    }

    #[test]
    fn test_nested_hole_path() {
        let outer = Outer {
            inner: Some(Box::new(Pair { x: some(), y: None })),
            tags: vec![None],
        };
        assert_eq!(outer.first_nil_hole("response"), Some("response.inner.y".to_string()));

        let missing = Outer { inner: None, tags: Vec::new() };
        assert_eq!(missing.first_nil_hole("response"), Some("response.inner".to_string()));
    }

    #[test]
    fn test_ensure_nowhere_nil() {
        let ok = Pair { x: some(), y: some() };
        assert!(ensure_nowhere_nil("pair", &ok).is_ok());

        let bad = Pair { x: None, y: some() };
        let err = ensure_nowhere_nil("pair", &bad).unwrap_err();
        assert!(matches!(err, DomainError::NilHole { ref path } if path == "pair.x"));
    }

    #[test]
    fn test_json_null() {
        assert!(!is_nowhere_nil(&serde_json::Value::Null));
        assert!(is_nowhere_nil(&serde_json::json!({ "a": null })));
    }
}

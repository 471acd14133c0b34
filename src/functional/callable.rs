//! Callable shapes shared by the registry, resolver and composer
//!
//! A [`Component`] is the base function being wrapped. An [`Augmenter`]
//! receives the inner component plus the shared [`Props`] and returns the
//! outer component, the same way a layer wraps a service.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::props::Props;

/// Base component: a shareable function from input to output
pub type Component<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// Wrapper function of shape `(inner, props) -> outer`
pub type Augmenter<A, R> = Arc<dyn Fn(Component<A, R>, &Props) -> Component<A, R> + Send + Sync>;

/// Lifts a closure into a [`Component`].
///
/// # Examples
///
/// ```
/// let identity = component_fn(|n: i64| n);
/// assert_eq!(identity(5), 5);
/// ```
pub fn component_fn<A, R, F>(f: F) -> Component<A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Lifts a closure into an [`Augmenter`].
///
/// # Examples
///
/// ```
/// let double = augmenter_fn(|inner: Component<i64, i64>, _props: &Props| {
///     component_fn(move |n| inner(n) * 2)
/// });
/// ```
pub fn augmenter_fn<A, R, F>(f: F) -> Augmenter<A, R>
where
    F: Fn(Component<A, R>, &Props) -> Component<A, R> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A reference to an augmenter: either the function itself or the name it
/// was registered under
pub enum AugmenterRef<A, R> {
    Name(String),
    Literal(Augmenter<A, R>),
}

// Manual impl: a derive would demand `A: Clone, R: Clone`.
impl<A, R> Clone for AugmenterRef<A, R> {
    fn clone(&self) -> Self {
        match self {
            AugmenterRef::Name(name) => AugmenterRef::Name(name.clone()),
            AugmenterRef::Literal(augmenter) => AugmenterRef::Literal(Arc::clone(augmenter)),
        }
    }
}

impl<A, R> AugmenterRef<A, R> {
    pub fn name(&self) -> Option<&str> {
        match self {
            AugmenterRef::Name(name) => Some(name),
            AugmenterRef::Literal(_) => None,
        }
    }
}

impl<A, R> fmt::Debug for AugmenterRef<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AugmenterRef::Name(name) => f.debug_tuple("Name").field(name).finish(),
            AugmenterRef::Literal(_) => f.write_str("Literal(<augmenter>)"),
        }
    }
}

impl<A, R> From<&str> for AugmenterRef<A, R> {
    fn from(name: &str) -> Self {
        AugmenterRef::Name(name.to_string())
    }
}

impl<A, R> From<String> for AugmenterRef<A, R> {
    fn from(name: String) -> Self {
        AugmenterRef::Name(name)
    }
}

impl<A, R> From<Augmenter<A, R>> for AugmenterRef<A, R> {
    fn from(augmenter: Augmenter<A, R>) -> Self {
        AugmenterRef::Literal(augmenter)
    }
}

/// Loosely typed value accepted by `register`.
///
/// Registration input arrives from callers that may hand over anything, so
/// the argument is classified before any of it is stored.
pub enum Dynamic<A, R> {
    Function(Augmenter<A, R>),
    Object(BTreeMap<String, Dynamic<A, R>>),
    Data(JsonValue),
}

impl<A, R> Clone for Dynamic<A, R> {
    fn clone(&self) -> Self {
        match self {
            Dynamic::Function(augmenter) => Dynamic::Function(Arc::clone(augmenter)),
            Dynamic::Object(map) => Dynamic::Object(map.clone()),
            Dynamic::Data(value) => Dynamic::Data(value.clone()),
        }
    }
}

impl<A, R> fmt::Debug for Dynamic<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Function(_) => f.write_str("Function(<augmenter>)"),
            Dynamic::Object(map) => f.debug_map().entries(map.iter()).finish(),
            Dynamic::Data(value) => write!(f, "Data({})", value),
        }
    }
}

impl<A, R> From<Augmenter<A, R>> for Dynamic<A, R> {
    fn from(augmenter: Augmenter<A, R>) -> Self {
        Dynamic::Function(augmenter)
    }
}

impl<A, R> From<JsonValue> for Dynamic<A, R> {
    fn from(value: JsonValue) -> Self {
        Dynamic::Data(value)
    }
}

impl<A, R> From<BTreeMap<String, Augmenter<A, R>>> for Dynamic<A, R> {
    fn from(map: BTreeMap<String, Augmenter<A, R>>) -> Self {
        map.into_iter().collect()
    }
}

impl<A, R> From<HashMap<String, Augmenter<A, R>>> for Dynamic<A, R> {
    fn from(map: HashMap<String, Augmenter<A, R>>) -> Self {
        map.into_iter().collect()
    }
}

impl<A, R, K> FromIterator<(K, Augmenter<A, R>)> for Dynamic<A, R>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Augmenter<A, R>)>>(iter: I) -> Self {
        Dynamic::Object(
            iter.into_iter()
                .map(|(name, augmenter)| (name.into(), Dynamic::Function(augmenter)))
                .collect(),
        )
    }
}

//! Augmenter Registry
//!
//! Name → augmenter store. Registrations are shared between every caller
//! holding the same [`SharedRegistry`]; a fresh [`Registry`] per test or per
//! tenant keeps namespaces isolated.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};

use itertools::Itertools;

use crate::config::OverwritePolicy;
use crate::error::{AugmentError, AugmentResult};
use crate::functional::callable::Augmenter;

pub type SharedRegistry<A, R> = Arc<Registry<A, R>>;

pub struct Registry<A, R> {
    entries: RwLock<HashMap<String, Augmenter<A, R>>>,
}

impl<A, R> Registry<A, R> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an empty registry behind an `Arc` for sharing.
    pub fn shared() -> SharedRegistry<A, R> {
        Arc::new(Self::new())
    }

    /// Inserts or replaces the augmenter stored under `name`.
    ///
    /// Returns the augmenter previously registered under that name, if any.
    ///
    /// # Errors
    ///
    /// `EmptyName` for an empty name, `LockPoisoned` if a writer panicked.
    pub fn set(&self, name: &str, augmenter: Augmenter<A, R>) -> AugmentResult<Option<Augmenter<A, R>>> {
        if name.is_empty() {
            return Err(AugmentError::EmptyName);
        }
        let mut entries = self.entries.write()?;
        let previous = entries.insert(name.to_string(), augmenter);
        if previous.is_some() {
            log::warn!("Augmenter '{}' re-registered, previous entry replaced", name);
        } else {
            log::debug!("Augmenter '{}' registered", name);
        }
        Ok(previous)
    }

    /// Inserts a batch of augmenters under a single write lock.
    ///
    /// The batch is validated before anything is written, so a rejected
    /// batch leaves the registry untouched. Returns the inserted names in
    /// batch order.
    pub fn set_all(
        &self,
        batch: Vec<(String, Augmenter<A, R>)>,
        policy: OverwritePolicy,
    ) -> AugmentResult<Vec<String>> {
        if batch.iter().any(|(name, _)| name.is_empty()) {
            return Err(AugmentError::EmptyName);
        }

        let mut entries = self.entries.write()?;

        if policy == OverwritePolicy::Reject {
            let clash = batch
                .iter()
                .map(|(name, _)| name)
                .duplicates()
                .chain(batch.iter().map(|(name, _)| name).filter(|name| entries.contains_key(*name)))
                .next();
            if let Some(name) = clash {
                return Err(AugmentError::Duplicate { name: name.clone() });
            }
        }

        let mut inserted = Vec::with_capacity(batch.len());
        for (name, augmenter) in batch {
            if entries.insert(name.clone(), augmenter).is_some() {
                log::warn!("Augmenter '{}' re-registered, previous entry replaced", name);
            }
            inserted.push(name);
        }
        log::debug!("Registered {} augmenter(s)", inserted.len());
        Ok(inserted)
    }

    /// Looks up an augmenter; an unknown name is `Ok(None)`.
    pub fn get(&self, name: &str) -> AugmentResult<Option<Augmenter<A, R>>> {
        let entries = self.entries.read()?;
        Ok(entries.get(name).cloned())
    }

    pub fn contains(&self, name: &str) -> AugmentResult<bool> {
        Ok(self.entries.read()?.contains_key(name))
    }

    /// All registered names, sorted.
    pub fn keys(&self) -> AugmentResult<BTreeSet<String>> {
        Ok(self.entries.read()?.keys().cloned().collect())
    }

    /// Point-in-time copy of the registry contents.
    ///
    /// Values are the same `Arc`s the registry holds, so identity checks
    /// with [`Arc::ptr_eq`] hold against what was registered.
    pub fn snapshot(&self) -> AugmentResult<BTreeMap<String, Augmenter<A, R>>> {
        let entries = self.entries.read()?;
        Ok(entries
            .iter()
            .map(|(name, augmenter)| (name.clone(), Arc::clone(augmenter)))
            .collect())
    }

    pub fn len(&self) -> AugmentResult<usize> {
        Ok(self.entries.read()?.len())
    }

    pub fn is_empty(&self) -> AugmentResult<bool> {
        Ok(self.entries.read()?.is_empty())
    }
}

impl<A, R> Default for Registry<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Registry<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.read() {
            Ok(entries) => f
                .debug_struct("Registry")
                .field("names", &entries.keys().collect::<BTreeSet<_>>())
                .finish(),
            Err(_) => f.write_str("Registry(<poisoned>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::callable::{augmenter_fn, component_fn, Component};
    use crate::functional::props::Props;

    fn add(n: i32) -> Augmenter<i32, i32> {
        augmenter_fn(move |inner: Component<i32, i32>, _props: &Props| {
            component_fn(move |x: i32| inner(x) + n)
        })
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: Registry<i32, i32> = Registry::new();
        assert!(registry.is_empty().unwrap());
        assert_eq!(registry.len().unwrap(), 0);
        assert!(registry.keys().unwrap().is_empty());
    }

    #[test]
    fn set_then_get_returns_same_augmenter() {
        let registry = Registry::new();
        let one = add(1);
        assert!(registry.set("one", one.clone()).unwrap().is_none());

        let found = registry.get("one").unwrap().unwrap();
        assert!(Arc::ptr_eq(&found, &one));
        assert!(registry.contains("one").unwrap());
    }

    #[test]
    fn get_unknown_name_is_none() {
        let registry: Registry<i32, i32> = Registry::new();
        assert!(registry.get("ghost").unwrap().is_none());
    }

    #[test]
    fn set_replaces_and_returns_previous() {
        let registry = Registry::new();
        let first = add(1);
        let second = add(2);
        registry.set("x", first.clone()).unwrap();

        let previous = registry.set("x", second.clone()).unwrap().unwrap();
        assert!(Arc::ptr_eq(&previous, &first));
        assert!(Arc::ptr_eq(&registry.get("x").unwrap().unwrap(), &second));
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn set_rejects_empty_name() {
        let registry = Registry::new();
        assert_eq!(registry.set("", add(1)).err(), Some(AugmentError::EmptyName));
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn set_all_rejects_whole_batch_on_duplicate() {
        let registry = Registry::new();
        registry.set("taken", add(1)).unwrap();

        let result = registry.set_all(
            vec![("fresh".to_string(), add(2)), ("taken".to_string(), add(3))],
            OverwritePolicy::Reject,
        );

        assert_eq!(
            result.err(),
            Some(AugmentError::Duplicate {
                name: "taken".to_string()
            })
        );
        assert!(!registry.contains("fresh").unwrap());
    }

    #[test]
    fn set_all_rejects_repeated_names_within_batch() {
        let registry = Registry::new();

        let result = registry.set_all(
            vec![("x".to_string(), add(1)), ("y".to_string(), add(2)), ("x".to_string(), add(3))],
            OverwritePolicy::Reject,
        );

        assert_eq!(result.err(), Some(AugmentError::Duplicate { name: "x".to_string() }));
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn set_all_replaces_under_replace_policy() {
        let registry = Registry::new();
        registry.set("taken", add(1)).unwrap();
        let replacement = add(5);

        let inserted = registry
            .set_all(
                vec![("taken".to_string(), replacement.clone()), ("other".to_string(), add(2))],
                OverwritePolicy::Replace,
            )
            .unwrap();

        assert_eq!(inserted, vec!["taken".to_string(), "other".to_string()]);
        assert!(Arc::ptr_eq(&registry.get("taken").unwrap().unwrap(), &replacement));
    }

    #[test]
    fn snapshot_holds_registered_arcs() {
        let registry = Registry::new();
        let one = add(1);
        registry.set("one", one.clone()).unwrap();
        registry.set("two", add(2)).unwrap();

        let snapshot = registry.snapshot().unwrap();
        assert_eq!(snapshot.keys().cloned().collect::<Vec<_>>(), vec!["one", "two"]);
        assert!(Arc::ptr_eq(&snapshot["one"], &one));
    }

    #[test]
    fn shared_registry_is_visible_through_clones() {
        let registry: SharedRegistry<i32, i32> = Registry::shared();
        let other = Arc::clone(&registry);
        registry.set("one", add(1)).unwrap();
        assert!(other.contains("one").unwrap());
    }
}

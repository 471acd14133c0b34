//! Augmenter reference resolution
//!
//! Turns an ordered list of [`AugmenterRef`]s into concrete augmenters.
//! Resolution is per item: one unknown name does not stop the others from
//! resolving, it only leaves an error in its slot.

use itertools::{Either, Itertools};

use crate::config::MissingPolicy;
use crate::error::{AugmentError, AugmentResult};
use crate::functional::callable::{Augmenter, AugmenterRef};
use crate::functional::composer::Pipeline;
use crate::functional::registry::Registry;

/// Outcome of resolving a reference list, one slot per reference, in order
pub struct Resolution<A, R> {
    slots: Vec<Result<Augmenter<A, R>, AugmentError>>,
}

impl<A, R> Resolution<A, R> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every reference resolved.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Result::is_ok)
    }

    pub fn slots(&self) -> &[Result<Augmenter<A, R>, AugmentError>] {
        &self.slots
    }

    pub fn errors(&self) -> impl Iterator<Item = &AugmentError> {
        self.slots.iter().filter_map(|slot| slot.as_ref().err())
    }

    /// Names that could not be found, in reference order.
    pub fn missing(&self) -> Vec<&str> {
        self.errors()
            .filter_map(|err| match err {
                AugmentError::Existence { augmenter } => Some(augmenter.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Builds the pipeline, applying `policy` to unresolved slots.
    ///
    /// Under [`MissingPolicy::Fail`] the first error is returned; under
    /// [`MissingPolicy::Skip`] unresolved slots are dropped and the rest keep
    /// their relative order. Either way no gap reaches the composer.
    pub fn into_pipeline(self, policy: MissingPolicy) -> AugmentResult<Pipeline<A, R>> {
        let (stages, errors): (Vec<_>, Vec<_>) =
            self.slots.into_iter().partition_map(|slot| match slot {
                Ok(augmenter) => Either::Left(augmenter),
                Err(err) => Either::Right(err),
            });

        match (policy, errors.into_iter().next()) {
            (MissingPolicy::Fail, Some(err)) => Err(err),
            _ => Ok(Pipeline::new(stages)),
        }
    }
}

/// Resolves each reference against `registry`.
///
/// Literal augmenters pass through untouched without a registry lookup.
///
/// # Errors
///
/// Only registry lock poisoning fails the whole call; unknown names are
/// recorded per slot as [`AugmentError::Existence`].
pub fn resolve<A, R>(
    registry: &Registry<A, R>,
    refs: &[AugmenterRef<A, R>],
) -> AugmentResult<Resolution<A, R>> {
    let slots = refs
        .iter()
        .map(|reference| match reference {
            AugmenterRef::Literal(augmenter) => Ok(Ok(augmenter.clone())),
            AugmenterRef::Name(name) => registry
                .get(name)
                .map(|found| found.ok_or_else(|| AugmentError::existence(name))),
        })
        .collect::<AugmentResult<Vec<_>>>()?;

    let resolution = Resolution { slots };
    if !resolution.is_complete() {
        log::debug!(
            "Resolved {} of {} augmenter reference(s), missing: {}",
            resolution.len() - resolution.errors().count(),
            resolution.len(),
            resolution.missing().iter().join(", ")
        );
    }
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::callable::{augmenter_fn, component_fn, Component};
    use crate::functional::props::Props;
    use std::sync::Arc;

    fn tag(label: &'static str) -> Augmenter<(), String> {
        augmenter_fn(move |inner: Component<(), String>, _props: &Props| {
            component_fn(move |_: ()| format!("{}({})", label, inner(())))
        })
    }

    fn registry_with(names: &[&'static str]) -> Registry<(), String> {
        let registry = Registry::new();
        for &name in names {
            registry.set(name, tag(name)).unwrap();
        }
        registry
    }

    #[test]
    fn names_resolve_in_order() {
        let registry = registry_with(&["a", "b"]);
        let refs: Vec<AugmenterRef<(), String>> = vec!["b".into(), "a".into()];

        let resolution = resolve(&registry, &refs).unwrap();
        assert_eq!(resolution.len(), 2);
        assert!(resolution.is_complete());

        let expected_b = registry.get("b").unwrap().unwrap();
        match &resolution.slots()[0] {
            Ok(found) => assert!(Arc::ptr_eq(found, &expected_b)),
            Err(err) => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn literals_pass_through_without_registry() {
        let registry: Registry<(), String> = Registry::new();
        let literal = tag("lit");
        let refs = vec![AugmenterRef::Literal(literal.clone())];

        let resolution = resolve(&registry, &refs).unwrap();
        match &resolution.slots()[0] {
            Ok(found) => assert!(Arc::ptr_eq(found, &literal)),
            Err(err) => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn unknown_name_leaves_error_in_its_slot_only() {
        let registry = registry_with(&["a"]);
        let refs: Vec<AugmenterRef<(), String>> = vec!["ghost".into(), "a".into()];

        let resolution = resolve(&registry, &refs).unwrap();
        assert_eq!(resolution.len(), 2);
        assert!(!resolution.is_complete());
        assert_eq!(resolution.missing(), vec!["ghost"]);
        assert!(resolution.slots()[1].is_ok());
    }

    #[test]
    fn fail_policy_returns_first_missing() {
        let registry = registry_with(&["a"]);
        let refs: Vec<AugmenterRef<(), String>> = vec!["a".into(), "x".into(), "y".into()];

        let err = resolve(&registry, &refs)
            .unwrap()
            .into_pipeline(MissingPolicy::Fail)
            .err()
            .expect("missing names must fail");
        assert_eq!(err, AugmentError::existence("x"));
    }

    #[test]
    fn skip_policy_drops_gaps() {
        let registry = registry_with(&["a", "b"]);
        let refs: Vec<AugmenterRef<(), String>> = vec!["a".into(), "x".into(), "b".into()];

        let pipeline = resolve(&registry, &refs)
            .unwrap()
            .into_pipeline(MissingPolicy::Skip)
            .unwrap();
        assert_eq!(pipeline.len(), 2);

        let base = component_fn(|_: ()| "base".to_string());
        let wrapped = pipeline.apply(base, &Props::new());
        assert_eq!(wrapped(()), "a(b(base))");
    }
}

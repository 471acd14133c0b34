//! Public augmenter API
//!
//! [`Augment`] ties a registry, the engine settings and the diagnostic
//! channel together and exposes `register`, `component` and `list`.
//! Every error is reported on the diagnostic channel before it is returned.

use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::config::{AugmentSettings, MissingPolicy};
use crate::error::{AugmentError, AugmentResult};
use crate::functional::callable::{Augmenter, AugmenterRef, Component, Dynamic};
use crate::functional::kind::{Classify, Kind};
use crate::functional::props::Props;
use crate::functional::registry::{Registry, SharedRegistry};
use crate::functional::resolver::{self, Resolution};
use crate::utils::diagnostics::Diagnostics;

pub struct Augment<A, R> {
    registry: SharedRegistry<A, R>,
    settings: AugmentSettings,
    diagnostics: Diagnostics,
}

impl<A, R> Clone for Augment<A, R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            settings: self.settings.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<A, R> Default for Augment<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Augment<A, R> {
    /// Creates an engine with an empty registry and default settings.
    pub fn new() -> Self {
        Self::with_settings(AugmentSettings::default())
    }

    pub fn with_settings(settings: AugmentSettings) -> Self {
        Self::with_registry(Registry::shared(), settings)
    }

    /// Creates an engine over an existing registry, sharing its names.
    pub fn with_registry(registry: SharedRegistry<A, R>, settings: AugmentSettings) -> Self {
        let diagnostics = Diagnostics::new(settings.diagnostic_capacity);
        Self {
            registry,
            settings,
            diagnostics,
        }
    }

    /// Creates an engine configured from the environment.
    pub fn from_env() -> AugmentResult<Self> {
        AugmentSettings::from_env().map(Self::with_settings)
    }

    pub fn registry(&self) -> &SharedRegistry<A, R> {
        &self.registry
    }

    pub fn settings(&self) -> &AugmentSettings {
        &self.settings
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Registers every augmenter of an object mapping under its key.
    ///
    /// The argument must classify as an object and every value as a
    /// function; otherwise nothing is inserted. Returns the inserted names.
    ///
    /// # Examples
    ///
    /// ```
    /// let augment: Augment<i64, i64> = Augment::new();
    /// let names = augment
    ///     .register([("double", double), ("addOne", add_one)].into_iter().collect::<Dynamic<_, _>>())
    ///     .unwrap();
    /// assert_eq!(names, vec!["addOne", "double"]);
    /// ```
    ///
    /// # Errors
    ///
    /// - `Type` when the argument is not an object
    /// - `InvalidEntry` when a value is not a function
    /// - `EmptyName`, or `Duplicate` under the reject overwrite policy
    pub fn register(&self, augmenters: impl Into<Dynamic<A, R>>) -> AugmentResult<Vec<String>> {
        let result = registrations(augmenters.into())
            .and_then(|batch| self.registry.set_all(batch, self.settings.on_overwrite));
        self.reported(result)
    }

    /// Resolves references against the registry, reporting each unknown name.
    pub fn resolve(&self, refs: &[AugmenterRef<A, R>]) -> AugmentResult<Resolution<A, R>> {
        let resolution = self.reported(resolver::resolve(&self.registry, refs))?;
        for err in resolution.errors() {
            self.diagnostics.report(err);
        }
        Ok(resolution)
    }

    /// Wraps `base` with the referenced augmenters, first reference outermost.
    ///
    /// Unknown names are handled per the configured missing policy: the
    /// first one is returned as an error, or all of them are skipped.
    pub fn component(
        &self,
        base: Component<A, R>,
        refs: &[AugmenterRef<A, R>],
        props: &Props,
    ) -> AugmentResult<Component<A, R>> {
        let resolution = self.resolve(refs)?;
        if self.settings.on_missing == MissingPolicy::Skip && !resolution.is_complete() {
            log::warn!(
                "Skipping unresolved augmenter(s): {}",
                resolution.missing().iter().join(", ")
            );
        }
        let pipeline = resolution.into_pipeline(self.settings.on_missing)?;
        log::debug!("Composing component with {} augmenter(s)", pipeline.len());
        Ok(pipeline.apply(base, props))
    }

    /// Snapshot of every registered name and its augmenter.
    pub fn list(&self) -> AugmentResult<BTreeMap<String, Augmenter<A, R>>> {
        self.reported(self.registry.snapshot())
    }

    /// Curried form of [`Augment::component`]: fixes the references and
    /// props, leaving the base component to be supplied later.
    pub fn wrapper(&self, refs: Vec<AugmenterRef<A, R>>, props: Props) -> Wrapper<A, R> {
        Wrapper {
            augment: self.clone(),
            refs,
            props,
        }
    }

    fn reported<T>(&self, result: AugmentResult<T>) -> AugmentResult<T> {
        if let Err(err) = &result {
            self.diagnostics.report(err);
        }
        result
    }
}

/// Splits an object mapping into `(name, augmenter)` pairs.
fn registrations<A, R>(value: Dynamic<A, R>) -> AugmentResult<Vec<(String, Augmenter<A, R>)>> {
    match value {
        Dynamic::Object(map) => map
            .into_iter()
            .map(|(name, entry)| match entry {
                Dynamic::Function(augmenter) => Ok((name, augmenter)),
                other => Err(AugmentError::InvalidEntry {
                    name,
                    invoked: other.kind(),
                }),
            })
            .collect(),
        other => Err(AugmentError::Type {
            invoked: other.kind(),
            expected: Kind::Object,
        }),
    }
}

/// Reusable decorator produced by [`Augment::wrapper`].
///
/// Names are resolved each time [`Wrapper::apply`] runs, so registrations
/// made after the wrapper was built are picked up.
pub struct Wrapper<A, R> {
    augment: Augment<A, R>,
    refs: Vec<AugmenterRef<A, R>>,
    props: Props,
}

impl<A, R> Wrapper<A, R> {
    pub fn apply(&self, base: Component<A, R>) -> AugmentResult<Component<A, R>> {
        self.augment.component(base, &self.refs, &self.props)
    }

    pub fn refs(&self) -> &[AugmenterRef<A, R>] {
        &self.refs
    }

    pub fn props(&self) -> &Props {
        &self.props
    }
}

impl<A, R> Clone for Wrapper<A, R> {
    fn clone(&self) -> Self {
        Self {
            augment: self.augment.clone(),
            refs: self.refs.clone(),
            props: self.props.clone(),
        }
    }
}

//! Process-wide augmenter namespace
//!
//! A default [`Augment`] over JSON-valued components, created on first use
//! from the process environment. Modules that never see each other can register and
//! reference augmenters by name through these free functions. Code that
//! needs isolation should build its own [`Augment`] instead.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;

use crate::api::augment::{Augment, Wrapper};
use crate::config::AugmentSettings;
use crate::error::AugmentResult;
use crate::functional::callable::{Augmenter, AugmenterRef, Component, Dynamic};
use crate::functional::props::Props;
use crate::utils::diagnostics::DIAGNOSTIC_PREFIX;

pub type JsonComponent = Component<JsonValue, JsonValue>;
pub type JsonAugmenter = Augmenter<JsonValue, JsonValue>;
pub type JsonAugmenterRef = AugmenterRef<JsonValue, JsonValue>;

static GLOBAL: Lazy<Augment<JsonValue, JsonValue>> = Lazy::new(|| {
    let settings = AugmentSettings::from_process_env().unwrap_or_else(|err| {
        log::warn!("{} {}, using default settings", DIAGNOSTIC_PREFIX, err);
        AugmentSettings::default()
    });
    Augment::with_settings(settings)
});

pub fn global() -> &'static Augment<JsonValue, JsonValue> {
    &GLOBAL
}

/// Registers augmenters in the process-wide namespace.
pub fn register(augmenters: impl Into<Dynamic<JsonValue, JsonValue>>) -> AugmentResult<Vec<String>> {
    GLOBAL.register(augmenters)
}

/// Wraps `base` using augmenters from the process-wide namespace.
///
/// # Examples
///
/// ```
/// augment::register(augmenters)?;
/// let wrapped = augment::component(base, &["useMounted".into()], &Props::new())?;
/// let rendered = wrapped(json!({}));
/// ```
pub fn component(base: JsonComponent, refs: &[JsonAugmenterRef], props: &Props) -> AugmentResult<JsonComponent> {
    GLOBAL.component(base, refs, props)
}

pub fn list() -> AugmentResult<BTreeMap<String, JsonAugmenter>> {
    GLOBAL.list()
}

/// Curried form of [`component`] bound to the process-wide namespace.
pub fn wrapper(refs: Vec<JsonAugmenterRef>, props: Props) -> Wrapper<JsonValue, JsonValue> {
    GLOBAL.wrapper(refs, props)
}

//! Prelude for the augmenter engine
//!
//! Re-exports the types needed to write, register and apply augmenters.

pub use crate::api::augment::{Augment, Wrapper};
pub use crate::config::{AugmentSettings, MissingPolicy, OverwritePolicy};
pub use crate::error::{AugmentError, AugmentResult};
pub use crate::functional::callable::{
    augmenter_fn, component_fn, Augmenter, AugmenterRef, Component, Dynamic,
};
pub use crate::functional::composer::{compose, Pipeline};
pub use crate::functional::kind::{is_function, is_object, kind_of, Classify, Kind};
pub use crate::functional::props::Props;
pub use crate::functional::registry::{Registry, SharedRegistry};
pub use crate::functional::resolver::{resolve, Resolution};

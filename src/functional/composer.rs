//! Right-to-left augmenter composition
//!
//! For stages `[f1, f2, ..., fn]` and base `c`, applying the pipeline yields
//! `f1(f2(...fn(c, props)..., props), props)`: the last stage wraps the base
//! first and the first stage ends up outermost. Reading the list left to
//! right therefore reads outermost to innermost.

use std::fmt;
use std::sync::Arc;

use crate::functional::callable::{Augmenter, Component};
use crate::functional::props::Props;

/// Ordered, fully resolved augmenter stages
pub struct Pipeline<A, R> {
    stages: Vec<Augmenter<A, R>>,
}

impl<A, R> Pipeline<A, R> {
    pub fn new(stages: Vec<Augmenter<A, R>>) -> Self {
        Self { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Wraps `base` with every stage, innermost (last) first.
    ///
    /// An empty pipeline hands `base` back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let pipeline = compose(vec![double, add_one]);
    /// let wrapped = pipeline.apply(component_fn(|n: i64| n), &Props::new());
    /// assert_eq!(wrapped(5), 12);
    /// ```
    pub fn apply(&self, base: Component<A, R>, props: &Props) -> Component<A, R> {
        self.stages
            .iter()
            .rev()
            .fold(base, |inner, stage| stage(inner, props))
    }
}

impl<A, R> Clone for Pipeline<A, R> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.iter().map(Arc::clone).collect(),
        }
    }
}

impl<A, R> fmt::Debug for Pipeline<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Composes stages listed outermost first into a [`Pipeline`].
pub fn compose<A, R>(stages: Vec<Augmenter<A, R>>) -> Pipeline<A, R> {
    Pipeline::new(stages)
}

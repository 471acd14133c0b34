//! Augmenter registry and composition engine
//!
//! Named wrapper functions ("augmenters") are registered once and later
//! applied, in caller order, around a base component. Every augmenter
//! receives the component it wraps plus a shared [`Props`] object:
//!
//! ```
//! use augment::prelude::*;
//!
//! let augment: Augment<i64, i64> = Augment::new();
//! augment.register(
//!     [
//!         ("double", augmenter_fn(|inner: Component<i64, i64>, _: &Props| {
//!             component_fn(move |n: i64| inner(n) * 2)
//!         })),
//!         ("addOne", augmenter_fn(|inner: Component<i64, i64>, _: &Props| {
//!             component_fn(move |n: i64| inner(n) + 1)
//!         })),
//!     ]
//!     .into_iter()
//!     .collect::<Dynamic<_, _>>(),
//! )?;
//!
//! let wrapped = augment.component(component_fn(|n: i64| n), &["double".into(), "addOne".into()], &Props::new())?;
//! assert_eq!(wrapped(5), 12);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod functional;
pub mod utils;

pub use api::global::{component, global, list, register, wrapper};
pub use error::{AugmentError, AugmentResult};
pub use functional::prelude;
pub use functional::props::Props;

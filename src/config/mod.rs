pub mod settings;

pub use settings::{AugmentSettings, MissingPolicy, OverwritePolicy};

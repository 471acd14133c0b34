pub mod augment;
pub mod global;

pub use augment::{Augment, Wrapper};

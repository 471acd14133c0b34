pub mod callable;
pub mod composer;
pub mod kind;
pub mod prelude;
pub mod props;
pub mod registry;
pub mod resolver;

//! Value kind classification
//!
//! A small, closed classification of the values that cross the public API.
//! Used as a predicate only: registration checks that its argument is an
//! object, resolution checks whether a reference is already a function.

use std::fmt;

use serde_json::Value as JsonValue;

use super::callable::{AugmenterRef, Dynamic};
use super::props::Props;

/// Runtime kind of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Function,
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Function => "function",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can report its [`Kind`]
pub trait Classify {
    fn kind(&self) -> Kind;
}

pub fn kind_of<T: Classify + ?Sized>(value: &T) -> Kind {
    value.kind()
}

pub fn is_function<T: Classify + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Function
}

pub fn is_object<T: Classify + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Object
}

impl Classify for JsonValue {
    fn kind(&self) -> Kind {
        match self {
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(_) => Kind::Boolean,
            JsonValue::Number(_) => Kind::Number,
            JsonValue::String(_) => Kind::String,
            JsonValue::Array(_) => Kind::Array,
            JsonValue::Object(_) => Kind::Object,
        }
    }
}

impl Classify for Props {
    fn kind(&self) -> Kind {
        Kind::Object
    }
}

impl<A, R> Classify for Dynamic<A, R> {
    fn kind(&self) -> Kind {
        match self {
            Dynamic::Function(_) => Kind::Function,
            Dynamic::Object(_) => Kind::Object,
            Dynamic::Data(value) => value.kind(),
        }
    }
}

impl<A, R> Classify for AugmenterRef<A, R> {
    fn kind(&self) -> Kind {
        match self {
            AugmenterRef::Literal(_) => Kind::Function,
            AugmenterRef::Name(_) => Kind::String,
        }
    }
}

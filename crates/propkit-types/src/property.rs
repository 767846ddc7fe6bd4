use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::value::Value;

/// An association between a piece of data and a descriptive identifier.
///
/// The name is validated at construction: empty or whitespace-only names are
/// rejected there, never at a later use site. Properties are immutable and
/// compare structurally on `(name, value)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    /// Create a new property with the given name and value.
    ///
    /// Fails with [`PropertyError::InvalidName`] if the name is empty or
    /// contains only whitespace.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self, PropertyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PropertyError::InvalidName { name });
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// The identifier for this property.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The data associated with this property.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume this property, yielding its name and value.
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

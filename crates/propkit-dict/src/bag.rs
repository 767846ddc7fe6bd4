//! A ready-made concrete dictionary for hosts that need no custom type.

use serde::{Deserialize, Serialize};

use propkit_types::Property;

use crate::dictionary::{PropertyDictionary, PropertyMap};

/// A minimal [`PropertyDictionary`] implementation.
///
/// Born empty; suitable for tests, prototypes, and hosts whose entities do
/// not carry a dedicated dictionary type. Equality is structural over the
/// property map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBag {
    properties: PropertyMap,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag holding the given properties.
    ///
    /// Later duplicates of a name win, matching repeated `with_property`
    /// calls.
    pub fn from_properties(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|property| (property.name().to_string(), property))
                .collect(),
        }
    }
}

impl PropertyDictionary for PropertyBag {
    fn properties_map(&self) -> &PropertyMap {
        &self.properties
    }

    fn from_map(map: PropertyMap) -> Self {
        Self { properties: map }
    }
}

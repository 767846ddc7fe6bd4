use serde::{Deserialize, Serialize};

use propkit_dict::PropertyDictionary;
use propkit_types::{Property, PropertyError};

/// A single recorded difference between two property sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// The property is present in the target set and must be added (or
    /// replaced, when the name already exists with another value).
    Addition(Property),
    /// The property is absent from the target set and must be removed.
    Deletion(Property),
}

impl Change {
    /// Returns `true` for an addition.
    pub fn is_addition(&self) -> bool {
        matches!(self, Change::Addition(_))
    }

    /// The property this change concerns.
    pub fn property(&self) -> &Property {
        match self {
            Change::Addition(property) | Change::Deletion(property) => property,
        }
    }

    /// Fold this change into a dictionary.
    ///
    /// An addition calls `with_property`, a deletion calls
    /// `without_property`; both are no-ops when the dictionary already
    /// satisfies the change.
    pub fn apply<D: PropertyDictionary>(&self, dictionary: D) -> Result<D, PropertyError> {
        match self {
            Change::Addition(property) => {
                dictionary.with_property(property.name(), property.value().clone())
            }
            Change::Deletion(property) => Ok(dictionary.without_property(property.name())),
        }
    }
}

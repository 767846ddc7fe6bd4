//! The [`PropertyDictionary`] trait defining the dictionary capability.
//!
//! Any type that owns a [`PropertyMap`] implements this trait to gain the
//! full set of lookup and copy-on-write update operations, each returning
//! the implementor's own concrete type.

use propkit_types::{Property, PropertyError, Value};

/// The persistent map backing every property dictionary.
///
/// Keyed by property name, ordered ascending by name, and structurally
/// shared between versions: an update allocates only the path from the
/// changed node to the root.
pub type PropertyMap = im::OrdMap<String, Property>;

/// An entity that exhibits arbitrary named, typed attributes.
///
/// Implementors supply the two structural hooks — exposing the backing
/// [`PropertyMap`] and rebuilding `Self` from a map — and inherit every
/// operation with `Self`-typed returns, so a mutation on a concrete
/// dictionary yields that same concrete type.
///
/// All mutators are pure: they return a new instance, or, when the requested
/// mutation is already satisfied, a clone sharing the original's map root.
/// That identity preservation is a contract, observable through
/// [`PropertyDictionary::ptr_eq`], not an optimization detail: callers may
/// short-circuit on it.
pub trait PropertyDictionary: Clone + Sized {
    /// The map of properties backing this dictionary.
    fn properties_map(&self) -> &PropertyMap;

    /// Rebuild this dictionary's concrete type around the given map.
    fn from_map(map: PropertyMap) -> Self;

    /// The value associated with `name`, or [`Value::Empty`] if this
    /// dictionary holds no such property. Never fails.
    fn get(&self, name: &str) -> Value {
        self.properties_map()
            .get(name)
            .map(|property| property.value().clone())
            .unwrap_or(Value::Empty)
    }

    /// Returns `true` if this dictionary holds a property named `name`.
    fn has_property(&self, name: &str) -> bool {
        self.properties_map().contains_key(name)
    }

    /// All properties of this dictionary, ascending by name.
    ///
    /// The ordering is an invariant regardless of insertion order: diff
    /// production downstream depends on deterministic enumeration.
    fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties_map().values()
    }

    /// Number of properties held.
    fn len(&self) -> usize {
        self.properties_map().len()
    }

    /// Returns `true` if this dictionary holds no properties.
    fn is_empty(&self) -> bool {
        self.properties_map().is_empty()
    }

    /// A dictionary with `name` bound to `value`.
    ///
    /// If `name` is already bound to an equal value, the result shares this
    /// dictionary's map root (see [`PropertyDictionary::ptr_eq`]). Otherwise
    /// the binding is created or replaced. Fails only if `name` violates the
    /// [`Property`] name rule.
    fn with_property(&self, name: &str, value: impl Into<Value>) -> Result<Self, PropertyError> {
        let value = value.into();
        if let Some(existing) = self.properties_map().get(name) {
            if existing.value() == &value {
                return Ok(self.clone());
            }
        }
        let property = Property::new(name, value)?;
        Ok(Self::from_map(
            self.properties_map().update(name.to_string(), property),
        ))
    }

    /// A dictionary without the property named `name`.
    ///
    /// If `name` is absent, the result shares this dictionary's map root.
    fn without_property(&self, name: &str) -> Self {
        if self.has_property(name) {
            Self::from_map(self.properties_map().without(name))
        } else {
            self.clone()
        }
    }

    /// Returns `true` if both dictionaries share the same map root.
    ///
    /// This is the identity-preservation contract: a no-op mutation yields a
    /// dictionary for which `ptr_eq` with the original holds.
    fn ptr_eq(&self, other: &Self) -> bool {
        self.properties_map().ptr_eq(other.properties_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::PropertyBag;

    #[test]
    fn has_property_provides_expected_value() {
        let bag = PropertyBag::new();
        assert!(!bag.has_property("Test"));
        assert!(bag.with_property("Test", true).unwrap().has_property("Test"));
    }

    #[test]
    fn get_returns_empty_for_absent_name() {
        let bag = PropertyBag::new();
        assert_eq!(bag.get("missing"), Value::Empty);
    }

    #[test]
    fn get_returns_bound_value() {
        let bag = PropertyBag::new().with_property("n", 5).unwrap();
        assert_eq!(bag.get("n"), Value::from(5));
    }

    #[test]
    fn with_property_provides_new_object_when_property_is_not_already_exhibited() {
        let bag = PropertyBag::new();
        let with = bag.with_property("Test", true).unwrap();
        assert!(!bag.ptr_eq(&with));
    }

    #[test]
    fn with_property_provides_same_object_when_property_is_already_exhibited() {
        let with = PropertyBag::new().with_property("Test", true).unwrap();
        let again = with.with_property("Test", true).unwrap();
        assert!(with.ptr_eq(&again));
    }

    #[test]
    fn with_property_provides_new_object_when_value_changes() {
        let with = PropertyBag::new().with_property("Test", true).unwrap();
        let changed = with.with_property("Test", false).unwrap();
        assert!(!with.ptr_eq(&changed));
        assert_eq!(changed.get("Test"), Value::from(false));
    }

    #[test]
    fn without_property_provides_new_object_when_property_is_exhibited() {
        let with = PropertyBag::new().with_property("Test", true).unwrap();
        let without = with.without_property("Test");
        assert!(!with.ptr_eq(&without));
        assert!(!without.has_property("Test"));
    }

    #[test]
    fn without_property_provides_same_object_when_property_is_not_exhibited() {
        let bag = PropertyBag::new();
        let without = bag.without_property("Test");
        assert!(bag.ptr_eq(&without));
    }

    #[test]
    fn with_property_rejects_blank_name() {
        let err = PropertyBag::new().with_property("  ", 1).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidName { .. }));
    }

    #[test]
    fn mutation_does_not_touch_the_original() {
        let bag = PropertyBag::new().with_property("a", 1).unwrap();
        let _ = bag.with_property("b", 2).unwrap();
        let _ = bag.without_property("a");
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("a"), Value::from(1));
    }

    #[test]
    fn properties_enumerate_ascending_by_name_regardless_of_insertion_order() {
        let bag = PropertyBag::new()
            .with_property("zeta", 1)
            .unwrap()
            .with_property("alpha", 2)
            .unwrap()
            .with_property("mid", 3)
            .unwrap();
        let names: Vec<&str> = bag.properties().map(|p| p.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn properties_are_restartable() {
        let bag = PropertyBag::new()
            .with_property("a", 1)
            .unwrap()
            .with_property("b", 2)
            .unwrap();
        let first: Vec<&str> = bag.properties().map(|p| p.name()).collect();
        let second: Vec<&str> = bag.properties().map(|p| p.name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn len_and_is_empty() {
        let bag = PropertyBag::new();
        assert!(bag.is_empty());
        let bag = bag.with_property("a", 1).unwrap();
        assert_eq!(bag.len(), 1);
        assert!(!bag.is_empty());
    }
}

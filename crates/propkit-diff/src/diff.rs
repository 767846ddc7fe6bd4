//! Property-set difference and the [`DiffExt`] dictionary extension.

use std::collections::HashSet;

use propkit_dict::PropertyDictionary;
use propkit_types::Property;

use crate::change::Change;
use crate::patch::Patch;

/// Compute the patch transforming the `second` property set into the
/// `first`.
///
/// Additions are the properties of `first` absent from `second` by full
/// `(name, value)` equality; deletions are the properties of `second` whose
/// name `first` does not carry at all. A changed value on an existing name
/// therefore surfaces as a single addition — the addition already replaces
/// the old binding, so a deletion of the same name would undo it during
/// replay. Additions come first, then deletions, each preserving its
/// input's original relative order.
pub fn diff_properties<I, J>(first: I, second: J) -> Patch
where
    I: IntoIterator<Item = Property>,
    J: IntoIterator<Item = Property>,
{
    let first: Vec<Property> = first.into_iter().collect();
    let second: Vec<Property> = second.into_iter().collect();
    let first_names: HashSet<&str> = first.iter().map(Property::name).collect();
    let in_second: HashSet<&Property> = second.iter().collect();

    let changes = first
        .iter()
        .filter(|property| !in_second.contains(*property))
        .cloned()
        .map(Change::Addition)
        .chain(
            second
                .iter()
                .filter(|property| !first_names.contains(property.name()))
                .cloned()
                .map(Change::Deletion),
        )
        .collect();

    Patch::from_changes(changes)
}

/// Diffing for any [`PropertyDictionary`].
///
/// Blanket-implemented, so every dictionary type gains `diff` without
/// opting in.
pub trait DiffExt: PropertyDictionary {
    /// The patch defining the changes to `source` necessary to obtain this
    /// dictionary: `target.diff(&source).apply(source)` reproduces
    /// `target`'s property set.
    fn diff(&self, source: &Self) -> Patch {
        diff_properties(
            self.properties().cloned(),
            source.properties().cloned(),
        )
    }
}

impl<D: PropertyDictionary> DiffExt for D {}

use serde::{Deserialize, Serialize};

use propkit_dict::PropertyDictionary;
use propkit_types::PropertyError;

use crate::change::Change;

/// An accounting of the differences between two property sets.
///
/// A patch is an ordered sequence of [`Change`]s, computed once and
/// replayable any number of times. Replay is a deterministic fold of one
/// recorded transition, not a merge: reapplying a patch is idempotent, but
/// it does not reconcile independent mutations made in between.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    changes: Vec<Change>,
}

impl Patch {
    pub(crate) fn from_changes(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    /// The recorded changes, additions first, then deletions.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Returns `true` if the compared property sets were equal.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of additions.
    pub fn additions(&self) -> usize {
        self.changes.iter().filter(|c| c.is_addition()).count()
    }

    /// Number of deletions.
    pub fn deletions(&self) -> usize {
        self.changes.iter().filter(|c| !c.is_addition()).count()
    }

    /// The dictionary induced by folding every change, left to right, over
    /// the given dictionary.
    ///
    /// Fails only if a change carries a name the target dictionary rejects
    /// on insertion, which cannot happen for patches built from validated
    /// properties.
    pub fn apply<D: PropertyDictionary>(&self, dictionary: D) -> Result<D, PropertyError> {
        self.changes
            .iter()
            .try_fold(dictionary, |dictionary, change| change.apply(dictionary))
    }
}

//! The [`PropertyRegistry`] recording attachment and usage declarations.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use propkit_dict::PropertyDictionary;

use crate::error::{RegistryError, Result};

/// A token identifying a concrete dictionary type.
///
/// Constructed only through [`DictionaryType::of`], whose trait bound is the
/// registration-time validation: a type that is not a [`PropertyDictionary`]
/// cannot be named here at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DictionaryType {
    type_id: TypeId,
    name: &'static str,
}

impl DictionaryType {
    /// The token for the dictionary type `D`.
    pub fn of<D: PropertyDictionary + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<D>(),
            name: std::any::type_name::<D>(),
        }
    }

    /// The full path name of the dictionary type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this token identifies the type `D`.
    pub fn is<D: PropertyDictionary + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<D>()
    }
}

/// A declaration that a producer attaches a dictionary of a given type and
/// writes the listed property names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// The dictionary type the producer instantiates.
    pub dictionary: DictionaryType,
    /// The property names the producer writes.
    pub names: Vec<String>,
}

/// A declaration that a consumer reads the listed property names from a
/// dictionary of a given type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Usage {
    /// The declaring consumer.
    pub consumer: String,
    /// The dictionary type the consumer queries.
    pub dictionary: DictionaryType,
    /// The property names the consumer reads.
    pub names: Vec<String>,
}

/// A reflection-free registry of property metadata, populated by explicit
/// code.
///
/// Producers register at most one attachment each; consumers may register
/// any number of usages. All state lives behind `RwLock`s, so a single
/// registry can be shared across threads.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    attachments: RwLock<HashMap<String, Attachment>>,
    usages: RwLock<Vec<Usage>>,
}

impl PropertyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `owner` instantiates dictionaries of type `D` and
    /// writes the given property names.
    ///
    /// Fails if `owner` already registered an attachment or if `names` is
    /// empty.
    pub fn register_attachment<D: PropertyDictionary + 'static>(
        &self,
        owner: &str,
        names: &[&str],
    ) -> Result<()> {
        if names.is_empty() {
            return Err(RegistryError::NoNames {
                owner: owner.to_string(),
            });
        }

        let mut attachments = self
            .attachments
            .write()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        if attachments.contains_key(owner) {
            return Err(RegistryError::DuplicateAttachment {
                owner: owner.to_string(),
            });
        }

        let dictionary = DictionaryType::of::<D>();
        debug!(owner, dictionary = dictionary.name(), count = names.len(), "registered attachment");
        attachments.insert(
            owner.to_string(),
            Attachment {
                dictionary,
                names: names.iter().map(|n| n.to_string()).collect(),
            },
        );
        Ok(())
    }

    /// Declare that `consumer` reads the given property names from
    /// dictionaries of type `D`.
    ///
    /// A consumer may declare several usages, one per dictionary type it
    /// queries. Fails if `names` is empty.
    pub fn register_usage<D: PropertyDictionary + 'static>(
        &self,
        consumer: &str,
        names: &[&str],
    ) -> Result<()> {
        if names.is_empty() {
            return Err(RegistryError::NoNames {
                owner: consumer.to_string(),
            });
        }

        let mut usages = self
            .usages
            .write()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        let dictionary = DictionaryType::of::<D>();
        debug!(consumer, dictionary = dictionary.name(), count = names.len(), "registered usage");
        usages.push(Usage {
            consumer: consumer.to_string(),
            dictionary,
            names: names.iter().map(|n| n.to_string()).collect(),
        });
        Ok(())
    }

    /// The attachment declared by `owner`, if any.
    pub fn attachment(&self, owner: &str) -> Result<Option<Attachment>> {
        let attachments = self
            .attachments
            .read()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        Ok(attachments.get(owner).cloned())
    }

    /// All usages declared by `consumer`.
    pub fn usages(&self, consumer: &str) -> Result<Vec<Usage>> {
        let usages = self
            .usages
            .read()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        Ok(usages
            .iter()
            .filter(|usage| usage.consumer == consumer)
            .cloned()
            .collect())
    }

    /// Owners that declared writing the property `name`, sorted.
    pub fn producers_of(&self, name: &str) -> Result<Vec<String>> {
        let attachments = self
            .attachments
            .read()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        let mut producers: Vec<String> = attachments
            .iter()
            .filter(|(_, attachment)| attachment.names.iter().any(|n| n == name))
            .map(|(owner, _)| owner.clone())
            .collect();
        producers.sort();
        Ok(producers)
    }

    /// Consumers that declared reading the property `name`, sorted and
    /// deduplicated.
    pub fn consumers_of(&self, name: &str) -> Result<Vec<String>> {
        let usages = self
            .usages
            .read()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        let mut consumers: Vec<String> = usages
            .iter()
            .filter(|usage| usage.names.iter().any(|n| n == name))
            .map(|usage| usage.consumer.clone())
            .collect();
        consumers.sort();
        consumers.dedup();
        Ok(consumers)
    }
}

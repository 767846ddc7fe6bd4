//! Declarative property metadata for propkit.
//!
//! A thin, reflection-free registry recording which dictionary type a
//! producer attaches to the objects it instantiates (and the property names
//! it writes), and which dictionary type and names a consumer reads. The
//! capability check happens at registration time through the
//! [`PropertyDictionary`] trait bound. This layer carries no algorithmic
//! weight and sits outside the core data model.
//!
//! # Key Types
//!
//! - [`PropertyRegistry`] — Shared, lock-protected metadata store
//! - [`DictionaryType`] — Type token validated by construction
//! - [`Attachment`] / [`Usage`] — Producer and consumer declarations
//!
//! [`PropertyDictionary`]: propkit_dict::PropertyDictionary

pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{Attachment, DictionaryType, PropertyRegistry, Usage};

//! Persistent property dictionaries for propkit.
//!
//! A dictionary is an immutable mapping from property name to [`Property`],
//! backed by a structurally-shared ordered map. Every mutation returns a new
//! logical value sharing unmodified substructure with the original, and a
//! no-op mutation returns a value sharing the original's map root outright.
//!
//! # Key Types
//!
//! - [`PropertyDictionary`] — The dictionary capability: lookup, presence,
//!   ordered enumeration, and `Self`-typed copy-on-write mutators
//! - [`PropertyMap`] — The backing persistent map (`im::OrdMap`)
//! - [`PropertyBag`] — A minimal concrete implementation
//!
//! [`Property`]: propkit_types::Property

pub mod bag;
pub mod dictionary;

pub use bag::PropertyBag;
pub use dictionary::{PropertyDictionary, PropertyMap};

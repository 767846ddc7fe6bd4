//! Foundation types for propkit.
//!
//! This crate provides the typed data model used throughout the propkit
//! workspace. Every other propkit crate depends on `propkit-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Closed tagged union over boolean, integer, number, string,
//!   and string-sequence payloads, plus the empty state
//! - [`ValueKind`] — Discriminant-only mirror of `Value`, used in errors
//! - [`Property`] — Immutable `(name, Value)` pair with a validated name
//! - [`ValueError`] / [`PropertyError`] — Construction and access failures

pub mod error;
pub mod property;
pub mod value;

pub use error::{PropertyError, ValueError};
pub use property::Property;
pub use value::{Value, ValueKind};

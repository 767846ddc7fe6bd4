//! Diff engine for propkit.
//!
//! Computes the set difference between two property collections and packages
//! it as an ordered, replayable patch. Applying the patch to the source
//! dictionary reproduces the target's property set; replay is idempotent.
//!
//! # Key Types
//!
//! - [`Change`] — A single recorded addition or deletion of a property
//! - [`Patch`] — An ordered sequence of changes, replayable against any
//!   dictionary of the same concrete type
//! - [`diff_properties`] / [`DiffExt`] — Patch computation over raw
//!   collections or directly between dictionaries

pub mod change;
pub mod diff;
pub mod patch;

pub use change::Change;
pub use diff::{diff_properties, DiffExt};
pub use patch::Patch;

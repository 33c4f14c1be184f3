//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the item rules:
//! the error model, the value-object marker and the bounded quality value.

pub mod error;
pub mod quality;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use quality::{bounded_add, Quality};
pub use value_object::ValueObject;

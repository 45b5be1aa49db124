//! Adoptable-dog records and the read-only catalog that holds them.
//!
//! Data for the browsing screens: immutable [`model`] records, a
//! [`Catalog`] built once at startup from an injected sequence of
//! records, and the [`fixtures`] seed list used in place of a real
//! data source.

pub mod catalog;
pub mod fixtures;
pub mod model;

pub use catalog::{Catalog, CatalogError};

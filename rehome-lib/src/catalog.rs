//! Read-only catalog of adoptable dogs.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::Dog;

/// Errors raised while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate dog id: {0}")]
    DuplicateId(u32),
}

/// An immutable sequence of dog records, loaded once at startup.
///
/// The catalog is the injected stand-in for a data source: callers
/// hand it the full record list up front and only ever read from it.
/// There is no query, filtering, sorting, pagination, or mutation.
#[derive(Debug, Clone)]
pub struct Catalog {
    dogs: Vec<Dog>,
}

impl Catalog {
    /// Build a catalog from records provided at startup.
    ///
    /// Record order is preserved; ids must be unique.
    pub fn new(dogs: Vec<Dog>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(dogs.len());
        for dog in &dogs {
            if !seen.insert(dog.id) {
                return Err(CatalogError::DuplicateId(dog.id));
            }
        }
        log::debug!("catalog loaded with {} dog(s)", dogs.len());
        Ok(Self { dogs })
    }

    /// All records, in the order they were provided.
    pub fn all(&self) -> &[Dog] {
        &self.dogs
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&Dog> {
        self.dogs.iter().find(|dog| dog.id == id)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    /// Check if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }
}

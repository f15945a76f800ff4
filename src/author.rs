//! Author entity.

use crate::ids::AuthorId;
use crate::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// A writer tracked in the catalog.
///
/// The name is validated at construction and immutable afterward; there is
/// no setter. An author's articles, magazines, and topic areas are derived
/// by the [`Catalog`](crate::Catalog), never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Create a new author with a validated, non-empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate::author_name(&name)?;
        Ok(Self {
            id: AuthorId::new(),
            name,
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// The author's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

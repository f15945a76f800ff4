//! Magazine entity.

use crate::ids::MagazineId;
use crate::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// A publication tracked in the catalog.
///
/// Unlike author names and article titles, both fields here stay mutable
/// for the magazine's whole lifetime. Every write runs the same predicate
/// as construction; a rejected write leaves the stored value unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Create a new magazine with a validated name and category.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate::magazine_name(&name)?;
        validate::magazine_category(&category)?;
        Ok(Self {
            id: MagazineId::new(),
            name,
            category,
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// The magazine's name (2-16 characters).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The magazine's topic category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Rename the magazine. The new name is revalidated; on failure the
    /// current name is retained.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate::magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Change the magazine's category, revalidated the same way.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate::magazine_category(&category)?;
        self.category = category;
        Ok(())
    }
}

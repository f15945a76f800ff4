//! Field validation predicates shared by the entity constructors.
//!
//! Every write that reaches an entity field goes through one of these
//! predicates first. A failed predicate returns an error and the caller
//! leaves the previous value untouched, so invalid input never corrupts
//! state.

use thiserror::Error;

/// Minimum magazine name length, in characters.
pub const MAGAZINE_NAME_MIN: usize = 2;
/// Maximum magazine name length, in characters.
pub const MAGAZINE_NAME_MAX: usize = 16;
/// Minimum article title length, in characters.
pub const TITLE_MIN: usize = 5;
/// Maximum article title length, in characters.
pub const TITLE_MAX: usize = 50;

/// A candidate value failed its field predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Author names must be non-empty.
    #[error("author name must not be empty")]
    EmptyAuthorName,

    /// Magazine names must be 2 to 16 characters.
    #[error("magazine name must be {MAGAZINE_NAME_MIN}-{MAGAZINE_NAME_MAX} characters, got {0}")]
    MagazineNameLength(usize),

    /// Magazine categories must be non-empty.
    #[error("magazine category must not be empty")]
    EmptyCategory,

    /// Article titles must be 5 to 50 characters.
    #[error("article title must be {TITLE_MIN}-{TITLE_MAX} characters, got {0}")]
    TitleLength(usize),
}

/// Validate an author name: any non-empty string.
pub fn author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Validate a magazine name: 2 to 16 characters.
///
/// Lengths are counted in characters, not bytes, so multi-byte names
/// like "Über Monthly" are measured the way a reader would count them.
pub fn magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN..=MAGAZINE_NAME_MAX).contains(&len) {
        return Err(ValidationError::MagazineNameLength(len));
    }
    Ok(())
}

/// Validate a magazine category: any non-empty string.
pub fn magazine_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Validate an article title: 5 to 50 characters.
pub fn article_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        return Err(ValidationError::TitleLength(len));
    }
    Ok(())
}

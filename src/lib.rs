//! Validated in-memory catalog of authors, magazines, and articles.
//!
//! This crate provides:
//! - Three entity types with validated fields: [`Author`], [`Magazine`], [`Article`]
//! - A [`Catalog`] store that owns every entity and an ordered article registry
//! - Derived relationship queries computed by scanning the registry
//!   (articles by author, contributors to a magazine, topic areas, ...)
//!
//! Invalid input never corrupts state: every fallible operation returns a
//! `Result`, and on `Err` the catalog is exactly as it was before the call.
//! Author names and article titles are immutable after construction;
//! magazine fields and article author/magazine references are mutable but
//! revalidated on every write.
//!
//! # Quick Start
//!
//! ```
//! use masthead::Catalog;
//!
//! # fn main() -> Result<(), masthead::CatalogError> {
//! let mut catalog = Catalog::new();
//!
//! let jared = catalog.create_author("Jared")?;
//! let tech_weekly = catalog.create_magazine("Tech Weekly", "Tech")?;
//! catalog.add_article(jared, tech_weekly, "Intro to Systems")?;
//!
//! assert_eq!(
//!     catalog.article_titles(tech_weekly),
//!     Some(vec!["Intro to Systems"])
//! );
//! assert_eq!(catalog.topic_areas(jared), Some(vec!["Tech"]));
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod author;
pub mod catalog;
pub mod ids;
pub mod magazine;
pub mod validate;

// Primary public API
pub use article::Article;
pub use author::Author;
pub use catalog::{Catalog, CatalogError};
pub use ids::{ArticleId, AuthorId, MagazineId};
pub use magazine::Magazine;
pub use validate::ValidationError;

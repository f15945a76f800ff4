//! Article records linking authors to magazines.

use crate::ids::{ArticleId, AuthorId, MagazineId};
use serde::{Deserialize, Serialize};

/// A published article: one author, one magazine, one title.
///
/// Articles are minted only by [`Catalog::add_article`](crate::Catalog::add_article),
/// which validates the title and checks that both references point at
/// entities the catalog actually holds. The title is immutable after
/// construction; the author and magazine references can be reassigned
/// later, again only through the catalog so the existence check cannot
/// be skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    /// Title is assumed already validated by the catalog.
    pub(crate) fn new(author: AuthorId, magazine: MagazineId, title: String) -> Self {
        Self {
            id: ArticleId::new(),
            title,
            author,
            magazine,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// The article's title (5-50 characters).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author this article is credited to.
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// The magazine this article appeared in.
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Check if this article is credited to the given author.
    pub fn by(&self, author: AuthorId) -> bool {
        self.author == author
    }

    /// Check if this article appeared in the given magazine.
    pub fn published_in(&self, magazine: MagazineId) -> bool {
        self.magazine == magazine
    }

    /// Existence of the target is checked by the catalog before this runs.
    pub(crate) fn reassign_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn reassign_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

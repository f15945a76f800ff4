//! The catalog store: owns every entity and answers relationship queries.
//!
//! The catalog is the only aggregator in the system. Articles do not hold
//! references back from authors or magazines; every cross-entity question
//! ("which articles did this author write?", "who contributed to this
//! magazine?") is answered by scanning the ordered article registry at
//! call time. Nothing is cached and nothing is ever removed.

use crate::article::Article;
use crate::author::Author;
use crate::ids::{ArticleId, AuthorId, MagazineId};
use crate::magazine::Magazine;
use crate::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// An author needs more than this many articles in a magazine to count as
/// one of its contributing authors.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Maximum authors listed in the summary digest.
const MAX_SUMMARY_AUTHORS: usize = 5;

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced author does not exist in this catalog.
    #[error("no author with id {0} in this catalog")]
    UnknownAuthor(AuthorId),

    /// The referenced magazine does not exist in this catalog.
    #[error("no magazine with id {0} in this catalog")]
    UnknownMagazine(MagazineId),

    /// The referenced article does not exist in this catalog.
    #[error("no article with id {0} in this catalog")]
    UnknownArticle(ArticleId),
}

/// The main catalog store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All known authors.
    authors: HashMap<AuthorId, Author>,
    /// All known magazines.
    magazines: HashMap<MagazineId, Magazine>,
    /// The article registry. Insertion order is the canonical order for
    /// every query that returns articles or titles.
    articles: Vec<Article>,
    /// Lowercase name index for author lookup.
    author_names: HashMap<String, AuthorId>,
    /// Lowercase name index for magazine lookup.
    magazine_names: HashMap<String, MagazineId>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Author Management
    // =========================================================================

    /// Add an already-constructed author to the catalog.
    pub fn add_author(&mut self, author: Author) -> AuthorId {
        let id = author.id();
        self.author_names.insert(author.name().to_lowercase(), id);
        self.authors.insert(id, author);
        id
    }

    /// Create and add a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> Result<AuthorId, CatalogError> {
        Ok(self.add_author(Author::new(name)?))
    }

    /// Get an author by ID.
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    /// Find an author by name (case-insensitive exact match).
    pub fn find_author_by_name(&self, name: &str) -> Option<&Author> {
        self.author_names
            .get(&name.to_lowercase())
            .and_then(|id| self.authors.get(id))
    }

    /// Get the total number of authors.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    // =========================================================================
    // Magazine Management
    // =========================================================================

    /// Add an already-constructed magazine to the catalog.
    pub fn add_magazine(&mut self, magazine: Magazine) -> MagazineId {
        let id = magazine.id();
        self.magazine_names.insert(magazine.name().to_lowercase(), id);
        self.magazines.insert(id, magazine);
        id
    }

    /// Create and add a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, CatalogError> {
        Ok(self.add_magazine(Magazine::new(name, category)?))
    }

    /// Get a magazine by ID.
    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    /// Find a magazine by name (case-insensitive exact match).
    pub fn find_magazine_by_name(&self, name: &str) -> Option<&Magazine> {
        self.magazine_names
            .get(&name.to_lowercase())
            .and_then(|id| self.magazines.get(id))
    }

    /// Rename a magazine, revalidating the new name and keeping the name
    /// index in step. On failure the old name (and index entry) survive.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(CatalogError::UnknownMagazine(id))?;
        let old_key = magazine.name().to_lowercase();
        magazine.set_name(name)?;
        let new_key = magazine.name().to_lowercase();

        // A later magazine may have claimed the old key; only drop it if
        // it still points at this magazine.
        if self.magazine_names.get(&old_key) == Some(&id) {
            self.magazine_names.remove(&old_key);
        }
        self.magazine_names.insert(new_key, id);
        Ok(())
    }

    /// Change a magazine's category, revalidated on write.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(CatalogError::UnknownMagazine(id))?;
        magazine.set_category(category)?;
        Ok(())
    }

    /// Get the total number of magazines.
    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    // =========================================================================
    // Article Registry
    // =========================================================================

    /// Publish a new article, appending it to the registry.
    ///
    /// The title is validated (5-50 characters) and both references are
    /// checked against the catalog before anything is recorded; on any
    /// failure the registry is untouched. This is also the convenience
    /// path for "author writes an article for a magazine".
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, CatalogError> {
        let title = title.into();
        validate::article_title(&title)?;
        if !self.authors.contains_key(&author) {
            return Err(CatalogError::UnknownAuthor(author));
        }
        if !self.magazines.contains_key(&magazine) {
            return Err(CatalogError::UnknownMagazine(magazine));
        }

        let article = Article::new(author, magazine, title);
        let id = article.id();
        self.articles.push(article);
        Ok(id)
    }

    /// Get an article by ID.
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }

    /// Every article ever published, in publication order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Get the total number of articles.
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Credit an article to a different author. The new author must exist
    /// in this catalog; the title and magazine are unaffected.
    pub fn reassign_author(
        &mut self,
        id: ArticleId,
        author: AuthorId,
    ) -> Result<(), CatalogError> {
        if !self.authors.contains_key(&author) {
            return Err(CatalogError::UnknownAuthor(author));
        }
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(CatalogError::UnknownArticle(id))?;
        article.reassign_author(author);
        Ok(())
    }

    /// Move an article to a different magazine, same rules as
    /// [`reassign_author`](Catalog::reassign_author).
    pub fn reassign_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), CatalogError> {
        if !self.magazines.contains_key(&magazine) {
            return Err(CatalogError::UnknownMagazine(magazine));
        }
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(CatalogError::UnknownArticle(id))?;
        article.reassign_magazine(magazine);
        Ok(())
    }

    // =========================================================================
    // Author-side Queries
    // =========================================================================

    /// All articles credited to an author, in publication order.
    pub fn articles_by(&self, author: AuthorId) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.by(author)).collect()
    }

    /// Distinct magazines an author has written for, ordered by first
    /// appearance in the registry.
    pub fn magazines_of(&self, author: AuthorId) -> Vec<&Magazine> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .filter(|a| a.by(author))
            .filter(|a| seen.insert(a.magazine()))
            .filter_map(|a| self.magazines.get(&a.magazine()))
            .collect()
    }

    /// Distinct categories an author has written in, or `None` if the
    /// author has no articles.
    pub fn topic_areas(&self, author: AuthorId) -> Option<Vec<&str>> {
        let magazines = self.magazines_of(author);
        if magazines.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        Some(
            magazines
                .into_iter()
                .map(|m| m.category())
                .filter(|category| seen.insert(*category))
                .collect(),
        )
    }

    // =========================================================================
    // Magazine-side Queries
    // =========================================================================

    /// All articles published in a magazine, in publication order.
    pub fn articles_in(&self, magazine: MagazineId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.published_in(magazine))
            .collect()
    }

    /// Distinct authors who have written for a magazine, ordered by first
    /// appearance in the registry.
    pub fn contributors(&self, magazine: MagazineId) -> Vec<&Author> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .filter(|a| a.published_in(magazine))
            .filter(|a| seen.insert(a.author()))
            .filter_map(|a| self.authors.get(&a.author()))
            .collect()
    }

    /// Titles published in a magazine in publication order, or `None` if
    /// the magazine has no articles.
    pub fn article_titles(&self, magazine: MagazineId) -> Option<Vec<&str>> {
        let titles: Vec<&str> = self
            .articles
            .iter()
            .filter(|a| a.published_in(magazine))
            .map(|a| a.title())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than two articles in a magazine, ordered by first
    /// appearance. `None` covers both "no articles at all" and "no author
    /// above the threshold".
    pub fn contributing_authors(&self, magazine: MagazineId) -> Option<Vec<&Author>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        let mut order: Vec<AuthorId> = Vec::new();

        for article in self.articles.iter().filter(|a| a.published_in(magazine)) {
            let count = counts.entry(article.author()).or_insert(0);
            if *count == 0 {
                order.push(article.author());
            }
            *count += 1;
        }

        let qualified: Vec<&Author> = order
            .into_iter()
            .filter(|id| counts[id] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|id| self.authors.get(&id))
            .collect();

        if qualified.is_empty() {
            None
        } else {
            Some(qualified)
        }
    }

    // =========================================================================
    // Summary
    // =========================================================================

    /// Build a human-readable digest of the catalog.
    pub fn build_summary(&self) -> String {
        let mut summary = String::new();

        let mut magazines: Vec<_> = self.magazines.values().collect();
        magazines.sort_by(|a, b| a.name().cmp(b.name()));

        if !magazines.is_empty() {
            summary.push_str("### Magazines\n");
            for magazine in &magazines {
                let articles = self.articles_in(magazine.id());
                let contributors = self.contributors(magazine.id());
                summary.push_str(&format!(
                    "- **{}** ({}): {} articles by {} contributors\n",
                    magazine.name(),
                    magazine.category(),
                    articles.len(),
                    contributors.len()
                ));
            }
            summary.push('\n');
        }

        let mut by_output: Vec<(&Author, usize)> = self
            .authors
            .values()
            .map(|author| (author, self.articles_by(author.id()).len()))
            .filter(|(_, count)| *count > 0)
            .collect();
        by_output.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));

        if !by_output.is_empty() {
            summary.push_str("### Most Prolific Authors\n");
            for (author, count) in by_output.into_iter().take(MAX_SUMMARY_AUTHORS) {
                summary.push_str(&format!("- **{}**: {} articles\n", author.name(), count));
            }
            summary.push('\n');
        }

        summary
    }
}

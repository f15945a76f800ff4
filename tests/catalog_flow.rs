//! End-to-end scenarios over the public catalog API.
//!
//! These tests exercise the crate the way a caller would: build a catalog,
//! publish articles, and read the derived relationship queries back.

use masthead::{Catalog, CatalogError, ValidationError};

#[test]
fn test_basic_publishing_flow() {
    let mut catalog = Catalog::new();

    let jared = catalog.create_author("Jared").unwrap();
    let tech_weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();

    let article = catalog
        .add_article(jared, tech_weekly, "Intro to Systems")
        .unwrap();

    assert_eq!(catalog.article(article).unwrap().title(), "Intro to Systems");
    assert_eq!(
        catalog.article_titles(tech_weekly),
        Some(vec!["Intro to Systems"])
    );
    assert_eq!(catalog.topic_areas(jared), Some(vec!["Tech"]));
}

#[test]
fn test_author_with_no_articles() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Quiet Type").unwrap();

    assert!(catalog.topic_areas(author).is_none());
    assert!(catalog.magazines_of(author).is_empty());
    assert!(catalog.articles_by(author).is_empty());
}

#[test]
fn test_rejected_article_never_registered() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Jared").unwrap();
    let magazine = catalog.create_magazine("Tech Weekly", "Tech").unwrap();

    let err = catalog.add_article(author, magazine, "Hey").unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation(ValidationError::TitleLength(3))
    );

    assert_eq!(catalog.article_count(), 0);
    assert!(catalog.article_titles(magazine).is_none());
}

#[test]
fn test_multi_author_multi_magazine_queries() {
    let mut catalog = Catalog::new();

    let jared = catalog.create_author("Jared").unwrap();
    let sam = catalog.create_author("Sam").unwrap();
    let tech_weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();
    let cooking = catalog.create_magazine("Cooking Now", "Food").unwrap();

    catalog
        .add_article(jared, tech_weekly, "Intro to Systems")
        .unwrap();
    catalog
        .add_article(sam, tech_weekly, "Networking Basics")
        .unwrap();
    catalog
        .add_article(jared, cooking, "Perfect Pasta Every Time")
        .unwrap();
    catalog
        .add_article(jared, tech_weekly, "Advanced Systems")
        .unwrap();

    // Registry order is preserved per author
    let jared_titles: Vec<&str> = catalog
        .articles_by(jared)
        .iter()
        .map(|a| a.title())
        .collect();
    assert_eq!(
        jared_titles,
        vec!["Intro to Systems", "Perfect Pasta Every Time", "Advanced Systems"]
    );

    // Contributors are distinct, first-appearance order
    let contributor_names: Vec<&str> = catalog
        .contributors(tech_weekly)
        .iter()
        .map(|a| a.name())
        .collect();
    assert_eq!(contributor_names, vec!["Jared", "Sam"]);

    assert_eq!(catalog.topic_areas(jared), Some(vec!["Tech", "Food"]));
    assert_eq!(catalog.topic_areas(sam), Some(vec!["Tech"]));
}

#[test]
fn test_contributing_authors_over_threshold() {
    let mut catalog = Catalog::new();

    let jared = catalog.create_author("Jared").unwrap();
    let sam = catalog.create_author("Sam").unwrap();
    let magazine = catalog.create_magazine("Tech Weekly", "Tech").unwrap();

    for title in ["First Piece Here", "Second Piece Here", "Third Piece Here"] {
        catalog.add_article(jared, magazine, title).unwrap();
    }
    catalog
        .add_article(sam, magazine, "A Lone Contribution")
        .unwrap();

    let names: Vec<&str> = catalog
        .contributing_authors(magazine)
        .unwrap()
        .iter()
        .map(|a| a.name())
        .collect();
    assert_eq!(names, vec!["Jared"]);
}

#[test]
fn test_magazine_edits_are_revalidated_for_life() {
    let mut catalog = Catalog::new();
    let magazine = catalog.create_magazine("Tech Weekly", "Tech").unwrap();

    // Valid edits apply
    catalog.rename_magazine(magazine, "TW Digest").unwrap();
    catalog.recategorize_magazine(magazine, "Science").unwrap();

    // Invalid edits are rejected and change nothing, even long after
    // construction
    assert!(catalog.rename_magazine(magazine, "A").is_err());
    assert!(catalog
        .rename_magazine(magazine, "A Name Far Too Long For Us")
        .is_err());
    assert!(catalog.recategorize_magazine(magazine, "").is_err());

    let magazine = catalog.magazine(magazine).unwrap();
    assert_eq!(magazine.name(), "TW Digest");
    assert_eq!(magazine.category(), "Science");
}

#[test]
fn test_reassignment_moves_article_between_queries() {
    let mut catalog = Catalog::new();

    let jared = catalog.create_author("Jared").unwrap();
    let sam = catalog.create_author("Sam").unwrap();
    let tech_weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();
    let cooking = catalog.create_magazine("Cooking Now", "Food").unwrap();

    let article = catalog
        .add_article(jared, tech_weekly, "Intro to Systems")
        .unwrap();

    catalog.reassign_author(article, sam).unwrap();
    catalog.reassign_magazine(article, cooking).unwrap();

    assert!(catalog.articles_by(jared).is_empty());
    assert!(catalog.article_titles(tech_weekly).is_none());
    assert_eq!(
        catalog.article_titles(cooking),
        Some(vec!["Intro to Systems"])
    );
    assert_eq!(catalog.topic_areas(sam), Some(vec!["Food"]));
}

#[test]
fn test_catalog_serde_round_trip() {
    let mut catalog = Catalog::new();

    let jared = catalog.create_author("Jared").unwrap();
    let tech_weekly = catalog.create_magazine("Tech Weekly", "Tech").unwrap();
    catalog
        .add_article(jared, tech_weekly, "Intro to Systems")
        .unwrap();
    catalog
        .add_article(jared, tech_weekly, "Advanced Systems")
        .unwrap();

    let json = serde_json::to_string(&catalog).unwrap();
    let restored: Catalog = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.author_count(), 1);
    assert_eq!(restored.magazine_count(), 1);
    assert_eq!(
        restored.article_titles(tech_weekly),
        Some(vec!["Intro to Systems", "Advanced Systems"])
    );
    assert_eq!(
        restored.find_author_by_name("jared").unwrap().id(),
        jared
    );
}

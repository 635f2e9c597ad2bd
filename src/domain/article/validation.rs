// src/domain/article/validation.rs
use crate::domain::article::Article;
use chrono::{DateTime, Utc};

pub(crate) const MAX_TITLE_LEN: usize = 200;
pub(crate) const MAX_SLUG_LEN: usize = 250;
pub(crate) const MAX_AUTHOR_LEN: usize = 100;
pub(crate) const MAX_SUMMARY_LEN: usize = 500;
pub(crate) const MAX_TAGS: usize = 10;

/// Collects every field-rule violation for the article. Pure: `now` is
/// supplied by the caller so the future-date rule stays deterministic.
/// An empty vec means the article is valid.
pub fn validate_article(article: &Article, now: DateTime<Utc>) -> Vec<String> {
    let mut errors = Vec::new();

    if article.title.trim().is_empty() {
        errors.push("Title is required.".to_string());
    } else if article.title.chars().count() > MAX_TITLE_LEN {
        errors.push(format!("Title must not exceed {MAX_TITLE_LEN} characters."));
    }

    if article.slug.trim().is_empty() {
        errors.push("Slug is required.".to_string());
    } else {
        if article.slug.chars().count() > MAX_SLUG_LEN {
            errors.push(format!("Slug must not exceed {MAX_SLUG_LEN} characters."));
        }
        if !is_kebab_slug(&article.slug) {
            errors.push("Slug must be lowercase alphanumeric with hyphens only.".to_string());
        }
    }

    if article.content.trim().is_empty() {
        errors.push("Content is required.".to_string());
    }

    if article.author.trim().is_empty() {
        errors.push("Author is required.".to_string());
    } else if article.author.chars().count() > MAX_AUTHOR_LEN {
        errors.push(format!(
            "Author name must not exceed {MAX_AUTHOR_LEN} characters."
        ));
    }

    if article.summary.chars().count() > MAX_SUMMARY_LEN {
        errors.push(format!(
            "Summary must not exceed {MAX_SUMMARY_LEN} characters."
        ));
    }

    if article.category_id.trim().is_empty() {
        errors.push("Category is required.".to_string());
    } else if !is_hex_object_id(&article.category_id) {
        errors.push("Category id must be a valid 24-character hex object id.".to_string());
    }

    if article.tags.len() > MAX_TAGS {
        errors.push(format!("Article cannot have more than {MAX_TAGS} tags."));
    }

    if article.view_count < 0 {
        errors.push("View count cannot be negative.".to_string());
    }

    if let Some(published_at) = article.published_at {
        if published_at > now {
            errors.push("Published date cannot be in the future.".to_string());
        }
    }

    errors
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$`: lowercase alphanumeric runs separated by
/// single hyphens, no leading/trailing hyphen.
pub(crate) fn is_kebab_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    valid_chars
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}

/// Shape check for a store identifier: exactly 24 hex characters.
pub(crate) fn is_hex_object_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

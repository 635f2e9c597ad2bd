// src/domain/category/validation.rs
use crate::domain::article::validation::{is_hex_object_id, is_kebab_slug};
use crate::domain::category::Category;

pub(crate) const MAX_NAME_LEN: usize = 100;
pub(crate) const MAX_SLUG_LEN: usize = 150;
pub(crate) const MAX_DESCRIPTION_LEN: usize = 500;

/// Collects every field-rule violation for the category. The parent
/// reference is shape-checked only; whether it points at a live category
/// is never verified here.
pub fn validate_category(category: &Category) -> Vec<String> {
    let mut errors = Vec::new();

    if category.name.trim().is_empty() {
        errors.push("Category name is required.".to_string());
    } else if category.name.chars().count() > MAX_NAME_LEN {
        errors.push(format!(
            "Category name must not exceed {MAX_NAME_LEN} characters."
        ));
    }

    if category.slug.trim().is_empty() {
        errors.push("Slug is required.".to_string());
    } else {
        if category.slug.chars().count() > MAX_SLUG_LEN {
            errors.push(format!("Slug must not exceed {MAX_SLUG_LEN} characters."));
        }
        if !is_kebab_slug(&category.slug) {
            errors.push("Slug must be lowercase alphanumeric with hyphens only.".to_string());
        }
    }

    if category.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(format!(
            "Description must not exceed {MAX_DESCRIPTION_LEN} characters."
        ));
    }

    if let Some(parent_id) = &category.parent_id {
        if !parent_id.trim().is_empty() && !is_hex_object_id(parent_id) {
            errors.push("Parent category id must be a valid 24-character hex object id.".to_string());
        }
    }

    if category.display_order < 0 {
        errors.push("Display order cannot be negative.".to_string());
    }

    errors
}

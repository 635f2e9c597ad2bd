use std::sync::Arc;

use chrono::{TimeZone, Utc};

mod support;

use kawara_core::application::commands::categories::{
    CategoryCommandService, CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use kawara_core::application::error::ApplicationError;
use kawara_core::application::queries::categories::{
    CategoryQueryService, GetCategoryByIdQuery, GetCategoryBySlugQuery, GetSubcategoriesQuery,
    ListCategoriesQuery,
};
use support::mocks::category_repos::InMemoryCategoryRepo;
use support::mocks::time::FixedClock;

fn command(name: &str, slug: &str, display_order: i64) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        slug: slug.into(),
        description: String::new(),
        parent_id: None,
        display_order,
        is_active: true,
    }
}

fn services(
    repo: &Arc<InMemoryCategoryRepo>,
    clock: &Arc<FixedClock>,
) -> (CategoryCommandService, CategoryQueryService) {
    (
        CategoryCommandService::new(
            repo.clone(),
            repo.clone(),
            clock.clone(),
        ),
        CategoryQueryService::new(repo.clone()),
    )
}

#[tokio::test]
async fn create_assigns_id_and_sets_both_timestamps() {
    let repo = InMemoryCategoryRepo::new();
    let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let clock = Arc::new(FixedClock::new(t0));
    let (commands, _) = services(&repo, &clock);

    let created = commands.create_category(command("Tech", "tech", 0)).await.unwrap();
    assert_eq!(created.id.len(), 24);
    assert_eq!(created.created_at, t0);
    assert_eq!(created.updated_at, t0);
    assert!(created.is_active);
}

#[tokio::test]
async fn blank_parent_id_is_treated_as_no_parent() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, queries) = services(&repo, &clock);

    let mut cmd = command("Tech", "tech", 0);
    cmd.parent_id = Some("  ".into());
    let created = commands.create_category(cmd).await.unwrap();
    assert_eq!(created.parent_id, None);

    let roots = queries.get_root_categories().await.unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, created.id);
}

#[tokio::test]
async fn root_listing_is_active_parentless_in_display_order() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, queries) = services(&repo, &clock);

    let tech = commands.create_category(command("Tech", "tech", 2)).await.unwrap();
    commands.create_category(command("Life", "life", 1)).await.unwrap();

    let mut inactive = command("Hidden", "hidden", 0);
    inactive.is_active = false;
    commands.create_category(inactive).await.unwrap();

    let mut child = command("Rust", "rust", 0);
    child.parent_id = Some(tech.id.clone());
    commands.create_category(child).await.unwrap();

    let roots = queries.get_root_categories().await.unwrap();
    let slugs: Vec<_> = roots.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["life", "tech"], "display order ascending, actives only");
}

#[tokio::test]
async fn subcategories_are_active_children_of_the_parent() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, queries) = services(&repo, &clock);

    let tech = commands.create_category(command("Tech", "tech", 0)).await.unwrap();

    let mut rust = command("Rust", "rust", 1);
    rust.parent_id = Some(tech.id.clone());
    commands.create_category(rust).await.unwrap();

    let mut retired = command("Perl", "perl", 0);
    retired.parent_id = Some(tech.id.clone());
    retired.is_active = false;
    commands.create_category(retired).await.unwrap();

    let children = queries
        .get_subcategories(GetSubcategoriesQuery {
            parent_id: tech.id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].slug, "rust");

    // An unknown parent is not an error, just an empty list.
    let none = queries
        .get_subcategories(GetSubcategoriesQuery {
            parent_id: "ffffffffffffffffffffffff".into(),
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn update_preserves_creation_timestamp() {
    let repo = InMemoryCategoryRepo::new();
    let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 1, 3, 7, 15, 0).unwrap();
    let clock = Arc::new(FixedClock::new(t0));
    let (commands, _) = services(&repo, &clock);

    let created = commands.create_category(command("Tech", "tech", 0)).await.unwrap();

    clock.set(t1);
    let updated = commands
        .update_category(UpdateCategoryCommand {
            id: created.id.clone(),
            name: "Technology".into(),
            slug: created.slug.clone(),
            description: "All things technical.".into(),
            parent_id: None,
            display_order: 3,
            is_active: true,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Technology");
    assert_eq!(updated.created_at, t0);
    assert_eq!(updated.updated_at, t1);
}

#[tokio::test]
async fn validation_failures_are_aggregated_and_skip_the_store() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, queries) = services(&repo, &clock);

    let mut cmd = command("", "Bad Slug", 0);
    cmd.display_order = -1;
    let err = commands.create_category(cmd).await.unwrap_err();
    let message = match err {
        ApplicationError::Validation(message) => message,
        other => panic!("expected validation error, got {other:?}"),
    };
    assert!(message.contains("Category name is required."));
    assert!(message.contains("Slug must be lowercase alphanumeric with hyphens only."));
    assert!(message.contains("Display order cannot be negative."));

    let listed = queries
        .list_categories(ListCategoriesQuery { active_only: false })
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn existence_and_count_track_the_collection() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, _) = services(&repo, &clock);

    let tech = commands.create_category(command("Tech", "tech", 0)).await.unwrap();
    commands.create_category(command("Life", "life", 1)).await.unwrap();

    use kawara_core::domain::category::CategoryReadRepository;
    assert!(repo.exists(&tech.id).await.unwrap());
    assert!(!repo.exists("ffffffffffffffffffffffff").await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 2);

    commands
        .delete_category(DeleteCategoryCommand {
            id: tech.id.clone(),
        })
        .await
        .unwrap();
    assert!(!repo.exists(&tech.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_and_missing_reads_report_failures() {
    let repo = InMemoryCategoryRepo::new();
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let (commands, queries) = services(&repo, &clock);

    let err = commands
        .delete_category(DeleteCategoryCommand {
            id: "ffffffffffffffffffffffff".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = queries
        .get_category_by_id(GetCategoryByIdQuery {
            id: "ffffffffffffffffffffffff".into(),
        })
        .await
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("Category with id ffffffffffffffffffffffff not found")
    );

    let created = commands.create_category(command("Tech", "tech", 0)).await.unwrap();
    commands
        .delete_category(DeleteCategoryCommand {
            id: created.id.clone(),
        })
        .await
        .unwrap();

    let err = queries
        .get_category_by_slug(GetCategoryBySlugQuery {
            slug: "tech".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

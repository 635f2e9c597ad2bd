// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, categories::CategoryCommandService},
        ports::time::Clock,
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryReadRepository, CategoryWriteRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&clock),
        ));
        let category_queries =
            Arc::new(CategoryQueryService::new(Arc::clone(&category_read_repo)));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
        }
    }
}

//! Read-only article collection.

use sahayak_contracts::{
    article::{Article, ArticleCategory},
    error::{SahayakError, SahayakResult},
};

#[derive(Debug, Clone, Default)]
pub struct ArticleLibrary {
    articles: Vec<Article>,
}

impl ArticleLibrary {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> SahayakResult<&Article> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| SahayakError::NotFound {
                kind: "article".to_string(),
                id: id.to_string(),
            })
    }

    /// Articles whose title or summary contains `query` in either locale.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.matches(query)).collect()
    }

    pub fn by_category(&self, category: ArticleCategory) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.category == category).collect()
    }
}

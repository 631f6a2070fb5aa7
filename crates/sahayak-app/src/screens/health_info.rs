//! Health information screen: article search and the reader view.

use sahayak_contracts::{article::Article, error::SahayakResult};
use sahayak_store::ArticleLibrary;

pub struct HealthInfoScreen {
    library: ArticleLibrary,
    query: String,
    open: Option<String>,
}

impl HealthInfoScreen {
    pub fn new(library: ArticleLibrary) -> Self {
        Self {
            library,
            query: String::new(),
            open: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Articles matching the query, in library order.
    pub fn visible(&self) -> Vec<&Article> {
        self.library.search(&self.query)
    }

    /// Open the article with `id` in the reader.
    pub fn open(&mut self, id: &str) -> SahayakResult<&Article> {
        let article = self.library.get(id)?;
        self.open = Some(article.id.clone());
        Ok(article)
    }

    /// The article in the reader, if any.
    pub fn current(&self) -> Option<&Article> {
        self.open.as_deref().and_then(|id| self.library.get(id).ok())
    }

    /// Return to the list.
    pub fn back(&mut self) {
        self.open = None;
    }
}

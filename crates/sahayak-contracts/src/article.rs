//! Static health-awareness articles.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleCategory {
    Cardiovascular,
    Nutrition,
    MentalHealth,
    Prevention,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 4] = [
        ArticleCategory::Cardiovascular,
        ArticleCategory::Nutrition,
        ArticleCategory::MentalHealth,
        ArticleCategory::Prevention,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ArticleCategory::Cardiovascular, Locale::En) => "Heart Health",
            (ArticleCategory::Cardiovascular, Locale::Ne) => "मुटु स्वास्थ्य",
            (ArticleCategory::Nutrition, Locale::En) => "Nutrition",
            (ArticleCategory::Nutrition, Locale::Ne) => "पोषण",
            (ArticleCategory::MentalHealth, Locale::En) => "Mental Health",
            (ArticleCategory::MentalHealth, Locale::Ne) => "मानसिक स्वास्थ्य",
            (ArticleCategory::Prevention, Locale::En) => "Prevention",
            (ArticleCategory::Prevention, Locale::Ne) => "रोकथाम",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: Localized<String>,
    pub category: ArticleCategory,
    pub summary: Localized<String>,
    pub content: Localized<String>,
}

impl Article {
    /// True when `query` appears in the title or summary in either locale.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.title.matches(query) || self.summary.matches(query)
    }
}

//! Symptom catalog entries and the per-analysis selection set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Localized};

/// Stable identifier of a symptom, e.g. `SymptomId("sore-throat")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymptomId(pub String);

impl SymptomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymptomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The fixed set of body-system groups a symptom can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymptomCategory {
    General,
    Respiratory,
    Digestive,
    Neurological,
    Musculoskeletal,
    Skin,
    Cardiovascular,
    Other,
}

impl SymptomCategory {
    /// All categories in display order.
    pub const ALL: [SymptomCategory; 8] = [
        SymptomCategory::General,
        SymptomCategory::Respiratory,
        SymptomCategory::Digestive,
        SymptomCategory::Neurological,
        SymptomCategory::Musculoskeletal,
        SymptomCategory::Skin,
        SymptomCategory::Cardiovascular,
        SymptomCategory::Other,
    ];

    /// Machine key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            SymptomCategory::General => "general",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
            SymptomCategory::Skin => "skin",
            SymptomCategory::Cardiovascular => "cardiovascular",
            SymptomCategory::Other => "other",
        }
    }

    /// Heading shown above the category's symptoms.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SymptomCategory::General, Locale::En) => "General",
            (SymptomCategory::General, Locale::Ne) => "सामान्य",
            (SymptomCategory::Respiratory, Locale::En) => "Respiratory",
            (SymptomCategory::Respiratory, Locale::Ne) => "श्वासप्रश्वास",
            (SymptomCategory::Digestive, Locale::En) => "Digestive",
            (SymptomCategory::Digestive, Locale::Ne) => "पाचन",
            (SymptomCategory::Neurological, Locale::En) => "Neurological",
            (SymptomCategory::Neurological, Locale::Ne) => "न्यूरोलोजिकल",
            (SymptomCategory::Musculoskeletal, Locale::En) => "Musculoskeletal",
            (SymptomCategory::Musculoskeletal, Locale::Ne) => "मस्कुलोस्केलेटल",
            (SymptomCategory::Skin, Locale::En) => "Skin",
            (SymptomCategory::Skin, Locale::Ne) => "छाला",
            (SymptomCategory::Cardiovascular, Locale::En) => "Cardiovascular",
            (SymptomCategory::Cardiovascular, Locale::Ne) => "हृदय",
            (SymptomCategory::Other, Locale::En) => "Other",
            (SymptomCategory::Other, Locale::Ne) => "अन्य",
        }
    }
}

/// One selectable symptom. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub label: Localized<String>,
    pub category: SymptomCategory,
}

impl Symptom {
    /// True when `query` appears in either label or in the category key.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty()
            || self.label.matches(query)
            || self.category.key().contains(&query.to_lowercase())
    }
}

/// The symptoms chosen for one analysis attempt.
///
/// Membership is what matters to the matcher; insertion order is kept only so
/// the selected chips render in the order the user picked them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<SymptomId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`. Returns false if it was already selected.
    pub fn insert(&mut self, id: SymptomId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns false if it was not selected.
    pub fn remove(&mut self, id: &SymptomId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of `id`. Returns true if `id` is selected afterwards.
    pub fn toggle(&mut self, id: SymptomId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &SymptomId) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in the order they were picked.
    pub fn iter(&self) -> impl Iterator<Item = &SymptomId> {
        self.ids.iter()
    }

    /// Owned copy of the ids, in pick order.
    pub fn to_vec(&self) -> Vec<SymptomId> {
        self.ids.clone()
    }
}

impl PartialEq for SelectionSet {
    /// Two selections are equal when they hold the same ids, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ids.iter().all(|id| other.contains(id))
    }
}

impl Eq for SelectionSet {}

impl<I: Into<SymptomId>> FromIterator<I> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            set.insert(id.into());
        }
        set
    }
}

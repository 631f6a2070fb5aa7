//! Symptom checker screen state.
//!
//! Holds the search query, the current selection, and the last analysis
//! outcome. Analysis itself runs through the shared `AnalysisPipeline`; a
//! front end may either `analyze` inline or spawn
//! `pipeline().analyze(..)` on a task and hand the outcome to
//! `apply_analysis`.

use std::sync::Arc;

use tracing::debug;

use sahayak_contracts::{
    condition::MatchReport,
    error::{SahayakError, SahayakResult},
    locale::{localize_digits, Locale},
    symptom::{SelectionSet, Symptom, SymptomCategory, SymptomId},
};
use sahayak_core::AnalysisPipeline;

use crate::strings::t;

/// Where the screen is in its analyze cycle.
#[derive(Debug, Clone, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Analyzing,
    Done(MatchReport),
    Failed(String),
}

/// One result card, already rendered for a locale.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub title: String,
    pub probability: u8,
    /// e.g. "48%" or "४८%".
    pub probability_label: String,
    pub progress_bar: String,
    pub description: String,
    pub recommendations: Vec<String>,
    /// "Name · Specialty · Facility · Experience · Rating · Phone" lines.
    pub specialists: Vec<String>,
}

pub struct SymptomCheckerScreen {
    symptoms: Vec<Symptom>,
    pipeline: Arc<AnalysisPipeline>,
    query: String,
    selection: SelectionSet,
    state: AnalysisState,
}

impl SymptomCheckerScreen {
    pub fn new(symptoms: Vec<Symptom>, pipeline: Arc<AnalysisPipeline>) -> Self {
        Self {
            symptoms,
            pipeline,
            query: String::new(),
            selection: SelectionSet::new(),
            state: AnalysisState::Idle,
        }
    }

    pub fn pipeline(&self) -> Arc<AnalysisPipeline> {
        Arc::clone(&self.pipeline)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Symptoms matching the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&Symptom> {
        self.symptoms.iter().filter(|s| s.matches(&self.query)).collect()
    }

    /// Filtered symptoms grouped by category. Groups appear in catalog order
    /// and empty groups are omitted.
    pub fn grouped(&self) -> Vec<(SymptomCategory, Vec<&Symptom>)> {
        let mut groups: Vec<(SymptomCategory, Vec<&Symptom>)> = Vec::new();
        for symptom in self.filtered() {
            match groups.iter_mut().find(|(c, _)| *c == symptom.category) {
                Some((_, members)) => members.push(symptom),
                None => groups.push((symptom.category, vec![symptom])),
            }
        }
        groups
    }

    pub fn symptom(&self, id: &SymptomId) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| &s.id == id)
    }

    /// Select or deselect `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> SahayakResult<bool> {
        let id = SymptomId::new(id.trim());
        if self.symptom(&id).is_none() {
            return Err(SahayakError::UnknownSymptom { id: id.to_string() });
        }
        let selected = self.selection.toggle(id.clone());
        debug!(symptom = %id, selected, count = self.selection.len(), "symptom toggled");
        Ok(selected)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Labels of the selected symptoms in selection order.
    pub fn selected_labels(&self, locale: Locale) -> Vec<&str> {
        self.selection
            .iter()
            .filter_map(|id| self.symptom(id))
            .map(|s| s.label.get(locale).as_str())
            .collect()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Mark the screen as waiting on an analysis started elsewhere.
    pub fn begin_analysis(&mut self) -> SahayakResult<()> {
        self.pipeline.validate(&self.selection)?;
        self.state = AnalysisState::Analyzing;
        Ok(())
    }

    /// Record the outcome of an analysis. A superseded outcome is dropped so
    /// the newer request still in flight keeps the screen in `Analyzing`.
    pub fn apply_analysis(&mut self, outcome: &SahayakResult<MatchReport>) {
        match outcome {
            Ok(report) => self.state = AnalysisState::Done(report.clone()),
            Err(SahayakError::Superseded { .. }) => {}
            Err(e) => self.state = AnalysisState::Failed(e.to_string()),
        }
    }

    /// Analyze the current selection and store the outcome.
    pub async fn analyze(&mut self) -> SahayakResult<MatchReport> {
        self.begin_analysis()?;
        let selection = self.selection.clone();
        let outcome = self.pipeline.analyze(&selection).await;
        self.apply_analysis(&outcome);
        outcome
    }

    /// Clear the selection, the query, and any results. Cancels an in-flight
    /// analysis.
    pub fn reset(&mut self) {
        self.pipeline.cancel();
        self.selection.clear();
        self.query.clear();
        self.state = AnalysisState::Idle;
    }

    /// Result cards for the last completed analysis.
    pub fn result_cards(&self, locale: Locale) -> Vec<ResultCard> {
        let AnalysisState::Done(report) = &self.state else {
            return Vec::new();
        };
        report
            .results
            .iter()
            .map(|ranked| {
                let c = &ranked.condition;
                ResultCard {
                    title: c.name.get(locale).clone(),
                    probability: ranked.probability,
                    probability_label: format!(
                        "{}%",
                        localize_digits(&ranked.probability.to_string(), locale)
                    ),
                    progress_bar: progress_bar(ranked.probability, 20),
                    description: c.description.get(locale).clone(),
                    recommendations: c.recommendations.get(locale).clone(),
                    specialists: c
                        .specialists
                        .iter()
                        .map(|s| {
                            format!(
                                "{} · {} · {} · {}: {} · {}: {:.1} · {}",
                                s.name.get(locale),
                                s.specialty.get(locale),
                                s.facility.get(locale),
                                t(locale, "symptoms.experience"),
                                s.experience_label(locale),
                                t(locale, "symptoms.rating"),
                                s.rating,
                                s.phone
                            )
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

/// A text bar `width` cells wide, filled in proportion to `percent`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! In-progress answers and reflections for one session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::StatementCatalog;
use crate::domain::foundation::{StatementId, TrafficLight};

/// Which of the two free-text reflections a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionField {
    Strengths,
    Limitations,
}

impl fmt::Display for ReflectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReflectionField::Strengths => "strengths",
            ReflectionField::Limitations => "limitations",
        };
        write!(f, "{}", s)
    }
}

/// The user's own view of their strengths and derailers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflections {
    pub strengths: String,
    pub limitations: String,
}

impl Reflections {
    pub fn new(strengths: impl Into<String>, limitations: impl Into<String>) -> Self {
        Self {
            strengths: strengths.into(),
            limitations: limitations.into(),
        }
    }

    /// First field that is empty after trimming, if any.
    pub fn first_blank(&self) -> Option<ReflectionField> {
        if self.strengths.trim().is_empty() {
            Some(ReflectionField::Strengths)
        } else if self.limitations.trim().is_empty() {
            Some(ReflectionField::Limitations)
        } else {
            None
        }
    }

    /// True when both fields hold non-whitespace text.
    pub fn is_complete(&self) -> bool {
        self.first_blank().is_none()
    }

    pub fn set(&mut self, field: ReflectionField, text: impl Into<String>) {
        match field {
            ReflectionField::Strengths => self.strengths = text.into(),
            ReflectionField::Limitations => self.limitations = text.into(),
        }
    }
}

/// Ratings keyed by statement id plus the two reflections.
///
/// Each id holds at most one rating; re-answering overwrites it. Individual
/// ratings are never cleared, only the whole state on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseState {
    answers: BTreeMap<StatementId, TrafficLight>,
    reflections: Reflections,
}

impl ResponseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the rating for a statement.
    pub fn record(&mut self, id: StatementId, rating: TrafficLight) {
        self.answers.insert(id, rating);
    }

    pub fn rating(&self, id: StatementId) -> Option<TrafficLight> {
        self.answers.get(&id).copied()
    }

    pub fn answers(&self) -> &BTreeMap<StatementId, TrafficLight> {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn reflections(&self) -> &Reflections {
        &self.reflections
    }

    pub fn reflections_mut(&mut self) -> &mut Reflections {
        &mut self.reflections
    }

    /// Catalog ids that have no rating yet, in catalog order.
    pub fn missing(&self, catalog: &StatementCatalog) -> Vec<StatementId> {
        catalog
            .ids()
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    /// True iff every catalog id has a rating.
    pub fn is_complete(&self, catalog: &StatementCatalog) -> bool {
        catalog.ids().all(|id| self.answers.contains_key(&id))
    }

    /// Returns every field to its initial empty value.
    pub fn clear(&mut self) {
        self.answers.clear();
        self.reflections = Reflections::default();
    }
}

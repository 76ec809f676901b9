//! Statement catalog - the ordered, immutable set of rated behaviors.
//!
//! Consumers either walk the statements in insertion order (prompt
//! formatting) or group them by dimension (section rendering). Grouping keeps
//! the first-seen dimension order and the insertion order inside each group,
//! which fixes the order sections are rendered in.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::{Dimension, Statement};
use crate::domain::foundation::{StatementId, ValidationError};

/// Ordered collection of statements with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementCatalog {
    statements: Vec<Statement>,
}

/// Statements sharing a dimension, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionGroup<'a> {
    pub dimension: Dimension,
    pub statements: Vec<&'a Statement>,
}

static REFERENCE_CATALOG: Lazy<Arc<StatementCatalog>> = Lazy::new(|| {
    Arc::new(StatementCatalog {
        statements: reference_statements(),
    })
});

impl StatementCatalog {
    /// Creates a catalog from statements in their display order.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no statements are given
    /// - `Duplicate` if two statements share an id
    pub fn new(statements: Vec<Statement>) -> Result<Self, ValidationError> {
        if statements.is_empty() {
            return Err(ValidationError::empty_field("statements"));
        }

        let mut seen = HashSet::with_capacity(statements.len());
        for statement in &statements {
            if !seen.insert(statement.id) {
                return Err(ValidationError::duplicate("statement_id", statement.id));
            }
            if statement.text.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "statement[{}].text",
                    statement.id
                )));
            }
        }

        Ok(Self { statements })
    }

    /// The built-in eight-statement leadership catalog.
    pub fn reference() -> Arc<StatementCatalog> {
        Arc::clone(&REFERENCE_CATALOG)
    }

    /// All statements in insertion order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statement ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = StatementId> + '_ {
        self.statements.iter().map(|s| s.id)
    }

    /// Looks up a statement by id.
    pub fn get(&self, id: StatementId) -> Option<&Statement> {
        self.statements.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StatementId) -> bool {
        self.get(id).is_some()
    }

    /// Buckets statements by dimension in a single pass.
    pub fn group_by_dimension(&self) -> Vec<DimensionGroup<'_>> {
        let mut groups: Vec<DimensionGroup<'_>> = Vec::new();

        for statement in &self.statements {
            match groups.iter_mut().find(|g| g.dimension == statement.dimension) {
                Some(group) => group.statements.push(statement),
                None => groups.push(DimensionGroup {
                    dimension: statement.dimension,
                    statements: vec![statement],
                }),
            }
        }

        groups
    }

    /// Dimensions in first-seen order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.group_by_dimension()
            .into_iter()
            .map(|g| g.dimension)
            .collect()
    }
}

fn reference_statements() -> Vec<Statement> {
    vec![
        Statement::new(
            1,
            "I utilize a '60-second centering' practice to ground myself physically and mentally before entering high-pressure environments.",
            Dimension::Presence,
        ),
        Statement::new(
            2,
            "I maintain active presence and direct eye contact (including with the camera lens) to signal engagement in virtual settings.",
            Dimension::Presence,
        ),
        Statement::new(
            3,
            "I employ strategic silence (pausing) during negotiations to signal confidence rather than filling the void with speech.",
            Dimension::Power,
        ),
        Statement::new(
            4,
            "I validate intent and seek to understand the thought process behind a mistake before offering correction.",
            Dimension::Warmth,
        ),
        Statement::new(
            5,
            "I use a 'Sensing-Sizing-Responding' framework to iterate decisions as new data emerges in ambiguous situations.",
            Dimension::DecisionMaking,
        ),
        Statement::new(
            6,
            "I conduct 'Pre-Mortems' (imagining failure backward) to identify potential risks before launching major initiatives.",
            Dimension::DecisionMaking,
        ),
        Statement::new(
            7,
            "I recognize my specific emotional triggers ('Dark Side' traits) and initiate a recovery protocol when under extreme pressure.",
            Dimension::Resilience,
        ),
        Statement::new(
            8,
            "I actively audit my cognitive energy and schedule non-negotiable recovery blocks to prevent decision fatigue.",
            Dimension::Resilience,
        ),
    ]
}

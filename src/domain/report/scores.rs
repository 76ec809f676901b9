//! Per-dimension score profile feeding the radar chart.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Dimension, ResponseState, StatementCatalog};
use crate::domain::foundation::rating_score;

/// Highest possible dimension score (all statements green).
pub const FULL_MARK: f32 = 5.0;

/// Average score of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f32,
}

/// Average score per dimension, in catalog first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    pub scores: Vec<DimensionScore>,
}

impl ScoreProfile {
    /// Averages ratings per dimension. Unrated statements count as 0.
    pub fn compute(catalog: &StatementCatalog, responses: &ResponseState) -> Self {
        let scores = catalog
            .group_by_dimension()
            .into_iter()
            .map(|group| {
                let total: u32 = group
                    .statements
                    .iter()
                    .map(|s| u32::from(rating_score(responses.rating(s.id))))
                    .sum();
                DimensionScore {
                    dimension: group.dimension,
                    score: total as f32 / group.statements.len() as f32,
                }
            })
            .collect();

        Self { scores }
    }

    pub fn score_for(&self, dimension: Dimension) -> Option<f32> {
        self.scores
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.score)
    }
}

//! Behavioral statement value object.

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::domain::foundation::StatementId;

/// A single ideal leadership behavior the user rates themselves against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub id: StatementId,
    pub text: String,
    pub dimension: Dimension,
}

impl Statement {
    /// Creates a new statement.
    pub fn new(id: impl Into<StatementId>, text: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            dimension,
        }
    }
}

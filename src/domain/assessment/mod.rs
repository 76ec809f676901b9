//! Assessment domain - statements, dimensions and the user's responses.

mod catalog;
mod dimension;
mod responses;
mod statement;

pub use catalog::{DimensionGroup, StatementCatalog};
pub use dimension::Dimension;
pub use responses::{ReflectionField, Reflections, ResponseState};
pub use statement::Statement;

//! Errors raised while reading stored card data

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("{record} is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record} field `{field}` must be {expected}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("attack #{}: {source}", .index + 1)]
    InvalidAttack {
        index: usize,
        source: Box<CardError>,
    },

    #[error("malformed card JSON: {0}")]
    Malformed(String),
}

impl CardError {
    /// Name of the offending field, looking through attack wrappers
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CardError::MissingField { field, .. } | CardError::InvalidField { field, .. } => {
                Some(*field)
            }
            CardError::InvalidAttack { source, .. } => source.field(),
            CardError::Malformed(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

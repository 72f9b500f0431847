use std::result::Result as StdResult;

use thiserror::Error;

/// Validation errors raised by core domain constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Price must be greater than zero")]
    NonPositivePrice,

    #[error("Price must be a valid number")]
    InvalidPrice,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    #[error("Unknown topping '{topping}' for vendor '{vendor}'")]
    UnknownTopping { vendor: String, topping: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;

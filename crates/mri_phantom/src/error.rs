//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, boundary violations during embedding, stencil overlap
//! (opt-in detection), parameter validation, and generic errors.
use thiserror::Error;

use crate::placement::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown morphology '{0}'")]
    InvalidMorphology(String),

    #[error("invalid odd-placement preference '{0}'")]
    InvalidOddPreference(String),

    #[error("invalid magnetization parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "cannot embed inlay with shape {inlay:?} into canvas with shape {canvas:?} \
         at position {position} - borders outside of region"
    )]
    BoundaryViolation {
        inlay: (usize, usize),
        canvas: (usize, usize),
        position: Position,
    },

    #[error("stencil placements {first} and {second} overlap")]
    StencilOverlap { first: usize, second: usize },

    #[error("parameter map left {missing} pixels without a compartment value")]
    IncompleteParameterMap { missing: usize },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

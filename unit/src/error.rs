/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum UnitError {
    #[error("duplicate unit name in {scope}: {name}")]
    DuplicateUnitName { name: String, scope: String },
    #[error("Incompatible units: {from} ({from_dimension}) <-> {to} ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dimension: Dimension,
        to_dimension: Dimension,
    },
    #[error("division by zero-scale unit: {0}")]
    DivisionByZeroUnit(String),
    #[error("invalid unit scale: {scale}")]
    InvalidScale { scale: f64 },
    #[error("invalid unit names: {0}")]
    InvalidNames(String),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

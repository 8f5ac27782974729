// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PucsError {
    #[error(
        "Unit system '{system}' defines no scale factor for dimension '{dimension}'{}",
        .constant.as_deref().map(|c| format!(" (referenced by constant '{c}')")).unwrap_or_default()
    )]
    UndefinedDimension {
        system: String,
        dimension: String,
        constant: Option<String>,
    },

    #[error(
        "Division by zero rescaling constant '{constant}' (symbol '{symbol}'): \
         scale factor of '{dimension}' is zero with exponent {exponent}"
    )]
    DivisionByZero {
        constant: String,
        symbol: String,
        dimension: String,
        exponent: String,
    },

    #[error(
        "Rescaled value of constant '{constant}' (symbol '{symbol}') is outside the \
         floating-point range: {value}"
    )]
    ValueOutOfRange {
        constant: String,
        symbol: String,
        value: f64,
    },

    #[error("Malformed constant '{constant}': {reason}")]
    MalformedConstant { constant: String, reason: String },

    #[error("Duplicate constant id: {0}")]
    DuplicateConstantId(String),

    #[error("Invalid scale factor {factor} for dimension '{dimension}'")]
    InvalidScaleFactor { dimension: String, factor: f64 },

    #[error("Defining constant '{constant}' cannot fix dimension '{dimension}': {reason}")]
    DefiningConstant {
        constant: String,
        dimension: String,
        reason: String,
    },

    #[error("Constant not found in registry: {0}")]
    MissingConstant(String),

    #[error("Malformed unit formula '{formula}': {reason}")]
    MalformedUnitFormula { formula: String, reason: String },

    #[error("Cyclic composite unit definition: {0}")]
    CyclicCompositeUnit(String),

    #[error("Unknown unit system preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PucsResult<T> = Result<T, PucsError>;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fatal configuration errors.
//!
//! A linearly dependent candidate basis is not an error: the solver reports it
//! as [`ExpressionResult::NotIndependent`](crate::solver::ExpressionResult) and
//! the search simply prunes the candidate. Everything in this module stops the
//! run because the search cannot proceed on invalid input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or calling the solver with
/// inconsistently sized inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document is not valid JSON or does not have the expected shape.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog declares no fundamental dimensions.
    #[error("the catalog must declare at least one fundamental dimension")]
    NoDimensions,

    /// A unit has the wrong number of exponents.
    #[error("unit {unit} should have {expected} exponents, but has {actual}")]
    ExponentCount {
        unit: String,
        expected: usize,
        actual: usize,
    },

    /// A unit exponent is NaN or infinite.
    #[error("unit {unit} has a non-finite exponent")]
    NonFiniteExponent { unit: String },

    /// Fewer units than dimensions, so no basis of size d exists.
    #[error("there should be at least as many units as dimensions ({dimensions}), but there are {units}")]
    TooFewUnits { dimensions: usize, units: usize },

    /// The solver was handed a basis whose size differs from the dimension count.
    #[error("expected {expected} basis units, got {actual}")]
    BasisSize { expected: usize, actual: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unit expression solver.
//!
//! Expresses a target unit as a product of powers of `d` basis units. With the
//! basis exponent vectors as the columns of a `d×d` matrix `M` and the target
//! exponents as `c`, the answer is the solution `x` of `M·x = c`:
//!
//! ```text
//! target = basis[0]^x[0] · basis[1]^x[1] · ... · basis[d-1]^x[d-1]
//! ```
//!
//! If `M` is singular the basis units are linearly dependent and no unique
//! expression exists; that is reported as [`ExpressionResult::NotIndependent`],
//! which is a normal outcome, not an error.
//!
//! # Example
//!
//! ```
//! use unit_basis_search::solver::{express, ExpressionResult};
//! use unit_basis_search::units::Unit;
//!
//! let mass = Unit::new("m", vec![0.0, 1.0, 0.0]);
//! let time = Unit::new("t", vec![0.0, 0.0, 1.0]);
//! let angular_momentum = Unit::new("L", vec![2.0, 1.0, -1.0]);
//! let length = Unit::new("l", vec![1.0, 0.0, 0.0]);
//!
//! let result = express(&length, &[&mass, &time, &angular_momentum]).unwrap();
//! let exponents = result.exponents().unwrap();
//! assert!((exponents[0] + 0.5).abs() < 1e-9);
//! assert!((exponents[1] - 0.5).abs() < 1e-9);
//! assert!((exponents[2] - 0.5).abs() < 1e-9);
//! ```

use crate::error::{Error, Result};
use crate::units::Unit;
use nalgebra::linalg::LU;
use nalgebra::{DMatrix, DVector, Dyn};

/// Magnitude above which a solved exponent counts as non-zero.
pub const NONZERO_TOLERANCE: f64 = 1e-4;

/// Largest 2-norm condition number accepted before a basis is treated as
/// singular.
pub const CONDITION_LIMIT: f64 = 1e12;

/// Outcome of expressing one unit over a candidate basis.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionResult {
    /// Exponent of each basis unit, in basis order.
    Exponents(Vec<f64>),
    /// The basis units are linearly dependent.
    NotIndependent,
}

impl ExpressionResult {
    pub fn exponents(&self) -> Option<&[f64]> {
        match self {
            ExpressionResult::Exponents(exponents) => Some(exponents),
            ExpressionResult::NotIndependent => None,
        }
    }

    pub fn is_independent(&self) -> bool {
        matches!(self, ExpressionResult::Exponents(_))
    }
}

/// A candidate basis factored once so many targets can be expressed over it.
#[derive(Debug, Clone)]
pub struct BasisSystem {
    lu: LU<f64, Dyn, Dyn>,
    dimensions: usize,
}

impl BasisSystem {
    /// Factor `basis` as a `d×d` system, where `d = dimensions`.
    ///
    /// Returns `Ok(None)` when the basis units are linearly dependent.
    /// Returns an error when the basis size or any exponent count is not `d`.
    pub fn factor(basis: &[&Unit], dimensions: usize) -> Result<Option<Self>> {
        if dimensions == 0 {
            return Err(Error::NoDimensions);
        }
        if basis.len() != dimensions {
            return Err(Error::BasisSize {
                expected: dimensions,
                actual: basis.len(),
            });
        }
        for unit in basis {
            if unit.dimensions() != dimensions {
                return Err(Error::ExponentCount {
                    unit: unit.name().to_string(),
                    expected: dimensions,
                    actual: unit.dimensions(),
                });
            }
        }

        // Column i holds the exponents of basis unit i.
        let matrix = DMatrix::from_fn(dimensions, dimensions, |row, col| {
            basis[col].exponents()[row]
        });
        if !is_well_conditioned(&matrix) {
            return Ok(None);
        }
        let lu = matrix.lu();
        if !lu.is_invertible() {
            return Ok(None);
        }
        Ok(Some(Self { lu, dimensions }))
    }

    /// Express `target` over the factored basis.
    pub fn express(&self, target: &Unit) -> Result<ExpressionResult> {
        if target.dimensions() != self.dimensions {
            return Err(Error::ExponentCount {
                unit: target.name().to_string(),
                expected: self.dimensions,
                actual: target.dimensions(),
            });
        }
        let rhs = DVector::from_column_slice(target.exponents());
        Ok(match self.lu.solve(&rhs) {
            Some(solution) => ExpressionResult::Exponents(solution.as_slice().to_vec()),
            None => ExpressionResult::NotIndependent,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Express `target` as a product of powers of the units in `basis`.
///
/// The dimension count is taken from `target`; `basis` must contain exactly
/// that many units, each with that many exponents.
pub fn express(target: &Unit, basis: &[&Unit]) -> Result<ExpressionResult> {
    match BasisSystem::factor(basis, target.dimensions())? {
        Some(system) => system.express(target),
        None => Ok(ExpressionResult::NotIndependent),
    }
}

/// Number of exponents whose magnitude exceeds [`NONZERO_TOLERANCE`].
pub fn count_nonzero(exponents: &[f64]) -> usize {
    exponents
        .iter()
        .filter(|e| e.abs() > NONZERO_TOLERANCE)
        .count()
}

fn is_well_conditioned(matrix: &DMatrix<f64>) -> bool {
    let singular_values = matrix.singular_values();
    let largest = singular_values.max();
    let smallest = singular_values.min();
    if smallest <= 0.0 {
        return false;
    }
    // NaN fails the comparison as well.
    largest / smallest <= CONDITION_LIMIT
}

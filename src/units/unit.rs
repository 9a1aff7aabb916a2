// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unit type.
//!
//! A unit is a power-product of fundamental dimensions, stored as the vector of
//! exponents. For example with dimensions `[length, mass, time]`, momentum
//! (kg·m/s) is `[1, 1, -1]`.
//!
//! ```
//! use unit_basis_search::units::Unit;
//!
//! let momentum = Unit::new("p", vec![1.0, 1.0, -1.0]);
//! assert_eq!(momentum.name(), "p");
//! assert_eq!(momentum.dimensions(), 3);
//! ```

use serde::Deserialize;
use std::fmt;

/// A named physical unit. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Unit {
    name: String,
    #[serde(alias = "coeffs")]
    exponents: Vec<f64>,
}

impl Unit {
    pub fn new(name: impl Into<String>, exponents: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            exponents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exponent of each fundamental dimension, in catalog dimension order.
    pub fn exponents(&self) -> &[f64] {
        &self.exponents
    }

    /// Number of exponents (should equal the catalog dimension count).
    pub fn dimensions(&self) -> usize {
        self.exponents.len()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.name, self.exponents)
    }
}

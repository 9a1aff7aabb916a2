// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! UnitCatalog - the validated set of units a search runs over.
//!
//! The catalog is read from a JSON document of the form
//!
//! ```json
//! {
//!   "si_units": ["m", "kg", "s"],
//!   "units": [
//!     {"name": "l", "exponents": [1, 0, 0]},
//!     {"name": "p", "coeffs": [1, 1, -1]}
//!   ]
//! }
//! ```
//!
//! `coeffs` is accepted in place of `exponents`. Dimension names are kept for
//! display only; the dimension count `d` is what the search uses.

use crate::error::{Error, Result};
use crate::units::Unit;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Raw shape of the input document before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    si_units: Vec<String>,
    units: Vec<Unit>,
}

/// Ordered units plus the names of the fundamental dimensions.
///
/// Invariants (checked by every constructor):
/// - at least one dimension
/// - every unit has exactly `d` finite exponents
/// - at least `d` units
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    dimension_names: Vec<String>,
    units: Vec<Unit>,
}

impl UnitCatalog {
    /// Build a catalog, validating it.
    pub fn new(dimension_names: Vec<String>, units: Vec<Unit>) -> Result<Self> {
        let dimensions = dimension_names.len();
        if dimensions == 0 {
            return Err(Error::NoDimensions);
        }
        for unit in &units {
            if unit.dimensions() != dimensions {
                return Err(Error::ExponentCount {
                    unit: unit.name().to_string(),
                    expected: dimensions,
                    actual: unit.dimensions(),
                });
            }
            if unit.exponents().iter().any(|e| !e.is_finite()) {
                return Err(Error::NonFiniteExponent {
                    unit: unit.name().to_string(),
                });
            }
        }
        if units.len() < dimensions {
            return Err(Error::TooFewUnits {
                dimensions,
                units: units.len(),
            });
        }
        Ok(Self {
            dimension_names,
            units,
        })
    }

    /// Read and validate a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&text, path)?;
        info!(
            path = %path.display(),
            units = catalog.len(),
            dimensions = catalog.dimensions(),
            "loaded unit catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, origin: &Path) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text).map_err(|source| Error::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::new(file.si_units, file.units)
    }

    /// Number of fundamental dimensions (`d`).
    pub fn dimensions(&self) -> usize {
        self.dimension_names.len()
    }

    pub fn dimension_names(&self) -> &[String] {
        &self.dimension_names
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> &Unit {
        &self.units[index]
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Never true for a validated catalog, provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = UnitCatalog::new(
            dims(&["m", "s"]),
            vec![
                Unit::new("l", vec![1.0, 0.0]),
                Unit::new("t", vec![0.0, 1.0]),
                Unit::new("v", vec![1.0, -1.0]),
            ],
        )
        .unwrap();
        assert_eq!(catalog.dimensions(), 2);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.unit(2).name(), "v");
    }

    #[test]
    fn test_no_dimensions() {
        let result = UnitCatalog::new(vec![], vec![Unit::new("x", vec![])]);
        assert!(matches!(result, Err(Error::NoDimensions)));
    }

    #[test]
    fn test_exponent_count_mismatch() {
        let result = UnitCatalog::new(
            dims(&["m", "s"]),
            vec![
                Unit::new("l", vec![1.0, 0.0]),
                Unit::new("bad", vec![1.0, 0.0, 0.0]),
            ],
        );
        match result {
            Err(Error::ExponentCount {
                unit,
                expected,
                actual,
            }) => {
                assert_eq!(unit, "bad");
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected ExponentCount, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_units() {
        let result = UnitCatalog::new(dims(&["m", "kg", "s"]), vec![Unit::new("l", vec![1.0, 0.0, 0.0])]);
        assert!(matches!(
            result,
            Err(Error::TooFewUnits {
                dimensions: 3,
                units: 1
            })
        ));
    }

    #[test]
    fn test_non_finite_exponent() {
        let result = UnitCatalog::new(
            dims(&["m"]),
            vec![Unit::new("nan", vec![f64::NAN])],
        );
        assert!(matches!(result, Err(Error::NonFiniteExponent { .. })));
    }

    #[test]
    fn test_from_json_str() {
        let catalog = UnitCatalog::from_json_str(
            r#"{"si_units": ["m", "s"],
                "units": [{"name": "l", "exponents": [1, 0]},
                          {"name": "v", "coeffs": [1, -1]}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.dimension_names(), &["m".to_string(), "s".to_string()]);
        assert_eq!(catalog.unit(1).exponents(), &[1.0, -1.0]);
    }

    #[test]
    fn test_malformed_json() {
        let result = UnitCatalog::from_json_str(r#"{"si_units": ["m"]}"#);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}

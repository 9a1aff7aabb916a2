// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading unit catalogs from disk.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use unit_basis_search::{Error, UnitCatalog};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write test file");
    path
}

#[test]
fn test_load_sample_catalog() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/mechanics.json");
    let catalog = UnitCatalog::load(&path).unwrap();
    assert_eq!(catalog.dimensions(), 3);
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.unit(5).name(), "L");
}

#[test]
fn test_load_coeffs_document() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "units.json",
        r#"{"si_units": ["m", "s"],
            "units": [{"name": "l", "coeffs": [1, 0]},
                      {"name": "v", "coeffs": [1, -1]}]}"#,
    );
    let catalog = UnitCatalog::load(&path).unwrap();
    assert_eq!(catalog.unit(1).exponents(), &[1.0, -1.0]);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = UnitCatalog::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", "{ not json");
    match UnitCatalog::load(&path) {
        Err(Error::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_exponent_length_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "short.json",
        r#"{"si_units": ["m", "kg", "s"],
            "units": [{"name": "l", "exponents": [1, 0, 0]},
                      {"name": "m", "exponents": [0, 1]},
                      {"name": "t", "exponents": [0, 0, 1]}]}"#,
    );
    let error = UnitCatalog::load(&path).unwrap_err();
    assert_eq!(error.to_string(), "unit m should have 3 exponents, but has 2");
}

#[test]
fn test_fewer_units_than_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "few.json",
        r#"{"si_units": ["m", "kg"], "units": [{"name": "l", "exponents": [1, 0]}]}"#,
    );
    assert!(matches!(
        UnitCatalog::load(&path),
        Err(Error::TooFewUnits {
            dimensions: 2,
            units: 1
        })
    ));
}

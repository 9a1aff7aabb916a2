// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use unit_basis_search::{Unit, UnitCatalog};

pub const EPSILON: f64 = 1e-5;

pub fn unit(name: &str, exponents: &[f64]) -> Unit {
    Unit::new(name, exponents.to_vec())
}

pub fn length() -> Unit {
    unit("l", &[1.0, 0.0, 0.0])
}

pub fn mass() -> Unit {
    unit("m", &[0.0, 1.0, 0.0])
}

pub fn time() -> Unit {
    unit("t", &[0.0, 0.0, 1.0])
}

pub fn speed() -> Unit {
    unit("v", &[1.0, 0.0, -1.0])
}

pub fn momentum() -> Unit {
    unit("p", &[1.0, 1.0, -1.0])
}

pub fn angular_momentum() -> Unit {
    unit("L", &[2.0, 1.0, -1.0])
}

/// l, m, t, v, p, L over [m, kg, s].
pub fn mechanics() -> UnitCatalog {
    UnitCatalog::new(
        vec!["m".to_string(), "kg".to_string(), "s".to_string()],
        vec![length(), mass(), time(), speed(), momentum(), angular_momentum()],
    )
    .expect("mechanics catalog is valid")
}

/// a, b and their product c over two dimensions: every pair ties.
pub fn symmetric_pairs() -> UnitCatalog {
    UnitCatalog::new(
        vec!["x".to_string(), "y".to_string()],
        vec![
            unit("a", &[1.0, 0.0]),
            unit("b", &[0.0, 1.0]),
            unit("c", &[1.0, 1.0]),
        ],
    )
    .expect("symmetric catalog is valid")
}

pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "expected {:?}, got {:?}", expected, actual);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPSILON, "expected {:?}, got {:?}", expected, actual);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verbose per-candidate output.
//!
//! The scoring predicate decides what to report from the run's
//! [`Verbosity`](crate::search::Verbosity); reporters only decide where it goes.

use std::fmt;

/// Receives per-candidate detail while the search runs.
///
/// All methods default to doing nothing.
pub trait SearchReporter: fmt::Debug {
    /// A candidate is about to be scored unit by unit.
    #[allow(unused)]
    fn scoring(&mut self, basis: &[&str]) {}

    /// One unit was expressed over the candidate.
    #[allow(unused)]
    fn unit_expressed(&mut self, unit: &str, partial: usize, basis: &[&str], exponents: &[f64]) {}

    /// The candidate is linearly dependent and was rejected.
    #[allow(unused)]
    fn not_independent(&mut self, basis: &[&str]) {}

    /// The candidate was scored.
    #[allow(unused)]
    fn scored(&mut self, basis: &[&str], score: usize) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl SearchReporter for NullReporter {}

/// Prints to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl SearchReporter for ConsoleReporter {
    fn scoring(&mut self, basis: &[&str]) {
        println!("{}", scoring_line(basis));
    }

    fn unit_expressed(&mut self, unit: &str, partial: usize, basis: &[&str], exponents: &[f64]) {
        println!("{}", unit_line(unit, partial, basis, exponents));
    }

    fn not_independent(&mut self, basis: &[&str]) {
        println!("{}", not_independent_line(basis));
    }

    fn scored(&mut self, basis: &[&str], score: usize) {
        println!("{}", scored_line(basis, score));
    }
}

/// `[a, b, c]`
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    let joined: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    format!("[{}]", joined.join(", "))
}

pub fn scoring_line(basis: &[&str]) -> String {
    format!("Scoring units {}", format_names(basis))
}

pub fn unit_line(unit: &str, partial: usize, basis: &[&str], exponents: &[f64]) -> String {
    format!("  +{}, {} = {} ⋅ {:?}", partial, unit, format_names(basis), exponents)
}

pub fn not_independent_line(basis: &[&str]) -> String {
    format!("Units {} are not independent", format_names(basis))
}

pub fn scored_line(basis: &[&str], score: usize) -> String {
    format!("Score for units {} is {}", format_names(basis), score)
}

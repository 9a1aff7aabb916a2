// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the sparsest basis of physical units.
//!
//! Given `n` units written as exponent vectors over `d` fundamental dimensions,
//! find every set of `d` units from which all `n` can be re-derived with the
//! fewest non-zero exponents in total.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Immutable
//!
//! - The validated [`UnitCatalog`](units::UnitCatalog) and the run options
//!
//! ## Tier 2: Dynamic
//!
//! Search state that changes during search, tracked on the trail:
//! - The catalog index chosen for each basis slot
//! - The running best set and statistics, which only ever grow
//!
//! # Search Algorithm
//!
//! The search is a predicate program run by a backtracking engine:
//!
//! 1. **ChooseBasisPredicate**: choose `d` increasing catalog indices (one per round)
//! 2. **ScoreBasisPredicate**: factor the candidate, express every unit over it,
//!    count exponents above `1e-4`, fold the score into the tied-best set
//! 3. **FailPredicate**: backtrack into the next candidate until all `C(n, d)`
//!    have been seen
//!
//! Linearly dependent candidates fail in step 2 and are pruned.

pub mod context;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod search;
pub mod solver;
pub mod state;
pub mod trail;
pub mod units;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Result};
pub use search::{search, search_with_reporter, SearchOptions, SearchOutcome};
pub use solver::{express, ExpressionResult};
pub use trail::Trail;
pub use units::{Unit, UnitCatalog};

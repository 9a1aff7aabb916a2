// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `choose`: ChooseBasisPredicate, enumerating the d-combinations of the catalog
//! - `score`: ScoreBasisPredicate, scoring a candidate and folding it into the best set
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`

pub mod choose;
pub mod score;

pub use choose::ChooseBasisPredicate;
pub use score::ScoreBasisPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack into the next alternative.
/// Ending a program with it explores the whole search space.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Suspends the search so the caller can inspect the context; resuming
/// continues with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

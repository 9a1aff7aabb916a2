// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basis search.
//!
//! Enumerates every `d`-combination of catalog units, rejects the linearly
//! dependent ones, scores the rest by how many non-zero exponents it takes to
//! re-express the whole catalog, and keeps every candidate tied at the lowest
//! score.
//!
//! The search is a predicate program run to exhaustion:
//!
//! ```text
//! ChooseBasis (d rounds) → ScoreBasis → Count(ScoredBases) → Fail
//! ```
//!
//! # Example
//!
//! ```
//! use unit_basis_search::search::{search, SearchOptions};
//! use unit_basis_search::units::UnitCatalog;
//!
//! let catalog = UnitCatalog::from_json_str(
//!     r#"{"si_units": ["m", "s"],
//!         "units": [{"name": "l", "exponents": [1, 0]},
//!                   {"name": "t", "exponents": [0, 1]},
//!                   {"name": "v", "exponents": [1, -1]}]}"#,
//! ).unwrap();
//!
//! let outcome = search(&catalog, SearchOptions::default()).unwrap();
//! assert_eq!(outcome.score(), Some(4));
//! assert_eq!(outcome.bases().len(), 3);
//! ```

pub mod best;
pub mod report;
pub mod score;

pub use best::{BestBases, CandidateBasis, ScoreRecord};
pub use report::{ConsoleReporter, NullReporter, SearchReporter};
pub use score::score_candidate;

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::Result;
use crate::predicates::{ChooseBasisPredicate, FailPredicate, ScoreBasisPredicate};
use crate::state::statistics::{Counters, Statistics};
use crate::units::UnitCatalog;
use std::fmt;
use tracing::info;

/// How much per-candidate detail to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Final summary only.
    #[default]
    Quiet,
    /// Whether each candidate was rejected, and its score.
    Candidates,
    /// Also the exponents of every unit over every candidate.
    Units,
}

impl Verbosity {
    /// Map a repeated `-v` flag count to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Candidates,
            _ => Verbosity::Units,
        }
    }
}

/// Whether a candidate's own units take part in its score.
///
/// Each basis unit expresses as a unit vector and adds exactly 1, so the
/// choice shifts every score by `d` and never changes the ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMode {
    #[default]
    IncludeBasis,
    ExcludeBasis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub verbosity: Verbosity,
    pub scoring: ScoringMode,
}

/// Result of a complete search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    best: BestBases,
    names: Vec<Vec<String>>,
    statistics: Statistics,
}

impl SearchOutcome {
    fn new(catalog: &UnitCatalog, best: BestBases, statistics: Statistics) -> Self {
        let names = best
            .bases()
            .iter()
            .map(|basis| basis.names(catalog).into_iter().map(String::from).collect())
            .collect();
        Self {
            best,
            names,
            statistics,
        }
    }

    /// Minimum score, or `None` when no candidate basis is independent.
    pub fn score(&self) -> Option<usize> {
        self.best.score()
    }

    /// Every basis tied at the minimum score.
    pub fn bases(&self) -> &[CandidateBasis] {
        self.best.bases()
    }

    /// Unit names of each basis in [`bases`](Self::bases), in the same order.
    pub fn basis_names(&self) -> &[Vec<String>] {
        &self.names
    }

    pub fn best(&self) -> &BestBases {
        &self.best
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.score() {
            None => write!(f, "No independent basis found"),
            Some(score) => {
                let groups: Vec<String> = self
                    .names
                    .iter()
                    .map(|n| report::format_names(n.as_slice()))
                    .collect();
                write!(f, "Best units: {} score: {}", groups.join(", "), score)
            }
        }
    }
}

/// Search `catalog` for its minimum-score bases without per-candidate output.
pub fn search(catalog: &UnitCatalog, options: SearchOptions) -> Result<SearchOutcome> {
    search_with_reporter(catalog, options, Box::new(NullReporter))
}

/// Search `catalog`, sending per-candidate detail to `reporter` as allowed by
/// `options.verbosity`.
pub fn search_with_reporter(
    catalog: &UnitCatalog,
    options: SearchOptions,
    reporter: Box<dyn SearchReporter>,
) -> Result<SearchOutcome> {
    let mut ctx = SearchContext::with_reporter(catalog.clone(), options, reporter);
    let engine = EngineBuilder::new()
        .add(Box::new(ChooseBasisPredicate))
        .add(Box::new(ScoreBasisPredicate))
        .add(Statistics::counting_predicate(Counters::ScoredBases, None))
        .terminal(Box::new(FailPredicate))
        .build();

    // Only a fatal error suspends this program.
    let _ = engine.search(&mut ctx);
    if let Some(error) = ctx.take_error() {
        return Err(error);
    }

    info!(
        units = ctx.catalog.len(),
        dimensions = ctx.catalog.dimensions(),
        best_score = ?ctx.best.score(),
        tied = ctx.best.bases().len(),
        "basis search complete: {}",
        ctx.statistics
    );
    Ok(SearchOutcome::new(&ctx.catalog, ctx.best, ctx.statistics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_verbosity_from_occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Quiet);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Candidates);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::Units);
        assert_eq!(Verbosity::from_occurrences(5), Verbosity::Units);
        assert!(Verbosity::Units > Verbosity::Candidates);
    }

    #[test]
    fn test_single_candidate() {
        let catalog = UnitCatalog::new(
            vec!["m".to_string(), "s".to_string()],
            vec![Unit::new("l", vec![1.0, 0.0]), Unit::new("t", vec![0.0, 1.0])],
        )
        .unwrap();
        let outcome = search(&catalog, SearchOptions::default()).unwrap();
        assert_eq!(outcome.score(), Some(2));
        assert_eq!(outcome.basis_names(), &[vec!["l".to_string(), "t".to_string()]]);
        assert_eq!(outcome.to_string(), "Best units: [l, t] score: 2");
        assert_eq!(outcome.statistics().get(Counters::CandidateBases), 1);
    }

    #[test]
    fn test_no_independent_basis() {
        let catalog = UnitCatalog::new(
            vec!["m".to_string(), "s".to_string()],
            vec![
                Unit::new("l", vec![1.0, 0.0]),
                Unit::new("a", vec![2.0, 0.0]),
                Unit::new("b", vec![-1.0, 0.0]),
            ],
        )
        .unwrap();
        let outcome = search(&catalog, SearchOptions::default()).unwrap();
        assert_eq!(outcome.score(), None);
        assert!(outcome.bases().is_empty());
        assert_eq!(outcome.to_string(), "No independent basis found");
        assert_eq!(outcome.statistics().get(Counters::DependentBases), 3);
    }
}

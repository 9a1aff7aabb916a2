// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ScoreBasisPredicate - scores the candidate chosen by ChooseBasisPredicate.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::search::{score_candidate, ScoreRecord, Verbosity};
use crate::state::statistics::Counters;
use tracing::debug;

/// Scores the current selection and folds it into the running best.
///
/// - Dependent candidate: counted, reported, and the predicate fails
/// - Independent candidate: offered to `ctx.best`, and the predicate succeeds
/// - Solver error: recorded on the context, and the predicate suspends so the
///   search stops
#[derive(Debug)]
pub struct ScoreBasisPredicate;

impl Predicate for ScoreBasisPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let candidate = ctx.candidate();
        let SearchContext {
            catalog,
            options,
            statistics,
            reporter,
            best,
            ..
        } = &mut *ctx;
        let verbosity = options.verbosity;
        let names = candidate.names(catalog);

        if verbosity >= Verbosity::Units {
            reporter.scoring(&names);
        }
        let result = score_candidate(catalog, &candidate, options.scoring, |unit, exponents, partial| {
            statistics.increment(Counters::UnitExpressions);
            if verbosity >= Verbosity::Units {
                reporter.unit_expressed(unit.name(), partial, &names, exponents);
            }
        });

        match result {
            Ok(Some(score)) => {
                debug!(basis = ?names, score, "scored candidate");
                if verbosity >= Verbosity::Candidates {
                    reporter.scored(&names, score);
                }
                best.offer(ScoreRecord::new(candidate, score));
                PredicateResult::Success
            }
            Ok(None) => {
                debug!(basis = ?names, "candidate is not independent");
                statistics.increment(Counters::DependentBases);
                if verbosity >= Verbosity::Candidates {
                    reporter.not_independent(&names);
                }
                PredicateResult::Failure
            }
            Err(error) => {
                ctx.fail(error);
                PredicateResult::Suspend
            }
        }
    }

    fn name(&self) -> &str {
        "ScoreBasis"
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ChooseBasisPredicate - enumerates candidate bases.
//!
//! Runs for `d` rounds, choosing one catalog index per round. Indices strictly
//! increase from round to round, so every `d`-combination of the `n` catalog
//! units is produced exactly once, in lexicographic order.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;

/// Chooses the catalog index for basis slot `round`.
///
/// # Choices
///
/// In round `r` the index ranges from one past the previous slot's index up to
/// `n - d + r`, leaving enough units for the remaining slots:
/// - Choice 0 → lowest allowed index
/// - Choice k → lowest allowed index + k
///
/// Round `d` is the final round: the selection is complete and the predicate
/// succeeds once.
#[derive(Debug)]
pub struct ChooseBasisPredicate;

/// Lowest catalog index allowed in slot `round`.
fn lowest_index(ctx: &SearchContext, round: usize) -> usize {
    if round == 0 {
        0
    } else {
        ctx.selection()[round - 1] + 1
    }
}

/// Number of indices allowed in slot `round`.
fn choice_count(ctx: &SearchContext, round: usize) -> usize {
    let n = ctx.catalog.len();
    let d = ctx.catalog.dimensions();
    // Highest allowed index is n - d + round; count = highest + 1 - lowest.
    (n + round + 1).saturating_sub(d + lowest_index(ctx, round))
}

impl Predicate for ChooseBasisPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == ctx.catalog.dimensions() {
            ctx.statistics.increment(Counters::CandidateBases);
            return PredicateResult::Success;
        }
        match choice_count(ctx, round) {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        debug_assert!(
            choice < choice_count(ctx, round),
            "Invalid choice {} in round {}",
            choice,
            round
        );
        let index = lowest_index(ctx, round) + choice;
        ctx.set_selection(round, index);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ChooseBasis"
    }
}

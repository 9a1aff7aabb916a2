// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail so that state written by
//! a predicate is undone when the search backtracks over it.
//!
//! # Execution model
//!
//! The engine keeps a stack of predicate executions and follows a WAM-like loop:
//! 1. Call try_pred(round) on the predicate at the top of the stack
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent choice point with choices left
//! 6. If Suspend: pause and return control to caller
//!
//! A program must end with a [`TerminalPredicate`]. Ending with
//! [`FailPredicate`](crate::predicates::FailPredicate) explores the whole
//! search space; ending with
//! [`SuspendPredicate`](crate::predicates::SuspendPredicate) stops at each
//! solution and can be resumed for the next one.
//!
//! # Example
//!
//! ```
//! use unit_basis_search::context::SearchContext;
//! use unit_basis_search::engine::EngineBuilder;
//! use unit_basis_search::predicates::{ChooseBasisPredicate, SuspendPredicate};
//! use unit_basis_search::units::UnitCatalog;
//!
//! let catalog = UnitCatalog::from_json_str(
//!     r#"{"si_units": ["m", "s"],
//!         "units": [{"name": "l", "exponents": [1, 0]},
//!                   {"name": "t", "exponents": [0, 1]},
//!                   {"name": "v", "exponents": [1, -1]}]}"#,
//! ).unwrap();
//! let mut ctx = SearchContext::new(catalog, Default::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ChooseBasisPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Suspended at the first candidate basis.
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.selection(), &[0, 1]);
//!
//! // Resume for the next one.
//! let _engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.selection(), &[0, 2]);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Whether a deterministic try_pred has already succeeded here.
    /// Backtracking into such an entry passes straight through it.
    succeeded: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            succeeded: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Builds a predicate program that is guaranteed to end with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// An [`EngineBuilder`] whose program has been terminated and can be built.
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the final predicate of the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states. Non-empty only while suspended.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which enforces the terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling `search` on it again backtracks
    ///   from the suspension point and continues
    /// - `None` if exhausted (backtracked past the first predicate)
    ///
    /// Results are communicated through `ctx`, not the return value.
    ///
    /// # Panics
    ///
    /// Panics if the program runs off its end (no FAIL or SUSPEND), or if a
    /// retry_pred returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None;
            }
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        } else {
            // Resuming: the suspending predicate is treated as having failed.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted
            };

            ctx.rewind_to(entry.trail_checkpoint);

            if entry.succeeded {
                // Backtracking through a deterministic predicate.
                self.stack.pop();
                continue;
            }

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.mark_succeeded();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.mark_succeeded();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.checkpoint();
                        }
                    }
                    PredicateResult::Suspend => {
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    fn mark_succeeded(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.succeeded = true;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// Returns (try_count, retry_count) since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::units::{Unit, UnitCatalog};

    fn context() -> SearchContext {
        let catalog = UnitCatalog::new(
            vec!["m".to_string()],
            vec![Unit::new("l", vec![1.0]), Unit::new("a", vec![2.0])],
        )
        .unwrap();
        SearchContext::new(catalog, Default::default())
    }

    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Offers `n` choices, all of which succeed.
    #[derive(Debug)]
    struct Branch(usize);

    impl Predicate for Branch {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).expect("should suspend");
        assert_eq!(engine.statistics(), (2, 0));
    }

    #[test]
    fn test_backtracking_through_deterministic_predicate_terminates() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(Branch(3)))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_resume_enumerates_every_choice() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(Branch(3)))
            .add(Box::new(Branch(2)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let mut solutions = 0;
        let mut next = Some(engine);
        while let Some(engine) = next {
            next = engine.search(&mut ctx);
            if next.is_some() {
                solutions += 1;
            }
            assert!(solutions <= 6, "more than 6 solutions");
        }
        assert_eq!(solutions, 6);
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the immutable catalog with mutable search state.
//!
//! ```text
//! SearchContext {
//!     catalog, options   // immutable for the whole run
//!     trail, state       // selection being built, undone on backtrack
//!     best, statistics   // results folded in as candidates are scored
//! }
//! ```
//!
//! Each context is independent: nothing is shared between two searches, so
//! several contexts over clones of the same catalog can run side by side.

use crate::error::Error;
use crate::search::{BestBases, CandidateBasis, NullReporter, SearchOptions, SearchReporter};
use crate::state::statistics::Statistics;
use crate::trail::Trail;
use crate::units::UnitCatalog;

/// Mutable selection state, tracked on the trail.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Catalog index chosen for each basis slot. Only the first `round`
    /// entries are meaningful while a candidate is being built.
    pub selection: Vec<usize>,
}

impl DynamicState {
    pub fn new(dimensions: usize) -> Self {
        Self {
            selection: vec![0; dimensions],
        }
    }
}

/// Everything a predicate can see or change during the search.
#[derive(Debug)]
pub struct SearchContext {
    /// Units being searched (immutable).
    pub catalog: UnitCatalog,
    /// Run options (immutable).
    pub options: SearchOptions,
    /// Undo log for `state`.
    pub trail: Trail,
    /// Candidate basis under construction.
    pub state: DynamicState,
    /// Running minimum-score bases.
    pub best: BestBases,
    pub statistics: Statistics,
    pub(crate) reporter: Box<dyn SearchReporter>,
    error: Option<Error>,
}

impl SearchContext {
    /// Create a context that reports nothing.
    pub fn new(catalog: UnitCatalog, options: SearchOptions) -> Self {
        Self::with_reporter(catalog, options, Box::new(NullReporter))
    }

    pub fn with_reporter(
        catalog: UnitCatalog,
        options: SearchOptions,
        reporter: Box<dyn SearchReporter>,
    ) -> Self {
        let state = DynamicState::new(catalog.dimensions());
        Self {
            catalog,
            options,
            trail: Trail::new(),
            state,
            best: BestBases::new(),
            statistics: Statistics::new(),
            reporter,
            error: None,
        }
    }

    /// Set the catalog index for basis slot `slot`, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below the dimension count.
    pub fn set_selection(&mut self, slot: usize, index: usize) {
        let old_value = self.state.selection[slot];
        self.trail.record(slot, old_value);
        self.state.selection[slot] = index;
    }

    /// The full selection; meaningful once every slot has been chosen.
    pub fn selection(&self) -> &[usize] {
        &self.state.selection
    }

    /// The current selection as a candidate basis.
    pub fn candidate(&self) -> CandidateBasis {
        CandidateBasis::new(self.state.selection.clone())
    }

    /// Undo every state change recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for (slot, old_value) in self.trail.unwind(checkpoint) {
            self.state.selection[slot] = old_value;
        }
    }

    /// Record a fatal error. The predicate that calls this should suspend so
    /// the search stops immediately.
    pub(crate) fn fail(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// Take the fatal error recorded during the search, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }
}

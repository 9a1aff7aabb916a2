// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparsity score of one candidate basis.

use crate::error::Result;
use crate::search::{CandidateBasis, ScoringMode};
use crate::solver::{count_nonzero, BasisSystem, ExpressionResult};
use crate::units::{Unit, UnitCatalog};

/// Score `candidate` against every unit of `catalog`.
///
/// The score is the total number of non-zero exponents needed to express the
/// scored units over the candidate. Returns `Ok(None)` if the candidate is
/// linearly dependent. `on_unit` is called with each scored unit, its exponents
/// and the number of them that are non-zero.
///
/// With [`ScoringMode::ExcludeBasis`] the catalog entries at the candidate's own
/// indices are skipped; other entries with the same name are still scored.
pub fn score_candidate<F>(
    catalog: &UnitCatalog,
    candidate: &CandidateBasis,
    scoring: ScoringMode,
    mut on_unit: F,
) -> Result<Option<usize>>
where
    F: FnMut(&Unit, &[f64], usize),
{
    let basis = candidate.units(catalog);
    let Some(system) = BasisSystem::factor(&basis, catalog.dimensions())? else {
        return Ok(None);
    };

    let mut score = 0;
    for (index, unit) in catalog.units().iter().enumerate() {
        if scoring == ScoringMode::ExcludeBasis && candidate.contains(index) {
            continue;
        }
        match system.express(unit)? {
            ExpressionResult::Exponents(exponents) => {
                let partial = count_nonzero(&exponents);
                score += partial;
                on_unit(unit, &exponents, partial);
            }
            ExpressionResult::NotIndependent => return Ok(None),
        }
    }
    Ok(Some(score))
}

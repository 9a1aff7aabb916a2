// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate bases and the tie-aware running minimum.
//!
//! [`BestBases`] is a pure reduction over [`ScoreRecord`]s: offering records in
//! any order, or merging partial results in any grouping, yields the same
//! minimum score and the same set of tied bases.
//!
//! ```
//! use unit_basis_search::search::{BestBases, CandidateBasis, ScoreRecord};
//!
//! let best: BestBases = vec![
//!     ScoreRecord::new(CandidateBasis::new(vec![0, 1]), 5),
//!     ScoreRecord::new(CandidateBasis::new(vec![0, 2]), 4),
//!     ScoreRecord::new(CandidateBasis::new(vec![1, 2]), 4),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(best.score(), Some(4));
//! assert_eq!(best.bases().len(), 2);
//! ```

use crate::units::{Unit, UnitCatalog};
use std::cmp::Ordering;

/// An unordered selection of `d` catalog indices, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateBasis {
    indices: Vec<usize>,
}

impl CandidateBasis {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The basis units, in catalog order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for `catalog`.
    pub fn units<'a>(&self, catalog: &'a UnitCatalog) -> Vec<&'a Unit> {
        self.indices.iter().map(|&i| catalog.unit(i)).collect()
    }

    /// The basis unit names, in catalog order.
    pub fn names<'a>(&self, catalog: &'a UnitCatalog) -> Vec<&'a str> {
        self.indices.iter().map(|&i| catalog.unit(i).name()).collect()
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub basis: CandidateBasis,
    pub score: usize,
}

impl ScoreRecord {
    pub fn new(basis: CandidateBasis, score: usize) -> Self {
        Self { basis, score }
    }
}

/// Every candidate tied at the lowest score seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestBases {
    score: Option<usize>,
    /// Sorted and free of duplicates, so equality is independent of the
    /// order records arrived in.
    bases: Vec<CandidateBasis>,
}

impl BestBases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running minimum.
    ///
    /// - lower score (or first record): replaces the set
    /// - equal score: joins the set
    /// - higher score: discarded
    pub fn offer(&mut self, record: ScoreRecord) {
        let ordering = match self.score {
            None => Ordering::Less,
            Some(best) => record.score.cmp(&best),
        };
        match ordering {
            Ordering::Less => {
                self.score = Some(record.score);
                self.bases.clear();
                self.bases.push(record.basis);
            }
            Ordering::Equal => {
                if let Err(position) = self.bases.binary_search(&record.basis) {
                    self.bases.insert(position, record.basis);
                }
            }
            Ordering::Greater => {}
        }
    }

    /// Combine two partial results, e.g. from searches over disjoint slices of
    /// the candidate space.
    pub fn merge(mut self, other: BestBases) -> BestBases {
        if let Some(score) = other.score {
            for basis in other.bases {
                self.offer(ScoreRecord::new(basis, score));
            }
        }
        self
    }

    /// The minimum score, or `None` if no candidate has been offered.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// The tied minimum-score bases, in ascending index order.
    pub fn bases(&self) -> &[CandidateBasis] {
        &self.bases
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl FromIterator<ScoreRecord> for BestBases {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut best = BestBases::new();
        for record in iter {
            best.offer(record);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(indices: &[usize], score: usize) -> ScoreRecord {
        ScoreRecord::new(CandidateBasis::new(indices.to_vec()), score)
    }

    #[test]
    fn test_candidate_basis_is_sorted() {
        let basis = CandidateBasis::new(vec![4, 1, 2]);
        assert_eq!(basis.indices(), &[1, 2, 4]);
        assert!(basis.contains(4));
        assert!(!basis.contains(3));
        assert_eq!(basis.len(), 3);
    }

    #[test]
    fn test_empty_best() {
        let best = BestBases::new();
        assert_eq!(best.score(), None);
        assert!(best.is_empty());
    }

    #[test]
    fn test_lower_score_replaces() {
        let mut best = BestBases::new();
        best.offer(record(&[0, 1], 7));
        best.offer(record(&[0, 2], 7));
        best.offer(record(&[1, 2], 5));
        assert_eq!(best.score(), Some(5));
        assert_eq!(best.bases(), &[CandidateBasis::new(vec![1, 2])]);
    }

    #[test]
    fn test_ties_are_all_kept() {
        let mut best = BestBases::new();
        best.offer(record(&[1, 2], 4));
        best.offer(record(&[0, 1], 4));
        best.offer(record(&[0, 2], 9));
        assert_eq!(best.score(), Some(4));
        assert_eq!(
            best.bases(),
            &[CandidateBasis::new(vec![0, 1]), CandidateBasis::new(vec![1, 2])]
        );
    }

    #[test]
    fn test_duplicate_offer_is_ignored() {
        let mut best = BestBases::new();
        best.offer(record(&[0, 1], 3));
        best.offer(record(&[1, 0], 3));
        assert_eq!(best.bases().len(), 1);
    }

    #[test]
    fn test_order_of_reduction_does_not_matter() {
        let records = vec![
            record(&[0, 1], 6),
            record(&[0, 2], 4),
            record(&[1, 2], 4),
            record(&[0, 3], 5),
            record(&[2, 3], 4),
        ];
        let forward: BestBases = records.iter().cloned().collect();
        let backward: BestBases = records.iter().rev().cloned().collect();
        assert_eq!(forward, backward);

        let left: BestBases = records[..2].iter().cloned().collect();
        let right: BestBases = records[2..].iter().cloned().collect();
        assert_eq!(left.clone().merge(right.clone()), forward);
        assert_eq!(right.merge(left), forward);
    }

    #[test]
    fn test_merge_with_empty() {
        let best: BestBases = vec![record(&[0, 1], 2)].into_iter().collect();
        assert_eq!(best.clone().merge(BestBases::new()), best);
        assert_eq!(BestBases::new().merge(best.clone()), best);
    }
}

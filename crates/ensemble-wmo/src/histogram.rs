//! Occurrence counts of an ensemble's codes.

use std::collections::BTreeMap;

use ensemble_core::WmoCode;

use crate::tables;

/// Multiset of codes. All strategies read the ensemble through this, which
/// makes every result independent of member order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeHistogram {
    counts: BTreeMap<WmoCode, usize>,
    total: usize,
}

impl CodeHistogram {
    pub fn from_codes(codes: &[WmoCode]) -> Self {
        let mut counts = BTreeMap::new();
        for code in codes {
            *counts.entry(*code).or_insert(0) += 1;
        }
        Self {
            counts,
            total: codes.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, code: WmoCode) -> usize {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// Combined count of every code in `codes`.
    pub fn count_in(&self, codes: &[WmoCode]) -> usize {
        codes.iter().map(|c| self.count(*c)).sum()
    }

    /// `(code, count)` ascending by code.
    pub fn iter(&self) -> impl Iterator<Item = (WmoCode, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    /// Distinct codes, ascending.
    pub fn distinct(&self) -> impl Iterator<Item = WmoCode> + '_ {
        self.counts.keys().copied()
    }

    /// All codes expanded back out, ascending.
    pub fn sorted_codes(&self) -> Vec<WmoCode> {
        self.counts
            .iter()
            .flat_map(|(c, n)| std::iter::repeat(*c).take(*n))
            .collect()
    }

    /// Most frequent code, ties to the highest code, and whether a tie occurred.
    pub fn mode(&self) -> Option<(WmoCode, bool)> {
        let best = self.counts.values().copied().max()?;
        let mut tied = self.counts.iter().filter(|(_, n)| **n == best).map(|(c, _)| *c);
        // BTreeMap iterates ascending, so the last tied code is the highest.
        let first = tied.next()?;
        match tied.last() {
            Some(highest) => Some((highest, true)),
            None => Some((first, false)),
        }
    }

    pub fn max_code(&self) -> Option<WmoCode> {
        self.counts.keys().next_back().copied()
    }

    /// Distinct codes the fixed tables do not know.
    pub fn unknown_codes(&self) -> Vec<WmoCode> {
        self.distinct().filter(|c| !tables::is_known(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total() {
        let h = CodeHistogram::from_codes(&[3, 61, 3, 95]);
        assert_eq!(h.total(), 4);
        assert_eq!(h.count(3), 2);
        assert_eq!(h.count(2), 0);
        assert_eq!(h.count_in(&[3, 95]), 3);
        assert_eq!(h.sorted_codes(), vec![3, 3, 61, 95]);
        assert_eq!(h.max_code(), Some(95));
    }

    #[test]
    fn mode_prefers_highest_on_tie() {
        assert_eq!(CodeHistogram::from_codes(&[95, 95, 99]).mode(), Some((95, false)));
        assert_eq!(CodeHistogram::from_codes(&[95, 99]).mode(), Some((99, true)));
        assert_eq!(CodeHistogram::from_codes(&[1, 2, 3]).mode(), Some((3, true)));
        assert_eq!(CodeHistogram::default().mode(), None);
    }

    #[test]
    fn unknown_codes_listed_once() {
        let h = CodeHistogram::from_codes(&[4, 4, 0, 100]);
        assert_eq!(h.unknown_codes(), vec![4, 100]);
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories counters.
use serde::{Serialize, ser::SerializeStruct};
use std::{fmt, ops};

use crate::HandRank;

/// Counts how many times each hand category has been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandHistogram {
    counts: [u64; HandRank::COUNT],
}

impl HandHistogram {
    /// Creates a histogram with the given counts indexed by [HandRank].
    pub fn from_counts(counts: [u64; HandRank::COUNT]) -> Self {
        Self { counts }
    }

    /// Adds one hand with the given category.
    pub fn increment(&mut self, rank: HandRank) {
        self.counts[rank as usize] += 1;
    }

    /// Adds the counts from another histogram.
    pub fn merge(&mut self, other: &HandHistogram) {
        for (c, o) in self.counts.iter_mut().zip(other.counts) {
            *c += o;
        }
    }

    /// The number of hands with the given category.
    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts[rank as usize]
    }

    /// The number of hands in this histogram.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The best category with a non zero count.
    pub fn best(&self) -> Option<HandRank> {
        HandRank::ranks().rev().find(|r| self.count(*r) > 0)
    }

    /// Returns the categories with a non zero count and their percentage of the
    /// total from the worst to the best.
    pub fn percentages(&self) -> impl Iterator<Item = (HandRank, f64)> + '_ {
        let total = self.total() as f64;
        HandRank::ranks()
            .filter(|r| self.count(*r) > 0)
            .map(move |r| (r, self.count(r) as f64 * 100.0 / total))
    }
}

impl ops::AddAssign<&HandHistogram> for HandHistogram {
    fn add_assign(&mut self, rhs: &HandHistogram) {
        self.merge(rhs);
    }
}

impl fmt::Display for HandHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, pct) in self.percentages() {
            writeln!(f, "{pct:.2}% chance of {}", rank.description())?;
        }

        Ok(())
    }
}

impl Serialize for HandHistogram {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry {
            rank: HandRank,
            count: u64,
            percent: f64,
        }

        let entries = self
            .percentages()
            .map(|(rank, percent)| Entry {
                rank,
                count: self.count(rank),
                percent,
            })
            .collect::<Vec<_>>();

        let mut s = serializer.serialize_struct("HandHistogram", 2)?;
        s.serialize_field("total", &self.total())?;
        s.serialize_field("hands", &entries)?;
        s.end()
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 52] {
    let mut t = [[0u32; 8]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn num_combinations(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    if k == 0 {
        1
    } else if n < k {
        0
    } else {
        NCKS[n - 1][k] as usize
    }
}

/// Steps through all the k-subsets of the indices `0..n`.
///
/// A subset is a bitmask with k bits set, the enumeration starts from the k
/// lowest indices and moves to the next mask with the same number of bits
/// (HAKMEM item 175) until the mask doesn't fit in n bits:
///
/// ```
/// # use outs_eval::Combinations;
/// let mut comb = Combinations::new(3, 2);
/// let mut subsets = vec![comb.current()];
/// while comb.advance() {
///     subsets.push(comb.current());
/// }
/// assert_eq!(subsets, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    mask: u64,
}

impl Combinations {
    /// The largest supported range and subset size.
    pub const MAX: usize = 63;

    /// Creates a new enumeration of the k-subsets of `0..n`.
    ///
    /// Panics if k > n or n > 63.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(n <= Self::MAX, "n={n} must be <= {}", Self::MAX);
        assert!(k <= n, "k={k} must be <= n={n}");

        Self {
            n,
            k,
            mask: (1u64 << k) - 1,
        }
    }

    /// Returns the indices of the current subset in ascending order.
    pub fn current(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.k);
        self.current_into(&mut out);
        out
    }

    /// Writes the indices of the current subset into `out`.
    pub fn current_into(&self, out: &mut Vec<usize>) {
        out.clear();

        let mut bits = self.mask;
        while bits != 0 {
            out.push(bits.trailing_zeros() as usize);
            bits &= bits - 1;
        }

        assert!(
            out.len() == self.k && out.last().is_none_or(|&i| i < self.n),
            "invalid subset {:#x} for n={} k={}",
            self.mask,
            self.n,
            self.k
        );
    }

    /// Moves to the next subset, returns false if there are no more subsets.
    pub fn advance(&mut self) -> bool {
        let x = self.mask;
        if x == 0 {
            return false;
        }

        let u = x & x.wrapping_neg();
        let v = x.wrapping_add(u);
        if v == 0 {
            self.mask = 0;
            return false;
        }

        let next = v + (((v ^ x) / u) >> 2);
        if next >> self.n != 0 {
            self.mask = 0;
            return false;
        }

        self.mask = next;
        true
    }

    /// Calls the `f` closure for each subset starting from the current one.
    pub fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(&[usize]),
    {
        let mut subset = Vec::with_capacity(self.k);
        loop {
            self.current_into(&mut subset);
            f(&subset);

            if !self.advance() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(num_combinations(2, 3), 0);
        assert_eq!(num_combinations(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(num_combinations(52, k), v));

        [1, 50, 1225, 19600, 230300, 2118760, 15890700, 99884400]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(num_combinations(50, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(num_combinations(5, k), v));
    }

    #[test]
    fn first_and_last_subsets() {
        let mut comb = Combinations::new(7, 5);
        assert_eq!(comb.current(), vec![0, 1, 2, 3, 4]);

        let mut last = comb.current();
        let mut count = 1;
        while comb.advance() {
            last = comb.current();
            count += 1;
        }

        assert_eq!(count, 21);
        assert_eq!(last, vec![2, 3, 4, 5, 6]);

        // Stays exhausted.
        assert!(!comb.advance());
    }

    #[test]
    fn subsets_are_increasing_masks() {
        let mut comb = Combinations::new(10, 4);
        let mut prev = comb.mask;
        while comb.advance() {
            assert!(comb.mask > prev);
            assert_eq!(comb.mask.count_ones(), 4);
            prev = comb.mask;
        }
    }

    #[test]
    fn all_subsets_once() {
        for n in 0..=20 {
            for k in 0..=n {
                let mut seen = HashSet::default();
                let mut count = 0;

                Combinations::new(n, k).for_each(|s| {
                    assert_eq!(s.len(), k);
                    assert!(s.windows(2).all(|w| w[0] < w[1]));
                    assert!(s.iter().all(|&i| i < n));
                    seen.insert(s.to_vec());
                    count += 1;
                });

                let expected = (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1));
                assert_eq!(count, expected, "n={n} k={k}");
                assert_eq!(seen.len(), expected, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn empty_subset() {
        let mut comb = Combinations::new(5, 0);
        assert!(comb.current().is_empty());
        assert!(!comb.advance());

        let mut count = 0;
        Combinations::new(0, 0).for_each(|s| {
            assert!(s.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn full_range() {
        let mut comb = Combinations::new(63, 63);
        assert_eq!(comb.current().len(), 63);
        assert!(!comb.advance());

        let mut count = 0;
        Combinations::new(63, 1).for_each(|_| count += 1);
        assert_eq!(count, 63);
    }

    #[test]
    #[should_panic]
    fn subset_too_large() {
        Combinations::new(64, 64);
    }
}

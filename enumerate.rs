/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeSet;

use crate::{factorial, Permutation};

/// Iterator over every permutation of one length, in lexicographic order.
///
/// Returned by [`Permutation::all`].
#[derive(Debug, Clone)]
pub struct AllPermutations {
    n: usize,
    next: u128,
    // `None` once `n!` no longer fits in a u128
    total: Option<u128>,
}

impl Iterator for AllPermutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        if self.total.map_or(false, |total| self.next >= total) {
            return None;
        }
        let perm = Permutation::from_index(self.next, self.n).ok()?;
        self.next = self.next.checked_add(1)?;
        Some(perm)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.total {
            Some(total) => {
                let left = total - self.next;
                if left > ::std::usize::MAX as u128 {
                    (::std::usize::MAX, None)
                } else {
                    (left as usize, Some(left as usize))
                }
            },
            None => (::std::usize::MAX, None),
        }
    }
}

impl Permutation {
    /// All `n!` permutations of length `n`, ordered by [`Permutation::to_index`].
    ///
    /// For `n == 0` this yields the empty permutation once.
    pub fn all(n: usize) -> AllPermutations
    { AllPermutations { n, next: 0, total: factorial(n) } }

    /// Construct a random permutation of the given length.
    pub fn random(n: usize) -> Permutation
    {
        use rand::Rng;

        let mut vals: Vec<_> = (0..n).collect();
        rand::thread_rng().shuffle(&mut vals);
        Permutation::from_vec_unchecked(vals)
    }

    /// Every permutation one entry longer that contains `self`.
    pub fn covered_by(&self) -> BTreeSet<Permutation>
    {
        let n = self.len();
        (0..=n)
            .flat_map(|i| (0..=n).map(move |value| (i, value)))
            .map(|(i, value)| self.inserted(i, value))
            .collect()
    }

    /// The permutations of each length from `self.len()` up to `height - 1`
    /// that contain `self`, built one [`Permutation::covered_by`] layer at a time.
    ///
    /// Entry `k` of the result holds permutations of length `k`; entries below
    /// `self.len()` are empty.  The result always reaches at least `self`.
    pub fn build_upset(&self, height: usize) -> Vec<BTreeSet<Permutation>>
    {
        let n = self.len();
        let mut levels = vec![BTreeSet::new(); n];
        levels.push(std::iter::once(self.clone()).collect());
        for _ in n + 1..height {
            let next = levels.last()
                .map(|level| level.iter().flat_map(|perm| perm.covered_by()).collect())
                .unwrap_or_default();
            levels.push(next);
        }
        levels
    }

    /// The `n + 1` ways to append one entry to the right of `self`.
    ///
    /// The `i`th extension ends with the value `i`.
    pub fn right_extensions(&self) -> Vec<Permutation>
    {
        let n = self.len();
        (0..=n).map(|i| self.inserted(n, i)).collect()
    }

    /// Every one-point extension of `self`, found by inserting a value
    /// halfway between two existing ones at every position.
    ///
    /// This is the same set as [`Permutation::covered_by`].
    pub fn all_extensions(&self) -> BTreeSet<Permutation>
    {
        let n = self.len();
        // doubled values leave odd gaps for the new entry
        let doubled: Vec<isize> = self.iter().map(|v| 2 * v as isize).collect();
        let mut extensions = BTreeSet::new();
        for gap in 0..=n as isize {
            for position in 0..=n {
                let mut seq = doubled.clone();
                seq.insert(position, 2 * gap - 1);
                extensions.insert(Permutation::from_distinct(&seq));
            }
        }
        extensions
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::test_util::{arb_permutation, perm};
    use proptest::prelude::*;

    #[test]
    fn all() {
        let three: Vec<_> = Permutation::all(3).collect();
        assert_eq!(three, vec![
            perm(&[0, 1, 2]),
            perm(&[0, 2, 1]),
            perm(&[1, 0, 2]),
            perm(&[1, 2, 0]),
            perm(&[2, 0, 1]),
            perm(&[2, 1, 0]),
        ]);
        assert_eq!(Permutation::all(0).collect::<Vec<_>>(), vec![Permutation::identity(0)]);
        assert_eq!(Permutation::all(6).count(), 720);
        assert_eq!(Permutation::all(5).size_hint(), (120, Some(120)));

        let mut huge = Permutation::all(40);
        assert_eq!(huge.next(), Some(Permutation::identity(40)));
        assert_eq!(huge.next().map(|p| p.to_index()), Some(Some(1)));
    }

    #[test]
    fn random() {
        for &n in &[0, 1, 7, 30] {
            let p = Permutation::random(n);
            assert_eq!(p.len(), n);
            assert!(Permutation::from_values(p.into_vec()).is_ok());
        }
    }

    #[test]
    fn covered_by() {
        let covers = perm(&[1, 0]).covered_by();
        let expected: BTreeSet<_> = vec![
            perm(&[2, 1, 0]),
            perm(&[1, 2, 0]),
            perm(&[0, 2, 1]),
            perm(&[2, 0, 1]),
            perm(&[1, 0, 2]),
        ].into_iter().collect();
        assert_eq!(covers, expected);

        assert_eq!(Permutation::identity(0).covered_by().len(), 1);
        assert_eq!(Permutation::identity(2).all_extensions(), Permutation::identity(2).covered_by());
    }

    #[test]
    fn build_upset() {
        let p = perm(&[0, 1]);
        let levels = p.build_upset(5);
        assert_eq!(levels.len(), 5);
        assert!(levels[0].is_empty() && levels[1].is_empty());
        assert_eq!(levels[2].len(), 1);
        // everything of length 3 and 4 except the decreasing permutation contains 12
        assert_eq!(levels[3].len(), 5);
        assert_eq!(levels[4].len(), 23);
        assert!(levels[4].iter().all(|q| q.contains(&p)));

        assert_eq!(p.build_upset(1).len(), 3);
    }

    #[test]
    fn right_extensions() {
        assert_eq!(
            perm(&[1, 0]).right_extensions(),
            vec![perm(&[2, 1, 0]), perm(&[2, 0, 1]), perm(&[1, 0, 2])],
        );
        assert_eq!(Permutation::identity(0).right_extensions(), vec![Permutation::identity(1)]);
    }

    proptest! {
        #[test]
        fn extensions_agree(p in arb_permutation(0..7)) {
            let covers = p.covered_by();
            prop_assert_eq!(&covers, &p.all_extensions());
            for q in &covers {
                prop_assert_eq!(q.len(), p.len() + 1);
                prop_assert!(q.contains(&p));
            }
            for q in p.right_extensions() {
                prop_assert!(covers.contains(&q));
                prop_assert_eq!(q.delete(p.len()), Ok(p.clone()));
            }
        }
    }
}

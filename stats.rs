/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::Permutation;

// Classical permutation statistics.  None of these need more than the
// one-line notation and `apply`.
impl Permutation {
    /// Number of positions `i` with `p[i] > p[i + 1]`.
    pub fn descents(&self) -> usize
    { self.as_slice().windows(2).filter(|w| w[0] > w[1]).count() }

    pub fn ascents(&self) -> usize
    { self.len().saturating_sub(1) - self.descents() }

    /// Sum of `i + 1` over every descent at position `i`.
    pub fn major_index(&self) -> usize
    {
        self.as_slice().windows(2).enumerate()
            .filter(|(_, w)| w[0] > w[1])
            .map(|(i, _)| i + 1)
            .sum()
    }

    pub fn inversions(&self) -> usize
    {
        self.as_slice().iter().tuple_combinations()
            .filter(|&(a, b)| a > b)
            .count()
    }

    pub fn noninversions(&self) -> usize
    {
        let n = self.len();
        n * n.saturating_sub(1) / 2 - self.inversions()
    }

    /// Adjacent entries whose values differ by exactly one.
    pub fn bonds(&self) -> usize
    {
        self.as_slice().windows(2)
            .filter(|w| w[0] + 1 == w[1] || w[1] + 1 == w[0])
            .count()
    }

    pub fn fixed_points(&self) -> usize
    { self.iter().enumerate().filter(|&(i, v)| i == v).count() }

    pub fn fixed_points_plus_bonds(&self) -> usize
    { self.fixed_points() + self.bonds() }

    /// Positions holding a value smaller than everything before them.
    pub fn left_to_right_minima(&self) -> Vec<usize>
    {
        let mut minima = vec![];
        let mut lowest = ::std::usize::MAX;
        for (i, v) in self.iter().enumerate() {
            if v < lowest {
                lowest = v;
                minima.push(i);
            }
        }
        minima
    }

    pub fn num_left_to_right_minima(&self) -> usize
    { self.left_to_right_minima().len() }

    /// Length of the longest run of consecutive ascents, counted in entries.
    pub fn longest_increasing_run(&self) -> usize
    {
        if self.is_empty() {
            return 0;
        }
        let mut longest = 1;
        let mut current = 1;
        for w in self.as_slice().windows(2) {
            current = if w[0] < w[1] { current + 1 } else { 1 };
            longest = longest.max(current);
        }
        longest
    }

    pub fn longest_decreasing_run(&self) -> usize
    { self.complement().longest_increasing_run() }

    pub fn longest_run(&self) -> usize
    { self.longest_increasing_run().max(self.longest_decreasing_run()) }

    /// The disjoint cycles of the permutation viewed as a function.
    ///
    /// Each cycle begins at its largest element, and the cycles are listed in
    /// increasing order of that element.  Fixed points are included.
    pub fn cycles(&self) -> Vec<Vec<usize>>
    {
        let n = self.len();
        let mut seen = vec![false; n];
        let mut cycles = vec![];
        for start in (0..n).rev() {
            if seen[start] {
                continue;
            }
            let mut cycle = vec![start];
            seen[start] = true;
            let mut next = self.apply(start);
            while next != start {
                seen[next] = true;
                cycle.push(next);
                next = self.apply(next);
            }
            cycles.push(cycle);
        }
        cycles.reverse();
        cycles
    }

    pub fn num_cycles(&self) -> usize
    { self.cycles().len() }

    /// Cycles of the breakpoint graph used when sorting by transpositions.
    ///
    /// The permutation is framed by a leading 0 (all values shifted up by one),
    /// and the black edges, which send each value to its left neighbour in the
    /// frame, are composed with the gray edges `k -> k + 1 (mod n + 1)`.
    pub fn christie_cycles(&self) -> usize
    { self.breakpoint_cycles(1) }

    /// Like [`Permutation::christie_cycles`], with gray edges `k -> k - 1 (mod n + 1)`.
    pub fn other_cycles(&self) -> usize
    { self.breakpoint_cycles(self.len()) }

    pub fn sum_cycles(&self) -> usize
    { self.other_cycles() + self.christie_cycles() }

    pub fn max_cycles(&self) -> usize
    { (self.other_cycles() - 1).max(self.christie_cycles()) }

    fn breakpoint_cycles(&self, shift: usize) -> usize
    {
        let m = self.len() + 1;
        let framed: Vec<usize> = ::std::iter::once(0).chain(self.iter().map(|v| v + 1)).collect();
        let mut position = vec![0; m];
        for (i, &v) in framed.iter().enumerate() {
            position[v] = i;
        }
        let product = (0..m)
            .map(|i| (framed[(position[i] + m - 1) % m] + shift) % m)
            .collect();
        Permutation::from_vec_unchecked(product).num_cycles()
    }

    /// The smallest `k >= 1` with `self.pow(k)` the identity.
    ///
    /// Saturates at `u128::MAX` in the (astronomically long) cases where it overflows.
    pub fn order(&self) -> u128
    {
        self.cycles().iter()
            .map(|cycle| cycle.len() as u128)
            .fold(1, |acc, len| {
                let lcm = acc / gcd(acc, len);
                lcm.checked_mul(len).unwrap_or(::std::u128::MAX)
            })
    }

    /// How often each pattern of length `k` occurs in this permutation.
    ///
    /// Every pattern of length `k` has an entry, even if it never occurs.
    pub fn pattern_counts(&self, k: usize) -> BTreeMap<Permutation, usize>
    {
        let mut counts: BTreeMap<_, _> = Permutation::all(k).map(|p| (p, 0)).collect();
        for indices in (0..self.len()).combinations(k) {
            let values: Vec<usize> = indices.into_iter().map(|i| self[i]).collect();
            *counts.entry(Permutation::from_distinct(&values)).or_insert(0) += 1;
        }
        counts
    }

    /// Windows of four adjacent entries ordered like `3214`.
    pub fn consecutive_3214_count(&self) -> usize
    {
        self.as_slice().windows(4)
            .filter(|w| w[2] < w[1] && w[1] < w[0] && w[0] < w[3])
            .count()
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use log::{debug, trace};

use crate::{Permutation, PermutationError};

/// A simple permutation together with one component per entry.
///
/// Inflating `base` by `components` reproduces the decomposed permutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition {
    pub base: Permutation,
    pub components: Vec<Permutation>,
}

impl Decomposition {
    /// Rebuild the permutation this was decomposed from.
    pub fn inflate(&self) -> Permutation
    { inflate_unchecked(&self.base, &self.components) }

    pub fn into_parts(self) -> (Permutation, Vec<Permutation>)
    { (self.base, self.components) }
}

/// Factor a permutation into a simple base and its components.
///
/// Starting from the permutation itself with every component a single point,
/// this repeatedly collapses the longest non-trivial interval of the base into
/// one entry, and records what was collapsed as that entry's component.  Each
/// round shortens the base by at least one, and the loop stops once the base
/// is simple.  In particular, permutations of length 2 or less (including the
/// empty one) come back unchanged with single-point components.
pub fn decompose(perm: &Permutation) -> Decomposition
{
    let mut base = perm.clone();
    let mut components = vec![Permutation::identity(1); perm.len()];

    while let Some(interval) = base.maximal_interval() {
        debug_assert_eq!(base.len(), components.len());
        trace!("collapsing {:?} of {:?}", interval, base);

        let window = interval.range();
        let pattern = Permutation::from_distinct(&base.as_slice()[window.clone()]);
        // the window's entries may themselves be collapsed blocks
        let inner: Vec<Permutation> = components.drain(window).collect();
        components.insert(interval.start, inflate_unchecked(&pattern, &inner));

        // any member of the window can stand in for it, since its values are contiguous
        let vals = base.as_slice();
        let mut kept = Vec::with_capacity(vals.len() - interval.len + 1);
        kept.extend_from_slice(&vals[..interval.start]);
        kept.push(vals[interval.start]);
        kept.extend_from_slice(&vals[interval.end()..]);

        base = Permutation::from_distinct(&kept);
    }

    debug!(
        "decomposed permutation of length {} over a simple base of length {}",
        perm.len(), base.len(),
    );
    Decomposition { base, components }
}

/// Substitute each entry of `base` with a component.
///
/// The component at position `i` is shifted up by the total length of the
/// components at positions holding smaller values of `base`, and the shifted
/// components are concatenated in position order.
///
/// Fails with [`PermutationError::LengthMismatch`] unless there is exactly
/// one component per entry of `base`.
pub fn inflate(base: &Permutation, components: &[Permutation]) -> Result<Permutation, PermutationError>
{
    if base.len() != components.len() {
        return Err(PermutationError::LengthMismatch {
            expected: base.len(),
            found: components.len(),
        });
    }
    Ok(inflate_unchecked(base, components))
}

fn inflate_unchecked(base: &Permutation, components: &[Permutation]) -> Permutation
{
    let mut offsets = vec![0; base.len()];
    let mut placed = 0;
    for position in base.inverse() {
        offsets[position] = placed;
        placed += components[position].len();
    }

    let vals = components.iter().zip(offsets)
        .flat_map(|(component, offset)| component.iter().map(move |v| v + offset))
        .collect();
    Permutation::from_vec_unchecked(vals)
}

impl Permutation {
    /// See [`decompose`].
    pub fn decompose(&self) -> Decomposition
    { decompose(self) }

    /// Use `self` as the base of an inflation.  See [`inflate`].
    pub fn inflate(&self, components: &[Permutation]) -> Result<Permutation, PermutationError>
    { inflate(self, components) }
}

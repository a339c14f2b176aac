// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordering roots by distance to the unit circle, and pairing zeros to poles.

use super::Complex32;

/// Direction in which [`sort_poles`] orders roots by their distance to the unit circle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CascadeOrder {
    /// Poles closest to the unit circle first.
    ClosestFirst,
    /// Poles farthest from the unit circle first.
    FarthestFirst,
}

/// Sorts `poles[1..=n]` in place by their distance `||p| − 1|` to the unit circle.
pub fn sort_poles(poles: &mut [Complex32], order: CascadeOrder, n: usize) {
    let dist = |z: &Complex32| (z.abs() - 1.0).abs();

    poles[1..=n].sort_by(|a, b| {
        let (da, db) = (dist(a), dist(b));
        match order {
            CascadeOrder::ClosestFirst => da.partial_cmp(&db).unwrap(),
            CascadeOrder::FarthestFirst => db.partial_cmp(&da).unwrap(),
        }
    });
}

/// Reorders `zeros[i..=n]` so that each pole `poles[i]` (`i` in `1..n`) is paired, in turn, with
/// whichever remaining zero is nearest to it. Greedy nearest-neighbor assignment.
pub fn pair_zeros_to_poles(zeros: &mut [Complex32], poles: &[Complex32], n: usize) {
    for i in 1..n {
        let (best, _) = zeros[i..=n]
            .iter()
            .enumerate()
            .map(|(k, z)| (k + i, (*z - poles[i]).abs()))
            .fold(
                (i, f32::INFINITY),
                |best, cur| if cur.1 < best.1 { cur } else { best },
            );

        zeros.swap(i, best);
    }
}

//! Reduction of the candidate set to the final hot spots.
//!
//! Two strategies are available:
//!
//! - [`SelectionStrategy::NonOverlapping`] (default): greedy selection of
//!   candidates whose member sets are pairwise disjoint, densest and tightest
//!   first.
//! - [`SelectionStrategy::Deduplicate`]: keeps partially overlapping circles and
//!   only collapses candidates holding exactly the same points.

use mths_types::hotspot::HotSpot;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// No two selected hot spots share a member point.
    #[default]
    NonOverlapping,
    /// One hot spot per distinct member set, the one with the smallest enclosing radius.
    Deduplicate,
}

impl SelectionStrategy {
    pub fn from_keep_overlapping(keep_overlapping: bool) -> Self {
        if keep_overlapping {
            SelectionStrategy::Deduplicate
        } else {
            SelectionStrategy::NonOverlapping
        }
    }

    pub fn select(self, candidates: Vec<HotSpot>) -> Vec<HotSpot> {
        match self {
            SelectionStrategy::NonOverlapping => select_non_overlapping(candidates),
            SelectionStrategy::Deduplicate => deduplicate(candidates),
        }
    }
}

/// Selection priority: more points first, then smaller enclosing radius.
pub fn by_density(a: &HotSpot, b: &HotSpot) -> Ordering {
    b.contained_count
        .cmp(&a.contained_count)
        .then_with(|| a.min_radius.total_cmp(&b.min_radius))
}

/// Keep one candidate per distinct member set.
///
/// The survivor of each group is the one with the smallest `min_radius`; on a
/// tie the earliest generated candidate wins. Output is ordered by member set.
///
/// # Examples
///
/// ```rust
/// use mths::selection::deduplicate;
/// use mths::HotSpot;
/// use geo::{Point, polygon};
///
/// let disc = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)];
/// let spot = |indices: Vec<usize>, r: f64| {
///     HotSpot::new(disc.clone(), Point::new(0.0, 0.0), indices, r, 0.5)
/// };
///
/// let kept = deduplicate(vec![
///     spot(vec![0, 1, 2], 4.0),
///     spot(vec![0, 1, 2], 3.0),
///     spot(vec![1, 2, 3], 5.0),
/// ]);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].min_radius, 3.0);
/// ```
pub fn deduplicate(mut candidates: Vec<HotSpot>) -> Vec<HotSpot> {
    let before = candidates.len();

    // stable: equal keys keep generation order
    candidates.sort_by(|a, b| {
        a.contained_indices
            .cmp(&b.contained_indices)
            .then_with(|| a.min_radius.total_cmp(&b.min_radius))
    });
    candidates.dedup_by(|later, kept| later.contained_indices == kept.contained_indices);

    log::debug!(
        "Deduplicated {} candidates into {} distinct member sets",
        before,
        candidates.len()
    );
    candidates
}

/// Greedily pick candidates with pairwise disjoint member sets.
///
/// Candidates are visited once in [`by_density`] order; each is accepted only
/// if none of its points is already claimed by an accepted candidate. Rejected
/// candidates are never reconsidered.
pub fn select_non_overlapping(mut candidates: Vec<HotSpot>) -> Vec<HotSpot> {
    let before = candidates.len();
    candidates.sort_by(by_density);

    let mut claimed: FxHashSet<usize> = FxHashSet::default();
    let selected: Vec<HotSpot> = candidates
        .into_iter()
        .filter(|candidate| {
            if candidate
                .contained_indices
                .iter()
                .any(|idx| claimed.contains(idx))
            {
                return false;
            }
            claimed.extend(candidate.contained_indices.iter().copied());
            true
        })
        .collect();

    log::debug!(
        "Selected {} non-overlapping hot spots from {} candidates",
        selected.len(),
        before
    );
    selected
}

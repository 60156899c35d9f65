//! Path ranking for search results.
//!
//! Orders explored paths by the metric a request asked for and keeps the
//! best few.

use std::cmp::Ordering;

use super::explore::{Exploration, PathId, PathState};
use crate::domain::{City, Preference};

/// A completed path, ready for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<'g> {
    /// Handle of the final state in the exploration arena.
    pub id: PathId,

    /// Cities visited, origin first.
    pub cities: Vec<&'g City>,

    /// Total cost.
    pub cost: f64,

    /// Total flight time.
    pub duration: u64,
}

/// Compare two paths by the selected metric.
///
/// Cost is compared as a real number, duration as an integer. The other
/// metric is ignored.
pub fn compare(preference: Preference, a: &PathState<'_>, b: &PathState<'_>) -> Ordering {
    match preference {
        Preference::Cost => a.cost.total_cmp(&b.cost),
        Preference::Duration => a.duration.cmp(&b.duration),
    }
}

/// Rank the paths of an exploration and keep at most `limit`.
///
/// The sort is stable, so paths with equal metrics stay in discovery order.
/// Returns paths sorted best-first.
pub fn rank_paths<'g>(
    exploration: &Exploration<'g>,
    preference: Preference,
    limit: usize,
) -> Vec<RankedPath<'g>> {
    let mut ids: Vec<PathId> = exploration.found().to_vec();
    ids.sort_by(|&a, &b| compare(preference, exploration.get(a), exploration.get(b)));
    ids.truncate(limit);

    ids.into_iter()
        .map(|id| {
            let state = exploration.get(id);
            RankedPath {
                id,
                cities: exploration.cities(id),
                cost: state.cost,
                duration: state.duration,
            }
        })
        .collect()
}

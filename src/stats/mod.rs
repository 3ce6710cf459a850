//! Batch statistics over collections of graph instances.
//!
//! Runs an engine fresh over every instance for a fixed source/target
//! pair and reduces the finite path lengths to a single statistic.
//! Instance runs are mutually independent, so they fan out across the
//! rayon thread pool; the reduction only happens once every instance has
//! been collected and is deterministic for a given collected set.

use log::{debug, warn};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::{DistanceQuery, ShortestPathAlgorithm};
use crate::Result;

/// Reduction applied to the collected finite path lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statistic {
    Average,
    Minimum,
    Maximum,
    Median,
}

/// Reduced statistic over the instances with a finite source-to-target
/// path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    /// The reduced value.
    pub value: f64,
    /// Instances that contributed a finite distance.
    pub contributing: usize,
    /// Instances examined.
    pub total: usize,
}

/// Runs `engine` over every graph instance for the fixed
/// `(source, target)` pair and reduces the finite distances to the
/// requested statistic.
///
/// Instances where `target` is unreachable, or where a negative cycle
/// makes the distances unusable, are excluded from the reduction rather
/// than aborting the batch; a batch where every instance is excluded
/// yields `Ok(None)`. Engine-level failures (negative weight, an out of
/// range source or target) abort the whole batch.
pub fn aggregate<A>(
    engine: &A,
    graphs: &[A::Graph],
    source: usize,
    target: usize,
    statistic: Statistic,
) -> Result<Option<BatchSummary>>
where
    A: ShortestPathAlgorithm + Sync,
    A::Graph: Sync,
    A::Tree: DistanceQuery,
{
    let collected = graphs
        .par_iter()
        .map(|graph| {
            let tree = engine.compute_shortest_paths(graph, source)?;
            tree.finite_distance_to(target)
        })
        .collect::<Result<Vec<_>>>()?;

    let total = collected.len();
    let mut lengths: Vec<f64> = collected.into_iter().flatten().collect();
    if lengths.is_empty() {
        warn!("no path from vertex {source} to {target} across the dataset");
        return Ok(None);
    }
    if lengths.len() < total {
        debug!(
            "{} of {total} instances had no finite {source}->{target} path",
            total - lengths.len()
        );
    }

    let value = match statistic {
        Statistic::Average => lengths.iter().sum::<f64>() / lengths.len() as f64,
        Statistic::Minimum => lengths.iter().copied().fold(f64::INFINITY, f64::min),
        Statistic::Maximum => lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Statistic::Median => median(&mut lengths),
    };

    Ok(Some(BatchSummary {
        value,
        contributing: lengths.len(),
        total,
    }))
}

/// Median by order-statistic selection; an even count averages the two
/// middle elements. `lengths` must be non-empty.
fn median(lengths: &mut [f64]) -> f64 {
    let len = lengths.len();
    let mid = len / 2;
    let (below, upper_middle, _) = lengths.select_nth_unstable_by(mid, f64::total_cmp);
    let upper_middle = *upper_middle;
    if len % 2 == 1 {
        upper_middle
    } else {
        let lower_middle = below.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lower_middle + upper_middle) / 2.0
    }
}

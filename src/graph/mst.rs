use serde::Serialize;
use thiserror::Error;

use crate::math::kbn_sum;

/// A tree connecting every point in a set, as produced by [`compute_mst`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    /// Sum of the Euclidean lengths of all edges.
    pub total_length: f64,
    /// `[parent, child]` index pairs into the input slice, ordered by child
    /// index. Point 0 is the root and never appears as a child.
    pub edges: Vec<[usize; 2]>,
}

/// The tree needs at least one point to act as the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot build a spanning tree over an empty point set")]
pub struct EmptyPointSet;

/// Compute the [MST](https://en.wikipedia.org/wiki/Euclidean_minimum_spanning_tree)
/// of the complete graph over 2D points with Prim's algorithm in O(N²) time.
///
/// Edge weights are Euclidean distances, but all comparisons happen on exact
/// squared integer distances so equal-length candidates cannot be reordered
/// by floating point noise. The linear scans instead of a priority queue are
/// deliberate: at tens to low hundreds of points a heap buys nothing.
pub fn compute_mst(points: &[[i64; 2]]) -> Result<SpanningTree, EmptyPointSet> {
    if points.is_empty() {
        return Err(EmptyPointSet);
    }
    let n = points.len();

    let mut visited = vec![false; n];
    let mut key = vec![i64::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    key[0] = 0;

    for _ in 0..n {
        // Unvisited point closest to the tree. Only a strictly smaller key
        // replaces the candidate, so the lowest index wins ties. The scan
        // always lands on an unvisited point: the first round selects the
        // root (key 0) and every later round sees keys already relaxed
        // against the tree.
        let mut u = 0;
        let mut min_key = i64::MAX;
        for (j, &k) in key.iter().enumerate() {
            if !visited[j] && k < min_key {
                min_key = k;
                u = j;
            }
        }

        visited[u] = true;

        for (j, &point) in points.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let w = crate::abs_distance_squared(points[u], point);
            if w < key[j] {
                key[j] = w;
                parent[j] = Some(u);
            }
        }
    }

    // After the last round key[v] holds the squared length of the edge
    // joining v to parent[v].
    let total_length = kbn_sum(key.iter().skip(1).map(|&k| (k as f64).sqrt()));

    let edges = parent
        .into_iter()
        .enumerate()
        .skip(1)
        .map(|(child, parent)| {
            let parent = parent.expect("non-root point relaxed in the first round");
            [parent, child]
        })
        .collect();

    Ok(SpanningTree {
        total_length,
        edges,
    })
}

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::{KdIndexError, Result};
use crate::kdtree::node::Node;
use crate::kdtree::KdTree;
use crate::point::KdPoint;
use crate::r#type::DeltaNum;

/// A builder to create a [`KdTree`].
///
/// Points are collected with [`add`][KdTreeBuilder::add] and the balanced
/// tree is produced by [`finish`][KdTreeBuilder::finish].
pub struct KdTreeBuilder<P, N: DeltaNum, C: Fn(&P, &P, usize) -> N> {
    points: Vec<P>,
    comparator: C,
    phantom: PhantomData<N>,
}

impl<P: KdPoint, N: DeltaNum, C: Fn(&P, &P, usize) -> N> KdTreeBuilder<P, N, C> {
    /// Create a new builder using `comparator` for every structural decision.
    pub fn new(comparator: C) -> Self {
        Self {
            points: Vec::new(),
            comparator,
            phantom: PhantomData,
        }
    }

    /// Create a new builder with room for `capacity` points.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            comparator,
            phantom: PhantomData,
        }
    }

    /// Add a point to the index.
    ///
    /// Returns the insertion index of this point.
    pub fn add(&mut self, point: P) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Consume this builder, performing the balanced construction and
    /// producing a [`KdTree`] ready for queries.
    ///
    /// Fails if the collected points do not all share one dimension count,
    /// or if any point has zero dimensions.
    pub fn finish(self) -> Result<KdTree<P, N, C>> {
        let dims = match self.points.first() {
            Some(first) => {
                let dims = first.dims();
                if dims == 0 {
                    return Err(KdIndexError::ZeroDimensions);
                }
                for point in &self.points[1..] {
                    if point.dims() != dims {
                        return Err(KdIndexError::DimensionMismatch {
                            expected: dims,
                            actual: point.dims(),
                        });
                    }
                }
                dims
            }
            None => 0,
        };

        let size = self.points.len();
        let root = build_subtree(self.points, 0, dims, &self.comparator);

        Ok(KdTree {
            root,
            size,
            comparator: self.comparator,
            phantom: PhantomData,
        })
    }
}

/// Recursively builds a median-balanced subtree from an owned point set.
///
/// At depth `d` the points are ordered along cutting dimension `d mod D`;
/// the lower median becomes this node's point and the halves on either side
/// of it become the child subtrees.
fn build_subtree<P, N, C>(
    mut points: Vec<P>,
    depth: usize,
    dims: usize,
    comparator: &C,
) -> Option<Box<Node<P>>>
where
    P: KdPoint,
    N: DeltaNum,
    C: Fn(&P, &P, usize) -> N,
{
    if points.is_empty() {
        return None;
    }

    let dim = depth % dims;
    // The sort is stable: points tied on this axis keep their input order,
    // so the midpoint pick is deterministic.
    points.sort_by(|a, b| sign_ordering(comparator(a, b, dim)));

    let mid = points.len() / 2;
    let right = points.split_off(mid + 1);
    let point = points.pop()?;
    let left = points;

    let mut node = Node::new(point);
    node.left = build_subtree(left, depth + 1, dims, comparator);
    node.right = build_subtree(right, depth + 1, dims, comparator);
    Some(Box::new(node))
}

/// Maps a comparator delta onto a sort ordering: negative sorts before
/// non-negative. Incomparable deltas (NaN) are treated as equal.
#[inline]
fn sign_ordering<N: DeltaNum>(delta: N) -> Ordering {
    if delta < N::zero() {
        Ordering::Less
    } else if delta > N::zero() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

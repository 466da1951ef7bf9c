use std::marker::PhantomData;

use crate::error::{KdIndexError, Result};
use crate::kdtree::node::Node;
use crate::kdtree::traversal::traverse;
use crate::kdtree::KdTreeBuilder;
use crate::point::KdPoint;
use crate::r#type::DeltaNum;

/// A k-dimensional point tree.
///
/// Stores points of one fixed dimensionality `D` and answers
/// nearest-neighbor queries against a caller-supplied comparator. The
/// comparator `cmp(a, b, dim)` returns a signed per-axis delta: its sign
/// orders `a` against `b` along `dim` (negative means `a < b`), and its
/// squared magnitude is that axis' contribution to the distance between the
/// two points. Only `|cmp(a, b, dim)| == |cmp(b, a, dim)|` is relied upon;
/// the sign need not be antisymmetric, and every branch decision evaluates
/// the comparator with the query (or the point being inserted) as the first
/// argument.
///
/// # Construction
///
/// Trees are bulk-built balanced, with the lower median picked at every
/// level:
///
/// ```
/// use kd_index::kdtree::KdTree;
///
/// let points = vec![[5.0, 4.0], [2.0, 6.0], [13.0, 3.0]];
/// let tree = KdTree::build(points, |a: &[f64; 2], b: &[f64; 2], dim: usize| {
///     a[dim] - b[dim]
/// })
/// .unwrap();
/// assert_eq!(tree.size(), 3);
/// ```
///
/// # Insertion
///
/// [`insert`][KdTree::insert] grafts a new leaf without restructuring.
/// Repeated inserts can unbalance the tree — search degrades toward linear
/// on adversarial insertion orders, and no rebalancing occurs.
///
/// Operations run to completion on the calling thread; callers needing
/// shared access from several threads must serialize it themselves.
#[derive(Debug, Clone)]
pub struct KdTree<P, N: DeltaNum, C: Fn(&P, &P, usize) -> N> {
    pub(crate) root: Option<Box<Node<P>>>,
    pub(crate) size: usize,
    pub(crate) comparator: C,
    pub(crate) phantom: PhantomData<N>,
}

impl<P: KdPoint, N: DeltaNum, C: Fn(&P, &P, usize) -> N> KdTree<P, N, C> {
    /// Creates an empty tree using `comparator` for every structural
    /// decision.
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            phantom: PhantomData,
        }
    }

    /// Builds a balanced tree from `points`.
    ///
    /// Fails if the points do not all share one dimension count, or if any
    /// point has zero dimensions. An empty input yields an empty tree.
    pub fn build(points: Vec<P>, comparator: C) -> Result<Self> {
        let mut builder = KdTreeBuilder::with_capacity(comparator, points.len());
        for point in points {
            builder.add(point);
        }
        builder.finish()
    }

    /// The number of points stored in the tree.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree stores no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node<P>> {
        self.root.as_deref()
    }

    /// The dimension count shared by every stored point, or `None` when the
    /// tree is empty.
    pub fn dims(&self) -> Option<usize> {
        self.root.as_deref().map(|node| node.point.dims())
    }

    /// The height of the tree (0 for an empty tree).
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, |node| node.height())
    }

    /// Inserts one point as a new leaf.
    ///
    /// Starting at the root, the walk goes left wherever the new point
    /// compares negative at the cutting dimension and right otherwise,
    /// until it reaches an absent child. No existing node is restructured.
    ///
    /// Fails if the point's dimension count differs from the tree's.
    pub fn insert(&mut self, point: P) -> Result<()> {
        let dims = point.dims();
        if dims == 0 {
            return Err(KdIndexError::ZeroDimensions);
        }
        if let Some(root) = self.root.as_deref() {
            let expected = root.point.dims();
            if dims != expected {
                return Err(KdIndexError::DimensionMismatch {
                    expected,
                    actual: dims,
                });
            }
        }

        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let dim = depth % dims;
            slot = if (self.comparator)(&point, &node.point, dim) < N::zero() {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::new(point)));
        self.size += 1;
        Ok(())
    }

    /// Searches for the stored point nearest to `query`.
    ///
    /// Returns the point minimizing the sum over all dimensions of
    /// `cmp(query, stored, dim)²`, or `None` only when the tree is empty.
    /// When several points are equidistant, the first one found wins.
    pub fn nearest(&self, query: &P) -> Option<&P> {
        debug_assert!(
            self.dims().map_or(true, |dims| dims == query.dims()),
            "query dimension count must match the tree"
        );
        self.nearest_in(self.root.as_deref(), query, 0)
    }

    fn nearest_in<'a>(
        &'a self,
        node: Option<&'a Node<P>>,
        query: &P,
        depth: usize,
    ) -> Option<&'a P> {
        let node = node?;
        let dim = depth % node.point.dims();
        let delta = (self.comparator)(query, &node.point, dim);

        // Descend the branch consistent with the query's sign first.
        let (near, far) = if delta < N::zero() {
            (node.left(), node.right())
        } else {
            (node.right(), node.left())
        };

        let candidate = self.nearest_in(near, query, depth + 1);
        let mut best = closer(&self.comparator, query, candidate, Some(&node.point));

        // The far subtree can only improve on `best` if the splitting plane
        // itself is closer than the best total distance.
        if let Some(best_point) = best {
            if delta * delta < sq_dist(&self.comparator, query, best_point) {
                let challenger = self.nearest_in(far, query, depth + 1);
                best = closer(&self.comparator, query, best, challenger);
            }
        }

        best
    }

    /// Visits every node depth-first in pre-order.
    ///
    /// The visitor is invoked with each node and its depth (the root is at
    /// depth 0). The traversal never mutates the tree and is safe to invoke
    /// repeatedly.
    pub fn for_each<F: FnMut(&Node<P>, usize)>(&self, mut visitor: F) {
        traverse(self.root.as_deref(), &mut visitor);
    }
}

/// Picks the closer of two candidate points. The challenger wins only on a
/// strictly smaller squared distance, so the earlier-found candidate is kept
/// on ties.
fn closer<'a, P, N, C>(
    comparator: &C,
    query: &P,
    current: Option<&'a P>,
    challenger: Option<&'a P>,
) -> Option<&'a P>
where
    P: KdPoint,
    N: DeltaNum,
    C: Fn(&P, &P, usize) -> N,
{
    match (current, challenger) {
        (None, challenger) => challenger,
        (current, None) => current,
        (Some(cur), Some(ch)) => {
            if sq_dist(comparator, query, ch) < sq_dist(comparator, query, cur) {
                Some(ch)
            } else {
                Some(cur)
            }
        }
    }
}

/// The squared distance between two points: the sum over all dimensions of
/// the squared comparator delta.
#[inline]
pub(crate) fn sq_dist<P, N, C>(comparator: &C, a: &P, b: &P) -> N
where
    P: KdPoint,
    N: DeltaNum,
    C: Fn(&P, &P, usize) -> N,
{
    let mut total = N::zero();
    for dim in 0..a.dims() {
        let delta = comparator(a, b, dim);
        total = total + delta * delta;
    }
    total
}

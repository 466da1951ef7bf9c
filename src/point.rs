//! The point capability: dimension count plus per-axis value access.

/// A k-dimensional point that can be stored in a tree.
///
/// Implementors expose a fixed dimension count `D >= 1` and a value for each
/// axis in `[0, D)`. All points participating in one tree must share the
/// same dimension count; mixed dimensionalities are rejected at build and
/// insert time.
///
/// The axis value type is opaque to the index itself — only the
/// caller-supplied comparator interprets it. Plain arrays work out of the
/// box:
///
/// ```
/// use kd_index::KdPoint;
///
/// let p = [3.0_f64, 1.0];
/// assert_eq!(p.dims(), 2);
/// assert_eq!(p.value(1), 1.0);
/// ```
pub trait KdPoint {
    /// The value stored along each axis.
    type Value;

    /// The number of dimensions of this point.
    fn dims(&self) -> usize;

    /// The value of this point along axis `dim`.
    ///
    /// `dim` is in `[0, dims())`; implementations may panic outside that
    /// range.
    fn value(&self, dim: usize) -> Self::Value;
}

impl<T: Copy, const D: usize> KdPoint for [T; D] {
    type Value = T;

    #[inline]
    fn dims(&self) -> usize {
        D
    }

    #[inline]
    fn value(&self, dim: usize) -> T {
        self[dim]
    }
}

/// Runtime-dimensioned points. Handy when the dimension count is only known
/// at runtime; the per-tree uniformity checks still apply.
impl<T: Copy> KdPoint for Vec<T> {
    type Value = T;

    #[inline]
    fn dims(&self) -> usize {
        self.len()
    }

    #[inline]
    fn value(&self, dim: usize) -> T {
        self[dim]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_points() {
        let p = [5, 4, 3];
        assert_eq!(p.dims(), 3);
        assert_eq!(p.value(0), 5);
        assert_eq!(p.value(2), 3);
    }

    #[test]
    fn vec_points() {
        let p = vec![1.5, 2.5];
        assert_eq!(p.dims(), 2);
        assert_eq!(p.value(1), 2.5);
    }
}

use std::fmt::Debug;

use num_traits::{Num, NumCast, Signed};

/// A trait for signed numeric types produced by a comparator.
///
/// The sign of a comparator output decides which branch a point belongs to,
/// so unsigned integers are excluded. This trait is sealed and cannot be
/// implemented for external types.
pub trait DeltaNum:
    private::Sealed + Num + NumCast + Signed + PartialOrd + Copy + Debug + Send + Sync
{
}

impl DeltaNum for i8 {}
impl DeltaNum for i16 {}
impl DeltaNum for i32 {}
impl DeltaNum for i64 {}
impl DeltaNum for f32 {}
impl DeltaNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

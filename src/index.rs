use std::ops::Deref;

use nalgebra::{Point2, Point3};

use crate::error::OutOfBounds;

/// 3d grid coordinate
///
/// Carries its extents as const parameters so that linear-offset conversions
/// need no runtime shape information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index3<const D1: usize, const D2: usize, const D3: usize>(pub Point3<usize>);

impl<const D1: usize, const D2: usize, const D3: usize> Deref for Index3<D1, D2, D3> {
    type Target = Point3<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const D1: usize, const D2: usize, const D3: usize> Index3<D1, D2, D3> {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self(Point3::new(i, j, k))
    }

    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x < D1 && self.y < D2 && self.z < D3
    }

    /// Row-major offset into the flattened storage (last coordinate fastest).
    #[inline]
    pub fn linear(&self) -> usize {
        assert!(self.x < D1);
        assert!(self.y < D2);
        assert!(self.z < D3);

        (self.x * D2 + self.y) * D3 + self.z
    }

    pub fn from_linear(linear: usize) -> Self {
        assert!(linear < D1 * D2 * D3);

        let (q, rem) = num_integer::div_rem(linear, D2 * D3);
        let i = q;
        let (q, rem) = num_integer::div_rem(rem, D3);
        let j = q;
        let k = rem;

        Self(Point3::new(i, j, k))
    }

    pub fn checked(self) -> Result<Self, OutOfBounds<3>> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(OutOfBounds {
                index: self.0.into(),
                extents: [D1, D2, D3],
            })
        }
    }
}

impl<const D1: usize, const D2: usize, const D3: usize> From<(usize, usize, usize)>
    for Index3<D1, D2, D3>
{
    fn from((i, j, k): (usize, usize, usize)) -> Self {
        Self(Point3::new(i, j, k))
    }
}

impl<const D1: usize, const D2: usize, const D3: usize> From<Point3<usize>>
    for Index3<D1, D2, D3>
{
    fn from(value: Point3<usize>) -> Self {
        Self(value)
    }
}

impl<const D1: usize, const D2: usize, const D3: usize> From<Index3<D1, D2, D3>>
    for Point3<usize>
{
    fn from(val: Index3<D1, D2, D3>) -> Self {
        val.0
    }
}

/// 2d grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index2<const D1: usize, const D2: usize>(pub Point2<usize>);

impl<const D1: usize, const D2: usize> Deref for Index2<D1, D2> {
    type Target = Point2<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const D1: usize, const D2: usize> Index2<D1, D2> {
    pub fn new(i: usize, j: usize) -> Self {
        Self(Point2::new(i, j))
    }

    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x < D1 && self.y < D2
    }

    /// Row-major offset into the flattened storage (last coordinate fastest).
    #[inline]
    pub fn linear(&self) -> usize {
        assert!(self.x < D1);
        assert!(self.y < D2);

        self.x * D2 + self.y
    }

    pub fn from_linear(linear: usize) -> Self {
        assert!(linear < D1 * D2);

        let (i, j) = num_integer::div_rem(linear, D2);

        Self(Point2::new(i, j))
    }

    pub fn checked(self) -> Result<Self, OutOfBounds<2>> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(OutOfBounds {
                index: self.0.into(),
                extents: [D1, D2],
            })
        }
    }
}

impl<const D1: usize, const D2: usize> From<(usize, usize)> for Index2<D1, D2> {
    fn from((i, j): (usize, usize)) -> Self {
        Self(Point2::new(i, j))
    }
}

impl<const D1: usize, const D2: usize> From<Point2<usize>> for Index2<D1, D2> {
    fn from(value: Point2<usize>) -> Self {
        Self(value)
    }
}

impl<const D1: usize, const D2: usize> From<Index2<D1, D2>> for Point2<usize> {
    fn from(val: Index2<D1, D2>) -> Self {
        val.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linear_index3() {
        // 2x3x4, offset = (i * 3 + j) * 4 + k
        // (0,0,0) -> 0
        // (0,0,3) -> 3
        // (0,1,0) -> 4
        // (1,0,0) -> 12
        // (1,2,3) -> 23
        assert_eq!(Index3::<2, 3, 4>::new(0, 0, 0).linear(), 0);
        assert_eq!(Index3::<2, 3, 4>::new(0, 0, 3).linear(), 3);
        assert_eq!(Index3::<2, 3, 4>::new(0, 1, 0).linear(), 4);
        assert_eq!(Index3::<2, 3, 4>::new(1, 0, 0).linear(), 12);
        assert_eq!(Index3::<2, 3, 4>::new(1, 2, 3).linear(), 23);
    }

    #[test]
    fn test_from_linear_index3() {
        assert_eq!(Index3::<2, 3, 4>::from_linear(0), Index3::new(0, 0, 0));
        assert_eq!(Index3::<2, 3, 4>::from_linear(4), Index3::new(0, 1, 0));
        assert_eq!(Index3::<2, 3, 4>::from_linear(23), Index3::new(1, 2, 3));

        // round-trip over the whole range
        for linear in 0..(2 * 3 * 4) {
            assert_eq!(Index3::<2, 3, 4>::from_linear(linear).linear(), linear);
        }
    }

    #[test]
    #[should_panic]
    fn test_from_linear_index3_out_of_range() {
        let _ = Index3::<2, 3, 4>::from_linear(24);
    }

    #[test]
    #[should_panic]
    fn test_linear_index3_out_of_bounds() {
        let _ = Index3::<2, 3, 4>::new(0, 3, 0).linear();
    }

    #[test]
    fn test_checked_index3() {
        assert!(Index3::<2, 2, 2>::new(1, 1, 1).checked().is_ok());
        assert_eq!(
            Index3::<2, 2, 2>::new(2, 0, 0).checked(),
            Err(OutOfBounds {
                index: [2, 0, 0],
                extents: [2, 2, 2],
            })
        );
    }

    #[test]
    fn test_linear_index2() {
        // 3x4, offset = i * 4 + j
        assert_eq!(Index2::<3, 4>::new(0, 0).linear(), 0);
        assert_eq!(Index2::<3, 4>::new(0, 3).linear(), 3);
        assert_eq!(Index2::<3, 4>::new(2, 1).linear(), 9);

        for linear in 0..(3 * 4) {
            assert_eq!(Index2::<3, 4>::from_linear(linear).linear(), linear);
        }
    }

    #[test]
    fn test_conversions() {
        let index: Index3<2, 3, 4> = (1, 2, 3).into();
        assert_eq!(index, Index3::new(1, 2, 3));
        assert_eq!(Point3::from(index), Point3::new(1, 2, 3));

        let index: Index2<3, 4> = (2, 1).into();
        assert_eq!(index, Index2::new(2, 1));
        assert_eq!(Point2::from(index), Point2::new(2, 1));
    }

    #[test]
    fn test_checked_index2() {
        assert!(Index2::<3, 4>::new(2, 3).checked().is_ok());
        assert_eq!(
            Index2::<3, 4>::new(1, 4).checked(),
            Err(OutOfBounds {
                index: [1, 4],
                extents: [3, 4],
            })
        );
    }
}

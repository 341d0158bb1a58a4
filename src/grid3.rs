use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::error::OutOfBounds;
use crate::index::Index3;

/// Fixed-size 3d block of `T`, shaped `D1 x D2 x D3` and stored inline in
/// row-major order (last dimension fastest).
///
/// The storage field is public, so a grid can be built by writing the nested
/// array directly. Copies are independent full duplicates; nothing is ever
/// heap-allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Grid3<T, const D1: usize, const D2: usize, const D3: usize>(
    pub [[[T; D3]; D2]; D1],
);

impl<T, const D1: usize, const D2: usize, const D3: usize> Grid3<T, D1, D2, D3> {
    pub const EXTENTS: [usize; 3] = [D1, D2, D3];
    pub const LEN: usize = D1 * D2 * D3;

    /// Build a grid by evaluating `f` at every coordinate.
    pub fn from_fn<F: FnMut(Index3<D1, D2, D3>) -> T>(mut f: F) -> Self {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| std::array::from_fn(|k| f(Index3::new(i, j, k))))
        }))
    }

    pub fn filled(value: T) -> Self
    where
        T: Copy,
    {
        Self([[[value; D3]; D2]; D1])
    }

    pub fn zeroed() -> Self
    where
        T: Zeroable,
    {
        Zeroable::zeroed()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    #[inline]
    pub const fn extents(&self) -> [usize; 3] {
        Self::EXTENTS
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: this is OK because the nested array is contiguous.
        unsafe { self.as_slice_unchecked() }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: this is OK because the nested array is contiguous.
        unsafe { self.as_mut_slice_unchecked() }
    }

    #[inline]
    fn ptr(&self) -> *const T {
        self.0.as_ptr() as *const T
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut T {
        self.0.as_mut_ptr() as *mut T
    }

    #[inline]
    unsafe fn as_slice_unchecked(&self) -> &[T] {
        std::slice::from_raw_parts(self.ptr(), Self::LEN)
    }

    #[inline]
    unsafe fn as_mut_slice_unchecked(&mut self) -> &mut [T] {
        std::slice::from_raw_parts_mut(self.ptr_mut(), Self::LEN)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate in linear order together with the coordinate of each element.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Index3<D1, D2, D3>, &T)> {
        self.iter()
            .enumerate()
            .map(|(n, value)| (Index3::from_linear(n), value))
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Bounds-checked access. The grid is untouched when an error is returned.
    #[inline]
    pub fn get(&self, index: Index3<D1, D2, D3>) -> Result<&T, OutOfBounds<3>> {
        let index = index.checked()?;
        Ok(&self.0[index.x][index.y][index.z])
    }

    #[inline]
    pub fn get_mut(&mut self, index: Index3<D1, D2, D3>) -> Result<&mut T, OutOfBounds<3>> {
        let index = index.checked()?;
        Ok(&mut self.0[index.x][index.y][index.z])
    }

    /// # Safety
    ///
    /// `index` must satisfy [`Index3::in_bounds`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: Index3<D1, D2, D3>) -> &T {
        self.0
            .get_unchecked(index.x)
            .get_unchecked(index.y)
            .get_unchecked(index.z)
    }

    /// # Safety
    ///
    /// `index` must satisfy [`Index3::in_bounds`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: Index3<D1, D2, D3>) -> &mut T {
        self.0
            .get_unchecked_mut(index.x)
            .get_unchecked_mut(index.y)
            .get_unchecked_mut(index.z)
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Exchange all element values with `other`, element by element.
    pub fn swap(&mut self, other: &mut Self) {
        self.as_mut_slice().swap_with_slice(other.as_mut_slice());
    }

    /// Element-wise assignment from a grid of the same shape over a
    /// convertible element type.
    pub fn assign_from<U: Clone>(&mut self, other: &Grid3<U, D1, D2, D3>)
    where
        T: From<U>,
    {
        for (dst, src) in self.iter_mut().zip(other.iter()) {
            *dst = T::from(src.clone());
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Grid3<U, D1, D2, D3> {
        Grid3(self.0.map(|plane| plane.map(|row| row.map(&mut f))))
    }

    /// Shape-preserving element conversion.
    pub fn cast<U: From<T>>(self) -> Grid3<U, D1, D2, D3> {
        self.map(U::from)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: Pod,
    {
        bytemuck::cast_slice(self.as_slice())
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8]
    where
        T: Pod,
    {
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }
}

impl<T: Default + Copy, const D1: usize, const D2: usize, const D3: usize> Default
    for Grid3<T, D1, D2, D3>
{
    #[inline]
    fn default() -> Self {
        Self([[[T::default(); D3]; D2]; D1])
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> Index<Index3<D1, D2, D3>>
    for Grid3<T, D1, D2, D3>
{
    type Output = T;

    #[inline]
    fn index(&self, index: Index3<D1, D2, D3>) -> &T {
        &self.0[index.x][index.y][index.z]
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> IndexMut<Index3<D1, D2, D3>>
    for Grid3<T, D1, D2, D3>
{
    #[inline]
    fn index_mut(&mut self, index: Index3<D1, D2, D3>) -> &mut T {
        &mut self.0[index.x][index.y][index.z]
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> Index<(usize, usize, usize)>
    for Grid3<T, D1, D2, D3>
{
    type Output = T;

    #[inline]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.0[i][j][k]
    }
}

impl<T, const D1: usize, const D2: usize, const D3: usize> IndexMut<(usize, usize, usize)>
    for Grid3<T, D1, D2, D3>
{
    #[inline]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        &mut self.0[i][j][k]
    }
}

impl<'a, T, const D1: usize, const D2: usize, const D3: usize> IntoIterator
    for &'a Grid3<T, D1, D2, D3>
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const D1: usize, const D2: usize, const D3: usize> IntoIterator
    for &'a mut Grid3<T, D1, D2, D3>
{
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Ord, const D1: usize, const D2: usize, const D3: usize> Ord for Grid3<T, D1, D2, D3> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: PartialOrd, const D1: usize, const D2: usize, const D3: usize> PartialOrd
    for Grid3<T, D1, D2, D3>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

// SAFETY: repr(transparent) over nested arrays of `T`; the all-zero bit
// pattern is valid whenever it is for `T`.
unsafe impl<T: Zeroable, const D1: usize, const D2: usize, const D3: usize> Zeroable
    for Grid3<T, D1, D2, D3>
{
}

// SAFETY: nested arrays of a `Pod` element have no padding and accept any bit
// pattern; the transparent wrapper adds nothing.
unsafe impl<T: Pod, const D1: usize, const D2: usize, const D3: usize> Pod
    for Grid3<T, D1, D2, D3>
{
}

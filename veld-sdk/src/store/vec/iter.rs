use borsh::{BorshDeserialize, BorshSerialize};
use std::iter::FusedIterator;
use std::ops::Range;

use super::Vector;

/// An iterator over the elements of a [`Vector`].
///
/// Elements are read from the storage one by one as the iterator advances.
pub struct Iter<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    vec: &'a Vector<T>,
    range: Range<u32>,
}

impl<'a, T> Iter<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    pub(super) fn new(vec: &'a Vector<T>) -> Self {
        Self {
            vec,
            range: 0..vec.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.range.next()?;
        self.vec.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    fn next_back(&mut self) -> Option<T> {
        let index = self.range.next_back()?;
        self.vec.get(index)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: BorshSerialize + BorshDeserialize {}
impl<'a, T> FusedIterator for Iter<'a, T> where T: BorshSerialize + BorshDeserialize {}

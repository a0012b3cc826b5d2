use borsh::{BorshDeserialize, BorshSerialize};
use std::iter::FusedIterator;

use super::super::ERR_INCONSISTENT_STATE;
use super::{UnorderedMap, ValueAndIndex};
use crate::store::{vec, LookupMap};

/// An iterator over the key-value pairs of an [`UnorderedMap`].
///
/// Each step reads the key from the keys vector and looks its value up in the
/// values map.
pub struct Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    keys: vec::Iter<'a, K>,
    values: &'a LookupMap<K, ValueAndIndex<V>>,
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    pub(super) fn new(map: &'a UnorderedMap<K, V>) -> Self {
        Self {
            keys: map.keys.iter(),
            values: &map.values,
        }
    }

    fn entry(&self, key: K) -> (K, V) {
        // Every key in the keys vector must have a record in the values map.
        let entry = self
            .values
            .get(&key)
            .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
        (key, entry.value)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let key = self.keys.next()?;
        Some(self.entry(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    fn next_back(&mut self) -> Option<(K, V)> {
        let key = self.keys.next_back()?;
        Some(self.entry(key))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
}

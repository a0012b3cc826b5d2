//! An iterable implementation of a map that stores its content to the persitent storage.
mod impls;
mod iter;

pub use self::iter::Iter;

use super::{LookupMap, Vector, ERR_INCONSISTENT_STATE};
use borsh::{BorshDeserialize, BorshSerialize};
use std::borrow::Borrow;

const ERR_ELEMENT_SERIALIZATION: &str = "Cannot serialize element";

/// An iterable implementation of a map that stores its content to the persitent storage.
///
/// The map is composed of two views: a [`Vector`] of the keys in insertion order
/// and a [`LookupMap`] from each key to its value. Every stored value carries the
/// index of its key in the vector, which lets a removal fix up the key that gets
/// swapped into the vacated slot.
///
/// Iteration order matches insertion order until a key is removed; a removal
/// moves the last inserted key into the removed key's position.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct UnorderedMap<K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    keys: Vector<K>,
    values: LookupMap<K, ValueAndIndex<V>>,
}

#[derive(BorshSerialize, BorshDeserialize)]
struct ValueAndIndex<V> {
    value: V,
    key_index: u32,
}

impl<K, V> UnorderedMap<K, V>
where
    K: BorshSerialize + BorshDeserialize,
    V: BorshSerialize + BorshDeserialize,
{
    /// Creates a new map. Uses `prefix` as a unique prefix for keys.
    ///
    /// The keys vector and the values map get their own sub-prefixes derived
    /// from `prefix`, so the two never collide.
    pub fn new(prefix: Vec<u8>) -> Self {
        let mut vec_prefix = Vec::with_capacity(prefix.len() + 1);
        vec_prefix.extend_from_slice(&prefix);
        vec_prefix.push(b'u');

        let mut map_prefix = Vec::with_capacity(prefix.len() + 1);
        map_prefix.extend_from_slice(&prefix);
        map_prefix.push(b'm');

        Self {
            keys: Vector::new(vec_prefix),
            values: LookupMap::new(map_prefix),
        }
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> u32 {
        self.keys.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // Layout must match the borsh derive on ValueAndIndex: value first, then index.
    fn serialize_value_and_index(value: &V, key_index: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        BorshSerialize::serialize(value, &mut bytes)
            .unwrap_or_else(|_| crate::panic(ERR_ELEMENT_SERIALIZATION));
        BorshSerialize::serialize(&key_index, &mut bytes)
            .unwrap_or_else(|_| crate::panic(ERR_ELEMENT_SERIALIZATION));
        bytes
    }

    /// Returns true if the map contains a value for the specified key.
    pub fn contains_key<Q: ?Sized>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        self.values.contains_key(k)
    }

    /// Returns the value corresponding to the key.
    ///
    /// If the map doesn't have the key present, returns `None`
    pub fn get<Q: ?Sized>(&self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        self.values.get(k).map(|entry| entry.value)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, None is returned.
    ///
    /// If the map did have this key present, the value is updated, and the old value is
    /// returned. The key keeps its original position in the iteration order.
    pub fn insert(&mut self, k: &K, v: &V) -> Option<V> {
        match self.values.get(k) {
            Some(existing) => {
                let raw = Self::serialize_value_and_index(v, existing.key_index);
                self.values.insert_raw(k, &raw);
                Some(existing.value)
            }
            None => {
                let key_index = self.keys.len();
                self.keys.push(k);
                let raw = Self::serialize_value_and_index(v, key_index);
                self.values.insert_raw(k, &raw);
                None
            }
        }
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in
    /// the map.
    ///
    /// The last inserted key is moved into the removed key's position, and its stored
    /// index is rewritten to point at that slot.
    pub fn remove<Q: ?Sized>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        match self.values.remove(k) {
            Some(ValueAndIndex { value, key_index }) => {
                self.keys.swap_remove(key_index);
                if key_index < self.keys.len() {
                    let moved_key = self
                        .keys
                        .get(key_index)
                        .unwrap_or_else(|| crate::abort());
                    // The lookup is by the owned key, not the caller's borrowed form.
                    let record = self
                        .values
                        .get::<K>(&moved_key)
                        .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
                    let raw = Self::serialize_value_and_index(&record.value, key_index);
                    self.values.insert_raw(&moved_key, &raw);
                }
                Some(value)
            }
            None => None,
        }
    }

    /// Removes all elements from the map.
    pub fn clear(&mut self) {
        for key in self.keys.iter() {
            // set(None) skips reading the old value back from the storage
            self.values.set(&key, None);
        }
        self.keys.clear();
    }

    /// Returns an iterator over the key-value pairs, in the order the keys are
    /// currently stored.
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(self)
    }
}

//====================================================== TESTS =================================================================

//! An iterable implementation of vector that stores its content to the persitent storage.
mod impls;
mod iter;

pub use self::iter::Iter;

use super::ERR_INCONSISTENT_STATE;
use borsh::{BorshDeserialize, BorshSerialize};
use std::marker::PhantomData;

const ERR_INDEX_OUT_OF_BOUNDS: &str = "Index out of bounds";
const ERR_ELEMENT_DESERIALIZATION: &str = "Cannot deserialize element";
const ERR_ELEMENT_SERIALIZATION: &str = "Cannot serialize element";

/// An iterable implementation of vector that stores its content to the persitent storage.
/// Uses the following map: index -> element.
///
/// Elements are written to and read from the storage directly, so a change made by
/// one operation is visible to the next one without any flush. Only the length and
/// the prefix live in memory.
pub struct Vector<T>
where
    T: BorshSerialize + BorshDeserialize,
{
    len: u32,
    prefix: Box<[u8]>,
    el: PhantomData<T>,
}

impl<T> BorshSerialize for Vector<T>
where
    T: BorshSerialize + BorshDeserialize,
{
    fn serialize<W: borsh::maybestd::io::Write>(
        &self,
        writer: &mut W,
    ) -> Result<(), borsh::maybestd::io::Error> {
        BorshSerialize::serialize(&self.len, writer)?;
        BorshSerialize::serialize(&self.prefix, writer)?;
        Ok(())
    }
}

impl<T> BorshDeserialize for Vector<T>
where
    T: BorshSerialize + BorshDeserialize,
{
    fn deserialize(buf: &mut &[u8]) -> Result<Self, borsh::maybestd::io::Error> {
        Ok(Self {
            len: BorshDeserialize::deserialize(buf)?,
            prefix: BorshDeserialize::deserialize(buf)?,
            el: PhantomData,
        })
    }
}

impl<T> Vector<T>
where
    T: BorshSerialize + BorshDeserialize,
{
    /// Creates a new vector with zero length. Uses `prefix` as a unique prefix for indices.
    pub fn new(prefix: Vec<u8>) -> Self {
        Self {
            len: 0,
            prefix: prefix.into_boxed_slice(),
            el: PhantomData,
        }
    }

    /// Returns the number of elements in the vector, also referred to as its 'length'.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index_to_lookup_key(&self, index: u32) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.prefix.len() + 4);
        key.extend_from_slice(&self.prefix);
        key.extend_from_slice(&index.to_le_bytes());
        key
    }

    fn serialize_element(element: &T) -> Vec<u8> {
        element
            .try_to_vec()
            .unwrap_or_else(|_| crate::panic(ERR_ELEMENT_SERIALIZATION))
    }

    fn deserialize_element(bytes: &[u8]) -> T {
        T::try_from_slice(bytes).unwrap_or_else(|_| crate::panic(ERR_ELEMENT_DESERIALIZATION))
    }

    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if the storage has no entry for an in-bounds index. Indices below
    /// the length are always populated unless the stored state was corrupted.
    pub fn get(&self, index: u32) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        match crate::storage_read(&self.index_to_lookup_key(index)) {
            Some(bytes) => Some(Self::deserialize_element(&bytes)),
            None => crate::panic(ERR_INCONSISTENT_STATE),
        }
    }

    /// Appends an element to the back of a collection.
    ///
    /// # Panics
    ///
    /// Panics if the new length exceeds [`u32::MAX`].
    pub fn push(&mut self, element: &T) {
        let last_idx = self.len();
        self.len = self
            .len
            .checked_add(1)
            .unwrap_or_else(|| crate::panic(ERR_INDEX_OUT_OF_BOUNDS));
        let key = self.index_to_lookup_key(last_idx);
        crate::storage_write(&key, &Self::serialize_element(element));
    }

    /// Removes the last element from a vector and returns it, or `None` if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last_idx = self.len() - 1;
        let key = self.index_to_lookup_key(last_idx);
        if !crate::storage_remove(&key) {
            crate::panic(ERR_INCONSISTENT_STATE);
        }
        self.len = last_idx;

        // The removed element is sitting in the eviction register.
        let bytes = crate::storage_get_evicted()
            .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
        Some(Self::deserialize_element(&bytes))
    }

    /// Overwrites the element at `index` and returns the element it replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: u32, element: &T) -> T {
        if index >= self.len() {
            crate::panic(ERR_INDEX_OUT_OF_BOUNDS);
        }

        let key = self.index_to_lookup_key(index);
        if !crate::storage_write(&key, &Self::serialize_element(element)) {
            crate::panic(ERR_INCONSISTENT_STATE);
        }
        let evicted = crate::storage_get_evicted()
            .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
        Self::deserialize_element(&evicted)
    }

    /// Removes an element from the vector and returns it.
    ///
    /// The removed element is replaced by the last element of the vector.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: u32) -> T {
        if index >= self.len() {
            crate::panic(ERR_INDEX_OUT_OF_BOUNDS);
        }

        let last = self.pop().unwrap_or_else(|| crate::abort());
        if index < self.len() {
            self.replace(index, &last)
        } else {
            last
        }
    }

    /// Removes all elements from the vector.
    pub fn clear(&mut self) {
        for index in 0..self.len {
            let key = self.index_to_lookup_key(index);
            crate::storage_remove(&key);
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements, front to back. Every step reads
    /// one element from the storage.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }
}

//====================================================== TESTS =================================================================

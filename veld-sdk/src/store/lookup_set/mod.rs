//! An implementation of a set that stores its content directly on the persistent storage.
mod impls;

use borsh::{BorshDeserialize, BorshSerialize};
use std::borrow::Borrow;

use crate::store::LookupMap;

/// An implementation of a set that stores its content directly on the persistent storage.
/// LookupSet is essentially a LookupMap where the key is the element
/// and the value is a constant to signify its presence.
pub struct LookupSet<K>
where
    K: BorshSerialize,
{
    // We can use any type for V, such as a single byte, because we only care about the key.
    map: LookupMap<K, ()>,
}

impl<K> BorshSerialize for LookupSet<K>
where
    K: BorshSerialize,
{
    fn serialize<W: borsh::maybestd::io::Write>(
        &self,
        writer: &mut W,
    ) -> Result<(), borsh::maybestd::io::Error> {
        BorshSerialize::serialize(&self.map, writer)
    }
}

impl<K> BorshDeserialize for LookupSet<K>
where
    K: BorshSerialize,
{
    fn deserialize(buf: &mut &[u8]) -> Result<Self, borsh::maybestd::io::Error> {
        Ok(Self {
            map: BorshDeserialize::deserialize(buf)?,
        })
    }
}

impl<K> LookupSet<K>
where
    K: BorshSerialize,
{
    /// Creates a new set. Uses `prefix` as a unique prefix for keys.
    pub fn new(prefix: Vec<u8>) -> Self {
        Self {
            map: LookupMap::new(prefix),
        }
    }

    #[cfg(test)]
    pub fn to_key_test<Q>(&self, prefix: &[u8], key: &Q, buffer: &mut Vec<u8>) -> Vec<u8>
    where
        Q: ?Sized + BorshSerialize,
    {
        LookupMap::<K, ()>::to_key_test(prefix, key, buffer)
    }

    /// Returns the unique byte prefix used for key generation in the `LookupSet`.
    pub fn get_prefix(&self) -> &Box<[u8]> {
        self.map.get_prefix()
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// * If the set did not previously contain this value, true is returned.
    /// * If the set already contained this value, false is returned.
    pub fn insert(&mut self, k: &K) -> bool {
        self.map.insert(k, &()).is_none()
    }

    /// Removes a value from the set. Returns whether the value was present in the set.
    pub fn remove<Q: ?Sized>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        self.map.remove(k).is_some()
    }

    /// Returns true if the set contains a value.
    pub fn contains<Q: ?Sized>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        self.map.contains_key(k)
    }
}

//======================================================= TESTS =======================================================================

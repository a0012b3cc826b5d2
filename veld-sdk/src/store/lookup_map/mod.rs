//! An implementation of a map that stores its content directly on the persistent storage.
mod impls;

use super::ERR_INCONSISTENT_STATE;
use borsh::{BorshDeserialize, BorshSerialize};
use std::borrow::Borrow;
use std::marker::PhantomData;

const ERR_ELEMENT_DESERIALIZATION: &str = "Cannot deserialize element";
const ERR_ELEMENT_SERIALIZATION: &str = "Cannot serialize element";
const ERR_KEY_SERIALIZATION: &str = "Cannot serialize key";

/// An implementation of a map that stores its content directly on the persistent storage.
///
/// Every lookup serializes the key, prepends the map's prefix and reads the
/// storage under the resulting lookup key. Nothing is cached in memory, so
/// a value returned by one call never goes stale because of a later call.
pub struct LookupMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    prefix: Box<[u8]>,
    el: PhantomData<(K, V)>,
}

impl<K, V> BorshSerialize for LookupMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    fn serialize<W: borsh::maybestd::io::Write>(
        &self,
        writer: &mut W,
    ) -> Result<(), borsh::maybestd::io::Error> {
        BorshSerialize::serialize(&self.prefix, writer)
    }
}

impl<K, V> BorshDeserialize for LookupMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    fn deserialize(buf: &mut &[u8]) -> Result<Self, borsh::maybestd::io::Error> {
        Ok(Self {
            prefix: BorshDeserialize::deserialize(buf)?,
            el: PhantomData,
        })
    }
}

fn to_key<Q: ?Sized>(prefix: &[u8], key: &Q, buffer: &mut Vec<u8>) -> Vec<u8>
where
    Q: BorshSerialize,
{
    // Prefix the serialized bytes and return a copy of this buffer.
    buffer.extend(prefix);
    key.serialize(buffer)
        .unwrap_or_else(|_| crate::panic(ERR_KEY_SERIALIZATION));

    buffer.clone()
}

impl<K, V> LookupMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    /// Creates a new map. Uses `prefix` as a unique prefix for keys.
    pub fn new(prefix: Vec<u8>) -> Self {
        Self {
            prefix: prefix.into_boxed_slice(),
            el: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn to_key_test<Q>(prefix: &[u8], key: &Q, buffer: &mut Vec<u8>) -> Vec<u8>
    where
        Q: ?Sized + BorshSerialize,
    {
        to_key(prefix, key, buffer)
    }

    /// Returns the unique byte prefix used for key generation in the map.
    pub fn get_prefix(&self) -> &Box<[u8]> {
        &self.prefix
    }

    fn serialize_element(element: &V) -> Vec<u8> {
        element
            .try_to_vec()
            .unwrap_or_else(|_| crate::panic(ERR_ELEMENT_SERIALIZATION))
    }

    fn deserialize_element(bytes: &[u8]) -> V {
        V::try_from_slice(bytes).unwrap_or_else(|_| crate::panic(ERR_ELEMENT_DESERIALIZATION))
    }

    /// Returns true if the map contains a value for the specified key.
    ///
    /// The value is not read from the storage, only its presence is checked.
    pub fn contains_key<Q: ?Sized>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        let lookup_key = to_key(&self.prefix, k, &mut Vec::new());
        crate::storage_has_key(&lookup_key)
    }

    /// Returns the value corresponding to the key.
    ///
    /// If the map doesn't have the key present, returns `None`
    pub fn get<Q: ?Sized>(&self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        let lookup_key = to_key(&self.prefix, k, &mut Vec::new());
        crate::storage_read(&lookup_key).map(|bytes| Self::deserialize_element(&bytes))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, None is returned.
    ///
    /// If the map did have this key present, the value is updated, and the old value is returned.
    pub fn insert(&mut self, k: &K, v: &V) -> Option<V> {
        self.insert_raw(k, &Self::serialize_element(v))
            .map(|bytes| Self::deserialize_element(&bytes))
    }

    /// Writes already serialized value bytes under the key and returns the raw
    /// bytes of the value it replaced, if any.
    pub(crate) fn insert_raw(&mut self, k: &K, value_bytes: &[u8]) -> Option<Vec<u8>> {
        let lookup_key = to_key(&self.prefix, k, &mut Vec::new());
        if crate::storage_write(&lookup_key, value_bytes) {
            // The replaced value is sitting in the eviction register.
            let evicted = crate::storage_get_evicted()
                .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
            Some(evicted)
        } else {
            None
        }
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the map.
    pub fn remove<Q: ?Sized>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BorshSerialize,
    {
        let lookup_key = to_key(&self.prefix, k, &mut Vec::new());
        if crate::storage_remove(&lookup_key) {
            let evicted = crate::storage_get_evicted()
                .unwrap_or_else(|| crate::panic(ERR_INCONSISTENT_STATE));
            Some(Self::deserialize_element(&evicted))
        } else {
            None
        }
    }

    /// Inserts or removes a key-value to the map, without reading the previous
    /// value back from the storage.
    ///
    /// * If `value` is `None` then the specified key is removed.
    /// * If `value` is `Some(v)` then `v` is inserted by the specified key
    pub fn set(&mut self, key: &K, value: Option<&V>) {
        let lookup_key = to_key(&self.prefix, key, &mut Vec::new());
        match value {
            Some(value) => {
                crate::storage_write(&lookup_key, &Self::serialize_element(value));
            }
            None => {
                crate::storage_remove(&lookup_key);
            }
        }
    }
}

//====================================================== TESTS =================================================================

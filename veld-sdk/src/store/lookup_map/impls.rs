use borsh::{BorshDeserialize, BorshSerialize};

use super::LookupMap;

impl<K, V> Extend<(K, V)> for LookupMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.set(&key, Some(&value))
        }
    }
}

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use hex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

type AddressArray = [u8; 20];

/// Balance is a type for storing amounts of Veld tokens, specified in Motes.
pub type Balance = u128;

/// Gas
pub type Gas = u64;

/// Number of the block
pub type BlockNumber = u128;

/// Hash of the block
pub type BlockHash = [u8; 32];

/// Unix timestamp
pub type TimeStamp = u128;

/// Handle of a deferred call batch or of a joint handle, issued by the VeldVM runtime.
///
/// Handles are scoped to the current invocation and must not be persisted.
pub type PromiseId = u64;

/// Relative weight used to split the unspent gas between weighted function calls
/// at the end of the invocation.
pub type GasWeight = u64;

/// The address in the Veld blockchain. This is a 20 bytes array. Can be represented as a hex string.
///
/// Because these addresses should be validated, they have to be converted with [`TryFrom`]
/// # Examples:
/// ```
/// use veld_sdk::types::Address;
///
/// let invalid_str = Address::try_from("invalid");
/// assert!(invalid_str.is_err());
///
/// let invalid_vec = Address::try_from(vec![1, 2, 3]);
/// assert!(invalid_vec.is_err());
///
/// let valid_str = Address::try_from("a11ce00000000000000000000000000000000000");
/// assert!(valid_str.is_ok());
///
/// let valid_vec = Address::try_from(vec![
///     0xa1, 0x1c, 0xe0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0
/// ]);
/// assert!(valid_vec.is_ok());
/// ```
#[derive(
    BorshSerialize, BorshDeserialize, Hash, BorshSchema, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Address(AddressArray);

impl Address {
    /// Returns the hex string representation of [`Address`]
    ///
    /// # Examples
    /// ```
    /// use veld_sdk::types::Address;
    /// let address = Address::try_from(vec![
    ///     0xa1, 0x1c, 0xe0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0
    /// ]).unwrap();
    ///
    /// assert_eq!(address.to_string(), "a11ce00000000000000000000000000000000000");
    /// ```
    pub fn to_string(&self) -> String {
        hex::encode(&self.0)
    }

    /// Returns [`Vec`] of raw [`Address`] bytes
    ///
    /// # Examples
    /// ```
    /// use veld_sdk::types::Address;
    /// let address = Address::try_from("a11ce00000000000000000000000000000000000").unwrap();
    ///
    /// assert_eq!(address.to_vec(),
    ///     vec![0xa1, 0x1c, 0xe0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// ```
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Returns a reference to the inner `[u8; 20]` array
    pub fn as_bytes(&self) -> &AddressArray {
        &self.0
    }

    #[cfg(test)]
    pub fn test_create_address(address: &Vec<u8>) -> Self {
        let address: AddressArray = address.clone().try_into().unwrap();
        Address(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex::encode(self.0), f)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex::encode(self.0), f)
    }
}

impl From<AddressArray> for Address {
    fn from(address: AddressArray) -> Self {
        Self(address)
    }
}

impl From<&AddressArray> for Address {
    fn from(address: &AddressArray) -> Self {
        Self(address.clone())
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = String;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let len = value.len();
        match <AddressArray>::try_from(value) {
            Ok(address) => Ok(Self(address)),
            Err(_) => Err(format!(
                "Can't create address from vector or slice length={}",
                len
            )),
        }
    }
}

impl TryFrom<Vec<u8>> for Address {
    type Error = String;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&Vec<u8>> for Address {
    type Error = String;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.clone())
    }
}

impl TryFrom<&str> for Address {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.strip_prefix("0x").unwrap_or(value);
        match hex::decode(value) {
            Ok(val) => match <AddressArray>::try_from(val) {
                Ok(address) => Ok(Self(address)),
                Err(_) => Err(format!("Can't create address from vector")),
            },
            Err(_) => Err(format!("Can't create address from string {}", value)),
        }
    }
}

impl TryFrom<String> for Address {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for Address {
    type Error = String;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Ok(Address::try_from(s).map_err(|err| serde::de::Error::custom(err))?)
    }
}

/// A public key attached to account-key actions. The bytes are opaque to the SDK;
/// the runtime validates the curve and the length when the action is applied.
/// Can be represented as a hex string.
///
/// # Examples:
/// ```
/// use veld_sdk::types::PublicKey;
///
/// let key = PublicKey::from(vec![0xed; 32]);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
#[derive(
    BorshSerialize, BorshDeserialize, BorshSchema, Hash, Clone, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Returns the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns [`Vec`] of raw [`PublicKey`] bytes
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex::encode(&self.0), f)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex::encode(&self.0), f)
    }
}

impl From<Vec<u8>> for PublicKey {
    fn from(key: Vec<u8>) -> Self {
        Self(key)
    }
}

impl From<&[u8]> for PublicKey {
    fn from(key: &[u8]) -> Self {
        Self(key.to_vec())
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.strip_prefix("0x").unwrap_or(value);
        match hex::decode(value) {
            Ok(key) => Ok(Self(key)),
            Err(_) => Err(format!("Can't create public key from string {}", value)),
        }
    }
}

impl TryFrom<String> for PublicKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Ok(PublicKey::try_from(s).map_err(|err| serde::de::Error::custom(err))?)
    }
}

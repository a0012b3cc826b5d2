//! Collections and types used when interacting with storage.
//!
//! These collections are more scalable versions of [`std::collections`] when used as contract
//! state because it allows values to be lazily loaded and stored based on what is actually
//! interacted with.
//!
//! Every operation goes to the persistent storage directly. Nothing is cached in
//! memory and there is no flush step: what a method returns is what the storage
//! held at the moment of the call.
pub mod vec;
pub use self::vec::Vector;

pub mod lookup_set;
pub use self::lookup_set::LookupSet;

pub mod lookup_map;
pub use self::lookup_map::LookupMap;

pub mod unordered_map;
pub use self::unordered_map::UnorderedMap;

pub(crate) const ERR_INCONSISTENT_STATE: &str =
    "The collection is in an inconsistent state. Did a previous contract execution terminate unexpectedly?";

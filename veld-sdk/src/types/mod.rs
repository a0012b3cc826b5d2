//! Basic types

mod int;
mod primitives;
pub use int::{I128, I64, U128, U64};
pub use primitives::{
    Address, Balance, BlockHash, BlockNumber, Gas, GasWeight, PromiseId, PublicKey, TimeStamp,
};

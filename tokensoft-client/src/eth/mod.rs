//! On-chain transfer-restriction checks for ERC-1404 tokens.
//!
//! The client never talks to a chain itself. Callers supply a
//! [`ContractProvider`] that can turn an ABI and address into a
//! [`Contract`] handle able to run read-only calls.

mod abi;
mod contract;
mod restriction;

pub use abi::{erc1404_abi, AbiItem, AbiParam, AbiType, StateMutability};
pub use contract::{Contract, ContractProvider};
pub use restriction::{RestrictionChecker, TransferRestriction};

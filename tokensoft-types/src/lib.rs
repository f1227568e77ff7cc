//! Wire envelope and data-transfer records for the Tokensoft API.
//!
//! This crate defines the plain shapes exchanged with the remote service:
//! - The [`Response`] envelope (an optional list of [`ApiError`]s plus a
//!   `data` object keyed by the query/mutation names invoked)
//! - Investor, sale and account records
//! - The [`Transaction`] descriptor used for on-chain restriction checks
//!
//! Record fields are all optional. The API only returns the fields a caller
//! asked for, so a record decoded from a projected result has `None` in every
//! field that was not selected.

mod account;
mod envelope;
mod sale;
mod transaction;
mod user;

pub use account::{
    Account, AccountInput, Chain, ExternalUserLookupData, ExternalUserLookupResponse,
    ExternalWhitelistUserInput, LookupStatus, ReceiveAddressType,
};
pub use envelope::{ApiError, Response, ResponseData};
pub use sale::{
    AdminParticipantUserWithSaleStatus, EntityRoles, Round, SaleRound, SaleRoundDocument,
    SaleStatus,
};
pub use transaction::Transaction;
pub use user::{
    AdditionalKycField, Address, AddressInput, AdminParticipantUser, InvestorKind, KycFile,
    TwoFactor, User, UserAccreditationMode, UserAccreditationStatus,
};

/// ISO-8601 datetime string as returned by the API.
pub type Datetime = String;

//! Token-holding accounts and the external whitelist flow.

use crate::user::{Address, AddressInput};
use crate::Datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chain {
    Bitcoin,
    Ethereum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiveAddressType {
    Unknown,
    Custodian,
}

/// A new account to register for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInput {
    pub address: String,
    pub name: String,
    pub chain: Chain,
    #[serde(rename = "type")]
    pub kind: ReceiveAddressType,
    pub whitelist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

/// A registered account (usually an Ethereum wallet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Option<String>,
    pub address: Option<String>,
    pub name: Option<String>,
    pub chain: Option<Chain>,
    #[serde(rename = "type")]
    pub kind: Option<ReceiveAddressType>,
    pub whitelist: Option<String>,
    pub created_at: Option<Datetime>,
    pub primary: Option<bool>,
    pub enabled: Option<bool>,
    pub balance: Option<String>,
    pub whitelist_request: Option<String>,
}

/// Investor data submitted together with the account to whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalWhitelistUserInput {
    pub token_contract_address: String,
    pub email: String,
    pub address: AddressInput,
    pub account: AccountInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupStatus {
    Error,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUserLookupResponse {
    pub status: Option<LookupStatus>,
    pub message: Option<String>,
    pub data: Option<ExternalUserLookupData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUserLookupData {
    pub id: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub accounts: Option<Vec<Account>>,
}

use serde::{Deserialize, Serialize};

/// A proposed token transfer, checked against the token's on-chain rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Address of the ERC-1404 token contract.
    pub token_address: String,
    pub from_wallet: String,
    pub to_wallet: String,
    /// Quantity in the token's base units, as a decimal string.
    pub qty_base_units: String,
}

impl Transaction {
    pub fn new(
        token_address: impl Into<String>,
        from_wallet: impl Into<String>,
        to_wallet: impl Into<String>,
        qty_base_units: impl ToString,
    ) -> Self {
        Self {
            token_address: token_address.into(),
            from_wallet: from_wallet.into(),
            to_wallet: to_wallet.into(),
            qty_base_units: qty_base_units.to_string(),
        }
    }
}

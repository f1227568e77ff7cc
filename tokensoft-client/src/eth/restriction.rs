use crate::error::{ClientError, ClientResult};
use crate::eth::abi::erc1404_abi;
use crate::eth::contract::ContractProvider;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokensoft_types::Transaction;
use tracing::{debug, info};

const DETECT_METHOD: &str = "detectTransferRestriction";
const MESSAGE_METHOD: &str = "messageForTransferRestriction";

/// A reason a transfer would be rejected on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRestriction {
    /// The restriction code, as a decimal string.
    pub code: String,
    pub text: String,
}

/// Asks a token contract whether a transfer would be restricted.
#[derive(Clone, Default)]
pub struct RestrictionChecker {
    contracts: Option<Arc<dyn ContractProvider>>,
}

impl RestrictionChecker {
    pub fn new(contracts: Option<Arc<dyn ContractProvider>>) -> Self {
        Self { contracts }
    }

    pub fn is_available(&self) -> bool {
        self.contracts.is_some()
    }

    /// Returns the reasons `tx` would fail; empty when the transfer is allowed.
    ///
    /// Makes one read call, plus a second to fetch the message when the code
    /// is non-zero. Contract failures are returned unchanged.
    pub async fn detect(&self, tx: &Transaction) -> ClientResult<Vec<TransferRestriction>> {
        let contracts = self.contracts.as_ref().ok_or_else(|| {
            ClientError::Config(
                "No Ethereum client provided, so can't access Ethereum. Fix this by providing \
                 a contract provider (e.g. an Ethereum RPC client) in ClientOptions."
                    .to_string(),
            )
        })?;

        let token = contracts.contract(&erc1404_abi(), &tx.token_address);

        let raw_code = token
            .call(
                DETECT_METHOD,
                vec![
                    json!(tx.from_wallet),
                    json!(tx.to_wallet),
                    json!(tx.qty_base_units),
                ],
            )
            .await?;
        let code = parse_code(&raw_code)?;
        debug!("{} on {} returned {}", DETECT_METHOD, tx.token_address, code);

        if code == 0 {
            return Ok(Vec::new());
        }

        let message = match token.call(MESSAGE_METHOD, vec![raw_code]).await? {
            Value::String(text) => text,
            other => other.to_string(),
        };
        info!(
            "Transfer from {} to {} restricted by {}: code {} ({})",
            tx.from_wallet, tx.to_wallet, tx.token_address, code, message
        );

        Ok(vec![TransferRestriction {
            code: code.to_string(),
            text: format!(
                "Got error code {code} ('{message}') from on-chain {DETECT_METHOD} method"
            ),
        }])
    }
}

/// Reads a restriction code returned as a number or a decimal string.
fn parse_code(value: &Value) -> ClientResult<u64> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ClientError::Contract(format!("{DETECT_METHOD} returned a non-numeric code: {value}"))
    })
}

use crate::error::ClientResult;
use crate::eth::abi::AbiItem;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A handle on a deployed contract.
///
/// Arguments and return values are JSON: addresses as hex strings, integers
/// as decimal strings or numbers. Failures should be reported as
/// [`ClientError::Contract`](crate::ClientError::Contract).
#[async_trait]
pub trait Contract: Send + Sync {
    /// Runs a read-only method.
    async fn call(&self, method: &str, args: Vec<Value>) -> ClientResult<Value>;
}

/// Builds contract handles from an ABI and an address.
pub trait ContractProvider: Send + Sync {
    fn contract(&self, abi: &[AbiItem], address: &str) -> Arc<dyn Contract>;
}

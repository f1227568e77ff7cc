//! JSON ABI descriptions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiType {
    Function,
    Constructor,
    Event,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

/// A function input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<AbiParam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

impl AbiParam {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            indexed: None,
            components: None,
            internal_type: None,
        }
    }
}

/// One entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiItem {
    #[serde(rename = "type")]
    pub kind: AbiType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
}

impl AbiItem {
    /// A `view` function.
    pub fn view(name: impl Into<String>, inputs: Vec<AbiParam>, outputs: Vec<AbiParam>) -> Self {
        Self {
            kind: AbiType::Function,
            name: Some(name.into()),
            inputs,
            outputs,
            state_mutability: Some(StateMutability::View),
            anonymous: None,
            constant: Some(true),
            payable: Some(false),
        }
    }
}

/// The ERC-1404 read methods used for restriction checks.
pub fn erc1404_abi() -> Vec<AbiItem> {
    vec![
        AbiItem::view(
            "detectTransferRestriction",
            vec![
                AbiParam::new("from", "address"),
                AbiParam::new("to", "address"),
                AbiParam::new("value", "uint256"),
            ],
            vec![AbiParam::new("", "uint8")],
        ),
        AbiItem::view(
            "messageForTransferRestriction",
            vec![AbiParam::new("restrictionCode", "uint8")],
            vec![AbiParam::new("", "string")],
        ),
    ]
}

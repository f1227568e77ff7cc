//! Sale rounds and per-investor sale status.

use crate::user::{AdminParticipantUser, User};
use crate::Datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRound {
    pub name: Option<String>,
    pub accepted_terms: Option<bool>,
    pub payment_amount: Option<String>,
    pub tokens: Option<String>,
    pub committed_amount: Option<String>,
    pub documents: Option<SaleRoundDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRoundDocument {
    pub title: Option<String>,
    pub created_at: Option<String>,
    pub link: Option<String>,
}

/// A row on the admin participant dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminParticipantUserWithSaleStatus {
    pub id: Option<String>,
    pub accepted_terms: Option<bool>,
    pub payment_completed: Option<bool>,
    pub selected_payment_method: Option<String>,
    pub kyc_status: Option<String>,
    pub kyc_expiration_date: Option<Datetime>,
    pub payment_amount: Option<f64>,
    pub payment_expiration: Option<String>,
    pub usd_tracking_number: Option<String>,
    pub eth_payment_code: Option<String>,
    pub eth_payment_payload: Option<String>,
    pub payment_details_confirmed: Option<bool>,
    pub updated_at: Option<Datetime>,
    pub user_id: Option<AdminParticipantUser>,
    pub participating_round_ids: Option<Vec<String>>,
}

/// A sale round (tranche) of a security.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub extra_kyc_countries_for_entity_investor: Option<Vec<String>>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub round_description: Option<String>,
    pub cleared_users: Option<Vec<String>>,
    pub clearance_required: Option<bool>,
    pub sale_cap: Option<f64>,
    pub sale_cap_hit: Option<bool>,
    pub sale_terms_uri: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    pub tenant: Option<String>,
    pub token_contract: Option<String>,
}

/// An investor's participation state for one sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleStatus {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub user_obj: Option<User>,
    pub tenant_id: Option<String>,
    pub accepted_terms: Option<bool>,
    pub entity_roles: Option<Vec<EntityRoles>>,
    pub min_purchase_amount: Option<f64>,
    pub max_purchase_amount: Option<f64>,
    pub payment_completed: Option<bool>,
    pub kyc_status: Option<String>,
    pub kyc_expiration_date: Option<Datetime>,
    pub kyc_only: Option<bool>,
    pub external_identifier: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRoles {
    pub entity_sale_status_id: Option<String>,
    pub name: Option<String>,
    pub percent_ownership: Option<String>,
    pub accepted: Option<String>,
    pub roles: Option<Vec<String>>,
    pub entity_name: Option<String>,
    pub entity_email: Option<String>,
    pub invite_date: Option<Datetime>,
}

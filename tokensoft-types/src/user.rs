//! Investor records.

use crate::sale::SaleRound;
use crate::Datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAccreditationStatus {
    None,
    Pending,
    Expired,
    DocumentationExpired,
    Finished,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAccreditationMode {
    #[serde(rename = "SELF")]
    SelfCertified,
    Tokensoft,
    Vi,
    Bypass,
}

/// Whether an investor invests personally or on behalf of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestorKind {
    Myself,
    Entity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub has_tia: Option<bool>,
    pub registered: Option<bool>,
    pub role: Option<String>,
    #[serde(rename = "acceptedTSTerms")]
    pub accepted_ts_terms: Option<bool>,
    pub accreditation_status: Option<UserAccreditationStatus>,
    pub accreditation_mode: Option<UserAccreditationMode>,
    pub accreditation_expiration: Option<Datetime>,
    pub kyc_status: Option<String>,
    pub kyc_only: Option<bool>,
    pub kyc_upload_files: Option<Vec<KycFile>>,
    pub address: Option<Address>,
    pub two_factor: Option<TwoFactor>,
    pub token: Option<String>,
    pub token_expiry: Option<Datetime>,
    pub okta_id_token: Option<String>,
    pub token_refresh: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub rounds: Option<Vec<SaleRound>>,
    pub requires_pw_upgrade: Option<bool>,
    pub last_login: Option<Datetime>,
}

/// Participant users listed on the admin dashboard share the user shape.
pub type AdminParticipantUser = User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactor {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycFile {
    pub upload_id: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub value: Option<String>,
    pub created_at: Option<Datetime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalKycField {
    pub key: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// KYC address details. Also sent as input when updating a user, so unset
/// fields are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_flat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_street_line_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_street_line_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_dba: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_kyc_fields: Option<Vec<AdditionalKycField>>,
}

/// Address as submitted with an external whitelist request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub flat_number: Option<String>,
    pub building_number: String,
    #[serde(default)]
    pub building_name: Option<String>,
    pub street_line_one: String,
    #[serde(default)]
    pub street_line_two: Option<String>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub entity_building_number: Option<String>,
    #[serde(default)]
    pub entity_street_line_one: Option<String>,
    #[serde(default)]
    pub entity_city: Option<String>,
    #[serde(default)]
    pub entity_zip_code: Option<String>,
    #[serde(default)]
    pub entity_state: Option<String>,
    #[serde(default)]
    pub entity_country: Option<String>,
    #[serde(default)]
    pub entity_phone_number: Option<String>,
    pub investor_type: InvestorKind,
}

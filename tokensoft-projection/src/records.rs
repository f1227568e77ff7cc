//! Schemas for the Tokensoft records.
//!
//! Field names are the wire (camelCase) names.

use crate::schema::{Record, Schema};
use tokensoft_types::{
    Account, AdditionalKycField, Address, AdminParticipantUserWithSaleStatus, EntityRoles,
    ExternalUserLookupData, ExternalUserLookupResponse, KycFile, Round, SaleRound,
    SaleRoundDocument, SaleStatus, TwoFactor, User,
};

impl Record for User {
    fn schema() -> Schema {
        Schema::new("User")
            .scalar("id")
            .scalar("email")
            .scalar("emailVerified")
            .scalar("hasTia")
            .scalar("registered")
            .scalar("role")
            .scalar("acceptedTSTerms")
            .scalar("accreditationStatus")
            .scalar("accreditationMode")
            .scalar("accreditationExpiration")
            .scalar("kycStatus")
            .scalar("kycOnly")
            .list::<KycFile>("kycUploadFiles")
            .object::<Address>("address")
            .object::<TwoFactor>("twoFactor")
            .scalar("token")
            .scalar("tokenExpiry")
            .scalar("oktaIdToken")
            .scalar("tokenRefresh")
            .scalar_list("permissions")
            .list::<SaleRound>("rounds")
            .scalar("requiresPwUpgrade")
            .scalar("lastLogin")
    }
}

impl Record for TwoFactor {
    fn schema() -> Schema {
        Schema::new("TwoFactor").scalar("enabled")
    }
}

impl Record for KycFile {
    fn schema() -> Schema {
        Schema::new("KycFile")
            .scalar("uploadId")
            .scalar("title")
            .scalar("link")
            .scalar("value")
            .scalar("createdAt")
    }
}

impl Record for AdditionalKycField {
    fn schema() -> Schema {
        Schema::new("AdditionalKycField")
            .scalar("key")
            .scalar("value")
            .scalar("description")
    }
}

impl Record for Address {
    fn schema() -> Schema {
        Schema::new("Address")
            .scalar("firstName")
            .scalar("middleName")
            .scalar("lastName")
            .scalar("dob")
            .scalar("flatNumber")
            .scalar("buildingNumber")
            .scalar("buildingName")
            .scalar("streetLineOne")
            .scalar("streetLineTwo")
            .scalar("country")
            .scalar("state")
            .scalar("city")
            .scalar("zipCode")
            .scalar("phoneNumber")
            .scalar("investorType")
            .scalar("entityTitle")
            .scalar("entityName")
            .scalar("entityCountry")
            .scalar("entityFlatNumber")
            .scalar("entityBuildingNumber")
            .scalar("entityBuildingName")
            .scalar("entityStreetLineOne")
            .scalar("entityStreetLineTwo")
            .scalar("entityCity")
            .scalar("entityState")
            .scalar("entityZipCode")
            .scalar("entityDba")
            .scalar("entityPhoneNumber")
            .list::<AdditionalKycField>("additionalKycFields")
    }
}

impl Record for SaleRound {
    fn schema() -> Schema {
        Schema::new("SaleRound")
            .scalar("name")
            .scalar("acceptedTerms")
            .scalar("paymentAmount")
            .scalar("tokens")
            .scalar("committedAmount")
            .object::<SaleRoundDocument>("documents")
    }
}

impl Record for SaleRoundDocument {
    fn schema() -> Schema {
        Schema::new("SaleRoundDocument")
            .scalar("title")
            .scalar("createdAt")
            .scalar("link")
    }
}

impl Record for AdminParticipantUserWithSaleStatus {
    fn schema() -> Schema {
        Schema::new("AdminParticipantUserWithSaleStatus")
            .scalar("id")
            .scalar("acceptedTerms")
            .scalar("paymentCompleted")
            .scalar("selectedPaymentMethod")
            .scalar("kycStatus")
            .scalar("kycExpirationDate")
            .scalar("paymentAmount")
            .scalar("paymentExpiration")
            .scalar("usdTrackingNumber")
            .scalar("ethPaymentCode")
            .scalar("ethPaymentPayload")
            .scalar("paymentDetailsConfirmed")
            .scalar("updatedAt")
            .object::<User>("userId")
            .scalar_list("participatingRoundIds")
    }
}

impl Record for Round {
    fn schema() -> Schema {
        Schema::new("Round")
            .scalar_list("extraKycCountriesForEntityInvestor")
            .scalar("id")
            .scalar("name")
            .scalar("roundDescription")
            .scalar_list("clearedUsers")
            .scalar("clearanceRequired")
            .scalar("saleCap")
            .scalar("saleCapHit")
            .scalar("saleTermsUri")
            .scalar("startDate")
            .scalar("endDate")
            .scalar("createdAt")
            .scalar("tenant")
            .scalar("tokenContract")
    }
}

impl Record for SaleStatus {
    fn schema() -> Schema {
        Schema::new("SaleStatus")
            .scalar("id")
            .scalar("userId")
            .object::<User>("userObj")
            .scalar("tenantId")
            .scalar("acceptedTerms")
            .list::<EntityRoles>("entityRoles")
            .scalar("minPurchaseAmount")
            .scalar("maxPurchaseAmount")
            .scalar("paymentCompleted")
            .scalar("kycStatus")
            .scalar("kycExpirationDate")
            .scalar("kycOnly")
            .scalar("externalIdentifier")
            .scalar("title")
    }
}

impl Record for EntityRoles {
    fn schema() -> Schema {
        Schema::new("EntityRoles")
            .scalar("entitySaleStatusId")
            .scalar("name")
            .scalar("percentOwnership")
            .scalar("accepted")
            .scalar_list("roles")
            .scalar("entityName")
            .scalar("entityEmail")
            .scalar("inviteDate")
    }
}

impl Record for Account {
    fn schema() -> Schema {
        Schema::new("Account")
            .scalar("id")
            .scalar("address")
            .scalar("name")
            .scalar("chain")
            .scalar("type")
            .scalar("whitelist")
            .scalar("createdAt")
            .scalar("primary")
            .scalar("enabled")
            .scalar("balance")
            .scalar("whitelistRequest")
    }
}

impl Record for ExternalUserLookupResponse {
    fn schema() -> Schema {
        Schema::new("ExternalUserLookupResponse")
            .scalar("status")
            .scalar("message")
            .object::<ExternalUserLookupData>("data")
    }
}

impl Record for ExternalUserLookupData {
    fn schema() -> Schema {
        Schema::new("ExternalUserLookupData")
            .scalar("id")
            .scalar("email")
            .object::<Address>("address")
            .list::<Account>("accounts")
    }
}

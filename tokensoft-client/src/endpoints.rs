//! Query and mutation wrappers.
//!
//! Each method sends one operation with its arguments passed as variables,
//! unwraps the envelope, and shapes the named result to the caller's
//! projection.

use crate::client::{GraphQlRequest, TokensoftClient};
use crate::error::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokensoft_projection::{Projected, Projection, ProjectionResult};
use tokensoft_types::{
    Account, AccountInput, Address, AdminParticipantUserWithSaleStatus,
    ExternalUserLookupResponse, ExternalWhitelistUserInput, ResponseData, Round, SaleStatus, User,
};

/// The user behind the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

/// Search and paging parameters for the admin participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserQuery {
    pub search_value: String,
    pub page: u32,
    pub page_size: u32,
    pub sort_dir: String,
    pub sort_by_column: String,
}

impl Default for AdminUserQuery {
    fn default() -> Self {
        Self {
            search_value: String::new(),
            page: 1,
            page_size: 25,
            sort_dir: "DESC".to_string(),
            sort_by_column: "updatedAt".to_string(),
        }
    }
}

/// One page of the admin participant list.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantPage {
    pub total_users: u64,
    pub users: Vec<Projected<AdminParticipantUserWithSaleStatus>>,
}

impl TokensoftClient {
    /// Returns the id and email of the authenticated user.
    pub async fn current_user(&self) -> ClientResult<CurrentUser> {
        let mut data = self
            .query(GraphQlRequest::new("{ currentUser { id email } }"))
            .await?;
        decode(take(&mut data, "currentUser")?, "currentUser")
    }

    /// Whitelists `address` for the user registered under `email`.
    ///
    /// Returns the whitelisting transaction hash. Superseded by
    /// [`TokensoftClient::whitelist_account`].
    pub async fn authorize_user(&self, email: &str, address: &str) -> ClientResult<String> {
        let request = GraphQlRequest::new(
            "mutation ($email: String!, $address: String!) { \
             whitelistUser(email: $email, address: $address) }",
        )
        .with_variables(json!({ "email": email, "address": address }));

        let mut data = self.query(request).await?;
        decode(take(&mut data, "whitelistUser")?, "whitelistUser")
    }

    /// Lists participants shown on the admin dashboard.
    pub async fn admin_participant_users(
        &self,
        params: &AdminUserQuery,
        projection: &Projection<AdminParticipantUserWithSaleStatus>,
    ) -> ClientResult<ParticipantPage> {
        let request = GraphQlRequest::new(format!(
            "query ($searchValue: String!, $page: String!, $pageSize: String!, \
             $sortDir: String!, $sortByColumn: String!) {{ \
             adminParticipantUsers(searchValue: $searchValue, page: $page, \
             pageSize: $pageSize, sortDir: $sortDir, sortByColumn: $sortByColumn) \
             {{ totalUsers users {} }} }}",
            projection.render()
        ))
        .with_variables(json!({
            "searchValue": params.search_value,
            "page": params.page.to_string(),
            "pageSize": params.page_size.to_string(),
            "sortDir": params.sort_dir,
            "sortByColumn": params.sort_by_column,
        }));

        let mut data = self.query(request).await?;
        let page = take(&mut data, "adminParticipantUsers")?;

        let total_users = page
            .get("totalUsers")
            .and_then(total_count)
            .ok_or_else(|| {
                ClientError::Protocol("adminParticipantUsers.totalUsers missing".to_string())
            })?;
        let users = match page.get("users") {
            None | Some(Value::Null) => Vec::new(),
            Some(users) => {
                shaped(projection.project_list(users), "adminParticipantUsers.users")?
            }
        };

        Ok(ParticipantPage { total_users, users })
    }

    /// Looks up a user by id.
    pub async fn get_user_by_id(
        &self,
        id: &str,
        projection: &Projection<User>,
    ) -> ClientResult<Option<Projected<User>>> {
        let request = GraphQlRequest::new(format!(
            "query ($id: String!) {{ user(id: $id) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "id": id }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "user")?;
        shaped(projection.project_optional(&result), "user")
    }

    /// Looks up a user by email.
    pub async fn get_user_by_email(
        &self,
        email: &str,
        projection: &Projection<User>,
    ) -> ClientResult<Option<Projected<User>>> {
        let request = GraphQlRequest::new(format!(
            "query ($email: String!) {{ userEmailLookup(email: $email) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "email": email }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "userEmailLookup")?;
        shaped(projection.project_optional(&result), "userEmailLookup")
    }

    /// Registers `email` without whitelisting it. Fails if the email is
    /// already registered.
    pub async fn create_unregistered_user(
        &self,
        email: &str,
        projection: &Projection<User>,
    ) -> ClientResult<Projected<User>> {
        let request = GraphQlRequest::new(format!(
            "mutation createUnregisteredUser($email: String!) {{ \
             createUnregisteredUser(email: $email) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "email": email }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "createUnregisteredUser")?;
        shaped(projection.project(&result), "createUnregisteredUser")
    }

    /// Replaces the KYC address details of a user.
    pub async fn update_user_details(
        &self,
        user_id: &str,
        address: &Address,
        projection: &Projection<User>,
    ) -> ClientResult<Projected<User>> {
        let request = GraphQlRequest::new(format!(
            "mutation updateUserDetails($id: String!, $address: Address!) {{ \
             updateUserDetails(id: $id, address: $address) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "id": user_id, "address": address }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "updateUserDetails")?;
        shaped(projection.project(&result), "updateUserDetails")
    }

    /// Lists the sale rounds of the security this key belongs to.
    pub async fn get_rounds(
        &self,
        projection: &Projection<Round>,
    ) -> ClientResult<Vec<Projected<Round>>> {
        let request =
            GraphQlRequest::new(format!("query {{ getRounds {} }}", projection.render()));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "getRounds")?;
        shaped(projection.project_list(&result), "getRounds")
    }

    /// Returns a user's sale status for one round.
    pub async fn find_sale_status_from_user_email(
        &self,
        email: &str,
        round_id: &str,
        projection: &Projection<SaleStatus>,
    ) -> ClientResult<Option<Projected<SaleStatus>>> {
        let request = GraphQlRequest::new(format!(
            "query ($email: String!, $roundId: String!) {{ \
             findSaleStatusFromUserEmail(email: $email, roundId: $roundId) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "email": email, "roundId": round_id }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "findSaleStatusFromUserEmail")?;
        shaped(projection.project_optional(&result), "findSaleStatusFromUserEmail")
    }

    /// Looks up the user owning an Ethereum address.
    pub async fn find_user_by_eth_address(
        &self,
        address: &str,
        projection: &Projection<User>,
    ) -> ClientResult<Option<Projected<User>>> {
        let request = GraphQlRequest::new(format!(
            "query ($addr: String!) {{ findUserByEthAddress(address: $addr) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "addr": address }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "findUserByEthAddress")?;
        shaped(projection.project_optional(&result), "findUserByEthAddress")
    }

    /// Lists the accounts attached to a sale status for one token.
    pub async fn get_accounts(
        &self,
        sale_status_id: &str,
        token_contract_id: &str,
        projection: &Projection<Account>,
    ) -> ClientResult<Vec<Projected<Account>>> {
        let request = GraphQlRequest::new(format!(
            "query ($saleStatusId: String!, $tokenContractId: String!) {{ \
             getAccounts(saleStatusId: $saleStatusId, tokenContractId: $tokenContractId) {} }}",
            projection.render()
        ))
        .with_variables(json!({
            "saleStatusId": sale_status_id,
            "tokenContractId": token_contract_id,
        }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "getAccounts")?;
        shaped(projection.project_list(&result), "getAccounts")
    }

    /// Lists every account of a user, across tokens.
    pub async fn get_user_accounts(
        &self,
        user_id: &str,
        projection: &Projection<Account>,
    ) -> ClientResult<Vec<Projected<Account>>> {
        let request = GraphQlRequest::new(format!(
            "query ($userId: String!) {{ getUserAccounts(id: $userId) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "userId": user_id }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "getUserAccounts")?;
        shaped(projection.project_list(&result), "getUserAccounts")
    }

    /// Registers a token-holding account (usually an Ethereum wallet).
    pub async fn add_account(
        &self,
        account: &AccountInput,
        projection: &Projection<Account>,
    ) -> ClientResult<Projected<Account>> {
        let request = GraphQlRequest::new(format!(
            "mutation ($account: AccountInputType!) {{ addAccount(account: $account) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "account": account }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "addAccount")?;
        shaped(projection.project(&result), "addAccount")
    }

    /// Requests whitelisting of an account for a token.
    ///
    /// Returns the hash of the first whitelisting transaction. That
    /// transaction may be dropped or replaced; `webhook_url`, when given,
    /// receives the final status.
    pub async fn whitelist_account(
        &self,
        account_id: &str,
        token_contract_id: &str,
        webhook_url: Option<&str>,
    ) -> ClientResult<String> {
        let request = GraphQlRequest::new(
            "mutation ($accountId: String!, $tokenContractId: String!, $webhookUrl: String) { \
             whitelistUser(accountId: $accountId, tokenContractId: $tokenContractId, \
             callback: $webhookUrl) }",
        )
        .with_variables(json!({
            "accountId": account_id,
            "tokenContractId": token_contract_id,
            "webhookUrl": webhook_url,
        }));

        let mut data = self.query(request).await?;
        decode(take(&mut data, "whitelistUser")?, "whitelistUser")
    }

    /// Submits investor data and whitelists their account in one call.
    /// Safe to repeat with the same input.
    pub async fn external_whitelist_user(
        &self,
        input: &ExternalWhitelistUserInput,
        projection: &Projection<ExternalUserLookupResponse>,
    ) -> ClientResult<Projected<ExternalUserLookupResponse>> {
        let request = GraphQlRequest::new(format!(
            "mutation ($input: ExternalWhitelistUserInput!) {{ \
             externalWhitelistUser(input: $input) {} }}",
            projection.render()
        ))
        .with_variables(json!({ "input": input }));

        let mut data = self.query(request).await?;
        let result = take(&mut data, "externalWhitelistUser")?;
        shaped(projection.project(&result), "externalWhitelistUser")
    }
}

/// Removes the named result from the response data.
fn take(data: &mut ResponseData, name: &str) -> ClientResult<Value> {
    data.remove(name)
        .ok_or_else(|| ClientError::Protocol(format!("response is missing `{name}`")))
}

/// A result that is present but not the shape its projection expects.
fn shaped<T>(result: ProjectionResult<T>, name: &str) -> ClientResult<T> {
    result.map_err(|e| ClientError::Protocol(format!("unexpected `{name}` result: {e}")))
}

fn decode<T: DeserializeOwned>(value: Value, name: &str) -> ClientResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::Protocol(format!("unexpected `{name}` result: {e}")))
}

/// `totalUsers` comes back as a number or a numeric string.
fn total_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

//! Signed client for the Tokensoft investor API.
//!
//! Every call is a JSON query posted to a single endpoint and authenticated
//! with three headers:
//! - `access-key`: the API key id
//! - `access-timestamp`: the server's current time in milliseconds
//! - `access-sign`: hex HMAC-SHA256 of the timestamp followed by the body
//!
//! The server time is probed with an unsigned `{ time }` query and then
//! extrapolated locally until the observation expires (see [`TimeSync`]).
//!
//! Replies are unwrapped with [`unwrap_response`]: an envelope that reports
//! errors and has missing data becomes a [`ClientError::Api`], anything else
//! yields the data.
//!
//! Transfer-restriction checks against ERC-1404 token contracts live in
//! [`eth`] and need a caller-supplied [`ContractProvider`].
//!
//! # Example
//!
//! ```no_run
//! use tokensoft_client::{ClientConfig, FieldSet, Projection, TokensoftClient, User};
//!
//! # async fn run() -> tokensoft_client::ClientResult<()> {
//! let client = TokensoftClient::new(ClientConfig::from_env()?)?;
//!
//! let projection = Projection::<User>::new(FieldSet::new().include("id").include("email"))?;
//! if let Some(user) = client.get_user_by_email("investor@example.com", &projection).await? {
//!     println!("{:?}", user.get::<String>("id")?);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod clock;
mod config;
mod endpoints;
mod error;
pub mod eth;
mod signer;
mod time_sync;
mod transport;
mod unwrap;

pub use client::{GraphQlRequest, TokensoftClient};
pub use clock::{Clock, SystemClock};
pub use config::{
    ClientConfig, ClientOptions, DEFAULT_MAX_TIME_CACHE_AGE_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use endpoints::{AdminUserQuery, CurrentUser, ParticipantPage};
pub use error::{ClientError, ClientResult};
pub use eth::{Contract, ContractProvider, TransferRestriction};
pub use signer::{
    sign, RequestSigner, ACCESS_KEY_HEADER, ACCESS_SIGN_HEADER, ACCESS_TIMESTAMP_HEADER,
};
pub use time_sync::{TimeCache, TimeSync};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
pub use unwrap::unwrap_response;

pub use tokensoft_projection::{FieldSet, Projected, Projection, ProjectionError, Selection};
pub use tokensoft_types::*;

//! Field projections for the Tokensoft API.
//!
//! A projection declares which fields of a record a caller wants back. The
//! same declaration drives both sides of a call:
//! - [`FieldSet::render`] turns it into a query-language selection set
//!   (`{ email,address { country } }`)
//! - [`Projection::project`] shapes a returned value so that it carries
//!   exactly the selected keys, recursing through nested objects and lists
//!
//! Projections are checked against a [`Schema`] registered per record type
//! through the [`Record`] trait, so a selection naming a field the record does
//! not have is rejected before any request is sent.
//!
//! # Example
//!
//! ```
//! use tokensoft_projection::{FieldSet, Projection};
//! use tokensoft_types::User;
//!
//! let fields = FieldSet::new()
//!     .skip("id")
//!     .include("email")
//!     .nest("address", FieldSet::new().include("country"));
//!
//! let projection = Projection::<User>::new(fields).unwrap();
//! assert_eq!(projection.render(), "{ email,address { country } }");
//! ```

mod error;
mod field_set;
mod projection;
mod records;
mod schema;

pub use error::{ProjectionError, ProjectionResult};
pub use field_set::{FieldSet, Selection};
pub use projection::{Projected, Projection};
pub use schema::{FieldKind, Record, Schema};

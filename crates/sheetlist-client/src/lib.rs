#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod records;
mod types;

pub use crate::auth::{CachedToken, TokenManager};
pub use crate::endpoints::Endpoints;
pub use crate::error::ClientError;
pub use crate::records::RecordClient;
pub use sheetlist_core::{
    AddressingContext, CredentialRecord, CredentialSource, Item, MemorySource, NewItem,
};

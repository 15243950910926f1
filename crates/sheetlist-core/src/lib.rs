#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod constants;
pub mod credentials;
pub mod models;
pub mod source;

pub use crate::constants::*;
pub use crate::credentials::*;
pub use crate::models::*;
pub use crate::source::*;

#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod assertion;
pub mod encoding;

pub use crate::assertion::*;
pub use crate::encoding::*;

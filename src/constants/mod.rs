//! Application constants module.
//!
//! Centralizes the response strings and collection names used by the users API.

pub mod collections;
pub mod errors;
pub mod messages;

pub use collections::*;
pub use errors::*;
pub use messages::*;

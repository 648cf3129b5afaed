//! Input validation helpers shared by the service layer.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;

//! Data Transfer Objects for the controller admin API
//!
//! Wire-level request/response bodies that do not map one-to-one onto a
//! domain entity. Everything else on the API transfers the domain types
//! from [`crate::domain`] directly.

pub mod admin;
pub mod device;

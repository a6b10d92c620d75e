//! Shared domain types for the Bookstall mock API.
//!
//! Holds the catalog fixtures served by the API server, the coin record
//! used by the demo material, and the domain error type.

pub mod catalog;
pub mod coin;
pub mod error;

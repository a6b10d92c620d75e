//! `bookstall-client` -- command-line client for the Bookstall mock API.
//!
//! Issues single fire-and-forget requests against a running server and
//! logs what comes back: streamed body chunks for GETs, status and
//! headers for uploads.

pub mod api;

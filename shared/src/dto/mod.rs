//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the remote shop API over JSON/HTTP.
//!
//! All entities here are owned by the server; the client only ever holds
//! transient read copies (the bearer token being the one locally-owned piece
//! of state, managed outside this crate).

pub mod account;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod koi;

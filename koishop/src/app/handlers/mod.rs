//! # User Action Handlers
//!
//! One module per concern: auth forms, navigation, catalog fetches and
//! filters, account operations, comment posting, and the cart.

pub(crate) mod account;
pub(crate) mod auth;
pub(crate) mod cart;
pub(crate) mod catalog;
pub(crate) mod comment;
pub(crate) mod navigation;

//! Utility functions shared across the app layer.

pub mod validation;

//! Utility functions for input normalization and request handling.
//!
//! - [`label`] - Label title normalization and tag list handling
//! - [`url_validator`] - Link URL validation
//! - [`extract_user`] - Acting user id extraction from HTTP headers

pub mod extract_user;
pub mod label;
pub mod url_validator;

//! Utility modules for the Classhub API.
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: Session token minting and validation
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;

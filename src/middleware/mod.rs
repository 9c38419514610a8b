//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the token and yields claims
//! 3. The handler decides what the role and school binding allow
//!
//! Which roles may reach which route is the route's own policy; the
//! extractor only guarantees the claims are genuine and unexpired.

pub mod auth;

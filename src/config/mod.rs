//! Configuration modules for the Classhub API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and carried in the application
//! state. Nothing reads configuration as ambient global state afterwards.
//!
//! - [`bootstrap`]: Super admin account seeded at startup
//! - [`cors`]: CORS allowed origins for the dashboard
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: Signing secret, token lifetime, and bcrypt cost

pub mod bootstrap;
pub mod cors;
pub mod database;
pub mod jwt;

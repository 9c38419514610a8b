pub mod model;
pub mod store;

pub use model::{Account, AccountStatus, UserRole};
pub use store::{AccountStore, PgAccountStore};

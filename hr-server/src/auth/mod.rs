//! Authentication module
//!
//! JWT token service, password storage tagging and the request extractor.

mod extractor;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use password::{StoredPassword, hash_password};

//! # Signet Models
//!
//! Domain models and DTOs for the Signet API.
//!
//! # Modules
//!
//! - [`auth`]: registration, login and health DTOs
//! - [`users`]: stored user records and their public projection
//! - [`value_types`]: validated newtypes such as [`Email`]

pub mod auth;
pub mod users;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    Confirmation, ErrorResponse, HealthResponse, LoginRequest, LoginResponse, RegisterRequest,
};
pub use users::{NewUser, User, UserRecord};
pub use value_types::{Email, ValueTypeError};

//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: the [`auth::AuthUser`] bearer-token extractor
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn profile(AuthUser(user): AuthUser) -> Json<User> {
//!     Json(user)
//! }
//! ```

pub mod auth;

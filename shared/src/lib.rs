//! Shared types for the café client
//!
//! Wire types used by any front end talking to the café service:
//! entities, create/update payloads and list-response envelopes.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Category, Product, ProductCreate, ProductUpdate, Usuario};
pub use response::{CategoriesResponse, LoginResponse};

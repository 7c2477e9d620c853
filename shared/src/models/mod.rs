//! Entity models
//!
//! Field names follow the service's wire format (Spanish identifiers,
//! Mongo-style `_id`); the Rust side keeps English names via serde renames.

pub mod category;
pub mod product;
pub mod usuario;

pub use category::Category;
pub use product::{Product, ProductCreate, ProductUpdate};
pub use usuario::Usuario;

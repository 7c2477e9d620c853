//! Café Client - product edit orchestration for the café service
//!
//! Provides the authenticated HTTP gateway, the generic editable-form
//! state container and the edit-session orchestrator that sequences
//! load → populate → create/update → photo upload. Screen layout and
//! navigation live elsewhere; they call into this crate and render
//! whatever state it exposes.

pub mod auth;
pub mod categories;
pub mod config;
pub mod credential;
pub mod error;
pub mod form;
pub mod gateway;
pub mod picker;
pub mod session;

pub use auth::AuthApi;
pub use categories::CategoryDirectory;
pub use config::ClientConfig;
pub use credential::{CredentialStore, MemoryTokenStore, TokenStore};
pub use error::{ClientError, ClientResult};
pub use form::{FormError, FormState};
pub use gateway::Gateway;
pub use picker::{ImagePicker, ImageSource, Pick};
pub use session::{EditMode, EditSession, PhotoOutcome, SaveOutcome, SessionState};

// Re-export shared types for convenience
pub use shared::{CategoriesResponse, Category, LoginResponse, Product, ProductCreate, ProductUpdate};

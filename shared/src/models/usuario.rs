//! User Model

use serde::{Deserialize, Serialize};

/// User entity, as returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
}

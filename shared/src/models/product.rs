//! Product Model

use serde::{Deserialize, Serialize};

use super::Category;

/// Product entity
///
/// Reads come back with the category populated as a full object;
/// writes only carry the category id (see [`ProductCreate`] /
/// [`ProductUpdate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Category reference, populated by the service
    #[serde(rename = "categoria")]
    pub category: Category,
    /// Image URL, absent until a photo has been uploaded
    #[serde(rename = "img", default)]
    pub image: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    /// Category reference (String ID, required)
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

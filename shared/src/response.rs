//! List and auth response envelopes
//!
//! The café service wraps collections in an envelope carrying the
//! collection under a Spanish plural key, plus an optional total.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Usuario};

/// `GET /categorias` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub total: Option<i64>,
    pub categorias: Vec<Category>,
}

/// `POST /auth/login` and `POST /usuarios` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub usuario: Usuario,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductCreate};

    #[test]
    fn test_category_wire_names() {
        let json = r#"{"total": 2, "categorias": [
            {"_id": "c1", "nombre": "Bebidas"},
            {"_id": "c2", "nombre": "Postres"}
        ]}"#;

        let resp: CategoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total, Some(2));
        assert_eq!(resp.categorias[0].id, "c1");
        assert_eq!(resp.categorias[1].name, "Postres");
    }

    #[test]
    fn test_product_image_defaults_to_none() {
        let json = r#"{"_id": "p1", "nombre": "Latte",
            "categoria": {"_id": "c1", "nombre": "Bebidas"}}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.category.id, "c1");
        assert!(product.image.is_none());
    }

    #[test]
    fn test_product_create_serializes_spanish_keys() {
        let payload = ProductCreate {
            category: "c1".to_string(),
            name: "Latte".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["categoria"], "c1");
        assert_eq!(json["nombre"], "Latte");
    }
}

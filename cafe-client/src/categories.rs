//! Category directory loader
//!
//! One-shot fetch of the category list, in service order. A failed
//! fetch degrades to an empty list with a logged warning; the caller is
//! never blocked on it. Each `load` re-fetches, nothing is cached
//! across activations.

use shared::{CategoriesResponse, Category};

use crate::Gateway;

/// Read-only category reference data for an edit session
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    is_loading: bool,
    categories: Vec<Category>,
}

impl CategoryDirectory {
    /// Create an empty directory, in the loading state
    pub fn new() -> Self {
        Self {
            is_loading: true,
            categories: Vec::new(),
        }
    }

    /// Fetch the category collection through the gateway
    pub async fn load(&mut self, gateway: &Gateway) {
        self.is_loading = true;
        match gateway.get::<CategoriesResponse>("categorias").await {
            Ok(response) => {
                self.categories = response.categorias;
            }
            Err(e) => {
                tracing::warn!("Failed to load categories: {}", e);
                self.categories.clear();
            }
        }
        self.is_loading = false;
    }

    /// True until the first response (or failure) has been seen
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Categories as returned by the service, order preserved
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// First category, the create-branch default
    pub fn first(&self) -> Option<&Category> {
        self.categories.first()
    }
}

impl Default for CategoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

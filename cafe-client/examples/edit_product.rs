// cafe-client/examples/edit_product.rs
// Walk through a full edit session against a running café service.

use std::path::PathBuf;
use std::sync::Arc;

use cafe_client::{
    AuthApi, CategoryDirectory, ClientConfig, CredentialStore, EditSession, Gateway, ImagePicker,
    ImageSource, Pick,
};

/// Picker that always "selects" a file named on the command line
struct FilePicker {
    path: Option<PathBuf>,
}

#[async_trait::async_trait]
impl ImagePicker for FilePicker {
    async fn acquire(&self, _source: ImageSource) -> Pick {
        match &self.path {
            Some(path) => Pick::Selected(path.clone()),
            None => Pick::Cancelled,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password> [product_id] [image_path]", args[0]);
        println!("  Example: {} test@cafe.com 123456 '' ./foto.jpg", args[0]);
        return Ok(());
    }

    let base_url =
        std::env::var("CAFE_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let cred_path = std::env::var("CAFE_CRED_PATH").unwrap_or_else(|_| "./.cafe".to_string());

    let store = Arc::new(CredentialStore::new(cred_path, "credential.json"));
    let gateway = Gateway::new(&ClientConfig::new(&base_url), store.clone());

    // Sign in and persist the token for every following request
    let auth = AuthApi::new(gateway.clone());
    let usuario = auth.sign_in(&args[1], &args[2]).await?;
    tracing::info!("Signed in as {}", usuario.name);

    // Reference data for the category picker
    let mut categories = CategoryDirectory::new();
    categories.load(&gateway).await;
    tracing::info!("{} categories available", categories.categories().len());

    // Empty id → create; non-empty → update
    let product_id = args.get(3).cloned().unwrap_or_default();
    let mut session = EditSession::enter(&product_id, "Producto de ejemplo");
    session.load(&gateway).await;

    let outcome = session.save_or_update(&gateway, &categories).await?;
    tracing::info!("{}: {}", outcome.title(), outcome.notice());

    // Attach a photo when one was given
    let picker = FilePicker {
        path: args.get(4).map(PathBuf::from),
    };
    match session.attach_photo(&gateway, &picker, ImageSource::Gallery).await {
        Ok(outcome) => {
            if let Some(notice) = outcome.notice() {
                tracing::info!("{}", notice);
            }
            session.await_upload().await;
        }
        Err(e) => tracing::warn!("No photo attached: {}", e),
    }

    Ok(())
}

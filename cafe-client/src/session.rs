//! Product edit session orchestrator
//!
//! One session covers one edit screen activation: load the existing
//! record when an id was supplied, hold the editable fields, branch
//! create/update on save, and run the photo capture/upload sub-flow.
//! Confirmations are optimistic: the user is informed once a save or
//! upload has been dispatched, and actual failures are logged rather
//! than surfaced (the service's word is not awaited for the UI).

use std::collections::BTreeMap;
use std::path::PathBuf;

use shared::{Product, ProductCreate, ProductUpdate};
use tokio::task::JoinHandle;

use crate::{
    CategoryDirectory, ClientError, ClientResult, FormState, Gateway, ImagePicker, ImageSource,
    Pick,
};

/// Form field names used by the product edit screen
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_CATEGORY: &str = "categoryId";
pub const FIELD_IMAGE: &str = "imageUrl";

/// Create vs. update, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// No id supplied at entry; the record does not exist yet
    Create,
    /// Editing an existing record
    Update,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before entry
    Idle,
    /// Initial record fetch in flight (update mode only)
    Loading,
    /// Form editable, save available
    Ready,
    /// Save request in flight
    Saving,
    /// Save dispatched and confirmed to the user
    Done,
}

/// Terminal save result, carrying the user-facing confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    /// Confirmation dialog title
    pub fn title(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "Registrar",
            SaveOutcome::Updated => "Actualizar",
        }
    }

    /// Confirmation notice shown to the user
    pub fn notice(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "Datos registrados correctamente",
            SaveOutcome::Updated => "Datos actualizados correctamente",
        }
    }
}

/// Result of one photo capture attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOutcome {
    /// Picker was dismissed; nothing changed
    Cancelled,
    /// Upload dispatched; `preview` renders while it runs
    Uploading { preview: PathBuf },
}

impl PhotoOutcome {
    /// Confirmation notice shown once the upload has been dispatched
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            PhotoOutcome::Cancelled => None,
            PhotoOutcome::Uploading { .. } => Some("Foto subida correctamente"),
        }
    }
}

/// One product edit session
pub struct EditSession {
    mode: EditMode,
    state: SessionState,
    form: FormState<String>,
    local_image_uri: Option<PathBuf>,
    upload_task: Option<JoinHandle<()>>,
}

impl EditSession {
    /// Enter the edit flow
    ///
    /// An empty `id` starts a create session, immediately ready with
    /// default fields. A non-empty `id` starts an update session that
    /// still needs [`EditSession::load`].
    pub fn enter(id: &str, name: &str) -> Self {
        let form = FormState::new([
            (FIELD_ID, id.to_string()),
            (FIELD_CATEGORY, String::new()),
            (FIELD_NAME, name.to_string()),
            (FIELD_IMAGE, String::new()),
        ]);

        let (mode, state) = if id.is_empty() {
            (EditMode::Create, SessionState::Ready)
        } else {
            (EditMode::Update, SessionState::Loading)
        };

        Self {
            mode,
            state,
            form,
            local_image_uri: None,
            upload_task: None,
        }
    }

    /// Fetch the record under edit and populate the form
    ///
    /// Create sessions have nothing to load. A miss or transport
    /// failure leaves the form at its defaults and the session ready;
    /// the user is never blocked on the initial load.
    pub async fn load(&mut self, gateway: &Gateway) {
        if self.mode == EditMode::Create || self.state != SessionState::Loading {
            return;
        }

        let id = self.field(FIELD_ID);
        match gateway.get::<Product>(&format!("productos/{}", id)).await {
            Ok(product) => {
                // The display name keeps its entry-time value; only the
                // category and image are refreshed from the record.
                let mut snapshot: BTreeMap<String, String> = self.form.snapshot();
                snapshot.insert(FIELD_CATEGORY.to_string(), product.category.id);
                snapshot.insert(FIELD_IMAGE.to_string(), product.image.unwrap_or_default());
                if let Err(e) = self.form.replace_all(snapshot) {
                    tracing::warn!("Failed to populate form from product {}: {}", id, e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load product {}, editing a blank form: {}", id, e);
            }
        }
        self.state = SessionState::Ready;
    }

    /// Save the form: PUT for update sessions, POST for create sessions
    ///
    /// A create session without a user-chosen category falls back to
    /// the first entry of the category directory; with no categories at
    /// all the save is rejected before any request goes out. A created
    /// record's new id is written back into the form so the photo
    /// sub-flow can target it.
    pub async fn save_or_update(
        &mut self,
        gateway: &Gateway,
        categories: &CategoryDirectory,
    ) -> ClientResult<SaveOutcome> {
        if self.state != SessionState::Ready {
            return Err(ClientError::InvalidState(format!(
                "save requires a ready session, state is {:?}",
                self.state
            )));
        }
        self.state = SessionState::Saving;

        let name = self.field(FIELD_NAME);
        let chosen_category = self.field(FIELD_CATEGORY);

        match self.mode {
            EditMode::Update => {
                let id = self.field(FIELD_ID);
                let payload = ProductUpdate {
                    category: chosen_category,
                    name,
                };
                if let Err(e) = gateway
                    .put::<Product, _>(&format!("productos/{}", id), &payload)
                    .await
                {
                    tracing::warn!("Update of product {} not confirmed: {}", id, e);
                }
                self.state = SessionState::Done;
                Ok(SaveOutcome::Updated)
            }
            EditMode::Create => {
                let category = if !chosen_category.is_empty() {
                    chosen_category
                } else {
                    match categories.first() {
                        Some(first) => first.id.clone(),
                        None => {
                            self.state = SessionState::Ready;
                            return Err(ClientError::EmptyCategoryList);
                        }
                    }
                };

                let payload = ProductCreate { category, name };
                match gateway.post::<Product, _>("productos", &payload).await {
                    Ok(created) => {
                        self.form.set(created.id, FIELD_ID)?;
                    }
                    Err(e) => {
                        tracing::warn!("Create not confirmed, no id assigned: {}", e);
                    }
                }
                self.state = SessionState::Done;
                Ok(SaveOutcome::Created)
            }
        }
    }

    /// Run one photo capture/upload sub-flow
    ///
    /// Only available once the record exists (non-empty id, session
    /// ready or done). Cancellation changes nothing. A selection
    /// records the preview immediately and dispatches the upload on a
    /// background task; its outcome is logged, never awaited by the
    /// caller. A second capture while an upload is still running is
    /// rejected.
    pub async fn attach_photo(
        &mut self,
        gateway: &Gateway,
        picker: &dyn ImagePicker,
        source: ImageSource,
    ) -> ClientResult<PhotoOutcome> {
        let id = self.field(FIELD_ID);
        if id.is_empty() {
            return Err(ClientError::InvalidState(
                "photo upload requires a saved product".to_string(),
            ));
        }
        if !matches!(self.state, SessionState::Ready | SessionState::Done) {
            return Err(ClientError::InvalidState(format!(
                "photo capture not available in state {:?}",
                self.state
            )));
        }
        if let Some(task) = &self.upload_task {
            if !task.is_finished() {
                return Err(ClientError::UploadInFlight);
            }
        }

        match picker.acquire(source).await {
            Pick::Cancelled => Ok(PhotoOutcome::Cancelled),
            Pick::Selected(path) => {
                self.local_image_uri = Some(path.clone());

                let gateway = gateway.clone();
                let preview = path.clone();
                let product_id = id;
                self.upload_task = Some(tokio::spawn(async move {
                    match gateway.upload_image(&product_id, &path).await {
                        Ok(()) => tracing::info!("Image uploaded for product {}", product_id),
                        Err(e) => {
                            tracing::warn!("Image upload for product {} failed: {}", product_id, e)
                        }
                    }
                }));

                Ok(PhotoOutcome::Uploading { preview })
            }
        }
    }

    /// Wait for a dispatched upload task to finish
    ///
    /// The upload never gates any confirmation; this only exists so a
    /// caller tearing the session down (or a test) can drain it.
    pub async fn await_upload(&mut self) {
        if let Some(task) = self.upload_task.take() {
            let _ = task.await;
        }
    }

    /// Session mode, fixed at entry
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The editable form
    pub fn form(&self) -> &FormState<String> {
        &self.form
    }

    /// Mutable access for field edits coming from the screen
    pub fn form_mut(&mut self) -> &mut FormState<String> {
        &mut self.form
    }

    /// Local preview image, set as soon as a capture succeeds
    pub fn local_image_uri(&self) -> Option<&PathBuf> {
        self.local_image_uri.as_ref()
    }

    /// True while an upload task is still running
    pub fn is_upload_pending(&self) -> bool {
        self.upload_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn field(&self, name: &str) -> String {
        self.form
            .current(name)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_with_empty_id_is_create_and_ready() {
        let session = EditSession::enter("", "Latte");
        assert_eq!(session.mode(), EditMode::Create);
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.form().current(FIELD_NAME).unwrap(), "Latte");
        assert_eq!(session.form().current(FIELD_ID).unwrap(), "");
    }

    #[test]
    fn test_enter_with_id_is_update_and_loading() {
        let session = EditSession::enter("p9", "Latte");
        assert_eq!(session.mode(), EditMode::Update);
        assert_eq!(session.state(), SessionState::Loading);
        assert_eq!(session.form().current(FIELD_ID).unwrap(), "p9");
    }

    #[test]
    fn test_fixed_field_set() {
        let session = EditSession::enter("", "");
        let keys: Vec<_> = session.form().keys().collect();
        assert_eq!(keys, vec![FIELD_CATEGORY, FIELD_ID, FIELD_IMAGE, FIELD_NAME]);
    }

    #[test]
    fn test_outcome_wording_differs() {
        assert_ne!(SaveOutcome::Created.notice(), SaveOutcome::Updated.notice());
        assert_ne!(SaveOutcome::Created.title(), SaveOutcome::Updated.title());
        assert!(PhotoOutcome::Cancelled.notice().is_none());
    }
}

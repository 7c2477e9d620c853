//! Image acquisition seam
//!
//! Camera and gallery are platform capabilities the orchestrator
//! invokes identically; both hand back either a cancellation or the
//! local path of the chosen image. The platform shell provides the
//! implementation; tests use scripted ones.

use std::path::PathBuf;

use async_trait::async_trait;

/// Where the image comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Capture device
    Camera,
    /// Local media library
    Gallery,
}

/// Result of one acquisition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// User backed out; nothing changes
    Cancelled,
    /// Local locator of the chosen image
    Selected(PathBuf),
}

/// Platform image picker
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Acquire an image from `source`
    async fn acquire(&self, source: ImageSource) -> Pick;
}

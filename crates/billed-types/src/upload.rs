use serde::{Deserialize, Serialize};

/// A file selected for attachment, as handed to the creation container.
///
/// Carries the original filename (extension checks run against it), the
/// declared media type and the raw bytes a backend would receive as
/// multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileSelection {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        FileSelection {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Filename extension, lowercased. Empty when there is none.
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// Payload for the file-upload entry point: the selection plus the owner
/// email, sent together as one multipart request.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub email: String,
    pub selection: FileSelection,
}

/// What the upload entry point returns on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Public URL of the stored attachment.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Backend storage key for the attachment.
    pub key: String,
}

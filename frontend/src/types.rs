//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Selected files and their icons
//! - **Submission Types** - Form state and multipart payload
//! - **HTTP Types** - Raw responses from the processing service
//! - **Error Types** - Frontend error handling

use thiserror::Error;

use crate::config::{FAILURE_MESSAGE, VALIDATION_MESSAGE};

// =============================================================================
// File Types
// =============================================================================

/// A file handle that can report its display name.
///
/// Implemented for `web_sys::File` in the browser and by in-memory
/// fakes in tests.
pub trait NamedFile {
    /// Name shown in the file list and sent as the part's filename.
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Identity of a selected file.
///
/// Two files with the same name are still distinct selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u64);

/// A user-chosen file in the selection list.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    id: FileId,
    name: String,
    file: F,
}

impl<F> SelectedFile<F> {
    pub(crate) fn new(id: FileId, name: String, file: F) -> Self {
        Self { id, name, file }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    /// Icon matching this file's extension.
    pub fn icon(&self) -> FileIcon {
        FileIcon::for_filename(&self.name)
    }
}

/// Icon category of a file, derived from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Image,
    Text,
    Generic,
}

impl FileIcon {
    /// Map a filename to its icon.
    ///
    /// Only the text after the last `.` is considered, compared
    /// case-insensitively. A name without a dot is its own "extension"
    /// and ends up as [`FileIcon::Generic`].
    pub fn for_filename(name: &str) -> Self {
        let extension = name.rsplit('.').next().unwrap_or(name).to_lowercase();
        match extension.as_str() {
            "pdf" => FileIcon::Pdf,
            "doc" | "docx" => FileIcon::Word,
            "xls" | "xlsx" => FileIcon::Excel,
            "ppt" | "pptx" => FileIcon::PowerPoint,
            "jpg" | "jpeg" | "png" => FileIcon::Image,
            "txt" => FileIcon::Text,
            _ => FileIcon::Generic,
        }
    }

    /// Get Font Awesome class for display.
    pub fn css_class(&self) -> &'static str {
        match self {
            FileIcon::Pdf => "fas fa-file-pdf",
            FileIcon::Word => "fas fa-file-word",
            FileIcon::Excel => "fas fa-file-excel",
            FileIcon::PowerPoint => "fas fa-file-powerpoint",
            FileIcon::Image => "fas fa-file-image",
            FileIcon::Text => "fas fa-file-alt",
            FileIcon::Generic => "fas fa-file",
        }
    }
}

// =============================================================================
// Submission Types
// =============================================================================

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A request is running; the submit control is disabled.
    Submitting,
    /// The last request succeeded and its result was downloaded.
    Completed {
        /// Name the result was saved under
        filename: String,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SubmissionState::Completed { .. })
    }
}

/// One named part of a multipart request body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart<F> {
    /// A file upload part.
    File {
        field: &'static str,
        filename: String,
        file: F,
    },
    /// A plain text part.
    Text { field: &'static str, value: String },
}

/// An ordered multipart payload, independent of the browser's `FormData`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartForm<F> {
    parts: Vec<FormPart<F>>,
}

impl<F> MultipartForm<F> {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn file(mut self, field: &'static str, filename: impl Into<String>, file: F) -> Self {
        self.parts.push(FormPart::File {
            field,
            filename: filename.into(),
            file,
        });
        self
    }

    pub fn text(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            field,
            value: value.into(),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    /// Number of file parts.
    pub fn file_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, FormPart::File { .. }))
            .count()
    }
}

impl<F> Default for MultipartForm<F> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HTTP Types
// =============================================================================

/// Response of the processing service, before any interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the `content-disposition` header, if present
    pub content_disposition: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A result file handed to the download sink.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedFile {
    pub filename: String,
    pub size: usize,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Missing files or instruction.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A submission is already running.
    #[error("A submission is already in progress")]
    InFlight,

    /// Network failure or non-success HTTP status.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response could not be interpreted.
    #[error("Invalid response: {0}")]
    ResponseFormat(String),

    /// The browser refused to save the result.
    #[error("Download error: {0}")]
    Download(String),

    /// The form was unmounted while a request was running.
    #[error("Upload form is no longer mounted")]
    Detached,
}

impl AppError {
    /// Message shown to the user in an alert.
    ///
    /// Only validation failures get their own wording; every other
    /// failure surfaces as the same generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => VALIDATION_MESSAGE,
            _ => FAILURE_MESSAGE,
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

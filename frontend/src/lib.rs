//! Run Program - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for sending files and a free-text instruction
//! to the processing service and downloading the file it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title)                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadForm                                                  │
//! │  ├── drop zone / file picker                                │
//! │  ├── selected file list                                     │
//! │  ├── instruction textarea                                   │
//! │  └── submit button (BusyIndicator while submitting)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, FileIcon, AppError, etc.)
//! - [`state`] - Upload form state and its transitions
//! - [`submission`] - Submit-and-download flow and its browser seams
//! - [`components`] - UI components (Hero, UploadForm, BusyIndicator)
//! - [`services`] - Browser implementations (HTTP, download, alerts)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod submission;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileIcon, FileId, NamedFile, SelectedFile,
    // Submission
    FormPart, MultipartForm, SubmissionState,
    // HTTP
    ProcessedFile, RawResponse,
    // Errors
    AppError, AppResult,
};

// State and flow
pub use state::FormState;
pub use submission::{submit, AlertSink, DownloadSink, FormStore, Transport};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Process your files"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadForm/>
        </div>
    }
}

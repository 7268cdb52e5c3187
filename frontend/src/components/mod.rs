//! UI Components for the run-program frontend.
//!
//! # Layout Components
//! - [`Hero`] - Page title
//!
//! # Feature Components
//! - [`UploadForm`] - File selection, instruction and submission
//! - [`BusyIndicator`] - Spinner shown while a submission is running

mod hero;
mod upload;
mod busy;

pub use hero::*;
pub use upload::*;
pub use busy::*;

//! Browser services.
//!
//! Implementations of the submission traits on top of the browser:
//!
//! # Services
//!
//! - [`upload`] - multipart POST to the processing service (`gloo-net`)
//! - [`download`] - object-URL download and `window.alert`

pub mod upload;
pub mod download;

pub use upload::*;
pub use download::*;

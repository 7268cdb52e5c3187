//! Application configuration.
//!
//! Compile-time settings for the run-program frontend. The processing
//! service runs next to the page during development, so the endpoint is
//! hardcoded.

/// Processing endpoint that receives the files and the instruction.
pub const RUN_PROGRAM_URL: &str = "http://localhost:8000/api/run-program/";

/// Multipart field carrying each selected file (repeated).
pub const FILES_FIELD: &str = "files";

/// Multipart field carrying the instruction text.
pub const INSTRUCTION_FIELD: &str = "instruction";

/// Alert shown when files or instruction are missing.
pub const VALIDATION_MESSAGE: &str =
    "Please upload files and provide a description of the program.";

/// Alert shown for every failed submission, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to process the files. Please try again.";

/// Delay before a download's object URL is revoked (ms).
pub const OBJECT_URL_TTL_MS: u32 = 1_000;

/// Maximum number of characters of a server error detail kept for the console log.
pub const MAX_ERROR_DETAIL: usize = 500;

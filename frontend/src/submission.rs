//! Submit-and-download flow.
//!
//! [`submit`] drives one submission end to end:
//!
//! ```text
//! FormState::begin_submit ──► Transport::post_multipart ──► status check
//!        │                                                     │
//!   (validation alert)          content-disposition ◄──────────┘
//!                                      │
//!                            DownloadSink::save ──► FormState::finish_submit
//! ```
//!
//! The browser pieces (HTTP, object URLs, `window.alert`) sit behind the
//! [`Transport`], [`DownloadSink`] and [`AlertSink`] traits so the flow runs
//! natively in tests.

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};
use serde::Deserialize;

use crate::config::MAX_ERROR_DETAIL;
use crate::state::FormState;
use crate::types::{AppError, AppResult, MultipartForm, ProcessedFile, RawResponse};

/// Sends a multipart form and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait Transport<F> {
    async fn post_multipart(&self, url: &str, form: &MultipartForm<F>) -> AppResult<RawResponse>;
}

/// Saves result bytes under a filename on the user's side.
pub trait DownloadSink {
    fn save(&self, filename: &str, bytes: &[u8]) -> AppResult<()>;
}

/// Shows a message to the user.
pub trait AlertSink {
    fn alert(&self, message: &str);
}

/// Shared access to a [`FormState`] across the await point.
///
/// Returns `None` when the state is gone.
pub trait FormStore<F> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R>;
}

impl<F: 'static> FormStore<F> for RwSignal<FormState<F>> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F> FormStore<F> for RefCell<FormState<F>> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Error body of the processing service on a rejected request.
#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

/// Submit the form held by `store` to `url` and download the result.
///
/// Validation failures alert the user and change nothing. Every other
/// failure is logged in full and reported with the generic alert. The form
/// always leaves `Submitting` before this returns.
pub async fn submit<F, S, T, D, A>(
    store: &S,
    url: &str,
    transport: &T,
    sink: &D,
    alerts: &A,
) -> AppResult<ProcessedFile>
where
    F: Clone,
    S: FormStore<F>,
    T: Transport<F>,
    D: DownloadSink,
    A: AlertSink,
{
    let form = match store
        .update_form(|state| state.begin_submit())
        .unwrap_or(Err(AppError::Detached))
    {
        Ok(form) => form,
        Err(e) => {
            log::warn!("Submission not started: {}", e);
            if matches!(e, AppError::Validation(_)) {
                alerts.alert(e.user_message());
            }
            return Err(e);
        }
    };

    log::info!("Submitting {} file(s) to {}", form.file_count(), url);

    let result = process(&form, url, transport, sink).await;
    let finished = store.update_form(|state| {
        state.finish_submit(result.as_ref().ok().map(|file| file.filename.clone()))
    });
    if finished.is_none() {
        log::warn!("Upload form dropped before the submission finished");
    }

    match &result {
        Ok(file) => log::info!("Downloaded {} ({} bytes)", file.filename, file.size),
        Err(e) => {
            log::error!("Error processing files: {}", e);
            alerts.alert(e.user_message());
        }
    }

    result
}

async fn process<F, T, D>(
    form: &MultipartForm<F>,
    url: &str,
    transport: &T,
    sink: &D,
) -> AppResult<ProcessedFile>
where
    T: Transport<F>,
    D: DownloadSink,
{
    let response = transport.post_multipart(url, form).await?;

    if !response.is_success() {
        return Err(AppError::Transport(format!(
            "Server error ({}): {}",
            response.status,
            error_detail(&response.body)
        )));
    }

    let header = response.content_disposition.as_deref().ok_or_else(|| {
        AppError::ResponseFormat("missing content-disposition header".to_string())
    })?;
    let filename = filename_from_content_disposition(header)?;

    sink.save(&filename, &response.body)?;

    Ok(ProcessedFile {
        filename,
        size: response.body.len(),
    })
}

/// Extract the suggested filename from a `content-disposition` value.
///
/// A quoted value runs to its closing quote and is kept verbatim, so
/// `filename="a;b.txt"` gives `a;b.txt`. An unquoted value ends at the
/// next `;`.
pub fn filename_from_content_disposition(header: &str) -> AppResult<String> {
    let (_, rest) = header.split_once("filename=").ok_or_else(|| {
        AppError::ResponseFormat(format!("no filename in content-disposition: {:?}", header))
    })?;

    let filename = match rest.strip_prefix('"') {
        Some(quoted) => quoted.split('"').next().unwrap_or_default(),
        None => rest.split(';').next().unwrap_or_default().trim(),
    };

    if filename.is_empty() {
        return Err(AppError::ResponseFormat(format!(
            "empty filename in content-disposition: {:?}",
            header
        )));
    }

    Ok(filename.to_string())
}

/// Readable detail from an error body, for the console only.
///
/// The service answers with `{"error": "..."}`, a JSON string of logs,
/// or plain text.
fn error_detail(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ServiceError>(body)
        .map(|e| e.error)
        .or_else(|_| serde_json::from_slice::<String>(body))
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());

    if detail.is_empty() {
        return "empty response body".to_string();
    }
    match detail.char_indices().nth(MAX_ERROR_DETAIL) {
        Some((cut, _)) => format!("{}...", &detail[..cut]),
        None => detail,
    }
}

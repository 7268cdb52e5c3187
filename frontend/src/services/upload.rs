//! HTTP transport for the processing service.
//!
//! Builds a browser `FormData` from a [`MultipartForm`] and posts it with
//! `gloo-net`, reading the response body as bytes.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::submission::Transport;
use crate::types::{AppError, AppResult, FormPart, MultipartForm, RawResponse};

/// [`Transport`] backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport<File> for GlooTransport {
    async fn post_multipart(&self, url: &str, form: &MultipartForm<File>) -> AppResult<RawResponse> {
        let form_data = to_form_data(form)?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let content_disposition = response.headers().get("content-disposition");
        let body = response
            .binary()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        log::debug!("{} answered {} ({} bytes)", url, status, body.len());

        Ok(RawResponse {
            status,
            content_disposition,
            body,
        })
    }
}

fn to_form_data(form: &MultipartForm<File>) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    for part in form.parts() {
        let appended = match part {
            FormPart::File {
                field,
                filename,
                file,
            } => form_data.append_with_blob_and_filename(field, file, filename),
            FormPart::Text { field, value } => form_data.append_with_str(field, value),
        };
        appended.map_err(|e| AppError::Transport(format!("Failed to append form part: {:?}", e)))?;
    }

    Ok(form_data)
}

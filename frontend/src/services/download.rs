//! Browser side effects of a submission: saving the result and alerts.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::config::OBJECT_URL_TTL_MS;
use crate::submission::{AlertSink, DownloadSink};
use crate::types::{AppError, AppResult};

fn download_error(e: JsValue) -> AppError {
    AppError::Download(format!("{:?}", e))
}

/// Saves bytes through a temporary `<a download>` link.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(&self, filename: &str, bytes: &[u8]) -> AppResult<()> {
        let document = gloo_utils::document();
        let body = gloo_utils::body();

        let chunks = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let blob = Blob::new_with_u8_array_sequence(&chunks).map_err(download_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;

        let link = document
            .create_element("a")
            .map_err(download_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| AppError::Download("created element is not an anchor".to_string()))?;
        link.set_href(&url);
        link.set_download(filename);

        body.append_child(&link).map_err(download_error)?;
        link.click();
        body.remove_child(&link).map_err(download_error)?;

        // Revoking synchronously can cancel the download in some browsers.
        Timeout::new(OBJECT_URL_TTL_MS, move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::warn!("Failed to revoke object URL: {:?}", e);
            }
        })
        .forget();

        Ok(())
    }
}

/// Shows messages with `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlerts;

impl AlertSink for BrowserAlerts {
    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show alert {:?}: {:?}", message, e);
        }
    }
}

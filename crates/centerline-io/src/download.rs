//! Saving exported bytes through the browser.
//!
//! There is no download API in Dioxus, so the bytes go into a `Blob`, the
//! blob gets an object URL, and a detached-then-attached `<a download>`
//! is clicked. Requires `wasm32-unknown-unknown` in a window context.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Errors that can occur when saving a file.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Object URL that is revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, DownloadError> {
        Ok(Self(Url::create_object_url_with_blob(blob)?))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Save `data` under `filename` with content type `mime_type`.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the document is unavailable or
/// any of the blob, URL, or anchor calls fail.
pub fn trigger_download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let blob = blob_from_bytes(data, mime_type)?;
    let url = ObjectUrl::for_blob(&blob)?;
    click_anchor(&document, &url.0, filename)?;
    tracing::debug!(filename, bytes = data.len(), "download triggered");
    Ok(())
}

fn blob_from_bytes(data: &[u8], mime_type: &str) -> Result<Blob, DownloadError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(data));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Ok(Blob::new_with_u8_array_sequence_and_options(&parts, &options)?)
}

/// Firefox ignores clicks on anchors that are not in the document, so the
/// anchor is attached for the duration of the click.
fn click_anchor(document: &Document, href: &str, filename: &str) -> Result<(), DownloadError> {
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("not an anchor: {e:?}")))?;
    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}

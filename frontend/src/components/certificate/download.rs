//! Browser-side save of a downloaded certificate.
//!
//! The bytes are wrapped in a `Blob`, exposed through an object URL and handed to
//! a transient `<a download>` element that is clicked programmatically. Both the
//! object URL and the anchor are owned by guards, so they are released on every
//! exit path, including early returns on DOM errors.

use common::error::WorkflowError;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Removes the anchor from the document when dropped.
struct AnchorGuard(HtmlAnchorElement);

impl Drop for AnchorGuard {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn js_error(value: JsValue) -> WorkflowError {
    WorkflowError::download(format!("{:?}", value))
}

/// Offers `bytes` to the user as a file named `file_name`.
pub fn save_as(bytes: &[u8], file_name: &str) -> Result<(), WorkflowError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WorkflowError::download("no document available"))?;
    let body = document
        .body()
        .ok_or_else(|| WorkflowError::download("document has no body"))?;

    // Revoked when `url` goes out of scope, after the anchor guard below.
    let url = ObjectUrl::from(Blob::new(bytes));

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| WorkflowError::download("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    let anchor = AnchorGuard(anchor);
    anchor.0.click();

    Ok(())
}

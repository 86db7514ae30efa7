//! Affichage du reçu renvoyé par le serveur à la création d'une
//! commande. Le document est opaque pour la console: on le reçoit en
//! binaire et on le confie au navigateur.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Builds a PDF blob from the raw response bytes
fn receipt_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Opens the receipt in a new browser tab. When the popup is blocked,
/// falls back to a plain download.
///
/// The object URL of an opened tab is intentionally not revoked: the
/// tab still needs it after this function returns.
pub fn open_receipt(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = receipt_blob(bytes)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        _ => {
            let result = download_url(&url, filename);
            let _ = Url::revoke_object_url(&url);
            result
        }
    }
}

/// Triggers a download of the receipt without opening a tab
pub fn download_receipt(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = receipt_blob(bytes)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let result = download_url(&url, filename);
    let _ = Url::revoke_object_url(&url);
    result
}

fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

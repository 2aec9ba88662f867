// Browser side effects behind the payment panel actions
use crate::error::{PageError, Result, js_message};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlAnchorElement};

/// The navigator's clipboard; absent outside secure contexts.
pub fn clipboard_of(navigator: &JsValue) -> Result<Clipboard> {
    let clipboard = js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| PageError::Clipboard(js_message(&e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PageError::Clipboard("clipboard unavailable".to_string()));
    }
    Ok(clipboard.unchecked_into())
}

/// Writes `text` to the system clipboard as plain text.
pub async fn copy_text(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| PageError::Clipboard("no window".to_string()))?;
    let promise: js_sys::Promise = clipboard_of(&window.navigator())?.write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| PageError::Clipboard(js_message(&e)))
}

/// Starts a download of `href` saved as `filename`.
pub fn download(href: &str, filename: &str) -> Result<()> {
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::Dom("no document".to_string()))?;
    let link = doc
        .create_element("a")
        .map_err(PageError::dom)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| PageError::Dom("created element is not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(filename);
    link.click();
    Ok(())
}

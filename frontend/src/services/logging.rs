use gloo::console;
use wasm_bindgen::JsValue;

/// Console-backed diagnostics, tagged per component.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(tag(component), message.to_string());
    }

    pub fn info(component: &str, message: &str) {
        console::info!(tag(component), message.to_string());
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(tag(component), message.to_string());
    }

    pub fn error(component: &str, message: &str) {
        console::error!(tag(component), message.to_string());
    }

    /// Error entry carrying the underlying failure detail as a separate
    /// console argument so it stays inspectable.
    pub fn error_with_detail(component: &str, message: &str, detail: &str) {
        console::error!(
            tag(component),
            message.to_string(),
            JsValue::from_str(detail)
        );
    }
}

fn tag(component: &str) -> String {
    format!("[{}]", component)
}

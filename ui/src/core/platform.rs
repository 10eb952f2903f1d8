//! Platform glue for the few things that differ between web and native.

/// Blocking notice for a failed fetch. Web gets a real `alert`; native shells
/// only log here and render their own banner.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::error!("{message}");
    }
}

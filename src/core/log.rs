//! Console logging
//!
//! In the browser the widget logs straight to the devtools console.
//! Native builds (tests, tooling) route the same calls through `tracing`.

/// Informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::info!($($arg)*);
        }
    }};
}

/// Rejected input or another recoverable problem
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::warn!($($arg)*);
        }
    }};
}

/// Per-event chatter (bounces, magnetic capture); callers gate it on `verbose`
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::debug_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}

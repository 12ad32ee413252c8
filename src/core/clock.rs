/// Wall clock in milliseconds.
///
/// Only differences between two readings are meaningful.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Point in time after which a timed effect is over
#[derive(Clone, Copy, Debug)]
pub(crate) struct Deadline {
    at_ms: f64,
}

impl Deadline {
    pub(crate) fn after(duration_ms: u32) -> Self {
        Deadline { at_ms: now_ms() + duration_ms as f64 }
    }

    pub(crate) fn is_past(&self) -> bool {
        now_ms() >= self.at_ms
    }
}

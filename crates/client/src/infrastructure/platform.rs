//! Host platform adapter: clock and document scroll access per target.

use crate::ports::outbound::PlatformPort;

/// The real host: std clock on desktop, browser APIs on wasm.
#[derive(Clone, Default)]
pub struct HostPlatform;

impl HostPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlatformPort for HostPlatform {
    fn now_millis(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(target_arch = "wasm32")]
impl PlatformPort for HostPlatform {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn section_tops(&self, ids: &[&str]) -> Vec<f64> {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| document.get_element_by_id(id))
            .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| el.offset_top() as f64)
            .collect()
    }
}

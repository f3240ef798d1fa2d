//! Platform Port - the few host capabilities the client needs injected.

/// Host clock and scroll position, abstracted per target.
///
/// `now_millis` feeds timestamp-derived entity ids; `scroll_offsets` feeds
/// the wiki's active-section highlight (always empty on targets without a
/// scrollable document).
pub trait PlatformPort: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Current vertical scroll offset of the document, if there is one.
    fn scroll_y(&self) -> f64 {
        0.0
    }

    /// Top offsets of the elements with the given ids, in document order.
    fn section_tops(&self, _ids: &[&str]) -> Vec<f64> {
        Vec::new()
    }
}

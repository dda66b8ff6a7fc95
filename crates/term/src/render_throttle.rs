//! Redraw gating.
//!
//! The board only changes on input, so most frames would repaint an identical
//! picture. A frame is drawn when the snapshot fingerprint changes, after an
//! invalidation, or once per refresh interval.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Force the next call to `should_render` to return true.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }
}

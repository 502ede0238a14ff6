//! Slide-in panel state.
//!
//! The DOM layer owns three writes: a marker class on the panel root, the
//! panel's `aria-hidden` attribute, and `body.style.overflow`. All three are
//! derived from [`PanelState`] through [`PanelProjection`], so the open class
//! and the accessibility attribute can never disagree.

/// Open/closed state plus the body overflow value captured when the scroll
/// lock was taken, so `close()` can hand it back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    saved_overflow: Option<String>,
}

/// The exact DOM writes for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelProjection {
    /// Marker class (`is-open`) present on the panel root.
    pub open_class: bool,
    /// Value for the panel's `aria-hidden` attribute.
    pub aria_hidden: &'static str,
    /// Value for `body.style.overflow`.
    pub body_overflow: String,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel, capturing the body's current overflow style so the
    /// scroll lock can be released without clobbering a page-set value.
    /// Idempotent: reopening keeps the originally captured style.
    pub fn open(&mut self, current_overflow: &str) -> PanelProjection {
        if !self.open {
            self.open = true;
            self.saved_overflow = Some(current_overflow.to_string());
        }
        self.projection()
    }

    /// Close the panel and release the scroll lock, restoring the captured
    /// overflow style. Idempotent.
    pub fn close(&mut self) -> PanelProjection {
        self.open = false;
        self.projection()
    }

    /// Current DOM writes. While open the body scroll is locked; closed, the
    /// body gets back whatever overflow it had before `open()`.
    pub fn projection(&self) -> PanelProjection {
        if self.open {
            PanelProjection {
                open_class: true,
                aria_hidden: "false",
                body_overflow: "hidden".to_string(),
            }
        } else {
            PanelProjection {
                open_class: false,
                aria_hidden: "true",
                body_overflow: self.saved_overflow.clone().unwrap_or_default(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_locks_scroll_and_unhides() {
        let mut panel = PanelState::new();
        let p = panel.open("");
        assert!(p.open_class);
        assert_eq!(p.aria_hidden, "false");
        assert_eq!(p.body_overflow, "hidden");
        assert!(panel.is_open());
    }

    #[test]
    fn close_restores_original_overflow_exactly() {
        let mut panel = PanelState::new();
        panel.open("scroll");
        let p = panel.close();
        assert!(!p.open_class);
        assert_eq!(p.aria_hidden, "true");
        assert_eq!(p.body_overflow, "scroll");
        assert!(!panel.is_open());
    }

    #[test]
    fn open_close_round_trip_from_default() {
        let mut panel = PanelState::new();
        panel.open("");
        let p = panel.close();
        assert_eq!(p.body_overflow, "");
        assert_eq!(p.aria_hidden, "true");
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut panel = PanelState::new();
        let first = panel.open("auto");
        let second = panel.open("hidden");
        assert_eq!(first, second);

        let closed = panel.close();
        assert_eq!(closed.body_overflow, "auto");
        assert_eq!(panel.close(), closed);
    }

    #[test]
    fn close_without_open_is_a_no_op() {
        let mut panel = PanelState::new();
        let p = panel.close();
        assert!(!p.open_class);
        assert_eq!(p.body_overflow, "");
    }
}

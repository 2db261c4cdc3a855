//! Overlay state machines.
//!
//! The sort menu and the search panel are overlays with two states and a
//! small, explicit event set, replacing scattered click-outside and escape
//! listeners. Closing an overlay is a pure state reset; it never cancels
//! in-flight work.

use tracing::info;

/// Whether an overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Input events an overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// User asked to open the overlay.
    OpenRequest,
    /// User asked to close it (close button, toggle).
    CloseRequest,
    /// Escape key pressed while the overlay is open.
    Escape,
    /// Click or tap outside the overlay's bounds.
    OutsideClick,
    /// An item inside the overlay was selected.
    ItemSelected,
}

/// Two-state overlay machine.
///
/// `OpenRequest` opens; every other event closes. Events are idempotent:
/// closing a closed overlay or opening an open one is a no-op.
#[derive(Debug, Default)]
pub struct Overlay {
    state: OverlayState,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Deliver one event, returning the resulting state.
    pub fn handle(&mut self, event: OverlayEvent) -> OverlayState {
        self.state = match event {
            OverlayEvent::OpenRequest => OverlayState::Open,
            OverlayEvent::CloseRequest
            | OverlayEvent::Escape
            | OverlayEvent::OutsideClick
            | OverlayEvent::ItemSelected => OverlayState::Closed,
        };
        self.state
    }

    /// Convenience for the menu button, which flips between the two.
    pub fn toggle(&mut self) -> OverlayState {
        let event = if self.is_open() {
            OverlayEvent::CloseRequest
        } else {
            OverlayEvent::OpenRequest
        };
        self.handle(event)
    }
}

/// The search panel: an overlay plus a query buffer.
///
/// Search is a placeholder in this demo. Submitting logs the query and
/// closes the panel; no query ever runs.
#[derive(Debug, Default)]
pub struct SearchOverlay {
    overlay: Overlay,
    query: String,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query buffer with the current input value.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Deliver an overlay event; any close transition resets the query.
    pub fn handle(&mut self, event: OverlayEvent) -> OverlayState {
        let state = self.overlay.handle(event);
        if state == OverlayState::Closed {
            self.query.clear();
        }
        state
    }

    /// Submit the current query.
    ///
    /// Logs only; there is no search backend to call.
    pub fn submit(&mut self) {
        info!("Search submitted (no-op): {:?}", self.query);
        self.handle(OverlayEvent::ItemSelected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!Overlay::new().is_open());
    }

    #[test]
    fn test_open_request_opens() {
        let mut overlay = Overlay::new();
        assert_eq!(overlay.handle(OverlayEvent::OpenRequest), OverlayState::Open);
        assert!(overlay.is_open());
    }

    #[test]
    fn test_every_close_event_closes() {
        for event in [
            OverlayEvent::CloseRequest,
            OverlayEvent::Escape,
            OverlayEvent::OutsideClick,
            OverlayEvent::ItemSelected,
        ] {
            let mut overlay = Overlay::new();
            overlay.handle(OverlayEvent::OpenRequest);
            assert_eq!(overlay.handle(event), OverlayState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_events_are_idempotent() {
        let mut overlay = Overlay::new();
        overlay.handle(OverlayEvent::Escape);
        assert!(!overlay.is_open());

        overlay.handle(OverlayEvent::OpenRequest);
        overlay.handle(OverlayEvent::OpenRequest);
        assert!(overlay.is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let mut overlay = Overlay::new();
        assert_eq!(overlay.toggle(), OverlayState::Open);
        assert_eq!(overlay.toggle(), OverlayState::Closed);
    }

    #[test]
    fn test_search_close_resets_query() {
        let mut search = SearchOverlay::new();
        search.handle(OverlayEvent::OpenRequest);
        search.set_query("wool scarf");
        assert_eq!(search.query(), "wool scarf");

        search.handle(OverlayEvent::Escape);
        assert!(!search.is_open());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_search_submit_closes_without_searching() {
        let mut search = SearchOverlay::new();
        search.handle(OverlayEvent::OpenRequest);
        search.set_query("candles");
        search.submit();
        assert!(!search.is_open());
        assert_eq!(search.query(), "");
    }
}

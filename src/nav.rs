/// Visibility of the mobile navigation menu.
///
/// Starts closed on every page load. Choosing a link (or any route change)
/// always collapses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    is_menu_open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn toggle(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn navigate(&mut self) {
        self.is_menu_open = false;
    }

    /// Label for the menu button, describing the action it performs.
    pub fn button_label(&self) -> &'static str {
        if self.is_menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

/// Whether the link for `href` should be styled as the current page.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!NavState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
        assert_eq!(nav, NavState::default());
    }

    #[test]
    fn test_navigate_closes() {
        let mut nav = NavState::default();
        nav.toggle();
        nav.navigate();
        assert!(!nav.is_open());

        // no-op when already closed
        nav.navigate();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_button_label_tracks_state() {
        let mut nav = NavState::default();
        assert_eq!(nav.button_label(), "Open menu");
        nav.toggle();
        assert_eq!(nav.button_label(), "Close menu");
    }

    #[test]
    fn test_active_link_is_exact() {
        assert!(is_active("/", "/"));
        assert!(is_active("/blog", "/blog"));
        assert!(!is_active("/blog/1", "/blog"));
        assert!(!is_active("/portfolio", "/"));
    }
}

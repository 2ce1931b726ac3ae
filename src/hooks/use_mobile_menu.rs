use dioxus::prelude::*;
use tracing::debug;

pub const MENU_ICON_OPEN: &str = "M6 18L18 6M6 6l12 12";
pub const MENU_ICON_CLOSED: &str = "M4 6h16M4 12h16M4 18h16";

const MENU_CLASS: &str = "md:hidden px-6 pb-6 space-y-4";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn icon_path(&self) -> &'static str {
        if self.open {
            MENU_ICON_OPEN
        } else {
            MENU_ICON_CLOSED
        }
    }

    pub fn menu_class(&self) -> String {
        if self.open {
            format!("{MENU_CLASS} animate-fade-in")
        } else {
            format!("hidden {MENU_CLASS}")
        }
    }
}

/// Mobile menu shared between the nav bar and the page-level outside-click handler.
#[derive(Clone, Copy)]
pub struct MobileMenu {
    pub state: Signal<MenuState>,
}

pub fn use_mobile_menu() -> MobileMenu {
    MobileMenu {
        state: use_signal(MenuState::default),
    }
}

impl MobileMenu {
    /// Menu button handler. The click stops here so the page handler never
    /// sees it as an outside click.
    pub fn toggle(&mut self, evt: MouseEvent) {
        evt.stop_propagation();
        let open = self.state.write().toggle();
        debug!("Mobile menu {}", if open { "opened" } else { "closed" });
    }

    /// Any click that reaches the page root came from outside the menu.
    pub fn close_from_outside(&mut self) {
        if self.state.read().is_open() {
            self.state.write().close();
            debug!("Mobile menu closed by outside click");
        }
    }

    pub fn close(&mut self) {
        if self.state.read().is_open() {
            self.state.write().close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_icon_and_class() {
        let mut menu = MenuState::default();
        assert_eq!(menu.icon_path(), MENU_ICON_CLOSED);
        assert!(menu.menu_class().starts_with("hidden"));

        assert!(menu.toggle());
        assert_eq!(menu.icon_path(), MENU_ICON_OPEN);
        assert!(menu.menu_class().ends_with("animate-fade-in"));

        assert!(!menu.toggle());
        assert_eq!(menu.icon_path(), MENU_ICON_CLOSED);
    }

    #[test]
    fn close_only_reports_an_open_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.close());

        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }
}

pub mod mobile_menu;
pub mod nav_bar;
pub mod nav_link;

pub use mobile_menu::MobileMenuPanel;
pub use nav_bar::NavBar;
pub use nav_link::NavLink;

#[cfg(test)]
mod tests {
    /// Markup outside `NavLink`. In-page anchors written here would jump
    /// without the nav-height offset.
    const PAGE_SOURCES: &[(&str, &str)] = &[
        ("nav_bar.rs", include_str!("nav_bar.rs")),
        ("mobile_menu.rs", include_str!("mobile_menu.rs")),
        ("page_layout.rs", include_str!("../layout/page_layout.rs")),
        ("loader.rs", include_str!("../layout/loader.rs")),
        ("footer.rs", include_str!("../layout/footer.rs")),
        ("scroll_to_top.rs", include_str!("../layout/scroll_to_top.rs")),
        ("hero.rs", include_str!("../sections/hero.rs")),
        ("features.rs", include_str!("../sections/features.rs")),
        ("services_section.rs", include_str!("../sections/services_section.rs")),
        ("category_card.rs", include_str!("../sections/category_card.rs")),
        ("item_card.rs", include_str!("../sections/item_card.rs")),
    ];

    #[test]
    fn in_page_anchors_go_through_nav_link() {
        for (file, source) in PAGE_SOURCES {
            for (n, line) in source.lines().enumerate() {
                let line = line.trim_start();
                assert!(
                    !(line.starts_with("a {") && line.contains("href")),
                    "{}:{} renders a raw anchor: {}",
                    file,
                    n + 1,
                    line
                );
                assert!(
                    !line.starts_with("href:"),
                    "{}:{} sets href outside NavLink",
                    file,
                    n + 1
                );
            }
        }
    }

    #[test]
    fn logo_links_home() {
        let nav_bar = include_str!("nav_bar.rs");
        assert!(nav_bar.contains(r##"NavLink { href: "#hero", label: "HealthCare+""##));
    }
}

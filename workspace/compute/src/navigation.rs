//! Sidebar destinations and the collapse toggle.

/// A sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Dashboard",
        path: "/",
        icon: "fas fa-th-large",
    },
    NavItem {
        label: "Customers",
        path: "/customers",
        icon: "fas fa-users",
    },
    NavItem {
        label: "Sales",
        path: "/sales",
        icon: "fas fa-shopping-cart",
    },
    NavItem {
        label: "Settings",
        path: "/settings",
        icon: "fas fa-cog",
    },
];

/// Whether `target` should be highlighted while the browser is at `current`.
///
/// The root destination only matches exactly; anything else also matches its
/// nested paths.
pub fn is_active(current: &str, target: &str) -> bool {
    let current = if current.is_empty() { "/" } else { current };
    if target == "/" {
        return current == "/";
    }
    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Expanded/collapsed state of the sidebar. Starts expanded on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggled(self) -> Self {
        Self {
            collapsed: !self.collapsed,
        }
    }

    pub fn width_class(&self) -> &'static str {
        if self.collapsed { "w-16" } else { "w-64" }
    }

    /// Labels (brand title, item names, "Logout") are hidden when collapsed.
    pub fn shows_labels(&self) -> bool {
        !self.collapsed
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.collapsed {
            "fas fa-chevron-right"
        } else {
            "fas fa-chevron-left"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_exactly() {
        assert!(is_active("/", "/"));
        assert!(is_active("", "/"));
        assert!(!is_active("/customers", "/"));
    }

    #[test]
    fn test_prefix_matches_nested_paths() {
        assert!(is_active("/customers", "/customers"));
        assert!(is_active("/customers/", "/customers"));
        assert!(is_active("/customers/42", "/customers"));
        assert!(!is_active("/customers-archive", "/customers"));
        assert!(!is_active("/sales", "/customers"));
    }

    #[test]
    fn test_exactly_one_item_active_per_location() {
        for location in ["/", "/customers", "/sales", "/settings"] {
            let active = NAV_ITEMS
                .iter()
                .filter(|item| is_active(location, item.path))
                .count();
            assert_eq!(active, 1, "location {location}");
        }
    }

    #[test]
    fn test_sidebar_starts_expanded() {
        let state = SidebarState::default();
        assert!(!state.is_collapsed());
        assert_eq!(state.width_class(), "w-64");
        assert!(state.shows_labels());
    }

    #[test]
    fn test_toggle_twice_restores_layout() {
        let original = SidebarState::default();
        let collapsed = original.toggled();
        assert_eq!(collapsed.width_class(), "w-16");
        assert!(!collapsed.shows_labels());
        assert_eq!(collapsed.toggle_icon(), "fas fa-chevron-right");

        let restored = collapsed.toggled();
        assert_eq!(restored, original);
        assert_eq!(restored.width_class(), original.width_class());
        assert_eq!(restored.shows_labels(), original.shows_labels());
    }
}

//! Navigation destinations: top-level views and the panels nested in "home"

use std::fmt;

use serde::Serialize;

/// A navigable id with a fixed, ordered universe of values.
pub trait Destination: Copy + Eq + fmt::Debug + 'static {
    /// Every value, in menu order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Exact, case-sensitive lookup by id.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|dest| dest.as_str() == id)
    }
}

/// Top-level destination rendered by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    Dashboard,
    Warehouse,
    Supplier,
    Community,
}

impl ViewId {
    pub fn shortcut(&self) -> char {
        match self {
            ViewId::Home => '1',
            ViewId::Dashboard => '2',
            ViewId::Warehouse => '3',
            ViewId::Supplier => '4',
            ViewId::Community => '5',
        }
    }

    pub fn from_shortcut(key: char) -> Option<ViewId> {
        Self::ALL.iter().copied().find(|view| view.shortcut() == key)
    }
}

impl Destination for ViewId {
    const ALL: &'static [ViewId] = &[
        ViewId::Home,
        ViewId::Dashboard,
        ViewId::Warehouse,
        ViewId::Supplier,
        ViewId::Community,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Dashboard => "dashboard",
            ViewId::Warehouse => "warehouse",
            ViewId::Supplier => "supplier",
            ViewId::Community => "community",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Dashboard => "AI Control Tower",
            ViewId::Warehouse => "Inventory",
            ViewId::Supplier => "Supplier Portal",
            ViewId::Community => "Community Reports",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Tab inside the "home" view. Shares vocabulary with [`ViewId`] but not its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Dashboard,
    Warehouse,
    Supplier,
    Community,
}

impl PanelId {
    pub fn icon(&self) -> &'static str {
        match self {
            PanelId::Dashboard => "▤",
            PanelId::Warehouse => "▦",
            PanelId::Supplier => "⇄",
            PanelId::Community => "☺",
        }
    }
}

impl Destination for PanelId {
    const ALL: &'static [PanelId] = &[
        PanelId::Dashboard,
        PanelId::Warehouse,
        PanelId::Supplier,
        PanelId::Community,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PanelId::Dashboard => "dashboard",
            PanelId::Warehouse => "warehouse",
            PanelId::Supplier => "supplier",
            PanelId::Community => "community",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            PanelId::Dashboard => "Dashboard",
            PanelId::Warehouse => "Warehouse",
            PanelId::Supplier => "Supplier",
            PanelId::Community => "Community",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_is_exact() {
        assert_eq!(ViewId::from_id("warehouse"), Some(ViewId::Warehouse));
        assert_eq!(ViewId::from_id("Warehouse"), None);
        assert_eq!(ViewId::from_id("ware"), None);
        assert_eq!(PanelId::from_id("community"), Some(PanelId::Community));
        assert_eq!(PanelId::from_id("home"), None);
    }

    #[test]
    fn test_shortcuts_follow_menu_order() {
        for (idx, view) in ViewId::ALL.iter().enumerate() {
            let key = char::from_digit(idx as u32 + 1, 10).unwrap();
            assert_eq!(view.shortcut(), key);
            assert_eq!(ViewId::from_shortcut(key), Some(*view));
        }
        assert_eq!(ViewId::from_shortcut('9'), None);
    }
}

//! Declarative navigation menu
//!
//! The navbar is parameterized by an ordered list of entries instead of
//! hard-coding its items, so the desktop menu, the mobile menu and the
//! narrow-mode dropdown sheet all render from the same description.

/// A single navigable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// One top-level menu entry: either a direct link or a labeled group of
/// links rendered as a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Group {
        label: &'static str,
        items: Vec<NavLink>,
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link(link) => link.label,
            NavEntry::Group { label, .. } => label,
        }
    }
}

const fn link(label: &'static str, path: &'static str) -> NavEntry {
    NavEntry::Link(NavLink { label, path })
}

/// Primary navigation for the current session state. Signed-in users get
/// the dashboard and leaderboard entries appended.
pub fn nav_menu(signed_in: bool) -> Vec<NavEntry> {
    let mut entries = vec![
        link("Home", "/"),
        link("Pricing", "/pricing"),
        link("Insights", "/insights"),
        link("Features", "/features"),
        link("New Listings", "/new-listings"),
        NavEntry::Group {
            label: "More",
            items: vec![
                NavLink { label: "About", path: "/about" },
                NavLink { label: "Contributors", path: "/contributors" },
                NavLink { label: "Contact Us", path: "/contactus" },
                NavLink { label: "FAQ", path: "/faq" },
            ],
        },
    ];

    if signed_in {
        entries.push(link("Dashboard", "/dashboard"));
        entries.push(link("Leaderboard", "/leaderboard"));
    }

    entries
}

/// Items of the group entry with the given label, if any.
pub fn group_items<'a>(entries: &'a [NavEntry], label: &str) -> Option<&'a [NavLink]> {
    entries.iter().find_map(|entry| match entry {
        NavEntry::Group { label: l, items } if *l == label => Some(items.as_slice()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_menu_has_no_dashboard() {
        let entries = nav_menu(false);
        assert!(entries.iter().all(|e| e.label() != "Dashboard"));
        assert!(entries.iter().all(|e| e.label() != "Leaderboard"));
    }

    #[test]
    fn test_signed_in_menu_appends_dashboard_and_leaderboard() {
        let entries = nav_menu(true);
        let labels: Vec<&str> = entries.iter().map(|e| e.label()).collect();
        assert_eq!(&labels[labels.len() - 2..], &["Dashboard", "Leaderboard"]);
    }

    #[test]
    fn test_labels_are_unique() {
        let entries = nav_menu(true);
        let mut labels: Vec<&str> = entries.iter().map(|e| e.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), entries.len());
    }

    #[test]
    fn test_group_items_lookup() {
        let entries = nav_menu(false);
        let more = group_items(&entries, "More").expect("More group exists");
        assert_eq!(more.len(), 4);
        assert_eq!(more[0].label, "About");

        assert!(group_items(&entries, "Home").is_none());
        assert!(group_items(&entries, "Nope").is_none());
    }
}

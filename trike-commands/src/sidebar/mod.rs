//! Admin navigation sidebar with the chat-support notification badge.

mod poller;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::CommandMeta;

pub use poller::{ChatPoller, OpenChatSource, refresh_open_chats};

pub const META_SIDEBAR: CommandMeta = CommandMeta {
    name: "sidebar",
    desc: "Show navigation with the open-chat badge.",
    category: "sidebar",
    usage: "sidebar",
};

pub const META_COLLAPSE: CommandMeta = CommandMeta {
    name: "collapse",
    desc: "Toggle the compact navigation layout.",
    category: "sidebar",
    usage: "collapse",
};

pub const META_OPEN: CommandMeta = CommandMeta {
    name: "open",
    desc: "Mark a navigation entry as the current page.",
    category: "sidebar",
    usage: "open <href>",
};

/// One navigation entry.
#[derive(Debug, Clone, Copy)]
pub struct SidebarItem {
    pub title: &'static str,
    pub href: &'static str,
    /// Shows the open-chat badge when the count is above zero.
    pub notifies: bool,
}

const fn item(title: &'static str, href: &'static str) -> SidebarItem {
    SidebarItem {
        title,
        href,
        notifies: false,
    }
}

pub const SIDEBAR_ITEMS: [SidebarItem; 8] = [
    item("Dashboard", "/admin"),
    item("Products", "/admin/products"),
    item("Orders", "/admin/orders"),
    item("Customers", "/admin/customers"),
    item("Analytics", "/admin/analytics"),
    SidebarItem {
        title: "Chat Support",
        href: "/admin/chat",
        notifies: true,
    },
    item("Testimonial", "/admin/testimonials"),
    item("Inquiries", "/admin/contact"),
];

/// Sidebar view state. The open-chat count is shared with a [`ChatPoller`].
#[derive(Debug, Clone)]
pub struct SidebarState {
    pub collapsed: bool,
    pub current_path: String,
    open_chats: Arc<AtomicU64>,
}

impl SidebarState {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            collapsed: false,
            current_path: current_path.into(),
            open_chats: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Counter handle for the poller to write into.
    pub fn open_chats_handle(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.open_chats)
    }

    pub fn open_chats(&self) -> u64 {
        self.open_chats.load(Ordering::Relaxed)
    }

    pub fn is_active(&self, item: &SidebarItem) -> bool {
        self.current_path == item.href
    }
}

/// Render every entry, marking the active one and the chat badge.
pub fn render(state: &SidebarState) -> String {
    let open_chats = state.open_chats();
    let mut lines = Vec::with_capacity(SIDEBAR_ITEMS.len() + 1);
    lines.push(if state.collapsed { "ET" } else { "E-Trike Admin" }.to_owned());

    for item in &SIDEBAR_ITEMS {
        let marker = if state.is_active(item) { '>' } else { ' ' };
        let label = if state.collapsed {
            item.title.chars().next().map(String::from).unwrap_or_default()
        } else {
            item.title.to_owned()
        };

        let mut line = format!("{marker} {label}");
        if item.notifies && open_chats > 0 {
            line.push_str(&format!(" ({open_chats})"));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// `collapse`
pub fn toggle_collapsed(state: &mut SidebarState) -> String {
    state.collapsed = !state.collapsed;
    render(state)
}

/// `open <href>`: accepts an href or an entry title.
pub fn open(state: &mut SidebarState, arg1: Option<&str>) -> String {
    let Some(wanted) = arg1.map(str::trim) else {
        return format!("Usage: `{}`", META_OPEN.usage);
    };

    let found = SIDEBAR_ITEMS
        .iter()
        .find(|item| item.href == wanted || item.title.eq_ignore_ascii_case(wanted));

    match found {
        Some(item) => {
            state.current_path = item.href.to_owned();
            render(state)
        }
        None => format!("No navigation entry matches `{wanted}`."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_only_when_chats_are_open() {
        let state = SidebarState::new("/admin");
        assert!(!render(&state).contains("Chat Support ("));

        state.open_chats_handle().store(3, Ordering::Relaxed);

        assert!(render(&state).contains("  Chat Support (3)"));
        assert!(render(&state).contains("> Dashboard"));
    }

    #[test]
    fn collapsed_shows_initials_and_badge() {
        let mut state = SidebarState::new("/admin/chat");
        state.open_chats_handle().store(2, Ordering::Relaxed);

        let out = toggle_collapsed(&mut state);

        assert!(state.collapsed);
        assert!(out.contains("> C (2)"));
        assert!(!out.contains("Dashboard"));
    }

    #[test]
    fn open_by_href_or_title() {
        let mut state = SidebarState::new("/admin");

        assert!(open(&mut state, Some("/admin/orders")).contains("> Orders"));
        assert!(open(&mut state, Some("inquiries")).contains("> Inquiries"));
        assert_eq!(state.current_path, "/admin/contact");
        assert_eq!(
            open(&mut state, Some("/shop")),
            "No navigation entry matches `/shop`."
        );
    }
}

//! Static menu catalogs
//!
//! Three ordered catalogs share one displayable shape. Behavior is chosen by
//! matching on [`MenuKind`], never on the item name.

use slackdeck_core::Presence;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    ViewMessages,
    SetStatus,
    SendPreset,
    Quit,
}

/// What selecting an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Action(MainAction),
    Status(Presence),
    /// The description is the message body
    Preset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub kind: MenuKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// A titled, ordered list of menu items
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static MenuItem> {
        self.items.get(index)
    }
}

pub const MAIN_MENU: Catalog = Catalog {
    title: "Quick Actions",
    items: &[
        MenuItem {
            kind: MenuKind::Action(MainAction::ViewMessages),
            name: "View Messages",
            description: "View recent messages from Slack",
        },
        MenuItem {
            kind: MenuKind::Action(MainAction::SetStatus),
            name: "Set Status",
            description: "Change your Slack status",
        },
        MenuItem {
            kind: MenuKind::Action(MainAction::SendPreset),
            name: "Send Preset Message",
            description: "Send a pre-configured message",
        },
        MenuItem {
            kind: MenuKind::Action(MainAction::Quit),
            name: "Quit",
            description: "Exit the application",
        },
    ],
};

pub const STATUS_MENU: Catalog = Catalog {
    title: "Set Status",
    items: &[
        MenuItem {
            kind: MenuKind::Status(Presence::Active),
            name: "Active",
            description: "Set your status to active",
        },
        MenuItem {
            kind: MenuKind::Status(Presence::Away),
            name: "Away",
            description: "Set your status to away",
        },
        MenuItem {
            kind: MenuKind::Status(Presence::DoNotDisturb),
            name: "Do Not Disturb",
            description: "Set your status to do not disturb",
        },
    ],
};

pub const PRESET_MENU: Catalog = Catalog {
    title: "Preset Messages",
    items: &[
        MenuItem {
            kind: MenuKind::Preset,
            name: "Be Right Back",
            description: "I'll be right back, give me a few minutes.",
        },
        MenuItem {
            kind: MenuKind::Preset,
            name: "In a Meeting",
            description: "I'm currently in a meeting, will respond later.",
        },
        MenuItem {
            kind: MenuKind::Preset,
            name: "Working on Issue",
            description: "I'm working on the issue, will update you soon.",
        },
        MenuItem {
            kind: MenuKind::Preset,
            name: "Lunch Break",
            description: "I'm on lunch break, back in an hour.",
        },
    ],
};

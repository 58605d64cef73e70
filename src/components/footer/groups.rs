use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![item("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Editing => vec![
            FooterGroup {
                name: "PALETTE",
                items: vec![
                    item("^P", "commands"),
                    FooterItem {
                        key: "^O",
                        desc: "processors",
                        highlighted: state.pending_processor_palette.is_some(),
                    },
                ],
            },
            FooterGroup {
                name: "EDIT",
                items: vec![item("Tab", "section"), item("F5", "reload")],
            },
            FooterGroup {
                name: "APP",
                items: vec![item("^Q", "quit")],
            },
        ],
        AppMode::Palette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                item("↑/↓", "move"),
                item("Enter", "select"),
                item("^U", "clear"),
                item("Tab/Esc", "close"),
            ],
        }],
    }
}

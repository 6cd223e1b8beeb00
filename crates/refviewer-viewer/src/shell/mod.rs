pub mod dialog;
pub mod keyword_panel;
pub mod methods_panel;
pub mod state;

pub use dialog::Dialog;
pub use keyword_panel::KeywordPanel;
pub use methods_panel::MethodsPanel;
pub use state::{Panel, PanelId, PanelKind, Shell};

/// What a click inside a panel asks its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Show(&'static str),
    Dismiss,
}

// Action is fixed when the panel is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryButton {
    pub label: &'static str,
    pub action: PanelAction,
}

impl EntryButton {
    pub fn for_entry(key: &'static str) -> Self {
        Self {
            label: key,
            action: PanelAction::Show(key),
        }
    }
}

use bevy::prelude::Resource;
use refviewer_core::{ElementTable, KeywordTable, ELEMENTS, KEYWORDS};
use std::fmt;

use crate::shell::{Dialog, KeywordPanel, MethodsPanel, PanelAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl PanelId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Keywords,
    Methods,
}

pub enum Panel {
    Keywords(KeywordPanel),
    Methods(MethodsPanel),
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Keywords(_) => PanelKind::Keywords,
            Self::Methods(_) => PanelKind::Methods,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Keywords(_) => KeywordPanel::TITLE,
            Self::Methods(_) => MethodsPanel::TITLE,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Keywords(_) => KeywordPanel::HEADER,
            Self::Methods(_) => MethodsPanel::HEADER,
        }
    }

    #[cfg(test)]
    pub fn button_labels(&self) -> Vec<&'static str> {
        match self {
            Self::Keywords(p) => p.buttons().iter().map(|b| b.label).collect(),
            Self::Methods(p) => p.buttons().iter().map(|b| b.button.label).collect(),
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            Self::Keywords(p) => p.dialog(),
            Self::Methods(p) => p.dialog(),
        }
    }

    fn show(&mut self, key: &str, seq: u64) -> &Dialog {
        match self {
            Self::Keywords(p) => p.show(key, seq),
            Self::Methods(p) => p.show(key, seq),
        }
    }

    fn dismiss(&mut self) -> bool {
        match self {
            Self::Keywords(p) => p.dismiss(),
            Self::Methods(p) => p.dismiss(),
        }
    }
}

pub struct PanelWindow {
    pub id: PanelId,
    pub panel: Panel,
}

/// Every panel window the home screen has opened and not yet closed.
#[derive(Resource)]
pub struct Shell {
    keywords: &'static KeywordTable,
    elements: &'static ElementTable,
    windows: Vec<PanelWindow>,
    next_id: u64,
    next_seq: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::with_tables(&KEYWORDS, &ELEMENTS)
    }
}

impl Shell {
    pub fn with_tables(keywords: &'static KeywordTable, elements: &'static ElementTable) -> Self {
        Self {
            keywords,
            elements,
            windows: Vec::new(),
            next_id: 1,
            next_seq: 1,
        }
    }

    pub fn open(&mut self, kind: PanelKind) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        let panel = match kind {
            PanelKind::Keywords => Panel::Keywords(KeywordPanel::new(self.keywords)),
            PanelKind::Methods => Panel::Methods(MethodsPanel::new(self.elements)),
        };
        self.windows.push(PanelWindow { id, panel });
        tracing::info!(panel = %id, ?kind, open = self.windows.len(), "panel opened");
        id
    }

    pub fn close(&mut self, id: PanelId) -> bool {
        let Some(pos) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        let window = self.windows.remove(pos);
        tracing::info!(
            panel = %id,
            kind = ?window.panel.kind(),
            open = self.windows.len(),
            "panel closed"
        );
        true
    }

    #[cfg(test)]
    pub fn is_open(&self, id: PanelId) -> bool {
        self.get(id).is_some()
    }

    #[cfg(test)]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.windows.iter().find(|w| w.id == id).map(|w| &w.panel)
    }

    pub fn windows(&self) -> &[PanelWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Routes a click to panel `id`. Returns `false` if the panel is gone or
    /// the action had nothing to do.
    pub fn apply(&mut self, id: PanelId, action: PanelAction) -> bool {
        let seq = self.next_seq;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        match action {
            PanelAction::Show(key) => {
                self.next_seq += 1;
                let dialog = window.panel.show(key, seq);
                tracing::debug!(panel = %id, title = %dialog.title, "dialog shown");
                true
            }
            PanelAction::Dismiss => {
                let dismissed = window.panel.dismiss();
                if dismissed {
                    tracing::debug!(panel = %id, "dialog dismissed");
                }
                dismissed
            }
        }
    }

    /// Dismisses the most recently raised dialog across all panels.
    pub fn dismiss_latest_dialog(&mut self) -> Option<PanelId> {
        let id = self
            .windows
            .iter()
            .filter_map(|w| w.panel.dialog().map(|d| (d.seq(), w.id)))
            .max()
            .map(|(_, id)| id)?;
        self.apply(id, PanelAction::Dismiss);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refviewer_core::{KeywordEntry, DESCRIPTION_NOT_FOUND};
    use std::collections::HashSet;

    const AB_ENTRIES: &[KeywordEntry] = &[
        KeywordEntry::new("A", "desc-A"),
        KeywordEntry::new("B", "desc-B"),
    ];
    static AB: KeywordTable = KeywordTable::new(AB_ENTRIES);

    fn ab_shell() -> Shell {
        Shell::with_tables(&AB, &ELEMENTS)
    }

    fn dialog_of(shell: &Shell, id: PanelId) -> Option<(String, String)> {
        shell
            .get(id)?
            .dialog()
            .map(|d| (d.title.clone(), d.body.clone()))
    }

    #[test]
    fn keyword_panel_buttons_match_table_keys() {
        let mut shell = Shell::default();
        let id = shell.open(PanelKind::Keywords);
        let labels = shell.get(id).expect("open").button_labels();

        let unique: HashSet<_> = labels.iter().copied().collect();
        assert_eq!(labels.len(), KEYWORDS.len());
        assert_eq!(unique.len(), labels.len());
        assert_eq!(labels, KEYWORDS.names().collect::<Vec<_>>());
    }

    #[test]
    fn panels_open_as_independent_windows() {
        let mut shell = ab_shell();
        let first = shell.open(PanelKind::Keywords);
        let second = shell.open(PanelKind::Keywords);
        assert_ne!(first, second);
        assert_eq!(shell.len(), 2);

        shell.apply(first, PanelAction::Show("A"));
        assert!(dialog_of(&shell, second).is_none());

        assert!(shell.close(first));
        assert!(!shell.is_open(first));
        assert!(shell.is_open(second));

        assert!(shell.apply(second, PanelAction::Show("B")));
        assert_eq!(
            dialog_of(&shell, second),
            Some(("B".to_string(), "desc-B".to_string()))
        );
        assert!(shell.close(second));
        assert!(shell.is_empty());
    }

    #[test]
    fn closing_twice_is_a_noop() {
        let mut shell = ab_shell();
        let id = shell.open(PanelKind::Methods);
        assert!(shell.close(id));
        assert!(!shell.close(id));
        assert!(!shell.apply(id, PanelAction::Show("A")));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut shell = ab_shell();
        let a = shell.open(PanelKind::Keywords);
        shell.close(a);
        let b = shell.open(PanelKind::Keywords);
        assert!(b > a);
    }

    #[test]
    fn end_to_end_show_dismiss_show() {
        let mut shell = ab_shell();
        let id = shell.open(PanelKind::Keywords);

        let Some(Panel::Keywords(panel)) = shell.get(id) else {
            panic!("expected keyword panel");
        };
        let a = panel.buttons()[0].action;
        let b = panel.buttons()[1].action;

        assert!(shell.apply(id, a));
        assert_eq!(
            dialog_of(&shell, id),
            Some(("A".to_string(), "desc-A".to_string()))
        );

        assert!(shell.apply(id, PanelAction::Dismiss));
        assert!(dialog_of(&shell, id).is_none());
        assert!(shell.is_open(id));

        assert!(shell.apply(id, b));
        assert_eq!(
            dialog_of(&shell, id),
            Some(("B".to_string(), "desc-B".to_string()))
        );
    }

    #[test]
    fn unknown_key_still_produces_dialog() {
        let mut shell = ab_shell();
        let id = shell.open(PanelKind::Keywords);
        assert_eq!(AB.lookup("UNKNOWN"), DESCRIPTION_NOT_FOUND);
        assert!(shell.apply(id, PanelAction::Show("UNKNOWN")));
        assert_eq!(
            dialog_of(&shell, id),
            Some(("UNKNOWN".to_string(), DESCRIPTION_NOT_FOUND.to_string()))
        );
    }

    #[test]
    fn dismiss_latest_picks_most_recent_dialog() {
        let mut shell = ab_shell();
        let keywords = shell.open(PanelKind::Keywords);
        let methods = shell.open(PanelKind::Methods);

        shell.apply(methods, PanelAction::Show("He"));
        shell.apply(keywords, PanelAction::Show("A"));

        assert_eq!(shell.dismiss_latest_dialog(), Some(keywords));
        assert!(dialog_of(&shell, methods).is_some());
        assert_eq!(shell.dismiss_latest_dialog(), Some(methods));
        assert_eq!(shell.dismiss_latest_dialog(), None);
    }

    #[test]
    fn closing_panel_drops_its_dialog() {
        let mut shell = ab_shell();
        let id = shell.open(PanelKind::Keywords);
        shell.apply(id, PanelAction::Show("A"));
        shell.close(id);
        assert_eq!(shell.dismiss_latest_dialog(), None);
    }
}

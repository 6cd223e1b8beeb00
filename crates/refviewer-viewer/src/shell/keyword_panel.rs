use refviewer_core::KeywordTable;

use crate::shell::{Dialog, EntryButton};

pub struct KeywordPanel {
    table: &'static KeywordTable,
    buttons: Vec<EntryButton>,
    dialog: Option<Dialog>,
}

impl KeywordPanel {
    pub const TITLE: &'static str = "Keywords";
    pub const HEADER: &'static str = "Select the Keyword";

    pub fn new(table: &'static KeywordTable) -> Self {
        let buttons = table.names().map(EntryButton::for_entry).collect();
        Self {
            table,
            buttons,
            dialog: None,
        }
    }

    pub fn buttons(&self) -> &[EntryButton] {
        &self.buttons
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn show(&mut self, name: &str, seq: u64) -> &Dialog {
        if self.table.get(name).is_none() {
            tracing::warn!(keyword = name, "keyword missing from table; showing fallback");
        }
        self.dialog
            .insert(Dialog::new(name, self.table.lookup(name), seq))
    }

    pub fn dismiss(&mut self) -> bool {
        self.dialog.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::PanelAction;
    use refviewer_core::{KeywordEntry, DESCRIPTION_NOT_FOUND, KEYWORDS};

    const AB_ENTRIES: &[KeywordEntry] = &[
        KeywordEntry::new("A", "desc-A"),
        KeywordEntry::new("B", "desc-B"),
    ];
    static AB: KeywordTable = KeywordTable::new(AB_ENTRIES);

    #[test]
    fn one_button_per_entry_in_table_order() {
        let panel = KeywordPanel::new(&KEYWORDS);
        let labels: Vec<_> = panel.buttons().iter().map(|b| b.label).collect();
        let names: Vec<_> = KEYWORDS.names().collect();
        assert_eq!(labels, names);
    }

    #[test]
    fn each_button_is_bound_to_its_own_entry() {
        let panel = KeywordPanel::new(&AB);
        let actions: Vec<_> = panel.buttons().iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            vec![PanelAction::Show("A"), PanelAction::Show("B")]
        );
    }

    #[test]
    fn show_then_dismiss_sequence() {
        let mut panel = KeywordPanel::new(&AB);
        assert!(panel.dialog().is_none());

        let d = panel.show("A", 1);
        assert_eq!(d.title, "A");
        assert_eq!(d.body, "desc-A");

        assert!(panel.dismiss());
        assert!(panel.dialog().is_none());
        assert!(!panel.dismiss());

        let d = panel.show("B", 2);
        assert_eq!((d.title.as_str(), d.body.as_str()), ("B", "desc-B"));
    }

    #[test]
    fn unknown_name_shows_fallback_dialog() {
        let mut panel = KeywordPanel::new(&AB);
        let d = panel.show("UNKNOWN", 1);
        assert_eq!(d.title, "UNKNOWN");
        assert_eq!(d.body, DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn second_show_replaces_dialog() {
        let mut panel = KeywordPanel::new(&AB);
        panel.show("A", 1);
        panel.show("B", 2);
        let d = panel.dialog().expect("dialog");
        assert_eq!(d.title, "B");
        assert_eq!(d.seq(), 2);
    }
}

use refviewer_core::{Element, ElementTable, GRID_COLUMNS, GRID_ROWS};

use crate::shell::{Dialog, EntryButton};

pub struct ElementButton {
    pub element: &'static Element,
    pub button: EntryButton,
}

pub struct MethodsPanel {
    table: &'static ElementTable,
    buttons: Vec<ElementButton>,
    grid: [[Option<usize>; GRID_COLUMNS]; GRID_ROWS],
    dialog: Option<Dialog>,
}

impl MethodsPanel {
    pub const TITLE: &'static str = "Methods";
    pub const HEADER: &'static str = "Select the Element";

    pub fn new(table: &'static ElementTable) -> Self {
        let mut grid = [[None; GRID_COLUMNS]; GRID_ROWS];
        let mut buttons = Vec::with_capacity(table.len());
        for element in table.elements() {
            let (row, col) = element.grid_cell();
            if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(buttons.len());
            }
            buttons.push(ElementButton {
                element,
                button: EntryButton::for_entry(element.symbol),
            });
        }
        Self {
            table,
            buttons,
            grid,
            dialog: None,
        }
    }

    #[cfg(test)]
    pub fn buttons(&self) -> &[ElementButton] {
        &self.buttons
    }

    pub fn button_at(&self, row: usize, col: usize) -> Option<&ElementButton> {
        let idx = (*self.grid.get(row)?.get(col)?)?;
        self.buttons.get(idx)
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn show(&mut self, symbol: &str, seq: u64) -> &Dialog {
        let title = match self.table.by_symbol(symbol) {
            Some(element) => element.name,
            None => {
                tracing::warn!(symbol, "element missing from table; showing fallback");
                symbol
            }
        };
        self.dialog
            .insert(Dialog::new(title, self.table.lookup(symbol), seq))
    }

    pub fn dismiss(&mut self) -> bool {
        self.dialog.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refviewer_core::{ELEMENTS, ELEMENT_NOT_FOUND};

    #[test]
    fn every_element_has_a_reachable_cell() {
        let panel = MethodsPanel::new(&ELEMENTS);
        assert_eq!(panel.buttons().len(), ELEMENTS.len());

        let mut placed = 0;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLUMNS {
                if let Some(b) = panel.button_at(row, col) {
                    assert_eq!(b.element.grid_cell(), (row, col));
                    assert_eq!(b.button.label, b.element.symbol);
                    placed += 1;
                }
            }
        }
        assert_eq!(placed, ELEMENTS.len());
    }

    #[test]
    fn gaps_stay_empty() {
        let panel = MethodsPanel::new(&ELEMENTS);
        // between H and He
        assert!(panel.button_at(0, 1).is_none());
        // spacer row above the f-block
        assert!((0..GRID_COLUMNS).all(|c| panel.button_at(7, c).is_none()));
        assert!(panel.button_at(GRID_ROWS, 0).is_none());
    }

    #[test]
    fn show_uses_element_name_as_title() {
        let mut panel = MethodsPanel::new(&ELEMENTS);
        let d = panel.show("Fe", 3);
        assert_eq!(d.title, "Iron");
        assert!(d.body.contains("Atomic number: 26"));
        assert!(panel.dismiss());
    }

    #[test]
    fn unknown_symbol_falls_back() {
        let mut panel = MethodsPanel::new(&ELEMENTS);
        let d = panel.show("Zz", 1);
        assert_eq!(d.title, "Zz");
        assert_eq!(d.body, ELEMENT_NOT_FOUND);
    }
}

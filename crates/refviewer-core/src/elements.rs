use std::collections::HashMap;
use std::sync::OnceLock;

mod table;

pub const ELEMENT_NOT_FOUND: &str = "element not found";

/// Rows of the periodic-table grid, including the spacer row before the
/// lanthanide and actinide rows.
pub const GRID_ROWS: usize = 10;
pub const GRID_COLUMNS: usize = 18;

const LANTHANUM: u8 = 57;
const ACTINIUM: u8 = 89;

pub static ELEMENTS: ElementTable = ElementTable::new(table::ELEMENTS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub period: u8,
    /// IUPAC group 1..=18; `None` for the f-block series.
    pub group: Option<u8>,
}

impl Element {
    pub const fn new(
        number: u8,
        symbol: &'static str,
        name: &'static str,
        period: u8,
        group: Option<u8>,
    ) -> Self {
        Self {
            number,
            symbol,
            name,
            period,
            group,
        }
    }

    pub fn series(&self) -> Option<&'static str> {
        match (self.group, self.period) {
            (Some(_), _) => None,
            (None, 6) => Some("lanthanide"),
            (None, _) => Some("actinide"),
        }
    }

    /// Zero-based (row, column) in the periodic-table grid.
    pub fn grid_cell(&self) -> (usize, usize) {
        match self.group {
            Some(g) => (usize::from(self.period) - 1, usize::from(g) - 1),
            None if self.period == 6 => (8, f_block_column(self.number, LANTHANUM)),
            None => (9, f_block_column(self.number, ACTINIUM)),
        }
    }

    pub fn describe(&self) -> String {
        let group = match (self.group, self.series()) {
            (Some(g), _) => g.to_string(),
            (None, Some(series)) => format!("n/a ({series} series)"),
            (None, None) => "n/a".to_string(),
        };
        format!(
            "Atomic number: {}\nSymbol: {}\nPeriod: {}\nGroup: {}",
            self.number, self.symbol, self.period, group
        )
    }
}

// f-block rows start under group 3; out-of-series numbers clamp to the row ends.
fn f_block_column(number: u8, first: u8) -> usize {
    let offset = usize::from(number.saturating_sub(first));
    (offset + 2).min(GRID_COLUMNS - 1)
}

#[derive(Debug)]
pub struct ElementTable {
    elements: &'static [Element],
    by_symbol: OnceLock<HashMap<&'static str, usize>>,
}

impl ElementTable {
    pub const fn new(elements: &'static [Element]) -> Self {
        Self {
            elements,
            by_symbol: OnceLock::new(),
        }
    }

    pub fn elements(&self) -> &'static [Element] {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&'static Element> {
        let idx = *self
            .by_symbol
            .get_or_init(|| {
                self.elements
                    .iter()
                    .enumerate()
                    .map(|(i, e)| (e.symbol, i))
                    .collect()
            })
            .get(symbol)?;
        self.elements.get(idx)
    }

    pub fn by_number(&self, number: u8) -> Option<&'static Element> {
        self.elements.iter().find(|e| e.number == number)
    }

    /// Dialog text for `symbol`, or [`ELEMENT_NOT_FOUND`].
    pub fn lookup(&self, symbol: &str) -> String {
        self.by_symbol(symbol)
            .map(Element::describe)
            .unwrap_or_else(|| ELEMENT_NOT_FOUND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numbers_are_sequential() {
        assert_eq!(ELEMENTS.len(), 118);
        for (i, e) in ELEMENTS.elements().iter().enumerate() {
            assert_eq!(usize::from(e.number), i + 1, "{}", e.symbol);
        }
    }

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<_> = ELEMENTS.elements().iter().map(|e| e.symbol).collect();
        assert_eq!(symbols.len(), ELEMENTS.len());
    }

    #[test]
    fn grid_cells_are_unique_and_in_bounds() {
        let mut seen = HashSet::new();
        for e in ELEMENTS.elements() {
            let (row, col) = e.grid_cell();
            assert!(row < GRID_ROWS && col < GRID_COLUMNS, "{} at {row},{col}", e.symbol);
            assert!(seen.insert((row, col)), "{} overlaps", e.symbol);
        }
    }

    #[test]
    fn known_positions() {
        let fe = ELEMENTS.by_symbol("Fe").expect("Fe");
        assert_eq!(fe.number, 26);
        assert_eq!(fe.grid_cell(), (3, 7));

        let la = ELEMENTS.by_symbol("La").expect("La");
        assert_eq!(la.group, None);
        assert_eq!(la.grid_cell(), (8, 2));

        let lr = ELEMENTS.by_number(103).expect("Lr");
        assert_eq!(lr.symbol, "Lr");
        assert_eq!(lr.grid_cell(), (9, 16));

        let og = ELEMENTS.by_symbol("Og").expect("Og");
        assert_eq!(og.grid_cell(), (6, 17));
    }

    #[test]
    fn groupless_element_outside_series_stays_in_grid() {
        let low = Element::new(5, "Xa", "Low", 6, None);
        assert_eq!(low.grid_cell(), (8, 2));

        let early = Element::new(40, "Xb", "Early", 7, None);
        assert_eq!(early.grid_cell(), (9, 2));

        let late = Element::new(250, "Xc", "Late", 7, None);
        assert_eq!(late.grid_cell(), (9, GRID_COLUMNS - 1));
    }

    #[test]
    fn lookup_describes_or_falls_back() {
        let text = ELEMENTS.lookup("C");
        assert!(text.contains("Atomic number: 6"));
        assert!(text.contains("Group: 14"));

        assert!(ELEMENTS.lookup("Ce").contains("lanthanide series"));
        assert!(ELEMENTS.lookup("U").contains("actinide series"));
        assert_eq!(ELEMENTS.lookup("Xx"), ELEMENT_NOT_FOUND);
    }
}

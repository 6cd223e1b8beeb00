use std::collections::HashMap;
use std::sync::OnceLock;

mod entries;

/// Shown in place of a description when a name is not in the table.
pub const DESCRIPTION_NOT_FOUND: &str = "description not found";

/// Built-in MOPAC keyword reference.
pub static KEYWORDS: KeywordTable = KeywordTable::new(entries::ENTRIES);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl KeywordEntry {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Read-only keyword table. Iteration follows declaration order; the
/// name index is built on first lookup and shared afterwards.
#[derive(Debug)]
pub struct KeywordTable {
    entries: &'static [KeywordEntry],
    index: OnceLock<HashMap<&'static str, usize>>,
}

impl KeywordTable {
    pub const fn new(entries: &'static [KeywordEntry]) -> Self {
        Self {
            entries,
            index: OnceLock::new(),
        }
    }

    pub fn entries(&self) -> &'static [KeywordEntry] {
        self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'static KeywordEntry> {
        let idx = *self.index().get(name)?;
        self.entries.get(idx)
    }

    /// Description for `name`, or [`DESCRIPTION_NOT_FOUND`].
    pub fn lookup(&self, name: &str) -> &'static str {
        self.get(name)
            .map(|e| e.description)
            .unwrap_or(DESCRIPTION_NOT_FOUND)
    }

    fn index(&self) -> &HashMap<&'static str, usize> {
        self.index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.entries.len());
            for (i, e) in self.entries.iter().enumerate() {
                // first declaration wins
                map.entry(e.name).or_insert(i);
            }
            map
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    static AB: &[KeywordEntry] = &[
        KeywordEntry::new("A", "desc-A"),
        KeywordEntry::new("B", "desc-B"),
    ];

    #[test]
    fn lookup_returns_stored_description() {
        let table = KeywordTable::new(AB);
        assert_eq!(table.lookup("A"), "desc-A");
        assert_eq!(table.lookup("B"), "desc-B");
    }

    #[test]
    fn lookup_unknown_falls_back() {
        let table = KeywordTable::new(AB);
        assert_eq!(table.lookup("UNKNOWN"), DESCRIPTION_NOT_FOUND);
        assert_eq!(table.lookup(""), DESCRIPTION_NOT_FOUND);
        assert_eq!(table.lookup("a"), DESCRIPTION_NOT_FOUND);
        assert!(table.get("UNKNOWN").is_none());
    }

    #[test]
    fn builtin_names_are_unique() {
        let names: HashSet<_> = KEYWORDS.names().collect();
        assert_eq!(names.len(), KEYWORDS.len());
    }

    #[test]
    fn builtin_lookup_is_exact_for_every_entry() {
        for entry in KEYWORDS.entries() {
            let got = KEYWORDS.lookup(entry.name);
            assert_eq!(got, entry.description);
            assert_ne!(got, DESCRIPTION_NOT_FOUND);
        }
    }

    #[test]
    fn builtin_order_is_declaration_order() {
        let names: Vec<_> = KEYWORDS.names().collect();
        assert_eq!(
            names,
            vec![
                "PRECISE",
                "PULAY",
                "CAMP",
                "MOZYME",
                "LET",
                "FORCE",
                "FORCETS",
                "NOREOR",
                "ISOTOPE",
                "GNORM=n.nn",
                "SCFCRT=n.nn",
                "RELSCF",
                "LBFGS",
            ]
        );
    }

    #[test]
    fn builtin_descriptions_keep_paragraph_breaks() {
        assert!(KEYWORDS.lookup("PULAY").contains("PULAY does not work with MOZYME.\n\n"));
        assert!(KEYWORDS.lookup("FORCE").contains("Ångstrom"));
    }

    #[test]
    fn duplicate_name_resolves_to_first() {
        static DUP: &[KeywordEntry] = &[
            KeywordEntry::new("X", "first"),
            KeywordEntry::new("X", "second"),
        ];
        let table = KeywordTable::new(DUP);
        assert_eq!(table.lookup("X"), "first");
    }
}

pub mod elements;
pub mod keywords;

pub use elements::{Element, ElementTable, ELEMENTS, ELEMENT_NOT_FOUND, GRID_COLUMNS, GRID_ROWS};
pub use keywords::{KeywordEntry, KeywordTable, DESCRIPTION_NOT_FOUND, KEYWORDS};

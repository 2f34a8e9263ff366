// crates/span_classes/src/lib.rs

//! The fixed category table shared by the snippet highlighting tool-chain.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The delimiter character that opens and closes a highlight marker.
pub const MARKER_DELIMITER: char = '°';

/// Category code → CSS class. Built once, never mutated.
static CATEGORY_TABLE: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "kw"),
        (2, "str"),
        (3, "fn"),
        (4, "int"),
        (5, "com"),
    ])
});

/// Returns the CSS class for a marker's category code, or `None` if the
/// code has no entry in the category table.
pub fn class_for_code(code: u8) -> Option<&'static str> {
    CATEGORY_TABLE.get(&code).copied()
}

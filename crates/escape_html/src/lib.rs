// crates/escape_html/src/lib.rs

/// Replaces HTML-special characters in the input with their entity
/// equivalents: `&` becomes `&amp;`, `<` becomes `&lt;`, `>` becomes
/// `&gt;`, and `"` becomes `&quot;`.
///
/// Ampersands are replaced first so that the entities inserted for the
/// other characters are not escaped a second time. Single quotes are
/// left alone.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

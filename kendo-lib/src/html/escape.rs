/// Escapes text for use in HTML content and attribute values.
///
/// Both quote styles are escaped, so the result is safe inside single- or
/// double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

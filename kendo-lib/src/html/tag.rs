use std::fmt::Write;

use super::AttrValue;
use super::AttributeMap;

/// Renders the attribute list of an element, each entry prefixed by a space.
pub fn render_attributes(attributes: &AttributeMap) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        if let Some(text) = value.render_value(name) {
            let _ = write!(out, r#" {name}="{text}""#);
        }
    }
    out
}

/// Renders a single HTML element.
///
/// `None` content renders a void element (`<name ... />`). `Some("")` renders
/// an empty element with a closing tag.
pub fn tag(name: &str, content: Option<&str>, attributes: &AttributeMap) -> String {
    let attrs = render_attributes(attributes);
    match content {
        None => format!("<{name}{attrs} />"),
        Some(content) => format!("<{name}{attrs}>{content}</{name}>"),
    }
}

/// Renders an `<input />` with the given id.
pub fn input(id: &str, attributes: &AttributeMap) -> String {
    tag("input", None, &with_id(attributes, id))
}

/// Renders an empty `<select></select>` with the given id.
pub fn select(id: &str, attributes: &AttributeMap) -> String {
    tag("select", Some(""), &with_id(attributes, id))
}

/// Renders a `<div>` with the given id and content.
pub fn div(id: &str, content: &str, attributes: &AttributeMap) -> String {
    tag("div", Some(content), &with_id(attributes, id))
}

fn with_id(attributes: &AttributeMap, id: &str) -> AttributeMap {
    let mut merged = attributes.clone();
    merged.insert("id".to_string(), AttrValue::from(id));
    merged
}

//! HTML generation utilities.
//!
//! Renders single elements from a name, optional content and an ordered
//! attribute map. Attribute values are written verbatim; callers that embed
//! untrusted text run it through [`escape_html`] first.

mod attributes;
mod escape;
mod tag;

pub use attributes::AttrValue;
pub use attributes::AttributeMap;
pub use escape::escape_html;
pub use tag::div;
pub use tag::input;
pub use tag::render_attributes;
pub use tag::select;
pub use tag::tag;

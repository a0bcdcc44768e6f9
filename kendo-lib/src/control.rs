//! Single-element widget helpers

use std::fmt;

use crate::collab::Options;
use crate::helper::Helper;
use crate::helper::HelperBase;
use crate::html;

/// The root element a [`Control`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlElement {
    /// `<input />`, e.g. for date pickers and numeric text boxes.
    Input,
    /// `<select></select>`, e.g. for drop-down lists.
    Select,
    /// `<div></div>`, for container widgets.
    Div,
}

/// A widget rooted in a single `input`, `select` or `div` element.
///
/// The script initializes the attached widget, passing the data source when
/// one is attached. Without a widget the script is empty.
#[derive(Debug)]
pub struct Control {
    base: HelperBase,
    element: ControlElement,
}

impl Control {
    /// Creates a control rendering `element` with the given id.
    pub fn new(id: impl Into<String>, element: ControlElement) -> Self {
        Self {
            base: HelperBase::new(id),
            element,
        }
    }

    /// Creates an input-rooted control.
    pub fn input(id: impl Into<String>) -> Self {
        Self::new(id, ControlElement::Input)
    }

    /// Creates a select-rooted control.
    pub fn select(id: impl Into<String>) -> Self {
        Self::new(id, ControlElement::Select)
    }

    /// Creates a div-rooted control.
    pub fn div(id: impl Into<String>) -> Self {
        Self::new(id, ControlElement::Div)
    }

    /// Returns the root element kind.
    pub fn element(&self) -> ControlElement {
        self.element
    }
}

impl Helper for Control {
    fn base(&self) -> &HelperBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HelperBase {
        &mut self.base
    }

    fn html(&self) -> String {
        let id = self.base.id();
        let attributes = self.base.attributes();
        match self.element {
            ControlElement::Input => html::input(id, attributes),
            ControlElement::Select => html::select(id, attributes),
            ControlElement::Div => html::div(id, "", attributes),
        }
    }

    fn script(&self) -> String {
        let mut extra = Options::new();
        if let Some(data_source) = self.base.data_source_json() {
            extra.insert("dataSource".to_string(), data_source);
        }
        self.base.widget_script(extra).unwrap_or_default()
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

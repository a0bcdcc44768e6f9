//! Plain field column

use std::fmt;

use serde_json::Value;

use super::Column;
use super::ColumnArgs;
use super::ColumnFactory;
use super::ColumnTemplate;
use super::FIELD_TEMPLATE;
use super::SlotValues;
use crate::collab::Options;
use crate::config::RenderConfig;
use crate::error::HelperError;
use crate::helper::Helper;
use crate::helper::HelperBase;

/// A read-only column displaying the field value.
///
/// This is the parent of the templated columns: they reuse its state and
/// prepend its script to their own.
#[derive(Debug)]
pub struct FieldColumn {
    base: HelperBase,
    field: String,
    options: Options,
    config: RenderConfig,
    template: ColumnTemplate,
}

impl FieldColumn {
    /// Creates a column of the grid `table_id` bound to `field`.
    pub fn new(table_id: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        let args = ColumnArgs::new(table_id, field.clone());
        Self::build(args, field, FIELD_TEMPLATE, "tableColumn")
    }

    pub(super) fn build(args: ColumnArgs, field: String, template: &str, class: &str) -> Self {
        let mut base = HelperBase::new(args.table_id);
        base.add_attribute("class", class);
        Self {
            base,
            field,
            options: args.options,
            config: args.config,
            template: ColumnTemplate::parse(template),
        }
    }

    /// Sets a column option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns the id of the grid element.
    pub fn table_id(&self) -> &str {
        self.base.id()
    }

    /// Returns the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Returns the cell template.
    pub fn template(&self) -> &ColumnTemplate {
        &self.template
    }

    /// Renders the cell template with the given input type and attributes.
    pub fn render_cell(&self, input_type: &str, options: &str) -> String {
        self.template.render(&SlotValues {
            field: &self.field,
            input_type,
            options,
        })
    }
}

impl ColumnFactory for FieldColumn {
    fn from_args(args: ColumnArgs) -> Result<Self, HelperError> {
        let field = args.field()?.to_string();
        Ok(Self::build(args, field, FIELD_TEMPLATE, "tableColumn"))
    }
}

impl Helper for FieldColumn {
    fn base(&self) -> &HelperBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HelperBase {
        &mut self.base
    }

    fn html(&self) -> String {
        self.render_cell(&self.config.default_input_type, "")
    }

    fn script(&self) -> String {
        String::new()
    }
}

impl Column for FieldColumn {
    fn field(&self) -> &str {
        &self.field
    }

    fn options(&self) -> &Options {
        &self.options
    }
}

impl fmt::Display for FieldColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

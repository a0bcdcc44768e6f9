//! Editable input columns

use std::fmt;

use serde_json::Value;

use super::Column;
use super::ColumnArgs;
use super::ColumnFactory;
use super::FieldColumn;
use super::INPUT_TEMPLATE;
use crate::collab::Options;
use crate::config::RenderConfig;
use crate::decimal::DecimalOptions;
use crate::error::HelperError;
use crate::helper::Helper;
use crate::helper::HelperBase;
use crate::html::AttrValue;
use crate::html::AttributeMap;
use crate::html::escape_html;
use crate::html::render_attributes;

/// Produces the JavaScript expression assigned to the record when an input
/// changes. `this` is the changed input element.
pub trait InputValue: fmt::Debug {
    /// Creates the value extractor for the given configuration.
    fn from_config(config: &RenderConfig) -> Self
    where
        Self: Sized;

    /// Returns the JavaScript expression.
    fn expression(&self) -> String;
}

/// Assigns the raw input value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawValue;

impl InputValue for RawValue {
    fn from_config(_config: &RenderConfig) -> Self {
        Self
    }

    fn expression(&self) -> String {
        "$(this).val()".to_string()
    }
}

/// Assigns the input value parsed as a decimal.
///
/// Mirrors [`parse_decimal_str`](crate::decimal::parse_decimal_str) in the
/// browser: the thousands separator is removed, commas become periods,
/// everything but digits, periods and minus signs is dropped, and text that
/// does not parse becomes `0`.
#[derive(Debug, Clone, Default)]
pub struct DecimalValue {
    options: DecimalOptions,
}

impl DecimalValue {
    /// Creates a decimal value extractor.
    pub fn new(options: DecimalOptions) -> Self {
        Self { options }
    }
}

impl InputValue for DecimalValue {
    fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.decimal.clone())
    }

    fn expression(&self) -> String {
        let mut text = "String($(this).val())".to_string();
        if let Some(separator) = self.options.separator() {
            text.push_str(&format!(r#".split({}).join("")"#, Value::from(separator)));
        }
        format!(r#"(parseFloat({text}.replace(/,/g, ".").replace(/[^0-9.\-]/g, "")) || 0)"#)
    }
}

/// An editable column rendering an `<input>` per cell.
///
/// The `input` option holds the input's own attributes; its `type` key picks
/// the input type and every other key becomes an escaped HTML attribute:
///
/// ```
/// use kendo_lib::column::{Column, InputColumn};
/// use kendo_lib::helper::Helper;
/// use serde_json::json;
///
/// let column = InputColumn::new("grid1", "price")
///     .with_option("input", json!({"type": "number", "step": "0.1"}));
///
/// assert!(column.html().contains(r#"type="number""#));
/// assert!(column.html().contains(r#"step="0.1""#));
/// assert!(column.column_options().get("input").is_none());
/// ```
///
/// The script listens for `change` on the cell inputs and writes the value
/// back to the data source record, syncing explicitly unless the data source
/// syncs on its own.
#[derive(Debug)]
pub struct InputColumn<V: InputValue = RawValue> {
    parent: FieldColumn,
    value: V,
}

/// An input column assigning decimal values.
pub type DecimalInputColumn = InputColumn<DecimalValue>;

impl InputColumn<RawValue> {
    /// Creates a column of the grid `table_id` bound to `field`.
    pub fn new(table_id: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        Self::build(ColumnArgs::new(table_id, field.clone()), field)
    }
}

impl InputColumn<DecimalValue> {
    /// Creates a decimal column of the grid `table_id` bound to `field`.
    pub fn decimal(table_id: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        Self::build(ColumnArgs::new(table_id, field.clone()), field)
    }
}

impl<V: InputValue> InputColumn<V> {
    fn build(args: ColumnArgs, field: String) -> Self {
        let value = V::from_config(&args.config);
        Self {
            parent: FieldColumn::build(args, field, INPUT_TEMPLATE, "tableColumn tableInput"),
            value,
        }
    }

    /// Sets a column option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parent = self.parent.with_option(key, value);
        self
    }

    /// Sets the attributes of the cell input.
    pub fn with_input(self, input: Options) -> Self {
        self.with_option("input", Value::Object(input))
    }

    /// Returns the id of the grid element.
    pub fn table_id(&self) -> &str {
        self.parent.table_id()
    }

    /// Returns the input type and the remaining, escaped input attributes.
    fn input_parts(&self) -> (String, AttributeMap) {
        let mut input_type = self.parent.config().default_input_type.clone();
        let mut attributes = AttributeMap::new();

        if let Some(Value::Object(input)) = self.parent.options().get("input") {
            for (key, value) in input {
                if key == "type" {
                    input_type = value_text(value);
                } else {
                    let text = escape_html(&value_text(value));
                    attributes.insert(key.clone(), AttrValue::Text(text));
                }
            }
        }

        (input_type, attributes)
    }
}

/// Returns the text form of an option value.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<V: InputValue> ColumnFactory for InputColumn<V> {
    fn from_args(args: ColumnArgs) -> Result<Self, HelperError> {
        let field = args.field()?.to_string();
        Ok(Self::build(args, field))
    }
}

impl<V: InputValue> Helper for InputColumn<V> {
    fn base(&self) -> &HelperBase {
        self.parent.base()
    }

    fn base_mut(&mut self) -> &mut HelperBase {
        self.parent.base_mut()
    }

    fn html(&self) -> String {
        let (input_type, attributes) = self.input_parts();
        self.parent
            .render_cell(&input_type, &render_attributes(&attributes))
    }

    fn script(&self) -> String {
        format!(
            r##"{parent}$("#{table}").on("change", "[name={field}Input]", function (e) {{
    var dataSource = $("#{table}").data("{grid}").dataSource;

    // only for datasource that can be updated
    if (typeof dataSource.transport.options.update !== "undefined") {{
        var item = dataSource.getByUid($(this).data("row-uid"));
        item.set("{field}", {value});
        if (!dataSource.options.autoSync) {{
            dataSource.sync();
        }}
    }}
}});"##,
            parent = self.parent.script(),
            table = self.table_id(),
            field = self.field(),
            grid = self.parent.config().grid_data_key,
            value = self.value.expression(),
        )
    }
}

impl<V: InputValue> Column for InputColumn<V> {
    fn field(&self) -> &str {
        self.parent.field()
    }

    fn options(&self) -> &Options {
        self.parent.options()
    }

    fn column_options(&self) -> Options {
        let mut options = self.parent.options().clone();
        options.remove("input");
        options
    }
}

impl<V: InputValue> fmt::Display for InputColumn<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("a")), "a");
        assert_eq!(value_text(&json!(0.1)), "0.1");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(true)), "1");
        assert_eq!(value_text(&json!(false)), "");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn test_decimal_expression() {
        let plain = DecimalValue::default();
        assert_eq!(
            plain.expression(),
            r#"(parseFloat(String($(this).val()).replace(/,/g, ".").replace(/[^0-9.\-]/g, "")) || 0)"#
        );

        let dotted = DecimalValue::new(DecimalOptions::default().with_thousands_separator("."));
        assert!(dotted.expression().contains(r#".split(".").join("")"#));
    }
}

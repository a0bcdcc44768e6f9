//! Grid columns.
//!
//! A column renders the cell template of one grid column ([`Helper::html`])
//! and whatever script keeps edited cells in sync with the data source
//! ([`Helper::script`]). The enclosing [`Table`](crate::table::Table) turns
//! every column into a definition object with [`Column::definition`].

mod field;
mod input;
mod template;

pub use field::FieldColumn;
pub use input::*;
pub use template::*;

use serde_json::Value;

use crate::collab::Options;
use crate::config::RenderConfig;
use crate::error::HelperError;
use crate::helper::AliasRegistry;
use crate::helper::Helper;

/// Everything a column is constructed from.
#[derive(Debug, Clone, Default)]
pub struct ColumnArgs {
    /// Id of the grid element the column belongs to.
    pub table_id: String,
    /// Column options; must contain `field`.
    pub options: Options,
    /// Render configuration.
    pub config: RenderConfig,
}

impl ColumnArgs {
    /// Creates arguments for a column bound to `field`.
    pub fn new(table_id: impl Into<String>, field: impl Into<String>) -> Self {
        let mut options = Options::new();
        options.insert("field".to_string(), Value::String(field.into()));
        Self {
            table_id: table_id.into(),
            options,
            config: RenderConfig::default(),
        }
    }

    /// Creates arguments from a full option map.
    pub fn from_options(table_id: impl Into<String>, options: Options) -> Self {
        Self {
            table_id: table_id.into(),
            options,
            config: RenderConfig::default(),
        }
    }

    /// Sets a column option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Sets the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the `field` option.
    pub fn field(&self) -> Result<&str, HelperError> {
        self.options
            .get("field")
            .and_then(Value::as_str)
            .ok_or_else(|| HelperError::missing_option(&self.table_id, "field"))
    }
}

/// A grid column.
pub trait Column: Helper {
    /// Returns the field the column is bound to.
    fn field(&self) -> &str;

    /// Returns every option the column was configured with.
    fn options(&self) -> &Options;

    /// Returns the options declared to the grid.
    fn column_options(&self) -> Options {
        self.options().clone()
    }

    /// Returns the column definition: the declared options, the rendered
    /// cell `template` and the cell `attributes`.
    fn definition(&self) -> Value {
        let mut definition = self.column_options();
        definition.insert("template".to_string(), Value::String(self.html()));

        let cell: Options = self
            .base()
            .attributes()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .render_value(name)
                    .map(|text| (name.clone(), Value::String(text.to_string())))
            })
            .collect();
        if !cell.is_empty() {
            let attributes = definition
                .entry("attributes")
                .or_insert_with(|| Value::Object(Options::new()));
            match attributes {
                Value::Object(existing) => existing.extend(cell),
                other => *other = Value::Object(cell),
            }
        }

        Value::Object(definition)
    }
}

/// A column that can be constructed from [`ColumnArgs`].
pub trait ColumnFactory: Column + Sized {
    /// Creates the column.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::MissingOption`] if `field` is not set.
    fn from_args(args: ColumnArgs) -> Result<Self, HelperError>;
}

/// Constructor stored in a [`ColumnRegistry`].
pub type ColumnCtor = fn(ColumnArgs) -> Result<Box<dyn Column>, HelperError>;

/// Registry of column constructors.
pub type ColumnRegistry = AliasRegistry<ColumnCtor>;

/// Boxes a newly created column of type `T`. Coerces to [`ColumnCtor`].
pub fn construct_column<T: ColumnFactory + 'static>(
    args: ColumnArgs,
) -> Result<Box<dyn Column>, HelperError> {
    Ok(Box::new(T::from_args(args)?))
}

impl AliasRegistry<ColumnCtor> {
    /// Creates a registry with the columns shipped in this crate:
    ///
    /// | Alias | Column |
    /// |-------|--------|
    /// | `column` | [`FieldColumn`] |
    /// | `input` | [`InputColumn`] |
    /// | `decimal` | [`DecimalInputColumn`] |
    pub fn builtin() -> Self {
        Self::new("column")
            .with("column", construct_column::<FieldColumn>)
            .with("input", construct_column::<InputColumn>)
            .with("decimal", construct_column::<DecimalInputColumn>)
    }

    /// Creates the column registered under `alias`.
    pub fn create(&self, alias: &str, args: ColumnArgs) -> Result<Box<dyn Column>, HelperError> {
        let ctor = self.resolve(alias)?;
        ctor(args)
    }
}

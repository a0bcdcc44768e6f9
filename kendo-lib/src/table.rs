//! Grid helper

use std::fmt;

use serde_json::Value;

use crate::collab::Options;
use crate::column::Column;
use crate::column::ColumnArgs;
use crate::helper::Helper;
use crate::helper::HelperBase;
use crate::helper::HelperFactory;
use crate::html;

/// A grid rendered into a `<div>`.
///
/// The script initializes the attached widget with its own options plus the
/// data source (with the model as schema) and the column definitions, then
/// appends every column's script.
///
/// # Example
///
/// ```
/// use kendo_lib::collab::{shared, WidgetDef};
/// use kendo_lib::column::InputColumn;
/// use kendo_lib::helper::{Helper, HelperFactory};
/// use kendo_lib::table::Table;
///
/// let mut table = Table::create("grid1");
/// table.base_mut().set_widget(shared(WidgetDef::grid()));
/// table.add_column(Box::new(InputColumn::new("grid1", "price")));
///
/// assert_eq!(table.html(), r#"<div id="grid1"></div>"#);
/// assert!(table.script().starts_with(r##"$("#grid1").kendoGrid({"columns":"##));
/// ```
#[derive(Debug)]
pub struct Table {
    base: HelperBase,
    columns: Vec<Box<dyn Column>>,
}

impl Table {
    /// Appends a column.
    pub fn add_column(&mut self, column: Box<dyn Column>) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[Box<dyn Column>] {
        &self.columns
    }

    /// Returns column arguments bound to this grid.
    pub fn column_args(&self, field: impl Into<String>) -> ColumnArgs {
        ColumnArgs::new(self.base.id(), field)
    }
}

impl HelperFactory for Table {
    fn create(id: impl Into<String>) -> Self {
        Self {
            base: HelperBase::new(id),
            columns: Vec::new(),
        }
    }
}

impl Helper for Table {
    fn base(&self) -> &HelperBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HelperBase {
        &mut self.base
    }

    fn html(&self) -> String {
        html::div(self.base.id(), "", self.base.attributes())
    }

    fn script(&self) -> String {
        let mut extra = Options::new();
        if let Some(data_source) = self.base.data_source_json() {
            extra.insert("dataSource".to_string(), data_source);
        }
        if !self.columns.is_empty() {
            let columns = self.columns.iter().map(|column| column.definition()).collect();
            extra.insert("columns".to_string(), Value::Array(columns));
        }

        let scripts = self
            .base
            .widget_script(extra)
            .into_iter()
            .chain(self.columns.iter().map(|column| column.script()))
            .filter(|script| !script.is_empty())
            .collect::<Vec<_>>();

        log::trace!("Table '{}': rendered {} script blocks", self.base.id(), scripts.len());
        scripts.join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

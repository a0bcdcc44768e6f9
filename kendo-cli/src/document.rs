//! JSON table descriptions

use indexmap::IndexMap;
use kendo_lib::collab::{DataSourceDef, ModelDef, Options, TransportKind, WidgetDef, shared};
use kendo_lib::column::{ColumnArgs, ColumnRegistry};
use kendo_lib::html::AttributeMap;
use kendo_lib::table::Table;
use kendo_lib::{Error, Helper, HelperExt, HelperFactory, RenderConfig};
use serde::Deserialize;

/// A grid described as JSON.
///
/// ```json
/// {
///   "id": "orders",
///   "attributes": {"class": "grid"},
///   "model": {"id": "id", "fields": {"price": {"type": "number"}}},
///   "transports": {"read": {"url": "/orders"}},
///   "dataSource": {"pageSize": 20},
///   "widget": {"name": "kendoGrid", "options": {"pageable": true}},
///   "columns": [{"field": "name"}, {"type": "decimal", "field": "price"}]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    pub id: String,
    #[serde(default)]
    pub attributes: AttributeMap,
    pub model: Option<ModelDocument>,
    #[serde(default)]
    pub transports: IndexMap<String, Options>,
    #[serde(default)]
    pub data_source: Options,
    #[serde(default)]
    pub widget: WidgetDocument,
    #[serde(default)]
    pub columns: Vec<ColumnDocument>,
}

#[derive(Debug, Deserialize)]
pub struct ModelDocument {
    pub id: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, Options>,
}

#[derive(Debug, Deserialize)]
pub struct WidgetDocument {
    pub name: String,
    #[serde(default)]
    pub options: Options,
}

impl Default for WidgetDocument {
    fn default() -> Self {
        Self {
            name: "kendoGrid".to_string(),
            options: Options::new(),
        }
    }
}

/// One column; `type` is the column alias, everything else its options.
#[derive(Debug, Deserialize)]
pub struct ColumnDocument {
    #[serde(rename = "type", default = "default_column_type")]
    pub kind: String,
    #[serde(flatten)]
    pub options: Options,
}

fn default_column_type() -> String {
    "column".to_string()
}

impl TableDocument {
    /// Builds the described table.
    pub fn build(&self, config: &RenderConfig, columns: &ColumnRegistry) -> Result<Table, Error> {
        let mut table = Table::create(self.id.clone());
        for (name, value) in &self.attributes {
            table.add_attribute(name, value.clone());
        }

        if let Some(model) = &self.model {
            let mut def = ModelDef::new();
            if let Some(id) = &model.id {
                def = def.with_id(id.clone());
            }
            table.base_mut().set_model(shared(def));
            for (key, options) in &model.fields {
                table.add_field(key, options.clone())?;
            }
        }

        if !self.transports.is_empty() || !self.data_source.is_empty() {
            let def = self
                .data_source
                .iter()
                .fold(DataSourceDef::new(), |def, (key, value)| {
                    def.with_option(key.clone(), value.clone())
                });
            table.base_mut().set_data_source(shared(def));
            for (kind, options) in &self.transports {
                let kind: TransportKind = kind.parse()?;
                table.add_transport(kind, options.clone())?;
            }
        }

        let widget = self
            .widget
            .options
            .iter()
            .fold(WidgetDef::new(self.widget.name.clone()), |def, (key, value)| {
                def.with_option(key.clone(), value.clone())
            });
        table.base_mut().set_widget(shared(widget));

        for column in &self.columns {
            let args = ColumnArgs::from_options(self.id.clone(), column.options.clone())
                .with_config(config.clone());
            let column = columns.create(&column.kind, args)?;
            table.add_column(column);
        }

        log::debug!(
            "Built table '{}' with {} columns",
            self.id,
            table.columns().len()
        );
        Ok(table)
    }
}

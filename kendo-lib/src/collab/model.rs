//! Model reference implementation

use serde_json::Value;
use serde_json::json;

use super::Model;
use super::Options;

/// A data source schema model: an optional id field and ordered fields.
///
/// # Example
///
/// ```
/// use kendo_lib::collab::{Model, ModelDef, Options};
///
/// let mut model = ModelDef::new().with_id("id");
/// model.add_field("price", Options::new());
/// assert!(model.field("price").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDef {
    id: Option<String>,
    fields: Options,
}

impl ModelDef {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id field.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the id field.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the options of a declared field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all declared fields in declaration order.
    pub fn fields(&self) -> &Options {
        &self.fields
    }
}

impl Model for ModelDef {
    fn add_field(&mut self, key: &str, options: Options) {
        self.fields.insert(key.to_string(), Value::Object(options));
    }

    fn to_json(&self) -> Value {
        let mut model = Options::new();
        if let Some(id) = &self.id {
            model.insert("id".to_string(), json!(id));
        }
        model.insert("fields".to_string(), Value::Object(self.fields.clone()));
        Value::Object(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_keeps_field_order() {
        let mut model = ModelDef::new().with_id("id");
        model.add_field("name", Options::new());
        let mut price = Options::new();
        price.insert("type".to_string(), json!("number"));
        model.add_field("price", price);

        assert_eq!(
            model.to_json().to_string(),
            r#"{"id":"id","fields":{"name":{},"price":{"type":"number"}}}"#
        );
    }

    #[test]
    fn test_redeclared_field_is_replaced() {
        let mut model = ModelDef::new();
        model.add_field("name", Options::new());
        let mut options = Options::new();
        options.insert("editable".to_string(), json!(false));
        model.add_field("name", options);

        assert_eq!(model.fields().len(), 1);
        assert_eq!(model.field("name"), Some(&json!({"editable": false})));
    }
}

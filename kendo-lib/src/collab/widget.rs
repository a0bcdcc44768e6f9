//! Widget reference implementation

use serde_json::Value;

use super::Options;
use super::Widget;
use super::WidgetReturn;
use crate::error::HelperError;

/// A widget configured through `set*`/`add*`/`get*` calls.
///
/// The option name is the method suffix with its first letter lower-cased:
///
/// | Call | Effect | Returns |
/// |------|--------|---------|
/// | `setPageable(true)` | `pageable = true` | chain |
/// | `addToolbar("create", "save")` | appends to the `toolbar` array | chain |
/// | `getPageable()` | | the value, or `null` |
/// | `bind("change", handler)` | `events.change = handler` | chain |
///
/// Every other method is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDef {
    name: String,
    options: Options,
}

impl WidgetDef {
    /// Creates a widget for the given jQuery plugin name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    /// Creates a `kendoGrid` widget.
    pub fn grid() -> Self {
        Self::new("kendoGrid")
    }

    /// Sets an option directly.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns an option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    fn bind(&mut self, args: &[Value]) -> Result<(), HelperError> {
        let Some(event) = args.first().and_then(Value::as_str) else {
            return Err(HelperError::missing_option(&self.name, "event"));
        };
        let handler = args.get(1).cloned().unwrap_or(Value::Null);

        let events = self
            .options
            .entry("events")
            .or_insert_with(|| Value::Object(Options::new()));
        if !events.is_object() {
            *events = Value::Object(Options::new());
        }
        if let Value::Object(events) = events {
            events.insert(event.to_string(), handler);
        }
        Ok(())
    }

    fn add(&mut self, key: String, args: &[Value]) {
        let entry = self
            .options
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            let existing = entry.take();
            *entry = Value::Array(vec![existing]);
        }
        if let Value::Array(items) = entry {
            items.extend(args.iter().cloned());
        }
    }
}

/// Splits `setFooBar` into (`set`, `fooBar`).
fn split_accessor(method: &str) -> Option<(&str, String)> {
    for prefix in ["set", "add", "get"] {
        let Some(rest) = method.strip_prefix(prefix) else {
            continue;
        };
        let mut chars = rest.chars();
        let first = chars.next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        return Some((prefix, first.to_ascii_lowercase().to_string() + chars.as_str()));
    }
    None
}

impl Widget for WidgetDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<WidgetReturn, HelperError> {
        if method == "bind" {
            self.bind(args)?;
            return Ok(WidgetReturn::Chain);
        }
        match split_accessor(method) {
            Some(("set", key)) => {
                let value = args.first().cloned().unwrap_or(Value::Null);
                self.options.insert(key, value);
                Ok(WidgetReturn::Chain)
            }
            Some(("add", key)) => {
                self.add(key, args);
                Ok(WidgetReturn::Chain)
            }
            Some((_, key)) => Ok(WidgetReturn::Value(
                self.options.get(&key).cloned().unwrap_or(Value::Null),
            )),
            None => Err(HelperError::unknown_method(method)),
        }
    }

    fn options(&self) -> Options {
        self.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_split_accessor() {
        assert_eq!(split_accessor("setPageable"), Some(("set", "pageable".to_string())));
        assert_eq!(split_accessor("addToolbar"), Some(("add", "toolbar".to_string())));
        assert_eq!(split_accessor("getDataSource"), Some(("get", "dataSource".to_string())));
        assert_eq!(split_accessor("set"), None);
        assert_eq!(split_accessor("settle"), None);
        assert_eq!(split_accessor("refresh"), None);
    }

    #[test]
    fn test_set_get_add() {
        let mut widget = WidgetDef::grid();
        assert_eq!(widget.invoke("setPageable", &[json!(true)]), Ok(WidgetReturn::Chain));
        assert_eq!(
            widget.invoke("getPageable", &[]),
            Ok(WidgetReturn::Value(json!(true)))
        );
        assert_eq!(widget.invoke("getSortable", &[]), Ok(WidgetReturn::Value(Value::Null)));

        widget.invoke("addToolbar", &[json!("create")]).unwrap();
        widget.invoke("addToolbar", &[json!("save"), json!("cancel")]).unwrap();
        assert_eq!(widget.option("toolbar"), Some(&json!(["create", "save", "cancel"])));
    }

    #[test]
    fn test_add_wraps_scalar_option() {
        let mut widget = WidgetDef::grid().with_option("toolbar", "create");
        widget.invoke("addToolbar", &[json!("save")]).unwrap();
        assert_eq!(widget.option("toolbar"), Some(&json!(["create", "save"])));
    }

    #[test]
    fn test_bind_stores_events() {
        let mut widget = WidgetDef::grid();
        widget.invoke("bind", &[json!("change"), json!("onChange")]).unwrap();
        widget.invoke("bind", &[json!("dataBound"), json!("onBound")]).unwrap();
        assert_eq!(
            widget.option("events"),
            Some(&json!({"change": "onChange", "dataBound": "onBound"}))
        );

        let err = widget.invoke("bind", &[]).unwrap_err();
        assert_eq!(err, HelperError::missing_option("kendoGrid", "event"));
    }

    #[test]
    fn test_unknown_method() {
        let mut widget = WidgetDef::grid();
        let err = widget.invoke("refresh", &[]).unwrap_err();
        assert!(err.is_unknown_method());
    }
}

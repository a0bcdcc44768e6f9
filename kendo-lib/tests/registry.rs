//! Tests for the alias registries.

use kendo_lib::column::{Column, ColumnArgs, ColumnCtor, ColumnRegistry, FieldColumn, construct_column};
use kendo_lib::control::Control;
use kendo_lib::error::HelperError;
use kendo_lib::helper::{Helper, HelperCtor, HelperRegistry};
use serde_json::json;

fn always_select(id: String) -> Box<dyn Helper> {
    Box::new(Control::select(id))
}

#[test]
fn test_builtin_helpers() {
    let registry = HelperRegistry::builtin();
    assert_eq!(registry.family(), "helper");
    assert_eq!(registry.aliases(), vec!["div", "grid", "input", "select"]);

    let grid = registry.create("grid", "orders").unwrap();
    assert_eq!(grid.html(), r#"<div id="orders"></div>"#);

    let input = registry.create("input", "date").unwrap();
    assert_eq!(input.html(), r#"<input id="date" />"#);

    let select = registry.create("select", "country").unwrap();
    assert_eq!(select.html(), r#"<select id="country"></select>"#);
}

#[test]
fn test_unknown_helper_alias() {
    let registry = HelperRegistry::builtin();
    let err = registry.create("chart", "sales").unwrap_err();
    assert_eq!(err, HelperError::unknown_alias("helper", "chart"));
    assert_eq!(err.to_string(), "Unknown helper alias: chart");
}

#[test]
fn test_reassignment_returns_previous() {
    let mut registry = HelperRegistry::builtin();

    let previous = registry.register("input", always_select as HelperCtor);
    assert!(previous.is_some());
    assert!(registry.register("picker", always_select).is_none());

    let input = registry.create("input", "country").unwrap();
    assert_eq!(input.html(), r#"<select id="country"></select>"#);
    assert!(registry.contains("picker"));
}

#[test]
fn test_empty_registry() {
    let registry = HelperRegistry::new("helper");
    assert!(registry.aliases().is_empty());
    assert!(matches!(
        registry.resolve("grid"),
        Err(HelperError::UnknownAlias { family: "helper", .. })
    ));
}

#[test]
fn test_builtin_columns() {
    let registry = ColumnRegistry::builtin();
    assert_eq!(registry.family(), "column");
    assert_eq!(registry.aliases(), vec!["column", "decimal", "input"]);

    let plain = registry.create("column", ColumnArgs::new("grid1", "name")).unwrap();
    assert_eq!(plain.html(), "#: name #");

    let decimal = registry.create("decimal", ColumnArgs::new("grid1", "price")).unwrap();
    assert!(decimal.script().contains("parseFloat"));

    let input = registry.create("input", ColumnArgs::new("grid1", "price")).unwrap();
    assert!(!input.script().contains("parseFloat"));
}

#[test]
fn test_unknown_column_alias() {
    let registry = ColumnRegistry::builtin();
    let err = registry
        .create("checkbox", ColumnArgs::new("grid1", "done"))
        .unwrap_err();
    assert_eq!(err, HelperError::unknown_alias("column", "checkbox"));
}

#[test]
fn test_column_construction_errors_propagate() {
    let registry = ColumnRegistry::builtin();
    let args = ColumnArgs::default().with_option("title", json!("Price"));
    assert!(matches!(
        registry.create("input", args),
        Err(HelperError::MissingOption { option: "field", .. })
    ));
}

#[test]
fn test_custom_column_alias() {
    let registry = ColumnRegistry::new("column")
        .with("text", construct_column::<FieldColumn> as ColumnCtor);
    let column = registry.create("text", ColumnArgs::new("grid1", "name")).unwrap();
    assert_eq!(column.field(), "name");
}

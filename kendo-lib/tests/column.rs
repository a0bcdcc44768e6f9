//! Tests for grid columns.

use kendo_lib::collab::Options;
use kendo_lib::column::{
    Column, ColumnArgs, ColumnFactory, DecimalInputColumn, FieldColumn, InputColumn,
};
use kendo_lib::config::RenderConfig;
use kendo_lib::decimal::DecimalOptions;
use kendo_lib::error::HelperError;
use kendo_lib::helper::{Helper, HelperExt};
use serde_json::{Value, json};

fn options(value: Value) -> Options {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

fn price_column() -> InputColumn {
    InputColumn::new("grid1", "price").with_option("input", json!({"type": "number", "step": "0.1"}))
}

// ============================================================================
// Field column
// ============================================================================

#[test]
fn test_field_column_template() {
    let column = FieldColumn::new("grid1", "name");
    assert_eq!(column.html(), "#: name #");
    assert_eq!(column.script(), "");
    assert_eq!(column.field(), "name");
    assert_eq!(column.table_id(), "grid1");
}

#[test]
fn test_field_column_definition() {
    let column = FieldColumn::new("grid1", "name").with_option("title", "Name");
    assert_eq!(
        column.definition(),
        json!({
            "field": "name",
            "title": "Name",
            "template": "#: name #",
            "attributes": {"class": "tableColumn"},
        })
    );
}

// ============================================================================
// Input column: markup
// ============================================================================

#[test]
fn test_input_column_html() {
    assert_eq!(
        price_column().html(),
        r##"<input type="number" data-row-uid="#: uid #" name="priceInput" value="#: price #" step="0.1" />"##
    );
}

#[test]
fn test_input_column_defaults_to_text() {
    let column = InputColumn::new("grid1", "name");
    assert_eq!(
        column.html(),
        r##"<input type="text" data-row-uid="#: uid #" name="nameInput" value="#: name #" />"##
    );
}

#[test]
fn test_input_column_default_type_from_config() {
    let args = ColumnArgs::new("grid1", "qty")
        .with_config(RenderConfig::default().with_default_input_type("number"));
    let column: InputColumn = InputColumn::from_args(args).unwrap();
    assert!(column.html().starts_with(r#"<input type="number""#));
}

#[test]
fn test_input_column_leaves_no_markers() {
    for column in [price_column(), InputColumn::new("grid1", "name")] {
        let html = column.html();
        for marker in ["%field%", "%type%", "%options%"] {
            assert!(!html.contains(marker), "{marker} left in {html}");
        }
    }
}

#[test]
fn test_field_name_is_not_rescanned() {
    let column = InputColumn::new("grid1", "%type%");
    let html = column.html();
    assert!(html.contains(r#"name="%type%Input""#));
    assert!(html.starts_with(r#"<input type="text""#));
}

#[test]
fn test_input_attributes_are_escaped() {
    let column = InputColumn::new("grid1", "note")
        .with_input(options(json!({"placeholder": "<b>\"a\" & 'b'</b>"})));
    assert!(
        column
            .html()
            .contains(r#"placeholder="&lt;b&gt;&quot;a&quot; &amp; &#039;b&#039;&lt;/b&gt;""#)
    );
}

#[test]
fn test_input_attribute_scalars() {
    let column = InputColumn::new("grid1", "qty").with_input(options(json!({
        "min": 0,
        "required": true,
        "disabled": false,
    })));
    let html = column.html();
    assert!(html.contains(r#" min="0""#));
    assert!(html.contains(r#" required="1""#));
    assert!(html.contains(r#" disabled="""#));
}

#[test]
fn test_input_html_is_idempotent() {
    let column = price_column();
    assert_eq!(column.html(), column.html());
    assert!(column.options().contains_key("input"));
}

// ============================================================================
// Input column: script
// ============================================================================

#[test]
fn test_input_column_script() {
    let script = price_column().script();
    assert_eq!(
        script,
        r##"$("#grid1").on("change", "[name=priceInput]", function (e) {
    var dataSource = $("#grid1").data("kendoGrid").dataSource;

    // only for datasource that can be updated
    if (typeof dataSource.transport.options.update !== "undefined") {
        var item = dataSource.getByUid($(this).data("row-uid"));
        item.set("price", $(this).val());
        if (!dataSource.options.autoSync) {
            dataSource.sync();
        }
    }
});"##
    );
}

#[test]
fn test_input_column_script_uses_grid_data_key() {
    let args = ColumnArgs::new("tree1", "price")
        .with_config(RenderConfig::default().with_grid_data_key("kendoTreeList"));
    let column: InputColumn = InputColumn::from_args(args).unwrap();
    let script = column.script();
    assert!(script.contains(r##"$("#tree1").data("kendoTreeList")"##));
}

#[test]
fn test_decimal_column_script_parses_value() {
    let column = DecimalInputColumn::decimal("grid1", "price");
    let script = column.script();
    assert!(script.contains(r#"item.set("price", (parseFloat(String($(this).val()).replace(/,/g, ".")"#));
    assert!(script.contains("|| 0)"));
}

#[test]
fn test_decimal_column_thousands_separator() {
    let config = RenderConfig::default()
        .with_decimal(DecimalOptions::default().with_thousands_separator("."));
    let args = ColumnArgs::new("grid1", "price").with_config(config);
    let column = DecimalInputColumn::from_args(args).unwrap();
    assert!(column.script().contains(r#"String($(this).val()).split(".").join("")"#));
}

// ============================================================================
// Input column: definition
// ============================================================================

#[test]
fn test_input_column_definition() {
    let column = price_column().with_option("title", "Price");

    assert!(column.column_options().get("input").is_none());
    assert_eq!(
        column.definition(),
        json!({
            "field": "price",
            "title": "Price",
            "template": column.html(),
            "attributes": {"class": "tableColumn tableInput"},
        })
    );
}

#[test]
fn test_cell_attributes_merge_into_definition() {
    let mut column = InputColumn::new("grid1", "price")
        .with_option("attributes", json!({"style": "text-align: right"}));
    column.add_attribute("data-kind", "money");

    let definition = column.definition();
    assert_eq!(
        definition["attributes"],
        json!({
            "style": "text-align: right",
            "class": "tableColumn tableInput",
            "data-kind": "money",
        })
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_args_requires_field() {
    let args = ColumnArgs::from_options("grid1", options(json!({"title": "Price"})));
    let err = <InputColumn>::from_args(args).unwrap_err();
    assert_eq!(err, HelperError::missing_option("grid1", "field"));
    assert_eq!(err.to_string(), "Missing option 'field' for grid1");
}

#[test]
fn test_from_args_rejects_non_string_field() {
    let args = ColumnArgs::from_options("grid1", options(json!({"field": 3})));
    assert!(matches!(
        FieldColumn::from_args(args),
        Err(HelperError::MissingOption { option: "field", .. })
    ));
}

#[test]
fn test_from_args_keeps_options() {
    let args = ColumnArgs::from_options(
        "grid1",
        options(json!({"field": "price", "width": 120, "input": {"type": "number"}})),
    );
    let column: InputColumn = InputColumn::from_args(args).unwrap();

    assert_eq!(column.field(), "price");
    assert_eq!(column.options().get("width"), Some(&json!(120)));
    assert!(column.html().contains(r#"type="number""#));
}

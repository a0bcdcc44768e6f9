//! Render configuration

use serde::Deserialize;
use serde::Serialize;

use crate::decimal::DecimalOptions;

/// Configuration shared by helpers and columns while rendering.
///
/// # Example
///
/// ```
/// use kendo_lib::config::RenderConfig;
/// use kendo_lib::decimal::DecimalOptions;
///
/// let config = RenderConfig::default()
///     .with_grid_data_key("kendoTreeList")
///     .with_decimal(DecimalOptions::default().with_thousands_separator(" "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// jQuery data key under which the grid widget instance is stored.
    ///
    /// Default: `"kendoGrid"`
    pub grid_data_key: String,

    /// Input type used by input columns that do not set one.
    ///
    /// Default: `"text"`
    pub default_input_type: String,

    /// Number format understood by decimal input columns.
    ///
    /// Default: no thousands separator
    pub decimal: DecimalOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_data_key: "kendoGrid".to_string(),
            default_input_type: "text".to_string(),
            decimal: DecimalOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid data key.
    pub fn with_grid_data_key(mut self, key: impl Into<String>) -> Self {
        self.grid_data_key = key.into();
        self
    }

    /// Sets the default input type.
    pub fn with_default_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.default_input_type = input_type.into();
        self
    }

    /// Sets the decimal options.
    pub fn with_decimal(mut self, decimal: DecimalOptions) -> Self {
        self.decimal = decimal;
        self
    }
}

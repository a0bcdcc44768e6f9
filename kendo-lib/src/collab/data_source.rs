//! Data source reference implementation

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::DataSource;
use super::Options;
use crate::error::HelperError;

/// The CRUD operation a transport serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Create,
    Read,
    Update,
    Destroy,
}

impl TransportKind {
    /// Returns the key used in the `transport` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "destroy" => Ok(Self::Destroy),
            other => Err(HelperError::UnknownTransport(other.to_string())),
        }
    }
}

/// A remote data source: per-operation transports plus plain options.
///
/// Renders as `{"transport": {...}, ...options}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSourceDef {
    transports: IndexMap<TransportKind, Options>,
    options: Options,
}

impl DataSourceDef {
    /// Creates a data source with no transports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a plain option such as `pageSize`.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Sets the `autoSync` option.
    pub fn with_auto_sync(self, auto_sync: bool) -> Self {
        self.with_option("autoSync", auto_sync)
    }

    /// Returns `true` if a transport is declared for the operation.
    pub fn has_transport(&self, kind: TransportKind) -> bool {
        self.transports.contains_key(&kind)
    }

    /// Returns the options of a declared transport.
    pub fn transport(&self, kind: TransportKind) -> Option<&Options> {
        self.transports.get(&kind)
    }

    /// Returns `true` if changes are synchronized without an explicit `sync()`.
    pub fn is_auto_sync(&self) -> bool {
        self.options
            .get("autoSync")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl DataSource for DataSourceDef {
    fn add_transport(&mut self, kind: TransportKind, options: Options) {
        self.transports.insert(kind, options);
    }

    fn to_json(&self) -> Value {
        let transport: Options = self
            .transports
            .iter()
            .map(|(kind, options)| (kind.as_str().to_string(), Value::Object(options.clone())))
            .collect();

        let mut data_source = Options::new();
        if !transport.is_empty() {
            data_source.insert("transport".to_string(), Value::Object(transport));
        }
        for (key, value) in &self.options {
            data_source.insert(key.clone(), value.clone());
        }
        Value::Object(data_source)
    }
}

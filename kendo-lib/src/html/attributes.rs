use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::Error as _;
use serde_json::Value;

/// Ordered HTML attributes. Insertion order is render order.
pub type AttributeMap = IndexMap<String, AttrValue>;

/// The value of a single HTML attribute.
///
/// | Value | Rendered as |
/// |-------|-------------|
/// | `Null` | omitted |
/// | `Flag(false)` | omitted |
/// | `Flag(true)` | `name="name"` |
/// | `Text(v)` | `name="v"` |
///
/// Deserializes from any JSON scalar; numbers become `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Suppresses the attribute.
    Null,
    /// Boolean attribute.
    Flag(bool),
    /// Literal value, written without escaping.
    Text(String),
}

impl AttrValue {
    /// Returns the text to render for an attribute called `name`, or `None`
    /// if the attribute is suppressed.
    pub fn render_value<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        match self {
            Self::Null | Self::Flag(false) => None,
            Self::Flag(true) => Some(name),
            Self::Text(value) => Some(value),
        }
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Null),
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            Value::Number(n) => Ok(Self::Text(n.to_string())),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(D::Error::custom(format!(
                "attribute value must be a scalar, got {other}"
            ))),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_scalars() {
        let attributes: AttributeMap = serde_json::from_value(json!({
            "tabindex": 1,
            "step": 0.5,
            "class": "grid",
            "hidden": true,
            "title": null,
        }))
        .unwrap();

        assert_eq!(attributes["tabindex"], AttrValue::Text("1".to_string()));
        assert_eq!(attributes["step"], AttrValue::Text("0.5".to_string()));
        assert_eq!(attributes["class"], AttrValue::from("grid"));
        assert_eq!(attributes["hidden"], AttrValue::Flag(true));
        assert_eq!(attributes["title"], AttrValue::Null);
    }

    #[test]
    fn test_deserialize_rejects_containers() {
        let result: Result<AttributeMap, _> = serde_json::from_value(json!({"data": [1, 2]}));
        assert!(result.unwrap_err().to_string().contains("must be a scalar"));
    }
}

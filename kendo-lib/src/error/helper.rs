//! Helper error types

use std::fmt;

/// The collaborator a helper delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// Field registry receiving `add_field`.
    Model,
    /// Transport registry receiving `add_transport`.
    DataSource,
    /// Widget receiving forwarded calls.
    Widget,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::DataSource => write!(f, "data source"),
            Self::Widget => write!(f, "widget"),
        }
    }
}

/// Errors raised while constructing, configuring or forwarding on a helper.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HelperError {
    /// A delegating call was made before the collaborator was attached.
    #[error("Helper '{helper}' has no {collaborator} attached")]
    MissingCollaborator {
        /// Identifier of the helper.
        helper: String,
        /// The collaborator that was required.
        collaborator: Collaborator,
    },

    /// The method is neither known to the helper nor to its widget.
    #[error("Unknown method: {method}")]
    UnknownMethod { method: String },

    /// A forwarded call returned a value where the helper was expected.
    #[error("Method '{method}' returned a value and cannot be chained")]
    NotChainable { method: String },

    /// No constructor is registered under the alias.
    #[error("Unknown {family} alias: {alias}")]
    UnknownAlias { family: &'static str, alias: String },

    /// The transport operation name is not one of create/read/update/destroy.
    #[error("Unknown transport: {0}")]
    UnknownTransport(String),

    /// A required option was not supplied.
    #[error("Missing option '{option}' for {target}")]
    MissingOption { target: String, option: &'static str },
}

impl HelperError {
    /// Creates a new missing collaborator error.
    pub fn missing(helper: impl Into<String>, collaborator: Collaborator) -> Self {
        Self::MissingCollaborator {
            helper: helper.into(),
            collaborator,
        }
    }

    /// Creates a new unknown method error.
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }

    /// Creates a new unknown alias error.
    pub fn unknown_alias(family: &'static str, alias: impl Into<String>) -> Self {
        Self::UnknownAlias {
            family,
            alias: alias.into(),
        }
    }

    /// Creates a new missing option error.
    pub fn missing_option(target: impl Into<String>, option: &'static str) -> Self {
        Self::MissingOption {
            target: target.into(),
            option,
        }
    }

    /// Returns `true` if this error reports an unknown forwarded method.
    pub fn is_unknown_method(&self) -> bool {
        matches!(self, Self::UnknownMethod { .. })
    }
}

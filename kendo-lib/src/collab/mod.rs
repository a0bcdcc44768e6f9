//! Collaborators a helper delegates to.
//!
//! A helper never owns its model, data source or widget. The host creates
//! them, hands the helper a [`Shared`] handle and keeps its own clone, so the
//! same data source can back several helpers on one page.
//!
//! The traits are deliberately narrow: [`Model::add_field`],
//! [`DataSource::add_transport`] and [`Widget::invoke`] are the only calls a
//! helper makes while being configured; `to_json`/`options` are read at render
//! time. [`ModelDef`], [`DataSourceDef`] and [`WidgetDef`] are small reference
//! implementations.

mod data_source;
mod model;
mod widget;

pub use data_source::*;
pub use model::*;
pub use widget::*;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::error::HelperError;

/// Ordered JSON options (column, field, transport and widget options).
pub type Options = serde_json::Map<String, Value>;

/// Handle to a collaborator.
///
/// Ownership is shared: the helper keeps the collaborator alive for as long as
/// it holds the handle, but never creates, replaces or tears it down. The host
/// keeps its own clone and sees every change the helper makes. An absent
/// collaborator is modelled by not attaching one, not by a dangling handle.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a collaborator in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Field registry of a data source schema.
pub trait Model: fmt::Debug {
    /// Declares a field.
    fn add_field(&mut self, key: &str, options: Options);

    /// Returns the model definition.
    fn to_json(&self) -> Value;
}

/// Transport registry of a data source.
pub trait DataSource: fmt::Debug {
    /// Declares the transport for one CRUD operation.
    fn add_transport(&mut self, kind: TransportKind, options: Options);

    /// Returns the data source definition, without its schema model.
    fn to_json(&self) -> Value;
}

/// What a forwarded widget call returned.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetReturn {
    /// The widget returned itself; the caller continues chaining.
    Chain,
    /// Any other return value.
    Value(Value),
}

/// A browser widget configured through named calls.
pub trait Widget: fmt::Debug {
    /// The jQuery plugin name, e.g. `kendoGrid`.
    fn name(&self) -> &str;

    /// Dispatches a call by method name.
    ///
    /// Implementations return [`HelperError::UnknownMethod`] for any method
    /// they do not support.
    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<WidgetReturn, HelperError>;

    /// Returns the options passed to the widget on initialization.
    fn options(&self) -> Options;
}

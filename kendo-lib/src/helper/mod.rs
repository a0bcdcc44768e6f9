//! The helper abstraction.
//!
//! A helper renders one widget instance into two strings: the HTML of its root
//! element ([`Helper::html`]) and the JavaScript that initializes it
//! ([`Helper::script`]). Configuration is accumulated through chained calls on
//! the helper, which delegate to the attached collaborators:
//!
//! ```
//! use kendo_lib::collab::{shared, DataSourceDef, ModelDef, Options, TransportKind, WidgetDef};
//! use kendo_lib::helper::{Helper, HelperExt, HelperFactory};
//! use kendo_lib::table::Table;
//! use serde_json::json;
//!
//! let mut table = Table::create("grid1");
//! table.base_mut()
//!     .set_model(shared(ModelDef::new().with_id("id")))
//!     .set_data_source(shared(DataSourceDef::new()))
//!     .set_widget(shared(WidgetDef::grid()));
//!
//! table
//!     .add_field("price", Options::new())?
//!     .add_transport(TransportKind::Read, Options::new())?
//!     .add_attribute("class", "grid")
//!     .chain("setPageable", &[json!(true)])?;
//!
//! assert_eq!(table.render(), r#"<div class="grid" id="grid1"></div>"#);
//! # Ok::<(), kendo_lib::error::HelperError>(())
//! ```
//!
//! Calls the helper does not define go through [`HelperExt::call`] to the widget.

mod alias;
mod base;
mod forward;

pub use alias::*;
pub use base::HelperBase;
pub use forward::Forwarded;

use std::fmt;

use serde_json::Value;

use crate::collab::Options;
use crate::collab::TransportKind;
use crate::collab::WidgetReturn;
use crate::error::HelperError;
use crate::html::AttrValue;

/// A builder producing markup and script for one widget instance.
///
/// The fluent configuration calls live on [`HelperExt`] for concrete helpers
/// and on `dyn Helper` itself for boxed helpers, such as the ones returned by
/// [`HelperRegistry::create`].
pub trait Helper: fmt::Debug {
    /// Returns the shared helper state.
    fn base(&self) -> &HelperBase;

    /// Returns the shared helper state mutably.
    fn base_mut(&mut self) -> &mut HelperBase;

    /// Returns the HTML to embed.
    fn html(&self) -> String;

    /// Returns the JavaScript initializing the widget.
    fn script(&self) -> String;

    /// Returns the id of the root element.
    fn id(&self) -> &str {
        self.base().id()
    }

    /// Renders the helper. Same as [`html`](Self::html).
    fn render(&self) -> String {
        self.html()
    }
}

/// Fluent configuration of concrete helpers. Every call returns the helper
/// itself so calls can be chained.
pub trait HelperExt: Helper + Sized {
    /// Sets an HTML attribute.
    fn add_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.base_mut().add_attribute(name, value);
        self
    }

    /// Declares a field on the attached model.
    fn add_field(&mut self, key: &str, options: Options) -> Result<&mut Self, HelperError> {
        self.base_mut().add_field(key, options)?;
        Ok(self)
    }

    /// Declares a transport on the attached data source.
    fn add_transport(&mut self, kind: TransportKind, options: Options) -> Result<&mut Self, HelperError> {
        self.base_mut().add_transport(kind, options)?;
        Ok(self)
    }

    /// Forwards a call to the attached widget.
    fn call(&mut self, method: &str, args: &[Value]) -> Result<Forwarded<'_, Self>, HelperError> {
        match self.base().forward(method, args)? {
            WidgetReturn::Chain => Ok(Forwarded::Helper(self)),
            WidgetReturn::Value(value) => Ok(Forwarded::Value(value)),
        }
    }

    /// Forwards a call that is expected to chain.
    fn chain(&mut self, method: &str, args: &[Value]) -> Result<&mut Self, HelperError> {
        match self.base().forward(method, args)? {
            WidgetReturn::Chain => Ok(self),
            WidgetReturn::Value(_) => Err(HelperError::NotChainable {
                method: method.to_string(),
            }),
        }
    }
}

impl<T: Helper> HelperExt for T {}

impl dyn Helper {
    /// Sets an HTML attribute.
    pub fn add_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.base_mut().add_attribute(name, value);
        self
    }

    /// Declares a field on the attached model.
    pub fn add_field(&mut self, key: &str, options: Options) -> Result<&mut Self, HelperError> {
        self.base_mut().add_field(key, options)?;
        Ok(self)
    }

    /// Declares a transport on the attached data source.
    pub fn add_transport(&mut self, kind: TransportKind, options: Options) -> Result<&mut Self, HelperError> {
        self.base_mut().add_transport(kind, options)?;
        Ok(self)
    }

    /// Forwards a call to the attached widget.
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Forwarded<'_, Self>, HelperError> {
        match self.base().forward(method, args)? {
            WidgetReturn::Chain => Ok(Forwarded::Helper(self)),
            WidgetReturn::Value(value) => Ok(Forwarded::Value(value)),
        }
    }

    /// Forwards a call that is expected to chain.
    pub fn chain(&mut self, method: &str, args: &[Value]) -> Result<&mut Self, HelperError> {
        match self.base().forward(method, args)? {
            WidgetReturn::Chain => Ok(self),
            WidgetReturn::Value(_) => Err(HelperError::NotChainable {
                method: method.to_string(),
            }),
        }
    }
}

/// A helper that can be constructed from its root element id alone.
pub trait HelperFactory: Helper + Sized {
    /// Creates a new helper rendering the element `id`.
    fn create(id: impl Into<String>) -> Self;
}

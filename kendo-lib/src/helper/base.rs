//! Shared helper state

use serde_json::Value;

use crate::collab::DataSource;
use crate::collab::Model;
use crate::collab::Options;
use crate::collab::Shared;
use crate::collab::TransportKind;
use crate::collab::Widget;
use crate::collab::WidgetReturn;
use crate::error::Collaborator;
use crate::error::HelperError;
use crate::html::AttrValue;
use crate::html::AttributeMap;

/// State every helper carries: the root element id, its HTML attributes and
/// the collaborators configuration is delegated to.
///
/// All three collaborators are optional. Delegating to one that is missing
/// fails immediately with [`HelperError::MissingCollaborator`], and
/// forwarding without a widget fails with [`HelperError::UnknownMethod`].
#[derive(Debug)]
pub struct HelperBase {
    id: String,
    attributes: AttributeMap,
    model: Option<Shared<dyn Model>>,
    data_source: Option<Shared<dyn DataSource>>,
    widget: Option<Shared<dyn Widget>>,
}

impl HelperBase {
    /// Creates the state for a helper rendering the element `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: AttributeMap::new(),
            model: None,
            data_source: None,
            widget: None,
        }
    }

    /// Returns the id of the root element.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTML attributes in insertion order.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Returns the attached model.
    pub fn model(&self) -> Option<&Shared<dyn Model>> {
        self.model.as_ref()
    }

    /// Returns the attached data source.
    pub fn data_source(&self) -> Option<&Shared<dyn DataSource>> {
        self.data_source.as_ref()
    }

    /// Returns the attached widget.
    pub fn widget(&self) -> Option<&Shared<dyn Widget>> {
        self.widget.as_ref()
    }

    /// Attaches the model receiving [`add_field`](Self::add_field).
    pub fn set_model(&mut self, model: Shared<dyn Model>) -> &mut Self {
        self.model = Some(model);
        self
    }

    /// Attaches the data source receiving [`add_transport`](Self::add_transport).
    pub fn set_data_source(&mut self, data_source: Shared<dyn DataSource>) -> &mut Self {
        self.data_source = Some(data_source);
        self
    }

    /// Attaches the widget receiving forwarded calls.
    pub fn set_widget(&mut self, widget: Shared<dyn Widget>) -> &mut Self {
        self.widget = Some(widget);
        self
    }

    /// Sets an HTML attribute, replacing an existing value in place.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Declares a field on the model.
    pub fn add_field(&mut self, key: &str, options: Options) -> Result<&mut Self, HelperError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| HelperError::missing(&self.id, Collaborator::Model))?;
        model.borrow_mut().add_field(key, options);
        Ok(self)
    }

    /// Declares a transport on the data source.
    pub fn add_transport(
        &mut self,
        kind: TransportKind,
        options: Options,
    ) -> Result<&mut Self, HelperError> {
        let data_source = self
            .data_source
            .as_ref()
            .ok_or_else(|| HelperError::missing(&self.id, Collaborator::DataSource))?;
        data_source.borrow_mut().add_transport(kind, options);
        Ok(self)
    }

    /// Forwards a call to the widget.
    pub fn forward(&self, method: &str, args: &[Value]) -> Result<WidgetReturn, HelperError> {
        let Some(widget) = &self.widget else {
            return Err(HelperError::unknown_method(method));
        };
        log::debug!("Helper '{}': forwarding {}() to widget", self.id, method);
        widget.borrow_mut().invoke(method, args)
    }

    /// Returns the data source definition with the model as its schema.
    ///
    /// A model without a data source still yields `{"schema": {"model": ...}}`.
    /// Returns `None` only when neither is attached.
    pub fn data_source_json(&self) -> Option<Value> {
        let mut json = match &self.data_source {
            Some(data_source) => data_source.borrow().to_json(),
            None if self.model.is_some() => Value::Object(Options::new()),
            None => return None,
        };

        if let (Some(model), Value::Object(map)) = (&self.model, &mut json) {
            let schema = map
                .entry("schema")
                .or_insert_with(|| Value::Object(Options::new()));
            if let Value::Object(schema) = schema {
                schema.insert("model".to_string(), model.borrow().to_json());
            }
        }
        Some(json)
    }

    /// Renders `$("#id").name({...});` for the attached widget, with `extra`
    /// merged over the widget's own options.
    pub fn widget_script(&self, extra: Options) -> Option<String> {
        let widget = self.widget.as_ref()?;
        let widget = widget.borrow();

        let mut options = widget.options();
        for (key, value) in extra {
            options.insert(key, value);
        }
        Some(format!(
            r##"$("#{id}").{name}({options});"##,
            id = self.id,
            name = widget.name(),
            options = Value::Object(options),
        ))
    }
}

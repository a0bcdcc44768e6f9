//! Server-side builder for Kendo UI widgets
//!
//! Helpers describe a widget declaratively (fields, transports, columns,
//! attributes) and render it into two strings: the HTML to embed and the
//! JavaScript initializing it.

pub mod collab;
pub mod column;
pub mod config;
pub mod control;
pub mod decimal;
pub mod error;
pub mod helper;
pub mod html;
pub mod table;

pub use config::RenderConfig;
pub use error::Error;
pub use helper::Helper;
pub use helper::HelperExt;
pub use helper::HelperFactory;

//! Result of a forwarded call

use serde_json::Value;

/// What [`HelperExt::call`](super::HelperExt::call) returned.
///
/// When the widget returns itself the helper is handed back instead, so a
/// chain keeps operating on the helper rather than on the raw widget.
#[derive(Debug)]
pub enum Forwarded<'a, H: ?Sized> {
    /// The widget chained; continue on the helper.
    Helper(&'a mut H),
    /// The widget returned a value.
    Value(Value),
}

impl<'a, H: ?Sized> Forwarded<'a, H> {
    /// Returns the helper if the call chained.
    pub fn into_helper(self) -> Option<&'a mut H> {
        match self {
            Self::Helper(helper) => Some(helper),
            Self::Value(_) => None,
        }
    }

    /// Returns the value if the call did not chain.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Helper(_) => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns `true` if the call chained.
    pub fn is_helper(&self) -> bool {
        matches!(self, Self::Helper(_))
    }
}

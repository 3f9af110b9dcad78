//! The caller-supplied context forwarded to remote components.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Viewport size hint carried in a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Context sent along with a component request.
///
/// The bridge never looks inside it: the value is handed to the transport exactly as the
/// caller built it. Fields other than `data` and `size` live in `extra` and are flattened
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Application data for the remote component.
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Optional viewport size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Any other caller-defined fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to `data`.
    #[must_use]
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Sets the viewport size.
    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Adds an opaque top-level field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_are_flattened() {
        let ctx = Context::new()
            .with_data("user", 7)
            .with_size(320.0, 480.0)
            .with_field("locale", "en");
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(
            value,
            json!({
                "data": {"user": 7},
                "size": {"width": 320.0, "height": 480.0},
                "locale": "en"
            })
        );
        let back: Context = serde_json::from_value(value).unwrap();
        assert_eq!(back, ctx);
    }
}

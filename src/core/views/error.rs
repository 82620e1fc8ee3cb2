//! # Error payload view module

use std::sync::Arc;

use serde_json::Value;

use super::JsonView;

/// Read-only accessors over an error payload delivered on a stream.
///
/// The API reports stream faults either as a bare `{code, message}` object
/// or as an `errors` array of such objects. The accessors read the bare
/// fields first and fall back to the first array entry.
#[derive(Debug, Clone)]
pub struct ApiErrors {
    view: JsonView,
}

impl ApiErrors {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Human-readable description of the fault.
    pub fn message(&self) -> Option<&str> {
        self.view.str_field("message").or_else(|| {
            self.value()
                .pointer("/errors/0/message")
                .and_then(Value::as_str)
        })
    }

    /// Service-specific error code.
    pub fn code(&self) -> Option<i64> {
        self.view.i64_field("code").or_else(|| {
            self.value()
                .pointer("/errors/0/code")
                .and_then(Value::as_i64)
        })
    }

    /// Every error object carried by the payload.
    pub fn all(&self) -> Vec<ApiErrors> {
        let count = self
            .view
            .field("errors")
            .as_array()
            .map(|items| items.len())
            .unwrap_or(0);

        (0..count)
            .map(|index| ApiErrors::from_view(self.view.at("errors").at(&index.to_string())))
            .collect()
    }
}

impl From<Value> for ApiErrors {
    fn from(value: Value) -> Self {
        ApiErrors::new(Arc::new(value))
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn read_bare_error_objects() {
        let error = ApiErrors::from(json!({"code": 420, "message": "Exceeded connection limit"}));

        assert_eq!(error.code(), Some(420));
        assert_eq!(error.message(), Some("Exceeded connection limit"));
        assert!(error.all().is_empty());
    }

    #[test]
    fn fall_back_to_the_first_list_entry() {
        let error = ApiErrors::from(json!({
            "errors": [
                {"code": 88, "message": "Rate limit exceeded"},
                {"code": 130, "message": "Over capacity"}
            ]
        }));

        assert_eq!(error.code(), Some(88));
        assert_eq!(error.message(), Some("Rate limit exceeded"));

        let all = error.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].message(), Some("Over capacity"));
    }
}

//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Reject the request when any required field is absent, naming every
/// missing field at once.
pub(crate) fn require_fields(fields: &[(FieldName, bool)]) -> Result<(), Error> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.as_str())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(
        Error::invalid_request(format!("missing required fields: {}", missing.join(", ")))
            .with_details(json!({ "fields": missing, "code": "missing_field" })),
    )
}

/// A template as served by `GET /templates/<name>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Template {
    pub name: String,
    pub subject: String,
    pub body: String,
    /// Placeholders found in the subject and the body, interpolated at send time.
    #[serde(default)]
    pub variables: Vec<String>,
}

impl Template {
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }
}

/// Body of `DELETE /templates/<name>`, whatever the status code.
///
/// A successful deletion carries a `message`, a failed one an `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct DeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::GatewayError;

/// North America server url.
pub const NA_SERVER: &str = "https://www.iatspayments.com";
/// UK server url.
pub const UK_SERVER: &str = "https://www.uk.iatspayments.com";

/// Parameter name carrying the account agent code on every call.
pub const AGENT_CODE_FIELD: &str = "agentCode";
/// Parameter name carrying the account password on every call.
pub const PASSWORD_FIELD: &str = "password";

/// Regional server selector. Exactly two regions exist; anything else is a
/// configuration error surfaced when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerId {
    Na,
    Uk,
}

impl ServerId {
    pub fn base_url(self) -> &'static str {
        match self {
            ServerId::Na => NA_SERVER,
            ServerId::Uk => UK_SERVER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServerId::Na => "NA",
            ServerId::Uk => "UK",
        }
    }
}

impl FromStr for ServerId {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NA" => Ok(ServerId::Na),
            "UK" => Ok(ServerId::Uk),
            other => Err(GatewayError::InvalidServerId(other.to_string())),
        }
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a server selector to its regional base url.
pub fn resolve_server(server_id: &str) -> Result<&'static str, GatewayError> {
    Ok(server_id.parse::<ServerId>()?.base_url())
}

/// Account credentials, fixed for the lifetime of a client and merged into
/// every outgoing parameter set.
#[derive(Clone)]
pub struct Credentials {
    agent_code: String,
    password: String,
}

impl Credentials {
    pub fn new(agent_code: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            agent_code: agent_code.into(),
            password: password.into(),
        }
    }

    pub fn agent_code(&self) -> &str {
        &self.agent_code
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credentials [agent code {} - password <redacted>]",
            self.agent_code
        )
    }
}

/// Insertion-ordered request parameters, built fresh per call.
///
/// Values are kept as generic JSON values so callers can pass strings or
/// numbers; the transport renders them as element text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    fields: Vec<(String, Value)>,
}

impl RequestParams {
    pub fn new() -> Self {
        RequestParams::default()
    }

    /// Sets a field. An existing field with the same name keeps its position
    /// and gets the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merges the account credentials in. Credential fields are written last
    /// so they win over any caller-supplied field with the same name.
    pub(crate) fn merge_credentials(&mut self, credentials: &Credentials) {
        self.insert(AGENT_CODE_FIELD, credentials.agent_code());
        self.insert(PASSWORD_FIELD, credentials.password());
    }
}

impl FromIterator<(String, Value)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Vendor XML payload as received, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse(String);

impl RawResponse {
    pub fn new(payload: impl Into<String>) -> Self {
        RawResponse(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Converts the payload into a generic value tree.
    pub fn to_value(&self) -> Result<Value, GatewayError> {
        crate::xml::xml_to_value(self.as_str())
    }

    /// Extracts the `{operation}Result` subtree out of a response envelope.
    pub fn result(&self, operation: &str) -> Result<Value, GatewayError> {
        let value = self.to_value()?;
        let response_tag = format!("{operation}Response");
        let result_tag = format!("{operation}Result");
        value
            .get("Body")
            .and_then(|body| body.get(&response_tag))
            .and_then(|response| response.get(&result_tag))
            .cloned()
            .ok_or_else(|| GatewayError::Parse(format!("missing {result_tag} in response body")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_server_known_regions() {
        assert_eq!(resolve_server("NA").unwrap(), NA_SERVER);
        assert_eq!(resolve_server("UK").unwrap(), UK_SERVER);
    }

    #[test]
    fn test_resolve_server_invalid_id() {
        let result = resolve_server("EU");
        assert!(matches!(result, Err(GatewayError::InvalidServerId(id)) if id == "EU"));
    }

    #[test]
    fn test_server_id_is_case_sensitive() {
        assert!("na".parse::<ServerId>().is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("TEST88", "secret");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("TEST88"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_merge_credentials_appends_both_fields() {
        let credentials = Credentials::new("TEST88", "pw");
        let mut params = RequestParams::new().with("invoiceNum", "INV-1");
        params.merge_credentials(&credentials);

        assert_eq!(params.len(), 3);
        assert_eq!(*params.get(AGENT_CODE_FIELD).unwrap(), "TEST88");
        assert_eq!(*params.get(PASSWORD_FIELD).unwrap(), "pw");
        assert_eq!(*params.get("invoiceNum").unwrap(), "INV-1");
    }

    #[test]
    fn test_merge_credentials_wins_on_collision() {
        let credentials = Credentials::new("TEST88", "pw");
        let mut params = RequestParams::new()
            .with(AGENT_CODE_FIELD, "spoofed")
            .with("total", "1.00");
        params.merge_credentials(&credentials);

        assert_eq!(params.len(), 3);
        assert_eq!(*params.get(AGENT_CODE_FIELD).unwrap(), "TEST88");
    }

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut params = RequestParams::new().with("a", "1").with("b", "2");
        params.insert("a", "3");

        let names: Vec<_> = params.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(*params.get("a").unwrap(), "3");
    }

    #[test]
    fn test_params_keep_numeric_values() {
        let params = RequestParams::new().with("item", 2);
        assert_eq!(*params.get("item").unwrap(), 2);
    }
}

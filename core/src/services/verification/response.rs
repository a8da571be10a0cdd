//! Extraction of the provider request id from a create response

use serde_json::Value;

/// Where a request id may appear in a provider response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIdRule {
    /// Top-level field
    Field(&'static str),
    /// Field inside a top-level object
    Nested(&'static str, &'static str),
}

/// Candidate locations, in priority order
pub const REQUEST_ID_RULES: &[RequestIdRule] = &[
    RequestIdRule::Field("request_id"),
    RequestIdRule::Field("requestId"),
    RequestIdRule::Field("id"),
    RequestIdRule::Nested("data", "request_id"),
];

impl RequestIdRule {
    fn apply(&self, response: &Value) -> Option<String> {
        let value = match self {
            RequestIdRule::Field(name) => response.get(*name),
            RequestIdRule::Nested(parent, name) => response.get(*parent)?.get(*name),
        }?;

        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Return the first populated request id among [`REQUEST_ID_RULES`]
pub fn extract_request_id(response: &Value) -> Option<String> {
    REQUEST_ID_RULES.iter().find_map(|rule| rule.apply(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_case_alias() {
        let response = json!({
            "request_id": "c11236f4-00bf-4b89-84ba-88b25df97315",
            "check_url": "https://api.nexmo.com/v2/verify/c11236f4-00bf-4b89-84ba-88b25df97315/silent-auth/redirect"
        });
        assert_eq!(
            extract_request_id(&response).as_deref(),
            Some("c11236f4-00bf-4b89-84ba-88b25df97315")
        );
    }

    #[test]
    fn test_first_populated_alias_wins() {
        let response = json!({ "request_id": "", "requestId": "camel", "id": "plain" });
        assert_eq!(extract_request_id(&response).as_deref(), Some("camel"));

        let response = json!({ "request_id": null, "id": "plain" });
        assert_eq!(extract_request_id(&response).as_deref(), Some("plain"));
    }

    #[test]
    fn test_nested_and_numeric_ids() {
        let response = json!({ "data": { "request_id": "nested" } });
        assert_eq!(extract_request_id(&response).as_deref(), Some("nested"));

        let response = json!({ "id": 42 });
        assert_eq!(extract_request_id(&response).as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(extract_request_id(&json!({ "status": "ok" })), None);
        assert_eq!(extract_request_id(&Value::Null), None);
        assert_eq!(extract_request_id(&json!("plain string")), None);
    }
}

//! Backend health check.

use super::{ApiError, ApiRequest, BackendClient, HttpResponse};
use serde_json::Value;

pub const HEALTH_PATH: &str = "/api/health";

/// Shown while the check is outstanding.
pub const CHECKING: &str = "checking...";

/// Shown for any failed check.
pub const UNAVAILABLE: &str = "unavailable";

pub async fn check_health(client: &dyn BackendClient) -> Result<String, ApiError> {
    let response = client.send(ApiRequest::get(HEALTH_PATH)).await?;
    interpret_health(&response)
}

/// Turn a health response into the text to display.
///
/// A truthy top-level `status` field wins; anything else shows the whole
/// body re-rendered as JSON.
pub fn interpret_health(response: &HttpResponse) -> Result<String, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let data: Value = serde_json::from_str(&response.body)?;
    if data.is_null() {
        return Err(ApiError::Parse(serde::de::Error::custom(
            "health response body is null",
        )));
    }
    let text = match data.get("status") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(status) if is_truthy(status) => status.to_string(),
        _ => data.to_string(),
    };
    Ok(text)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{respond, MockBackend};

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn status_field_is_displayed() {
        assert_eq!(interpret_health(&ok(r#"{"status":"ok"}"#)).unwrap(), "ok");
        assert_eq!(
            interpret_health(&ok(r#"{"status":"degraded","db":"down"}"#)).unwrap(),
            "degraded"
        );
    }

    #[test]
    fn missing_status_renders_whole_body() {
        assert_eq!(
            interpret_health(&ok(r#"{"message":"API is running"}"#)).unwrap(),
            r#"{"message":"API is running"}"#
        );
        assert_eq!(interpret_health(&ok("[1,2]")).unwrap(), "[1,2]");
    }

    #[test]
    fn falsy_status_falls_back_to_body() {
        assert_eq!(
            interpret_health(&ok(r#"{"status":""}"#)).unwrap(),
            r#"{"status":""}"#
        );
        assert_eq!(
            interpret_health(&ok(r#"{"status":null}"#)).unwrap(),
            r#"{"status":null}"#
        );
        assert_eq!(interpret_health(&ok(r#"{"status":1}"#)).unwrap(), "1");
    }

    #[test]
    fn null_body_is_a_parse_error() {
        let err = interpret_health(&ok("null")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.to_string().contains("null"));
        assert_eq!(interpret_health(&ok("42")).unwrap(), "42");
    }

    #[test]
    fn non_success_is_a_status_error() {
        let response = HttpResponse {
            status: 503,
            body: "maintenance".to_string(),
        };
        let err = interpret_health(&response).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "API responded with 503");
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        let err = interpret_health(&ok("<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn check_health_issues_one_get() {
        let mock = MockBackend::new();
        mock.add_response("GET /api/health", respond(200, r#"{"status":"ok"}"#));

        assert_eq!(check_health(&mock).await.unwrap(), "ok");
        assert_eq!(mock.calls(), vec![ApiRequest::get(HEALTH_PATH)]);
    }

    #[tokio::test]
    async fn network_failure_propagates() {
        let mock = MockBackend::new();
        mock.add_response(
            "GET /api/health",
            Err(ApiError::Network("connection refused".to_string())),
        );

        let err = check_health(&mock).await.unwrap_err();
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}

/*!
The transport layer shared by both clients: one response-interpretation
core, two execution strategies (async and blocking), selected at
composition time by the client type.
*/

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Operation, Result};

/// Content type sent with every request.
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Supported HTTP methods. The clients only issue GET; POST carries an
/// optional JSON body.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
}

impl Method {
    /// Converts `Get` to `"GET"` and `Post` to `"POST"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Turns a raw response into the parsed JSON value or a normalized error.
///
/// Success statuses parse the body as JSON; a body that fails to parse
/// despite the success status surfaces as [`Error::Json`]. Failure
/// statuses probe the body for the API's `message` field and fall back to
/// the numeric code plus status text, substituting a phrase naming the
/// endpoint when the status text is empty.
pub fn interpret(operation: Operation, code: u16, status_text: &str, body: &str) -> Result<Value> {
    if (200..300).contains(&code) {
        return Ok(serde_json::from_str(body)?);
    }
    match api_message(body) {
        Some(message) => Err(Error::Api { operation, message }),
        None => Err(Error::Status {
            operation,
            code,
            text: if status_text.is_empty() {
                format!("no status text from the {} endpoint", operation.path())
            } else {
                status_text.to_string()
            },
        }),
    }
}

/// The `message` field of a JSON error body, if the body parses to an
/// object carrying one.
fn api_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["message"].as_str().map(ToString::to_string)
}

/// Executes a single request asynchronously. One attempt, no timeout.
pub async fn execute(
    client: &reqwest::Client,
    operation: Operation,
    method: Method,
    url: &str,
    user_agent: &str,
    body: Option<&Value>,
) -> Result<Value> {
    debug!(method = method.as_str(), url, "dispatching request");
    let request = match method {
        Method::Get => client.get(url),
        Method::Post => match body {
            Some(body) => client.post(url).json(body),
            None => client.post(url),
        },
    };
    let response = request
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(USER_AGENT, user_agent)
        .send()
        .await?;
    let status = response.status();
    let text = response.text().await?;
    interpret(
        operation,
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        &text,
    )
}

/// Executes a single request on the current thread, blocking until the
/// response arrives. Same contract as [`execute`].
pub fn execute_blocking(
    client: &reqwest::blocking::Client,
    operation: Operation,
    method: Method,
    url: &str,
    user_agent: &str,
    body: Option<&Value>,
) -> Result<Value> {
    debug!(method = method.as_str(), url, "dispatching blocking request");
    let request = match method {
        Method::Get => client.get(url),
        Method::Post => match body {
            Some(body) => client.post(url).json(body),
            None => client.post(url),
        },
    };
    let response = request
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(USER_AGENT, user_agent)
        .send()?;
    let status = response.status();
    let text = response.text()?;
    interpret(
        operation,
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        &text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_parses_the_body() {
        let value = interpret(
            Operation::TopHeadlines,
            200,
            "OK",
            r#"{"articles":[{"url":"https://example.org/a"}]}"#,
        )
        .unwrap();
        assert_eq!(value["articles"][0]["url"], "https://example.org/a");
    }

    #[test]
    fn success_status_with_garbage_body_is_a_json_error() {
        let err = interpret(Operation::TopHeadlines, 200, "OK", "<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn api_message_is_surfaced_verbatim() {
        let err = interpret(
            Operation::Search,
            404,
            "Not Found",
            r#"{"status":"error","message":"Not found"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn unparseable_failure_body_falls_back_to_the_status() {
        let err = interpret(Operation::Search, 500, "Internal Server Error", "<html>").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("Internal Server Error"));
    }

    #[test]
    fn empty_status_text_names_the_endpoint() {
        let err = interpret(Operation::TopHeadlines, 0, "", "").unwrap_err();
        assert!(err.to_string().contains("top-headlines endpoint"));
    }

    #[test]
    fn failure_body_without_message_field_is_a_status_error() {
        let err = interpret(Operation::Search, 502, "Bad Gateway", r#"{"detail":"x"}"#).unwrap_err();
        assert!(matches!(err, Error::Status { code: 502, .. }));
    }
}

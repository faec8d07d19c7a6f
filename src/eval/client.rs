//! HTTP client for the remote evaluation service.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::eval::error::EvalError;

#[derive(Debug, Serialize)]
struct EvalRequest<'a> {
    expr: &'a str,
}

/// Client for the expression evaluation service.
///
/// One POST per evaluation: `{"expr": <buffer>}` in, a JSON body with a
/// `result` field out. No request timeout is configured and a request
/// cannot be cancelled; the session stays pending until the service
/// answers.
pub struct EvaluatorClient {
    client: Client,
    base_url: String,
}

impl EvaluatorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to build evaluator client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Evaluate `expr` remotely and return the result's string form.
    pub async fn evaluate(&self, expr: &str) -> Result<String, EvalError> {
        tracing::debug!(expr, "submitting expression");

        let response = self
            .client
            .post(&self.base_url)
            .json(&EvalRequest { expr })
            .send()
            .await
            .map_err(|e| EvalError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EvalError::Transport(format!(
                "evaluation service returned {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| EvalError::Transport(e.to_string()))?;

        match body.get("result") {
            Some(result) if is_usable(result) => Ok(render(result)),
            _ => Err(EvalError::NoResult),
        }
    }
}

/// Whether the `result` field carries an actual value.
///
/// Mirrors the service's loosely-typed contract: null, `false`, `0`, and
/// the empty string all count as "no result".
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of the result, without JSON quoting for strings.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_and_empty_values_are_unusable() {
        assert!(!is_usable(&json!(null)));
        assert!(!is_usable(&json!(false)));
        assert!(!is_usable(&json!(0)));
        assert!(!is_usable(&json!(0.0)));
        assert!(!is_usable(&json!("")));
    }

    #[test]
    fn real_values_are_usable() {
        assert!(is_usable(&json!(4)));
        assert!(is_usable(&json!(-0.5)));
        assert!(is_usable(&json!("4")));
        assert!(is_usable(&json!(true)));
    }

    #[test]
    fn strings_render_without_quotes() {
        assert_eq!(render(&json!("7.5")), "7.5");
    }

    #[test]
    fn numbers_render_in_plain_form() {
        assert_eq!(render(&json!(4)), "4");
        assert_eq!(render(&json!(2.5)), "2.5");
    }
}

//! Lenient JSON body extractor.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body that falls back to `T::default()` instead of rejecting.
///
/// A request that is not `application/json`, has an empty body, or carries a
/// JSON array yields the default value, so handlers see "no fields supplied".
/// Malformed JSON or a scalar body is an [`AppError::Unhandled`].
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Unhandled(format!("reading body: {}", e)))?;
        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Unhandled(format!("invalid JSON body: {}", e)))?;
        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(JsonBody)
                .map_err(|e| AppError::Unhandled(format!("invalid JSON body: {}", e))),
            Value::Array(_) => Ok(JsonBody(T::default())),
            _ => Err(AppError::Unhandled("JSON body must be an object".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        #[serde(default)]
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, AppError> {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonBody::<Payload>::from_request(req, &()).await.map(|JsonBody(p)| p)
    }

    #[tokio::test]
    async fn parses_json_object() {
        let parsed = extract(Some("application/json; charset=utf-8"), r#"{"name":"x"}"#)
            .await
            .unwrap();
        assert_eq!(parsed.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn non_json_content_type_yields_default() {
        let parsed = extract(Some("text/plain"), r#"{"name":"x"}"#).await.unwrap();
        assert_eq!(parsed, Payload::default());
        let parsed = extract(None, "").await.unwrap();
        assert_eq!(parsed, Payload::default());
    }

    #[tokio::test]
    async fn array_body_yields_default() {
        let parsed = extract(Some("application/json"), "[1, 2]").await.unwrap();
        assert_eq!(parsed, Payload::default());
    }

    #[tokio::test]
    async fn malformed_json_is_unhandled() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(err, AppError::Unhandled(_)));
    }
}

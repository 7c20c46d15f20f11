use crate::pagination::Cursor;
use crate::Error;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded API response.
///
/// Bodies are kept as raw JSON; the only fields this library interprets
/// are the pagination markers `last` and `next`.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl ApiResponse {
    /// Checks the status and decodes the body. An empty body becomes
    /// `Value::Null`; several write endpoints answer with one.
    pub(crate) async fn read(response: reqwest::Response) -> Result<ApiResponse, Error> {
        let response = response.error_for_status()?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        tracing::debug!(%status, "response decoded");
        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The decoded JSON body.
    #[must_use]
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response, returning the decoded body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Deserializes the body into a caller-chosen type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// True when the server marked this page as the final one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.body
            .get("last")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Cursor of the following page, if the server offered one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        match self.body.get("next") {
            Some(Value::String(next)) => Some(Cursor(next.clone())),
            Some(Value::Number(next)) => Some(Cursor(next.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;
    use crate::Cursor;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use serde_json::json;

    fn page(body: serde_json::Value) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body,
        }
    }

    #[test]
    fn last_and_next_markers() {
        let response = page(json!({ "last": true, "next": "B", "posts": [] }));
        assert!(response.is_last_page());
        assert_eq!(response.next_cursor(), Some(Cursor::from("B")));

        let response = page(json!({ "posts": [] }));
        assert!(!response.is_last_page());
        assert_eq!(response.next_cursor(), None);

        let response = page(json!({ "next": null }));
        assert_eq!(response.next_cursor(), None);
    }

    #[test]
    fn numeric_next_cursor_is_stringified() {
        let response = page(json!({ "next": 20201108 }));
        assert_eq!(response.next_cursor(), Some(Cursor::from("20201108")));
    }
}

//! Request descriptions.
//!
//! A [`RequestSpec`] captures everything about a request except the
//! base URL and credentials, which the client supplies. Keeping the
//! description separate from execution lets the retry loop rebuild
//! the request for each attempt.

use std::time::Duration;

use serde_json::Value;

// ============================================================================
// Method
// ============================================================================

/// HTTP methods used by the Recipez API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl Method {
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// Returns the method name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

// ============================================================================
// Body
// ============================================================================

/// One file in a multipart upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name.
    pub field: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type, when known.
    pub content_type: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// The payload attached to a request.
///
/// Making the payload kind explicit keeps the executor from guessing
/// content types: a spec either has no body, a JSON document, or a
/// multipart form, and the executor encodes each accordingly.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No payload.
    Empty,
    /// JSON payload, sent with `Content-Type: application/json`.
    Json(Value),
    /// Multipart form payload.
    Multipart {
        /// Plain text fields.
        fields: Vec<(String, String)>,
        /// File attachments.
        files: Vec<FilePart>,
    },
}

// ============================================================================
// Request spec
// ============================================================================

/// A complete description of one API request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Request payload.
    pub body: RequestBody,
    /// Explicit timeout, overriding the client's timeout policy.
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    /// Creates a GET request spec.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    /// Creates a POST request spec with a JSON body.
    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: RequestBody::Json(body),
            timeout: None,
        }
    }

    /// Creates a PUT request spec with a JSON body.
    pub fn put_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: RequestBody::Json(body),
            timeout: None,
        }
    }

    /// Creates a DELETE request spec.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    /// Creates a POST request spec with a multipart form body.
    pub fn post_multipart(
        path: impl Into<String>,
        fields: Vec<(String, String)>,
        files: Vec<FilePart>,
    ) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: RequestBody::Multipart { fields, files },
            timeout: None,
        }
    }

    /// Overrides the timeout for this request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_set_method_and_body() {
        let get = RequestSpec::get("/api/recipe/all");
        assert_eq!(get.method, Method::Get);
        assert!(matches!(get.body, RequestBody::Empty));
        assert!(get.timeout.is_none());

        let post = RequestSpec::post_json("/api/recipe/create", json!({ "recipe_name": "Soup" }));
        assert_eq!(post.method, Method::Post);
        assert!(matches!(post.body, RequestBody::Json(_)));

        let delete = RequestSpec::delete("/api/recipe/delete/abc");
        assert_eq!(delete.method, Method::Delete);
    }

    #[test]
    fn test_with_timeout() {
        let spec = RequestSpec::get("/health").with_timeout(Duration::from_secs(2));
        assert_eq!(spec.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
    }
}

//! Response envelope shared by every endpoint.
//!
//! A successful body looks like `{"data": ..., "meta": {"pagination": {...}}}`;
//! a failed one carries `{"errors": [...]}` and usually an empty `meta`.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A response exactly as the transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    /// Convenience constructor for responses without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decoded response: HTTP metadata plus the typed body, if there was one.
#[derive(Debug, Clone)]
pub struct ClientResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// `None` when the server sent no body at all (e.g. 204).
    pub body: Option<ResponseBody<T>>,
}

impl<T> ClientResponse<T> {
    /// Wraps `data` in a 200 response with no pagination metadata.
    pub fn from_data(data: T) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Some(ResponseBody {
                data: Some(data),
                meta: None,
                errors: Vec::new(),
            }),
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.body
            .as_ref()
            .and_then(|b| b.meta.as_ref())
            .and_then(|m| m.pagination.as_ref())
    }

    pub fn into_data(self) -> Option<T> {
        self.body.and_then(|b| b.data)
    }
}

/// The JSON body of a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBody<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "lenient_meta")]
    pub meta: Option<ResponseMeta>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Paging information reported alongside a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: PaginationLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// One entry of the `errors` array of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub status: Option<u16>,
    pub source: Option<String>,
}

// Error responses send `"meta": []`. Anything else must decode as a meta object.
fn lenient_meta<'de, D>(deserializer: D) -> Result<Option<ResponseMeta>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paginated_body() {
        let json = r#"{
            "data": [{"id": "az-1"}, {"id": "az-2"}],
            "meta": {"pagination": {
                "total": 5, "count": 2, "per_page": 2,
                "current_page": 1, "total_pages": 3,
                "links": {"next": "https://api.ukfast.io/x?page=2", "previous": null,
                          "first": "https://api.ukfast.io/x?page=1", "last": "https://api.ukfast.io/x?page=3"}
            }}
        }"#;
        let body: ResponseBody<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
        let data = body.data.unwrap();
        assert_eq!(data.len(), 2);
        let paging = body.meta.unwrap().pagination.unwrap();
        assert_eq!(paging.total, 5);
        assert_eq!(paging.total_pages, 3);
        assert_eq!(paging.links.previous, None);
    }

    #[test]
    fn decodes_error_body_with_array_meta() {
        let json = r#"{
            "errors": [{"title": "Not found", "detail": "Resource with id 'dhcp-x' not found",
                        "status": 404, "source": "id"}],
            "meta": []
        }"#;
        let body: ResponseBody<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(body.data.is_none());
        assert_eq!(body.meta, None);
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].status, Some(404));
        assert_eq!(body.errors[0].source.as_deref(), Some("id"));
    }

    #[test]
    fn null_links_are_tolerated() {
        let json = r#"{
            "data": [],
            "meta": {"pagination": {"total": 4, "count": 0, "per_page": 2,
                                    "current_page": 1, "total_pages": 2, "links": null}}
        }"#;
        let body: ResponseBody<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
        let paging = body.meta.unwrap().pagination.unwrap();
        assert_eq!(paging.total_pages, 2);
        assert_eq!(paging.links, PaginationLinks::default());
    }

    #[test]
    fn malformed_meta_fails_the_body() {
        let json = r#"{"data": [], "meta": {"pagination": {"total": "many"}}}"#;
        assert!(serde_json::from_str::<ResponseBody<Vec<serde_json::Value>>>(json).is_err());

        let json = r#"{"data": [], "meta": [1, 2]}"#;
        assert!(serde_json::from_str::<ResponseBody<Vec<serde_json::Value>>>(json).is_err());
    }

    #[test]
    fn raw_response_header_lookup_ignores_case() {
        let raw = RawResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: String::new(),
        };
        assert_eq!(raw.header("content-type"), Some("application/json"));
        assert!(raw.is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}

//! Request dispatcher for the UKFast API.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    paginated::Paginated,
    request::ClientRequestParameters,
    transport::{ApiRequest, HttpTransport, Method, Transport},
    types::{ClientResponse, RawResponse, ResponseBody},
    Error,
};

/// Dispatches requests through a [`Transport`] and translates responses into
/// typed values or [`Error`]s.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client backed by [`HttpTransport`].
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Creates a client over any transport. Used for testing.
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends `request` and fails on any non-success status.
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let method = request.method;
        let path = request.path.clone();
        let raw = self.transport.send_request(request).await?;

        if raw.is_success() {
            return Ok(raw);
        }

        let errors = serde_json::from_str::<ResponseBody<serde_json::Value>>(&raw.body)
            .map(|b| b.errors)
            .unwrap_or_default();
        tracing::error!(
            "{} {} failed with status {}: {}",
            method,
            path,
            raw.status,
            truncate_body(&raw.body)
        );
        if raw.status == 404 {
            Err(Error::NotFound { errors })
        } else {
            Err(Error::Api {
                status: raw.status,
                errors,
            })
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<ClientResponse<T>, Error> {
        let raw = self.dispatch(request).await?;
        decode(raw)
    }

    /// Fetches a single resource.
    ///
    /// Fails with [`Error::NotFound`] on 404 or when the response carries no `data`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = self.send::<T>(ApiRequest::new(Method::Get, path)).await?;
        resp.into_data()
            .ok_or_else(|| Error::NotFound { errors: Vec::new() })
    }

    /// Fetches one page of a collection.
    ///
    /// The returned [`Paginated`] remembers `path` and `parameters` so sibling
    /// pages can be fetched with the same request shape. An empty `data`
    /// array is a valid, empty page; a body without `data` is treated as
    /// not found.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Paginated<'_, T>, Error> {
        let request = ApiRequest::new(Method::Get, path).with_parameters(parameters.clone());
        let resp = self.send::<Vec<T>>(request).await?;
        if resp.body.as_ref().map_or(true, |b| b.data.is_none()) {
            return Err(Error::NotFound { errors: Vec::new() });
        }
        Ok(Paginated::new(self, path, parameters, resp))
    }

    /// Fetches every page and concatenates the items in page order.
    ///
    /// `fetch_page` produces the first page; following pages are requested
    /// one at a time through [`Paginated::next_page`]. The walk stops when a
    /// page reports no next page, when an empty page is returned, or once the
    /// collected count reaches the total reported by the first page, if it
    /// reported one. Any failure discards what was collected and is returned
    /// as-is.
    pub async fn get_all<'c, T, F, Fut>(
        &self,
        fetch_page: F,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
        F: FnOnce(Option<ClientRequestParameters>) -> Fut,
        Fut: Future<Output = Result<Paginated<'c, T>, Error>>,
    {
        let mut page = fetch_page(parameters).await?;
        // A zero total alongside further pages means the API did not report one.
        let reported_total = match page.total_items() {
            0 if page.has_next() => None,
            total => Some(total),
        };
        let mut items: Vec<T> = Vec::new();

        loop {
            let collected = (items.len() + page.items().len()) as u64;
            let has_next = page.has_next();
            let exhausted = page.items().is_empty()
                || reported_total.map_or(false, |total| collected >= total);
            if has_next && exhausted {
                tracing::warn!(
                    "Stopping pagination of {} at page {}: {} of {:?} items collected",
                    page.path(),
                    page.current_page(),
                    collected,
                    reported_total
                );
            }

            let next = if has_next && !exhausted {
                Some(page.next_page().await?)
            } else {
                None
            };
            items.extend(page.into_items());

            match next {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(items)
    }

    /// POSTs `body` and decodes the `data` of the response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::Post, path).with_body(to_json(body)?);
        let resp = self.send::<T>(request).await?;
        resp.into_data()
            .ok_or_else(|| Error::NotFound { errors: Vec::new() })
    }

    /// Sends a request whose success carries no meaningful body.
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request = request.with_body(to_json(body)?);
        }
        self.dispatch(request).await?;
        Ok(())
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        self.execute(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute::<()>(Method::Delete, path, None).await
    }
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<ClientResponse<T>, Error> {
    let body = if raw.body.trim().is_empty() {
        None
    } else {
        let parsed = serde_json::from_str::<ResponseBody<T>>(&raw.body).map_err(|e| {
            let snippet = truncate_body(&raw.body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Deserialization(e.to_string())
        })?;
        Some(parsed)
    };
    Ok(ClientResponse {
        status: raw.status,
        headers: raw.headers,
        body,
    })
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, Error> {
    serde_json::to_value(body).map_err(|e| Error::Validation(format!("Invalid request body: {}", e)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty_body_is_no_content() {
        let resp = decode::<serde_json::Value>(RawResponse::new(204, "")).unwrap();
        assert!(resp.body.is_none());
        assert_eq!(resp.status, 204);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode::<serde_json::Value>(RawResponse::new(200, "{not valid json}")).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn short_bodies_are_untouched() {
        assert_eq!(truncate_body("oops"), "oops");
    }
}

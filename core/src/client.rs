//! Stateless HTTP request builder and response parser for one collection.
//!
//! # Design
//! `RequestBuilder` holds only the collection URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ResourceClient` glues the two together around a
//! `Transport`; callers who want the typed errors can drive the builder
//! directly.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Entity;

/// Synchronous, stateless request builder for the collection of `E`.
pub struct RequestBuilder<E> {
    collection_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RequestBuilder<E> {
    fn clone(&self) -> Self {
        Self {
            collection_url: self.collection_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for RequestBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("collection_url", &self.collection_url)
            .finish()
    }
}

impl<E: Entity> RequestBuilder<E> {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            collection_url: config.collection_url(),
            _entity: PhantomData,
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        get(self.collection_url.clone())
    }

    pub fn build_get(&self, id: E::Id) -> HttpRequest {
        get(format!("{}/{id}", self.collection_url))
    }

    /// `term` is sent as given (after percent-encoding); trimming is the
    /// caller's job.
    pub fn build_search(&self, term: &str) -> HttpRequest {
        get(format!(
            "{}/?name={}",
            self.collection_url,
            urlencoding::encode(term)
        ))
    }

    pub fn build_create(&self, draft: &E::Draft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url.clone(),
            headers: json_headers(),
            body: Some(to_json(draft)?),
        })
    }

    /// Updates go to the collection path; the server finds the record by the
    /// id in the body.
    pub fn build_update(&self, entity: &E) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.collection_url.clone(),
            headers: json_headers(),
            body: Some(to_json(entity)?),
        })
    }

    pub fn build_delete(&self, id: E::Id) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.collection_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<E>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<E, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<E>, ApiError> {
        self.parse_list(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<E, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Any body the server sends back is ignored.
    pub fn parse_update(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Status {
            status,
            body: response.body.clone(),
        }),
    }
}

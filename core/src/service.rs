//! The resource client: every CRUD call as one round trip that never fails.
//!
//! # Design
//! Each operation builds a request with `RequestBuilder`, sends it through
//! the `Transport`, and parses the response, yielding a
//! `Result<_, ApiError>`. That result is collapsed at the boundary: success
//! is reported to the `Notifier`, failure goes through `handle_error`, which
//! records `"<operation> failed: <error>"` and substitutes a fallback (an
//! empty `Vec` for collection reads, `None` otherwise). Callers therefore
//! cannot tell "no result" from "request failed" except through the log.
//!
//! Operations are plain `async fn`s, so nothing is sent until the returned
//! future is awaited.

use crate::client::RequestBuilder;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notifier::Notifier;
use crate::transport::Transport;
use crate::types::{DeleteTarget, Entity};

pub struct ResourceClient<E, T, N> {
    requests: RequestBuilder<E>,
    transport: T,
    notifier: N,
    log_prefix: Option<String>,
}

impl<E: Entity, T: Transport, N: Notifier> ResourceClient<E, T, N> {
    pub fn new(config: &ClientConfig, transport: T, notifier: N) -> Self {
        Self {
            requests: RequestBuilder::new(config),
            transport,
            notifier,
            log_prefix: config.log_prefix.clone(),
        }
    }

    /// All records, or an empty `Vec` on failure.
    pub async fn list(&self) -> Vec<E> {
        self.send(self.requests.build_list())
            .await
            .and_then(|response| self.requests.parse_list(response))
            .inspect(|_| self.log(format!("fetched {}", E::PLURAL)))
            .unwrap_or_else(self.handle_error(
                format!("get{}", capitalize(E::PLURAL)),
                Vec::new(),
            ))
    }

    pub async fn get(&self, id: E::Id) -> Option<E> {
        self.send(self.requests.build_get(id))
            .await
            .and_then(|response| self.requests.parse_get(response))
            .inspect(|_| self.log(format!("fetched {} id={id}", E::SINGULAR)))
            .map(Some)
            .unwrap_or_else(self.handle_error(
                format!("get{} id={id}", capitalize(E::SINGULAR)),
                None,
            ))
    }

    /// Records whose name matches `term`. A blank term short-circuits to an
    /// empty `Vec` without a request or a log entry.
    pub async fn search(&self, term: &str) -> Vec<E> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        self.send(self.requests.build_search(term))
            .await
            .and_then(|response| self.requests.parse_search(response))
            .inspect(|found| {
                self.log(format!(
                    "found {} {} matching \"{term}\"",
                    found.len(),
                    E::PLURAL
                ))
            })
            .unwrap_or_else(self.handle_error(
                format!("search{}", capitalize(E::PLURAL)),
                Vec::new(),
            ))
    }

    /// The created record as returned by the server, which assigns its id.
    pub async fn create(&self, draft: &E::Draft) -> Option<E> {
        let result = async {
            let request = self.requests.build_create(draft)?;
            let response = self.send(request).await?;
            self.requests.parse_create(response)
        }
        .await;
        result
            .inspect(|created| {
                self.log(format!("added {} w/ id={}", E::SINGULAR, created.id()))
            })
            .map(Some)
            .unwrap_or_else(self.handle_error(
                format!("add{}", capitalize(E::SINGULAR)),
                None,
            ))
    }

    pub async fn update(&self, entity: &E) -> Option<()> {
        let result = async {
            let request = self.requests.build_update(entity)?;
            let response = self.send(request).await?;
            self.requests.parse_update(response)
        }
        .await;
        result
            .inspect(|_| self.log(format!("updated {} id={}", E::SINGULAR, entity.id())))
            .map(Some)
            .unwrap_or_else(self.handle_error(
                format!("update{}", capitalize(E::SINGULAR)),
                None,
            ))
    }

    /// Deletes by record or by bare id; both issue the same request.
    pub async fn delete(&self, target: impl Into<DeleteTarget<E>>) -> Option<()> {
        let id = target.into().id();
        self.send(self.requests.build_delete(id))
            .await
            .and_then(|response| self.requests.parse_delete(response))
            .inspect(|_| self.log(format!("deleted {} id={id}", E::SINGULAR)))
            .map(Some)
            .unwrap_or_else(self.handle_error(
                format!("delete{}", capitalize(E::SINGULAR)),
                None,
            ))
    }

    #[tracing::instrument(skip_all, fields(method = %request.method, url = %request.path))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!("sending request");
        self.transport.execute(request).await
    }

    /// Recovery adapter shared by every operation: logs the failure under
    /// `operation` and yields `fallback` in place of the error.
    fn handle_error<'a, R: 'a>(
        &'a self,
        operation: String,
        fallback: R,
    ) -> impl FnOnce(ApiError) -> R + 'a {
        move |error| {
            tracing::warn!(%operation, %error, "request failed");
            self.log(format!("{operation} failed: {error}"));
            fallback
        }
    }

    fn log(&self, message: String) {
        let message = match &self.log_prefix {
            Some(prefix) => format!("{prefix}: {message}"),
            None => message,
        };
        self.notifier.record(message);
    }
}

/// `heroes` -> `Heroes`, for operation names like `getHeroes`.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::notifier::MessageLog;
    use crate::types::Hero;

    /// Answers every request with the same canned outcome.
    struct Canned {
        outcome: Result<HttpResponse, ApiError>,
        sent: Arc<Mutex<Vec<HttpRequest>>>,
    }

    #[async_trait]
    impl Transport for Canned {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.lock().unwrap().push(request);
            self.outcome.clone()
        }
    }

    fn client(
        config: ClientConfig,
        outcome: Result<HttpResponse, ApiError>,
    ) -> (ResourceClient<Hero, Canned, MessageLog>, MessageLog) {
        let log = MessageLog::new();
        let transport = Canned {
            outcome,
            sent: Arc::default(),
        };
        (ResourceClient::new(&config, transport, log.clone()), log)
    }

    #[test]
    fn handle_error_logs_once_and_yields_fallback() {
        let (client, log) = client(ClientConfig::default(), Ok(HttpResponse::new(200, "[]")));
        let recover = client.handle_error("getHeroes".to_string(), vec![1, 2]);
        let value = recover(ApiError::Transport("Network Error".to_string()));
        assert_eq!(value, vec![1, 2]);
        assert_eq!(
            log.messages(),
            vec!["getHeroes failed: Network Error".to_string()]
        );
    }

    #[test]
    fn capitalize_handles_empty_and_words() {
        assert_eq!(capitalize("heroes"), "Heroes");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn log_prefix_is_prepended() {
        let config = ClientConfig::default().with_log_prefix("HeroService");
        let (client, log) = client(config, Ok(HttpResponse::new(200, "[]")));
        client.list().await;
        assert_eq!(log.messages(), vec!["HeroService: fetched heroes".to_string()]);
    }

    #[tokio::test]
    async fn get_failure_names_the_id() {
        let (client, log) = client(ClientConfig::default(), Ok(HttpResponse::new(404, "")));
        assert_eq!(client.get(99).await, None);
        assert_eq!(
            log.messages(),
            vec!["getHero id=99 failed: resource not found".to_string()]
        );
    }

    #[tokio::test]
    async fn non_success_status_falls_back() {
        let (client, log) = client(
            ClientConfig::default(),
            Ok(HttpResponse::new(503, "unavailable")),
        );
        assert!(client.list().await.is_empty());
        assert_eq!(
            log.messages(),
            vec!["getHeroes failed: HTTP 503: unavailable".to_string()]
        );
    }

    #[tokio::test]
    async fn undecodable_body_falls_back() {
        let (client, log) = client(ClientConfig::default(), Ok(HttpResponse::new(201, "{}")));
        let created = client
            .create(&crate::types::NewHero {
                name: "X".to_string(),
            })
            .await;
        assert_eq!(created, None);
        assert!(log.messages()[0].starts_with("addHero failed: deserialization failed"));
    }

    #[tokio::test]
    async fn nothing_is_sent_until_awaited() {
        let (client, _log) = client(ClientConfig::default(), Ok(HttpResponse::new(200, "[]")));
        let pending = client.list();
        assert!(client.transport.sent.lock().unwrap().is_empty());
        pending.await;
        assert_eq!(client.transport.sent.lock().unwrap().len(), 1);
    }
}

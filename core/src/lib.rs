//! Asynchronous client for a single REST collection of heroes.
//!
//! # Overview
//! `ResourceClient` offers list, get, search, create, update, and delete over
//! one collection endpoint. Every call is a single request/response round
//! trip whose outcome is reported to a `Notifier`; failures are logged and
//! replaced by a benign fallback instead of being returned.
//!
//! # Design
//! - `RequestBuilder` is stateless: it holds only the collection URL and
//!   splits each operation into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `Transport` executes requests. `UreqTransport` is the stock
//!   implementation; tests substitute scripted ones.
//! - `Notifier` receives status messages. `MessageLog` keeps them in memory,
//!   `TracingNotifier` forwards them to `tracing`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notifier;
pub mod service;
pub mod transport;
pub mod types;

pub use client::RequestBuilder;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notifier::{MessageLog, Notifier, TracingNotifier};
pub use service::ResourceClient;
pub use transport::{Transport, UreqTransport};
pub use types::{DeleteTarget, Entity, Hero, HeroId, NewHero};

/// The stock hero client: real HTTP, in-memory message log.
pub type HeroService = ResourceClient<Hero, UreqTransport, MessageLog>;
